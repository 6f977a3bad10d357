use sha2::{Digest, Sha512};

use crate::prelude::*;

/// Namespace tag for AccountRoot entries, prepended to the hash input.
pub const ACCOUNT_SPACE: [u8; 2] = [0x00, 0x61];

const ACCOUNT_ID_LEN: usize = 20;
const ADDRESS_VERSION: u8 = 0x00;

/// Storage index of the AccountRoot entry for `address`.
///
/// The address is decoded as base58-check under the Ripple alphabet; the
/// version byte is stripped and the remaining 20-byte account id is hashed
/// under [`ACCOUNT_SPACE`]. Deterministic: the same address always yields
/// the same index.
pub fn account_index(address: &str) -> Result<String> {
    let account_id = decode_account_id(address)?;
    Ok(ledger_index(ACCOUNT_SPACE, &account_id))
}

/// First 32 bytes of SHA-512 over `space || key`, uppercase hex.
///
/// Other ledger entry kinds index under their own namespace tag and key
/// tuple; only the AccountRoot assembly lives in this crate.
pub fn ledger_index(space: [u8; 2], key: &[u8]) -> String {
    let mut hasher = Sha512::new();
    hasher.update(space);
    hasher.update(key);
    hex::encode_upper(&hasher.finalize()[..32])
}

fn decode_account_id(address: &str) -> Result<[u8; ACCOUNT_ID_LEN]> {
    let decoded = bs58::decode(address)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .with_check(Some(ADDRESS_VERSION))
        .into_vec()
        .map_err(|e| Error::InvalidAddress {
            address: address.to_owned(),
            underlying: e.to_string(),
        })?;

    // `with_check` strips the checksum but leaves the version byte in front.
    decoded[1..]
        .try_into()
        .map_err(|_| Error::InvalidAddress {
            address: address.to_owned(),
            underlying: format!(
                "account id must be {ACCOUNT_ID_LEN} bytes, got {}",
                decoded.len() - 1
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ACCOUNT_ZERO: the all-zero account id.
    const ACCOUNT_ZERO: &str = "rrrrrrrrrrrrrrrrrrrrrhoLvTp";
    const ACCOUNT_ZERO_INDEX: &str =
        "28CC99345E64CD5F9B2CF5E8FA885D2D5CAF2F87B8A58449FD2E51E43D498A36";

    // The XRPL genesis account; its AccountRoot index appears in public
    // ledger dumps.
    const GENESIS_ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const GENESIS_ACCOUNT_INDEX: &str =
        "2B6AC232AA4C4BE41BF49D2459FA4A0347E1B543A4C92FCEE0821C0201E2E9A8";

    #[test]
    fn account_zero_vector() {
        assert_eq!(account_index(ACCOUNT_ZERO).unwrap(), ACCOUNT_ZERO_INDEX);
    }

    #[test]
    fn genesis_account_vector() {
        assert_eq!(
            account_index(GENESIS_ACCOUNT).unwrap(),
            GENESIS_ACCOUNT_INDEX
        );
    }

    #[test]
    fn deterministic() {
        assert_eq!(
            account_index(GENESIS_ACCOUNT).unwrap(),
            account_index(GENESIS_ACCOUNT).unwrap()
        );
    }

    #[test]
    fn namespace_separation() {
        let key = [0u8; 20];
        assert_ne!(
            ledger_index(ACCOUNT_SPACE, &key),
            ledger_index([0x00, 0x62], &key)
        );
    }

    #[test]
    fn rejects_corrupted_checksum() {
        // Last character changed; still in the alphabet, checksum no longer
        // matches.
        let corrupted = "rrrrrrrrrrrrrrrrrrrrrhoLvTs";
        assert!(matches!(
            account_index(corrupted),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn rejects_wrong_version_byte() {
        // Valid checksum over version byte 0x01 plus 20 zero bytes.
        let wrong_version = "QLbzfJH5BT1FS9apRLKV3G8dWEAjwnKaa";
        assert!(matches!(
            account_index(wrong_version),
            Err(Error::InvalidAddress { .. })
        ));
    }

    #[test]
    fn rejects_wrong_payload_length() {
        // Valid checksum over version byte 0x00 plus a 5-byte payload.
        let short = "rkwsBsnw7UmV";
        assert!(matches!(
            account_index(short),
            Err(Error::InvalidAddress { .. })
        ));
    }
}
