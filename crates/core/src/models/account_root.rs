use serde::{Deserialize, Serialize};

/// 100k XRP in drops.
pub const DEFAULT_BALANCE: u64 = 100_000_000_000;

const PREVIOUS_TXN_ID: &str = "32366162368956912E817EAD0710F10C0CF16432FC4C9E098D8A7BA4FD5DC0F0";

/// The fixed fields shared by every AccountRoot generated in one run.
///
/// Only the address and the derived index vary between accounts; everything
/// else comes from here, so a run's entries are identical apart from those
/// two fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRootDefaults {
    pub balance: u64,
    pub flags: u32,
    pub owner_count: u32,
    pub previous_txn_id: String,
    pub previous_txn_lgr_seq: u32,
    pub sequence: u32,
}

impl Default for AccountRootDefaults {
    fn default() -> Self {
        Self {
            balance: DEFAULT_BALANCE,
            flags: 0,
            owner_count: 0,
            previous_txn_id: PREVIOUS_TXN_ID.to_owned(),
            previous_txn_lgr_seq: 4,
            sequence: 5,
        }
    }
}

impl AccountRootDefaults {
    pub fn with_balance(balance: u64) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }
}

/// One account's on-ledger state, serialized with XRPL field casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountRoot {
    pub account: String,
    /// Drops, as a decimal string per the XRPL JSON convention.
    pub balance: String,
    pub flags: u32,
    pub ledger_entry_type: String,
    pub owner_count: u32,
    #[serde(rename = "PreviousTxnID")]
    pub previous_txn_id: String,
    pub previous_txn_lgr_seq: u32,
    pub sequence: u32,
    #[serde(rename = "index")]
    pub index: String,
}

impl AccountRoot {
    pub fn new(address: &str, index: &str, defaults: &AccountRootDefaults) -> Self {
        Self {
            account: address.to_owned(),
            balance: defaults.balance.to_string(),
            flags: defaults.flags,
            ledger_entry_type: "AccountRoot".to_owned(),
            owner_count: defaults.owner_count,
            previous_txn_id: defaults.previous_txn_id.clone(),
            previous_txn_lgr_seq: defaults.previous_txn_lgr_seq,
            sequence: defaults.sequence,
            index: index.to_owned(),
        }
    }
}
