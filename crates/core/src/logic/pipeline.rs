use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::prelude::*;

/// Run the whole pipeline: generate (or reuse) accounts, derive their
/// storage indices, fetch the enabled amendments, merge everything into the
/// template and persist the finished ledger.
///
/// Stages run strictly in order and any failure aborts the run; no partial
/// ledger is ever written.
pub async fn build_genesis(config: &GenesisConfig) -> Result<()> {
    let accounts = if *config.reuse_accounts() && config.accounts_file().exists() {
        info!(
            "reusing accounts from {}",
            config.accounts_file().display()
        );
        read_accounts(config.accounts_file())?
    } else {
        let accounts = generate_accounts(config).await?;
        write_accounts(config.accounts_file(), &accounts)?;
        // Read the checkpoint back so every run goes through the same path.
        read_accounts(config.accounts_file())?
    };

    let defaults = AccountRootDefaults::with_balance(*config.default_balance());
    let account_roots = account_roots(&accounts, &defaults)?;

    let amendments = fetch_amendments(config).await?;
    let enabled = enabled_amendment_ids(&amendments);
    info!(
        "{} of {} amendments enabled on {}",
        enabled.len(),
        amendments.len(),
        config.network_url()
    );

    let template = read_template(config.template_file())?;
    let ledger = merge_ledger(template, &account_roots, &enabled)?;
    write_ledger(config.output_file(), &ledger)
}

/// One `wallet_propose` round-trip per account, strictly sequential.
pub async fn generate_accounts(config: &GenesisConfig) -> Result<Vec<Account>> {
    let client = RpcClient::new(config.node_url().clone());
    let mut accounts = Vec::with_capacity(*config.account_count());
    for i in 0..*config.account_count() {
        let account = client.wallet_propose().await?;
        debug!("account {i}: {}", account.address);
        accounts.push(account);
    }
    info!(
        "generated {} accounts from {}",
        accounts.len(),
        config.node_url()
    );
    Ok(accounts)
}

/// One `feature` call against the reference network.
pub async fn fetch_amendments(config: &GenesisConfig) -> Result<Vec<Amendment>> {
    let client = RpcClient::new(config.network_url().clone());
    client.feature().await
}

/// Build one AccountRoot per account; only the address and derived index
/// vary, the rest comes from `defaults`.
///
/// A duplicate derived index means the node handed out the same address
/// twice; that is logged but not fatal.
pub fn account_roots(
    accounts: &[Account],
    defaults: &AccountRootDefaults,
) -> Result<Vec<AccountRoot>> {
    let mut seen = HashSet::new();
    let mut roots = Vec::with_capacity(accounts.len());
    for account in accounts {
        let index = account_index(&account.address)?;
        if !seen.insert(index.clone()) {
            warn!("duplicate account index {index} for {}", account.address);
        }
        roots.push(AccountRoot::new(&account.address, &index, defaults));
    }
    Ok(roots)
}

pub fn read_accounts(path: &Path) -> Result<Vec<Account>> {
    let bytes = fs::read(path).map_err(|e| Error::file_io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::file_io(path, e))
}

pub fn write_accounts(path: &Path, accounts: &[Account]) -> Result<()> {
    let json = serde_json::to_vec_pretty(accounts).map_err(|e| Error::file_io(path, e))?;
    fs::write(path, json).map_err(|e| Error::file_io(path, e))
}

pub fn read_template(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).map_err(|e| Error::file_io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::file_io(path, e))
}

pub fn write_ledger(path: &Path, ledger: &Value) -> Result<()> {
    let json = serde_json::to_vec_pretty(ledger).map_err(|e| Error::file_io(path, e))?;
    fs::write(path, json).map_err(|e| Error::file_io(path, e))?;
    info!("wrote ledger to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    #[test]
    fn accounts_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        let accounts = vec![
            Account {
                address: "rA".to_owned(),
                seed: "sA".to_owned(),
            },
            Account {
                address: "rB".to_owned(),
                seed: "sB".to_owned(),
            },
        ];

        write_accounts(&path, &accounts).unwrap();
        assert_eq!(read_accounts(&path).unwrap(), accounts);
    }

    #[test]
    fn missing_accounts_file_is_a_file_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");
        assert!(matches!(
            read_accounts(&path),
            Err(Error::FileIo { .. })
        ));
    }

    #[test]
    fn garbled_template_is_a_file_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.json");
        fs::write(&path, b"not json").unwrap();
        assert!(matches!(
            read_template(&path),
            Err(Error::FileIo { .. })
        ));
    }

    #[test]
    fn account_roots_share_defaults_and_derive_indices() {
        let accounts = vec![Account {
            address: GENESIS_ACCOUNT.to_owned(),
            seed: "s".to_owned(),
        }];
        let defaults = AccountRootDefaults::with_balance(7);
        let roots = account_roots(&accounts, &defaults).unwrap();

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].account, GENESIS_ACCOUNT);
        assert_eq!(roots[0].balance, "7");
        assert_eq!(
            roots[0].index,
            "2B6AC232AA4C4BE41BF49D2459FA4A0347E1B543A4C92FCEE0821C0201E2E9A8"
        );
    }

    #[test]
    fn duplicate_addresses_are_kept() {
        let account = Account {
            address: GENESIS_ACCOUNT.to_owned(),
            seed: "s".to_owned(),
        };
        let accounts = vec![account.clone(), account];
        let roots = account_roots(&accounts, &AccountRootDefaults::default()).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].index, roots[1].index);
    }

    #[test]
    fn bad_address_aborts_derivation() {
        let accounts = vec![Account {
            address: "not-an-address".to_owned(),
            seed: "s".to_owned(),
        }];
        assert!(matches!(
            account_roots(&accounts, &AccountRootDefaults::default()),
            Err(Error::InvalidAddress { .. })
        ));
    }
}
