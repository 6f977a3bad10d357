use std::path::PathBuf;

use crate::prelude::*;
use clap::Parser;

pub const BINARY_NAME: &str = "xrpl-genesis";
pub const DEFAULT_NODE_URL: &str = "http://localhost:5005";
pub const DEFAULT_NETWORK_URL: &str = "https://s.devnet.rippletest.net:51234";
pub const DEFAULT_ACCOUNT_COUNT: usize = 3;
pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.json";
pub const DEFAULT_TEMPLATE_FILE: &str = "ledger_template.json";
pub const DEFAULT_OUTPUT_FILE: &str = "ledger.json";

/// CLI utility to build a genesis ledger file for an XRPL test network.
///
/// Proposes fresh wallets against a local node, derives each account's
/// AccountRoot storage index, pulls the enabled amendment set from a
/// reference network and merges both into a ledger-state template, producing
/// a ledger JSON file a node can load at startup.
#[derive(Parser, Debug)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON-RPC URL of the node answering `wallet_propose`.
    #[arg(long, default_value = DEFAULT_NODE_URL)]
    node_url: String,

    /// JSON-RPC URL of the reference network answering `feature`.
    #[arg(long, default_value = DEFAULT_NETWORK_URL)]
    network_url: String,

    /// Number of accounts to generate.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ACCOUNT_COUNT)]
    accounts: usize,

    /// Starting balance of each generated account, in drops.
    #[arg(long, default_value_t = DEFAULT_BALANCE)]
    balance: u64,

    /// Checkpoint file the generated accounts are written to and read back
    /// from.
    #[arg(long, default_value = DEFAULT_ACCOUNTS_FILE)]
    accounts_file: PathBuf,

    /// Ledger-state template to merge into.
    #[arg(long, default_value = DEFAULT_TEMPLATE_FILE)]
    template: PathBuf,

    /// Where to write the finished ledger.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Reuse the accounts checkpoint instead of generating fresh accounts.
    #[arg(long, default_value_t = false)]
    reuse_accounts: bool,
}

impl TryFrom<CliArgs> for GenesisConfig {
    type Error = InvalidCliArgs;

    fn try_from(cli_args: CliArgs) -> Result<Self, Self::Error> {
        let Ok(node_url) = Url::parse(&cli_args.node_url) else {
            return Err(InvalidCliArgs::NodeUrlInvalid {
                bad_value: cli_args.node_url.clone(),
            });
        };
        let Ok(network_url) = Url::parse(&cli_args.network_url) else {
            return Err(InvalidCliArgs::NetworkUrlInvalid {
                bad_value: cli_args.network_url.clone(),
            });
        };
        if cli_args.accounts == 0 {
            return Err(InvalidCliArgs::AccountCountMustBePositive);
        }

        Ok(GenesisConfig::builder()
            .node_url(node_url)
            .network_url(network_url)
            .account_count(cli_args.accounts)
            .default_balance(cli_args.balance)
            .accounts_file(cli_args.accounts_file.clone())
            .template_file(cli_args.template.clone())
            .output_file(cli_args.output.clone())
            .reuse_accounts(cli_args.reuse_accounts)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn defaults_build_a_config() {
        let cli_args = CliArgs::parse_from([BINARY_NAME]);
        let config = GenesisConfig::try_from(cli_args).unwrap();

        assert_eq!(config.node_url().as_str(), "http://localhost:5005/");
        assert_eq!(*config.account_count(), DEFAULT_ACCOUNT_COUNT);
        assert_eq!(*config.default_balance(), DEFAULT_BALANCE);
        assert!(!config.reuse_accounts());
    }

    #[test]
    fn zero_accounts_is_rejected() {
        let cli_args = CliArgs::parse_from([BINARY_NAME, "-n", "0"]);
        assert!(matches!(
            GenesisConfig::try_from(cli_args),
            Err(InvalidCliArgs::AccountCountMustBePositive)
        ));
    }

    #[test]
    fn bad_node_url_is_rejected() {
        let cli_args = CliArgs::parse_from([BINARY_NAME, "--node-url", "not a url"]);
        assert!(matches!(
            GenesisConfig::try_from(cli_args),
            Err(InvalidCliArgs::NodeUrlInvalid { .. })
        ));
    }
}
