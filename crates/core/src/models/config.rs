use std::path::PathBuf;

use crate::prelude::*;

/// Immutable configuration for one pipeline run.
///
/// Built once from CLI arguments and passed by reference into every stage;
/// nothing in the pipeline mutates it.
#[derive(Debug, Clone, Getters, Builder)]
pub struct GenesisConfig {
    /// Node answering `wallet_propose`.
    #[getset(get = "pub")]
    node_url: Url,

    /// Reference network answering `feature`.
    #[getset(get = "pub")]
    network_url: Url,

    #[getset(get = "pub")]
    account_count: usize,

    /// Starting balance of each generated account, in drops.
    #[getset(get = "pub")]
    default_balance: u64,

    /// Checkpoint file for generated accounts.
    #[getset(get = "pub")]
    accounts_file: PathBuf,

    #[getset(get = "pub")]
    template_file: PathBuf,

    #[getset(get = "pub")]
    output_file: PathBuf,

    /// Skip generation and reuse the checkpoint file if it exists.
    #[getset(get = "pub")]
    reuse_accounts: bool,
}
