use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("Node url invalid {bad_value}")]
    NodeUrlInvalid { bad_value: String },
    #[error("Network url invalid {bad_value}")]
    NetworkUrlInvalid { bad_value: String },
    #[error("Account count must be positive")]
    AccountCountMustBePositive,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("{0}")]
    CoreError(#[from] Error),
}
