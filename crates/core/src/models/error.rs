use std::path::Path;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid address `{address}`: {underlying}")]
    InvalidAddress { address: String, underlying: String },

    #[error("Service {url} unavailable: {underlying}")]
    ServiceUnavailable { url: String, underlying: String },

    #[error("Malformed ledger template: {0}")]
    MalformedTemplate(#[from] MalformedTemplate),

    #[error("File i/o failed on {path}: {underlying}")]
    FileIo { path: String, underlying: String },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedTemplate {
    #[error("`ledger.accountState` is missing or not an array")]
    MissingAccountState,

    #[error("no entry with LedgerEntryType == \"Amendments\"")]
    MissingAmendmentsEntry,

    #[error("{count} entries with LedgerEntryType == \"Amendments\", expected exactly one")]
    DuplicateAmendmentsEntry { count: usize },
}

impl Error {
    pub(crate) fn file_io(path: &Path, underlying: impl std::fmt::Display) -> Self {
        Self::FileIo {
            path: path.display().to_string(),
            underlying: underlying.to_string(),
        }
    }
}
