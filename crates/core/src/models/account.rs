use serde::{Deserialize, Serialize};

/// A generated wallet, as persisted in the accounts checkpoint file.
///
/// The seed is kept alongside the address so test clients can sign for the
/// account later; the pipeline itself only ever reads the address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    pub seed: String,
}
