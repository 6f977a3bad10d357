mod derive_index;
mod filter_amendments;
mod merge_ledger;
mod pipeline;
mod rpc;

pub use derive_index::*;
pub use filter_amendments::*;
pub use merge_ledger::*;
pub use pipeline::*;
pub use rpc::*;
