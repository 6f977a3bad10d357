mod account;
mod account_root;
mod amendment;
mod config;
mod error;

pub use account::*;
pub use account_root::*;
pub use amendment::*;
pub use config::*;
pub use error::*;
