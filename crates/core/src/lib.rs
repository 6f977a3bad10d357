mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Third Party Crates
    pub use bon::Builder;
    pub use getset::Getters;
    pub use indexmap::IndexMap;
    pub use log::{debug, error, info, warn};
    pub use url::Url;
}
