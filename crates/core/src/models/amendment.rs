use serde::Deserialize;

use crate::prelude::*;

/// One protocol amendment as reported by the reference network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amendment {
    pub name: String,
    /// 64-hex-char amendment id.
    pub index: String,
    pub enabled: bool,
    pub obsolete: bool,
}

/// Per-amendment payload of the `feature` response.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureInfo {
    pub name: String,
    pub enabled: bool,
    #[serde(default)]
    pub supported: bool,
    #[serde(default)]
    pub obsolete: bool,
}

impl Amendment {
    /// Flatten the `features` map into a list, keeping the reported order.
    pub fn from_features(features: IndexMap<String, FeatureInfo>) -> Vec<Self> {
        features
            .into_iter()
            .map(|(index, info)| Self {
                name: info.name,
                index,
                enabled: info.enabled,
                obsolete: info.obsolete,
            })
            .collect()
    }
}
