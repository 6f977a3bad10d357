use serde::Deserialize;
use serde_json::{json, Value};

use crate::prelude::*;

/// Minimal JSON-RPC client for the two node calls the pipeline needs.
///
/// No retries and no custom timeouts; a failed or malformed response maps to
/// [`Error::ServiceUnavailable`] and aborts the run.
pub struct RpcClient {
    http: reqwest::Client,
    url: Url,
}

#[derive(Debug, Deserialize)]
struct WalletProposeResult {
    account_id: String,
    master_seed: String,
}

#[derive(Debug, Deserialize)]
struct FeatureResult {
    features: IndexMap<String, FeatureInfo>,
}

impl RpcClient {
    pub fn new(url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    /// Ask the node for a freshly generated wallet.
    pub async fn wallet_propose(&self) -> Result<Account> {
        let result = self.call("wallet_propose").await?;
        let proposed: WalletProposeResult = self.parse(result)?;
        Ok(Account {
            address: proposed.account_id,
            seed: proposed.master_seed,
        })
    }

    /// List the amendments the network knows about, in reported order.
    pub async fn feature(&self) -> Result<Vec<Amendment>> {
        let result = self.call("feature").await?;
        let parsed: FeatureResult = self.parse(result)?;
        Ok(Amendment::from_features(parsed.features))
    }

    async fn call(&self, method: &str) -> Result<Value> {
        let response = self
            .http
            .post(self.url.clone())
            .json(&json!({ "method": method }))
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        let mut body: Value = response.json().await.map_err(|e| self.unavailable(e))?;
        match body.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(self.unavailable("response has no `result` field")),
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(&self, result: Value) -> Result<T> {
        serde_json::from_value(result).map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, underlying: impl std::fmt::Display) -> Error {
        Error::ServiceUnavailable {
            url: self.url.to_string(),
            underlying: underlying.to_string(),
        }
    }
}
