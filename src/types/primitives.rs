use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Static per-asset metadata published by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    /// Index of the asset in the perp or spot universe
    pub asset_id: u32,
    /// Number of decimal places the asset's size may carry
    pub sz_decimals: u32,
}

impl AssetInfo {
    pub fn new(asset_id: u32, sz_decimals: u32) -> Self {
        Self {
            asset_id,
            sz_decimals,
        }
    }
}

/// Asset metadata keyed by coin symbol
pub type AssetMeta = HashMap<String, AssetInfo>;

/// Exchange-assigned order id
pub type OrderId = u64;

/// Client order id (a 128-bit hex string chosen by the caller)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cloid(String);

impl Cloid {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cloid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cloid {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Cloid {
    fn from(s: String) -> Self {
        Self(s)
    }
}
