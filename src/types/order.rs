use super::{Cloid, OrderId, Tif, TpSl};
use serde::{Deserialize, Serialize};

/// Order type: a resting limit order or a trigger (TP/SL) order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    Limit {
        tif: Tif,
    },
    #[serde(rename_all = "camelCase")]
    Trigger {
        tpsl: TpSl,
        trigger_px: f64,
        is_market: bool,
    },
}

impl OrderType {
    pub fn limit(tif: Tif) -> Self {
        OrderType::Limit { tif }
    }

    pub fn trigger(tpsl: TpSl, trigger_px: f64, is_market: bool) -> Self {
        OrderType::Trigger {
            tpsl,
            trigger_px,
            is_market,
        }
    }
}

impl Default for OrderType {
    fn default() -> Self {
        OrderType::Limit { tif: Tif::Gtc }
    }
}

/// Application-level order request
///
/// Prices and sizes are plain floats here; they are quantized to the
/// asset's tick and lot rules when converted to an [`crate::types::OrderWire`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Coin symbol, used as the key into the asset metadata map
    pub coin: String,
    pub is_buy: bool,
    pub limit_px: f64,
    pub sz: f64,
    pub reduce_only: bool,
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloid: Option<Cloid>,
}

impl OrderRequest {
    /// Create a new limit order request that is not reduce-only
    pub fn new(coin: impl Into<String>, is_buy: bool, limit_px: f64, sz: f64, tif: Tif) -> Self {
        Self {
            coin: coin.into(),
            is_buy,
            limit_px,
            sz,
            reduce_only: false,
            order_type: OrderType::limit(tif),
            cloid: None,
        }
    }

    #[must_use]
    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    #[must_use]
    pub fn with_reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = reduce_only;
        self
    }

    #[must_use]
    pub fn with_cloid(mut self, cloid: impl Into<Cloid>) -> Self {
        self.cloid = Some(cloid.into());
        self
    }
}

/// Request to modify a resting order in place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyOrderRequest {
    pub order_id: OrderId,
    /// Replacement order; its client order id is not sent on the wire
    pub order: OrderRequest,
}

impl ModifyOrderRequest {
    pub fn new(order_id: OrderId, order: OrderRequest) -> Self {
        Self { order_id, order }
    }
}
