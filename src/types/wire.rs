use super::{Cloid, Grouping, OrderId, Tif, TpSl};
use serde::{Deserialize, Serialize};

/// Action type tag for placing orders
pub const ORDER_ACTION_TYPE: &str = "order";

/// Limit parameters on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrderType {
    pub tif: Tif,
}

/// Trigger parameters on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerOrderType {
    pub is_market: bool,
    pub trigger_px: f64,
    pub tpsl: TpSl,
}

/// Order type on the wire, serialized as `{"limit": {..}}` or `{"trigger": {..}}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderTypeWire {
    Limit(LimitOrderType),
    Trigger(TriggerOrderType),
}

impl OrderTypeWire {
    pub fn as_limit(&self) -> Option<&LimitOrderType> {
        match self {
            OrderTypeWire::Limit(limit) => Some(limit),
            OrderTypeWire::Trigger(_) => None,
        }
    }

    pub fn as_trigger(&self) -> Option<&TriggerOrderType> {
        match self {
            OrderTypeWire::Trigger(trigger) => Some(trigger),
            OrderTypeWire::Limit(_) => None,
        }
    }
}

/// Single order in the exact shape the exchange endpoint expects
///
/// Price and size are decimal strings, never JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderWire {
    #[serde(rename = "a")]
    pub asset: u32,
    #[serde(rename = "b")]
    pub is_buy: bool,
    #[serde(rename = "p")]
    pub limit_px: String,
    #[serde(rename = "s")]
    pub size_px: String,
    #[serde(rename = "r")]
    pub reduce_only: bool,
    #[serde(rename = "t")]
    pub order_type: OrderTypeWire,
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub cloid: Option<Cloid>,
}

/// Modification of a resting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifyOrderWire {
    pub oid: OrderId,
    pub order: OrderWire,
}

/// `order` action carrying one or more wire orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub orders: Vec<OrderWire>,
    pub grouping: Grouping,
}

/// ECDSA signature split into its wire components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvSignature {
    /// `0x`-prefixed 32-byte hex
    pub r: String,
    /// `0x`-prefixed 32-byte hex
    pub s: String,
    /// Recovery byte
    pub v: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_order() -> OrderWire {
        OrderWire {
            asset: 4,
            is_buy: true,
            limit_px: "1891.4".to_string(),
            size_px: "0.02".to_string(),
            reduce_only: false,
            order_type: OrderTypeWire::Limit(LimitOrderType { tif: Tif::Gtc }),
            cloid: None,
        }
    }

    #[test]
    fn test_order_wire_uses_short_field_names() {
        let value = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(
            value,
            json!({
                "a": 4,
                "b": true,
                "p": "1891.4",
                "s": "0.02",
                "r": false,
                "t": {"limit": {"tif": "Gtc"}}
            })
        );
    }

    #[test]
    fn test_cloid_serialized_when_present() {
        let mut order = sample_order();
        order.cloid = Some(Cloid::new("0x00000000000000000000000000000001"));
        let value = serde_json::to_value(order).unwrap();
        assert_eq!(value["c"], "0x00000000000000000000000000000001");
    }

    #[test]
    fn test_trigger_wire_shape() {
        let trigger = OrderTypeWire::Trigger(TriggerOrderType {
            is_market: true,
            trigger_px: 1800.5,
            tpsl: TpSl::Sl,
        });
        assert_eq!(
            serde_json::to_value(trigger).unwrap(),
            json!({"trigger": {"isMarket": true, "triggerPx": 1800.5, "tpsl": "sl"}})
        );
        assert!(trigger.as_limit().is_none());
        assert!(trigger.as_trigger().is_some());
    }

    #[test]
    fn test_order_wire_round_trips_from_json() {
        let raw = r#"{"a":10001,"b":false,"p":"0.5","s":"12","r":true,"t":{"limit":{"tif":"Ioc"}}}"#;
        let order: OrderWire = serde_json::from_str(raw).unwrap();
        assert_eq!(order.asset, 10001);
        assert_eq!(order.order_type.as_limit().map(|l| l.tif), Some(Tif::Ioc));
        assert!(order.cloid.is_none());
    }
}
