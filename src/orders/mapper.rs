use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::orders::rounding::{round_order_price, round_order_size};
use crate::types::{
    AssetInfo, AssetMeta, Grouping, LimitOrderType, MarketKind, ModifyOrderRequest,
    ModifyOrderWire, OrderRequest, OrderType, OrderTypeWire, OrderWire, PlaceOrderAction,
    TriggerOrderType, ORDER_ACTION_TYPE,
};

/// Look up the metadata for `coin`; unknown coins never fall back to asset 0
fn resolve_asset(meta: &AssetMeta, coin: &str) -> Result<AssetInfo> {
    meta.get(coin).copied().ok_or_else(|| {
        warn!(coin, "coin missing from asset metadata");
        Error::UnknownAsset(coin.to_string())
    })
}

/// Convert an order type to its wire shape, keeping the active variant only
pub fn order_type_to_wire(order_type: &OrderType) -> OrderTypeWire {
    match *order_type {
        OrderType::Limit { tif } => OrderTypeWire::Limit(LimitOrderType { tif }),
        OrderType::Trigger {
            tpsl,
            trigger_px,
            is_market,
        } => OrderTypeWire::Trigger(TriggerOrderType {
            is_market,
            trigger_px,
            tpsl,
        }),
    }
}

/// Shared body of place and modify conversion; the client order id is left unset.
fn order_body_to_wire(order: &OrderRequest, info: AssetInfo, market: MarketKind) -> OrderWire {
    let config = market.config();
    let asset = config.wire_asset_id(info.asset_id);
    let wire = OrderWire {
        asset,
        is_buy: order.is_buy,
        limit_px: round_order_price(order.limit_px, info.sz_decimals, config.max_decimals),
        size_px: round_order_size(order.sz, info.sz_decimals),
        reduce_only: order.reduce_only,
        order_type: order_type_to_wire(&order.order_type),
        cloid: None,
    };
    debug!(
        coin = %order.coin,
        asset,
        market = market.as_str(),
        limit_px = %wire.limit_px,
        size = %wire.size_px,
        "converted order to wire"
    );
    wire
}

/// Convert an order request into the wire order the exchange expects
///
/// # Arguments
/// * `req` - The order request
/// * `meta` - Asset metadata keyed by coin symbol
/// * `market` - Whether the coin is traded as a perp or on spot
///
/// # Errors
/// [`Error::UnknownAsset`] when `req.coin` is not in `meta`.
pub fn order_request_to_wire(
    req: &OrderRequest,
    meta: &AssetMeta,
    market: MarketKind,
) -> Result<OrderWire> {
    let info = resolve_asset(meta, &req.coin)?;
    let mut wire = order_body_to_wire(req, info, market);
    wire.cloid = req.cloid.clone();
    Ok(wire)
}

/// Convert a modify request into its wire form
///
/// The nested order never carries a client order id.
pub fn modify_order_request_to_wire(
    req: &ModifyOrderRequest,
    meta: &AssetMeta,
    market: MarketKind,
) -> Result<ModifyOrderWire> {
    let info = resolve_asset(meta, &req.order.coin)?;
    Ok(ModifyOrderWire {
        oid: req.order_id,
        order: order_body_to_wire(&req.order, info, market),
    })
}

/// Wrap wire orders into an `order` action
pub fn order_wires_to_order_action(orders: Vec<OrderWire>, grouping: Grouping) -> PlaceOrderAction {
    PlaceOrderAction {
        action_type: ORDER_ACTION_TYPE.to_string(),
        orders,
        grouping,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cloid, Tif, TpSl};
    use serde_json::json;

    fn meta() -> AssetMeta {
        AssetMeta::from([
            ("BTC".to_string(), AssetInfo::new(0, 5)),
            ("ETH".to_string(), AssetInfo::new(1, 4)),
            ("PURR".to_string(), AssetInfo::new(7, 0)),
        ])
    }

    #[test]
    fn test_perp_asset_id_is_unchanged() {
        let req = OrderRequest::new("PURR", true, 0.2, 100.0, Tif::Gtc);
        let wire = order_request_to_wire(&req, &meta(), MarketKind::Perp).unwrap();
        assert_eq!(wire.asset, 7);
    }

    #[test]
    fn test_spot_asset_id_is_offset() {
        let req = OrderRequest::new("PURR", true, 0.2, 100.0, Tif::Gtc);
        let wire = order_request_to_wire(&req, &meta(), MarketKind::Spot).unwrap();
        assert_eq!(wire.asset, 10_007);
    }

    #[test]
    fn test_spot_allows_more_price_decimals() {
        let req = OrderRequest::new("PURR", true, 0.123456789, 1.0, Tif::Gtc);
        let perp = order_request_to_wire(&req, &meta(), MarketKind::Perp).unwrap();
        let spot = order_request_to_wire(&req, &meta(), MarketKind::Spot).unwrap();
        assert_eq!(perp.limit_px, "0.1234");
        assert_eq!(spot.limit_px, "0.1234");

        let req = OrderRequest::new("PURR", true, 0.000123456789, 1.0, Tif::Gtc);
        let perp = order_request_to_wire(&req, &meta(), MarketKind::Perp).unwrap();
        let spot = order_request_to_wire(&req, &meta(), MarketKind::Spot).unwrap();
        assert_eq!(perp.limit_px, "0.000123");
        assert_eq!(spot.limit_px, "0.0001234");
    }

    #[test]
    fn test_price_and_size_are_rounded() {
        let req = OrderRequest::new("ETH", false, 1891.4567, 0.123456, Tif::Ioc)
            .with_reduce_only(true)
            .with_cloid("0x00000000000000000000000000000001");
        let wire = order_request_to_wire(&req, &meta(), MarketKind::Perp).unwrap();
        assert_eq!(
            serde_json::to_value(&wire).unwrap(),
            json!({
                "a": 1,
                "b": false,
                "p": "1891.5",
                "s": "0.1235",
                "r": true,
                "t": {"limit": {"tif": "Ioc"}},
                "c": "0x00000000000000000000000000000001"
            })
        );
    }

    #[test]
    fn test_limit_order_never_populates_trigger() {
        let req = OrderRequest::new("BTC", true, 65000.0, 0.001, Tif::Alo);
        let wire = order_request_to_wire(&req, &meta(), MarketKind::Perp).unwrap();
        assert_eq!(wire.order_type.as_limit().map(|l| l.tif), Some(Tif::Alo));
        assert!(wire.order_type.as_trigger().is_none());
    }

    #[test]
    fn test_trigger_order_never_populates_limit() {
        let req = OrderRequest::new("BTC", false, 60000.0, 0.001, Tif::Gtc)
            .with_order_type(OrderType::trigger(TpSl::Sl, 59500.5, true));
        let wire = order_request_to_wire(&req, &meta(), MarketKind::Perp).unwrap();
        assert!(wire.order_type.as_limit().is_none());
        let trigger = wire.order_type.as_trigger().unwrap();
        assert_eq!(trigger.tpsl, TpSl::Sl);
        assert_eq!(trigger.trigger_px, 59500.5);
        assert!(trigger.is_market);
    }

    #[test]
    fn test_unknown_coin_is_rejected_instead_of_defaulting_to_asset_zero() {
        let req = OrderRequest::new("DOGE", true, 0.1, 10.0, Tif::Gtc);
        let err = order_request_to_wire(&req, &meta(), MarketKind::Perp).unwrap_err();
        assert!(matches!(err, Error::UnknownAsset(ref coin) if coin == "DOGE"));

        let modify = ModifyOrderRequest::new(42, req);
        let err = modify_order_request_to_wire(&modify, &meta(), MarketKind::Spot).unwrap_err();
        assert!(matches!(err, Error::UnknownAsset(_)));
    }

    #[test]
    fn test_modify_carries_oid_and_drops_cloid() {
        let order = OrderRequest::new("ETH", true, 3000.0, 1.5, Tif::Gtc)
            .with_cloid(Cloid::new("0x00000000000000000000000000000002"));
        let modify = ModifyOrderRequest::new(987654321, order);
        let wire = modify_order_request_to_wire(&modify, &meta(), MarketKind::Perp).unwrap();
        assert_eq!(wire.oid, 987654321);
        assert!(wire.order.cloid.is_none());
        assert_eq!(wire.order.limit_px, "3000.0");
        assert_eq!(wire.order.size_px, "1.5");
        let value = serde_json::to_value(&wire).unwrap();
        assert!(value["order"].get("c").is_none());
    }

    #[test]
    fn test_order_wires_to_order_action() {
        let req = OrderRequest::new("BTC", true, 65000.0, 0.001, Tif::Gtc);
        let wire = order_request_to_wire(&req, &meta(), MarketKind::Perp).unwrap();
        let action = order_wires_to_order_action(vec![wire], Grouping::Na);
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], "order");
        assert_eq!(value["grouping"], "na");
        assert_eq!(value["orders"][0]["p"], "65000");
        assert_eq!(value["orders"][0]["s"], "0.001");
    }
}
