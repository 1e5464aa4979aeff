//! # hyperliquid-wire
//!
//! Converts application-level trading requests into the exact wire
//! representation required by the Hyperliquid order-entry API.
//!
//! This library provides:
//! - Price rounding to five significant figures within the market's decimal ceiling
//! - Size rounding to the asset's lot size
//! - Mapping of order and modify requests to wire orders, including spot asset ids
//! - Flattening of wire structs into field maps for an external typed-data signer
//! - Packing of R/S/V signature components
//!
//! HTTP transport, EIP-712 hashing and signing, and metadata retrieval are left
//! to the caller. Asset metadata is passed into every conversion explicitly.
//!
//! ## Example
//!
//! ```
//! use hyperliquid_wire::{order_request_to_wire, AssetInfo, AssetMeta, MarketKind, OrderRequest, Tif};
//!
//! let meta = AssetMeta::from([("ETH".to_string(), AssetInfo::new(1, 4))]);
//! let req = OrderRequest::new("ETH", true, 1891.4567, 0.123456, Tif::Gtc);
//! let wire = order_request_to_wire(&req, &meta, MarketKind::Perp).unwrap();
//! assert_eq!(wire.limit_px, "1891.5");
//! assert_eq!(wire.size_px, "0.1235");
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod orders;
pub mod signing;
pub mod types;

// Internal modules
mod utils;

// Re-export commonly used types
pub use alloy_primitives::Address;
pub use error::{Error, Result};
pub use types::{
    AssetInfo, AssetMeta, Cloid, Grouping, MarketKind, ModifyOrderRequest, ModifyOrderWire,
    OrderId, OrderRequest, OrderType, OrderTypeWire, OrderWire, PlaceOrderAction, RsvSignature,
    Tif, TpSl,
};

// Re-export conversions
pub use orders::{
    float_to_wire, format_decimal, modify_order_request_to_wire, order_request_to_wire,
    order_type_to_wire, order_wires_to_order_action, round_order_price, round_order_size,
};

// Re-export signing helpers
pub use signing::{struct_to_map, to_typed_sig, Signable};

pub use utils::{hex_to_address, hex_to_bytes};
