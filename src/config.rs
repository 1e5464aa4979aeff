//! Exchange constants for tick and lot size rules.
//!
//! See <https://hyperliquid.gitbook.io/hyperliquid-docs/for-developers/api/tick-and-lot-size>
//! and <https://hyperliquid.gitbook.io/hyperliquid-docs/for-developers/api/asset-ids>.

use crate::types::MarketKind;

/// Maximum number of significant figures allowed in an order price
pub const MAX_SIGNIFICANT_FIGURES: u32 = 5;

/// Maximum number of decimal places for perpetual prices
pub const PERP_MAX_DECIMALS: u32 = 6;

/// Maximum number of decimal places for spot prices
pub const SPOT_MAX_DECIMALS: u32 = 8;

/// Spot asset ids are the spot universe index shifted by this offset
pub const SPOT_ASSET_OFFSET: u32 = 10_000;

/// Rounding and addressing configuration for a market type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketConfig {
    /// Decimal ceiling shared between price and size precision
    pub max_decimals: u32,
    /// Added to the metadata asset id to form the wire asset id
    pub asset_offset: u32,
}

pub const PERP_CONFIG: MarketConfig = MarketConfig {
    max_decimals: PERP_MAX_DECIMALS,
    asset_offset: 0,
};

pub const SPOT_CONFIG: MarketConfig = MarketConfig {
    max_decimals: SPOT_MAX_DECIMALS,
    asset_offset: SPOT_ASSET_OFFSET,
};

impl MarketKind {
    /// Get the rounding configuration for this market type
    pub fn config(self) -> MarketConfig {
        match self {
            MarketKind::Perp => PERP_CONFIG,
            MarketKind::Spot => SPOT_CONFIG,
        }
    }
}

impl MarketConfig {
    /// Map a metadata asset id to the id the exchange expects on the wire
    ///
    /// Saturates at `u32::MAX` instead of overflowing.
    pub fn wire_asset_id(&self, asset_id: u32) -> u32 {
        asset_id.saturating_add(self.asset_offset)
    }
}
