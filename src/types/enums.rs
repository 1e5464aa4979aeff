use serde::{Deserialize, Serialize};

/// Market type an order is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    #[default]
    Perp,
    Spot,
}

impl MarketKind {
    pub fn from_is_spot(is_spot: bool) -> Self {
        if is_spot {
            MarketKind::Spot
        } else {
            MarketKind::Perp
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarketKind::Perp => "perp",
            MarketKind::Spot => "spot",
        }
    }
}

/// Time-in-force for limit orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tif {
    /// Add liquidity only (post-only)
    Alo,
    /// Immediate or cancel
    Ioc,
    /// Good till canceled
    Gtc,
}

impl Tif {
    pub fn as_str(self) -> &'static str {
        match self {
            Tif::Alo => "Alo",
            Tif::Ioc => "Ioc",
            Tif::Gtc => "Gtc",
        }
    }
}

/// Take profit or stop loss side of a trigger order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TpSl {
    Tp,
    Sl,
}

impl TpSl {
    pub fn as_str(self) -> &'static str {
        match self {
            TpSl::Tp => "tp",
            TpSl::Sl => "sl",
        }
    }
}

/// Grouping of orders placed in a single action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Grouping {
    /// No grouping
    #[default]
    Na,
    /// Linked TP/SL orders attached to a parent order
    NormalTpsl,
    /// TP/SL orders attached to the position
    PositionTpsl,
}

impl Grouping {
    pub fn as_str(self) -> &'static str {
        match self {
            Grouping::Na => "na",
            Grouping::NormalTpsl => "normalTpsl",
            Grouping::PositionTpsl => "positionTpsl",
        }
    }
}
