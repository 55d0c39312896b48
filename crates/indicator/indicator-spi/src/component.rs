//! Selectors that project a scalar out of bar, quote and trade records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Bar, IndicatorError, Quote, Trade};

// ============================================================================
// Bar Component
// ============================================================================

/// Which value of a [`Bar`] feeds an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BarComponent {
    Open,
    High,
    Low,
    #[default]
    Close,
    Volume,
    Median,
    Typical,
    Weighted,
    Average,
}

impl BarComponent {
    pub const ALL: [BarComponent; 9] = [
        Self::Open,
        Self::High,
        Self::Low,
        Self::Close,
        Self::Volume,
        Self::Median,
        Self::Typical,
        Self::Weighted,
        Self::Average,
    ];

    pub fn value(self, bar: &Bar) -> f64 {
        match self {
            Self::Open => bar.open,
            Self::High => bar.high,
            Self::Low => bar.low,
            Self::Close => bar.close,
            Self::Volume => bar.volume,
            Self::Median => bar.median(),
            Self::Typical => bar.typical(),
            Self::Weighted => bar.weighted(),
            Self::Average => bar.average(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
            Self::Median => "median",
            Self::Typical => "typical",
            Self::Weighted => "weighted",
            Self::Average => "average",
        }
    }
}

// ============================================================================
// Quote Component
// ============================================================================

/// Which value of a [`Quote`] feeds an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteComponent {
    Bid,
    Ask,
    BidSize,
    AskSize,
    #[default]
    Mid,
    Weighted,
    WeightedMid,
    SpreadBp,
}

impl QuoteComponent {
    pub const ALL: [QuoteComponent; 8] = [
        Self::Bid,
        Self::Ask,
        Self::BidSize,
        Self::AskSize,
        Self::Mid,
        Self::Weighted,
        Self::WeightedMid,
        Self::SpreadBp,
    ];

    pub fn value(self, quote: &Quote) -> f64 {
        match self {
            Self::Bid => quote.bid,
            Self::Ask => quote.ask,
            Self::BidSize => quote.bid_size,
            Self::AskSize => quote.ask_size,
            Self::Mid => quote.mid(),
            Self::Weighted => quote.weighted(),
            Self::WeightedMid => quote.weighted_mid(),
            Self::SpreadBp => quote.spread_bp(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bid => "bid",
            Self::Ask => "ask",
            Self::BidSize => "bidSize",
            Self::AskSize => "askSize",
            Self::Mid => "mid",
            Self::Weighted => "weighted",
            Self::WeightedMid => "weightedMid",
            Self::SpreadBp => "spreadBp",
        }
    }
}

// ============================================================================
// Trade Component
// ============================================================================

/// Which value of a [`Trade`] feeds an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TradeComponent {
    #[default]
    Price,
    Volume,
}

impl TradeComponent {
    pub const ALL: [TradeComponent; 2] = [Self::Price, Self::Volume];

    pub fn value(self, trade: &Trade) -> f64 {
        match self {
            Self::Price => trade.price,
            Self::Volume => trade.volume,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Volume => "volume",
        }
    }
}

// ============================================================================
// String Codecs
// ============================================================================

macro_rules! component_codec {
    ($ty:ident, $label:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = IndicatorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.as_str() == s)
                    .ok_or_else(|| IndicatorError::UnknownIdentifier {
                        kind: $label,
                        value: s.to_string(),
                    })
            }
        }
    };
}

component_codec!(BarComponent, "bar component");
component_codec!(QuoteComponent, "quote component");
component_codec!(TradeComponent, "trade component");

// ============================================================================
// Component Set
// ============================================================================

/// The selectors an indicator applies to non-scalar samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Components {
    pub bar: BarComponent,
    pub quote: QuoteComponent,
    pub trade: TradeComponent,
}

impl Components {
    pub fn new(bar: BarComponent, quote: QuoteComponent, trade: TradeComponent) -> Self {
        Self { bar, quote, trade }
    }
}
