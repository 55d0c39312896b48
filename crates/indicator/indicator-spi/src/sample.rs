//! Timestamped sample records consumed by streaming indicators.
//!
//! Timestamps are Unix seconds.

use serde::{Deserialize, Serialize};

/// A single timestamped value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scalar {
    pub time: i64,
    pub value: f64,
}

impl Scalar {
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Open, high, low, close and volume over one interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self { time, open, high, low, close, volume }
    }

    /// Median price: (High + Low) / 2
    pub fn median(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Typical price: (High + Low + Close) / 3
    pub fn typical(&self) -> f64 {
        (self.low + self.high + self.close) / 3.0
    }

    /// Weighted price: (High + Low + 2 * Close) / 4
    pub fn weighted(&self) -> f64 {
        (self.low + self.high + self.close + self.close) / 4.0
    }

    /// Average price: (Open + High + Low + Close) / 4
    pub fn average(&self) -> f64 {
        (self.low + self.high + self.open + self.close) / 4.0
    }

    pub fn is_rising(&self) -> bool {
        self.open < self.close
    }

    pub fn is_falling(&self) -> bool {
        self.close < self.open
    }
}

/// Top-of-book bid and ask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub time: i64,
    pub bid: f64,
    pub ask: f64,
    pub bid_size: f64,
    pub ask_size: f64,
}

impl Quote {
    pub fn new(time: i64, bid: f64, ask: f64, bid_size: f64, ask_size: f64) -> Self {
        Self { time, bid, ask, bid_size, ask_size }
    }

    /// Mid price: (Ask + Bid) / 2
    pub fn mid(&self) -> f64 {
        (self.ask + self.bid) / 2.0
    }

    /// Size-weighted price. Zero when both sizes are zero.
    pub fn weighted(&self) -> f64 {
        let size = self.ask_size + self.bid_size;
        if size == 0.0 {
            return 0.0;
        }
        (self.ask * self.ask_size + self.bid * self.bid_size) / size
    }

    /// Micro-price: each side weighted by the opposite size. Zero when both sizes are zero.
    pub fn weighted_mid(&self) -> f64 {
        let size = self.ask_size + self.bid_size;
        if size == 0.0 {
            return 0.0;
        }
        (self.ask * self.bid_size + self.bid * self.ask_size) / size
    }

    /// Spread in basis points of the mid price.
    pub fn spread_bp(&self) -> f64 {
        let mid = self.ask + self.bid;
        if mid == 0.0 {
            return 0.0;
        }
        20000.0 * (self.ask - self.bid) / mid
    }
}

/// A single executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub time: i64,
    pub price: f64,
    pub volume: f64,
}

impl Trade {
    pub fn new(time: i64, price: f64, volume: f64) -> Self {
        Self { time, price, volume }
    }
}
