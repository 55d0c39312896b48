//! Moving Average Indicators
//!
//! Streaming moving averages for trend following and smoothing. The
//! exponential family shares one N-stage cascade engine.

mod cascade;

pub mod sma;
pub mod ema;
pub mod dema;
pub mod tema;
pub mod t2;
pub mod t3;
pub mod jurik_ma;
pub mod wma;
pub mod trima;
pub mod kama;

// Re-exports
pub use sma::SMA;
pub use ema::EMA;
pub use dema::DEMA;
pub use tema::TEMA;
pub use t2::T2;
pub use t3::T3;
pub use jurik_ma::JurikMA;
pub use wma::WMA;
pub use trima::TRIMA;
pub use kama::KAMA;
