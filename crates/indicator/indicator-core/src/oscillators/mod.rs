//! Oscillator Indicators
//!
//! Momentum-style oscillators built on sample-to-sample differences.

pub mod momentum;
pub mod roc;
pub mod chande;
pub mod rsi;

// Re-exports
pub use momentum::Momentum;
pub use roc::ROC;
pub use chande::ChandeMomentum;
pub use rsi::RSI;
