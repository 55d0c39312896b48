//! Statistical Indicators
//!
//! Dispersion of the samples within a moving window.

pub mod variance;
pub mod standard_deviation;

// Re-exports
pub use variance::Variance;
pub use standard_deviation::StandardDeviation;
