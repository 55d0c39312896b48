//! Technical Indicator Core Implementations
//!
//! Streaming technical analysis indicators organized by category. Every
//! indicator consumes one sample per update and reports NaN until primed.

// ============================================================================
// Category Modules
// ============================================================================
pub mod moving_averages;
pub mod oscillators;
pub mod statistics;

mod params;
mod registry;
mod shared;
mod window;

// ============================================================================
// Moving Average Exports
// ============================================================================
pub use moving_averages::{SMA, EMA, DEMA, TEMA, T2, T3, JurikMA, WMA, TRIMA, KAMA};

// ============================================================================
// Oscillator Exports
// ============================================================================
pub use oscillators::{Momentum, ROC, ChandeMomentum, RSI};

// ============================================================================
// Statistics Exports
// ============================================================================
pub use statistics::{Variance, StandardDeviation};

// ============================================================================
// Construction and Sharing
// ============================================================================
pub use registry::create_indicator;
pub use shared::Shared;

// ============================================================================
// Re-export SPI types
// ============================================================================
pub use indicator_spi::{
    StreamingIndicator, IndicatorError, Result,
    IndicatorKind, Metadata, OutputMetadata, OutputType,
    Scalar, Bar, Quote, Trade,
    BarComponent, QuoteComponent, TradeComponent, Components,
};

// ============================================================================
// Re-export API configs
// ============================================================================
pub use indicator_api::{
    // Moving Averages
    SMAConfig, EMAConfig, DEMAConfig, TEMAConfig, T2Config, T3Config, JurikMAConfig,
    WMAConfig, TRIMAConfig, KAMAConfig, Seeding,
    // Oscillators
    MomentumConfig, ROCConfig, CMOConfig, RSIConfig,
    // Statistics
    VarianceConfig,
    // Tagged
    FilterConfig,
};
