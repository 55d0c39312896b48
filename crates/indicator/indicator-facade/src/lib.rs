//! Technical Indicator Facade
//!
//! Unified re-exports for the streaming indicator crates.
//!
//! ```
//! use indicator_facade::prelude::*;
//!
//! let mut rsi = create_indicator(&FilterConfig::default_for(IndicatorKind::RelativeStrengthIndex))?;
//! for close in [44.34, 44.09, 44.15, 43.61, 44.33] {
//!     rsi.update(close);
//! }
//! assert!(!rsi.is_primed());
//! # Ok::<(), IndicatorError>(())
//! ```

// Re-export everything from SPI
pub use indicator_spi::*;

// Re-export everything from API
pub use indicator_api::*;

// Re-export everything from Core
pub use indicator_core::*;

/// The types most callers need to build and feed an indicator.
pub mod prelude {
    pub use indicator_api::{FilterConfig, Seeding};
    pub use indicator_core::{create_indicator, Shared};
    pub use indicator_spi::{
        Bar, Components, IndicatorError, IndicatorKind, Metadata, Quote, Scalar,
        StreamingIndicator, Trade,
    };
}
