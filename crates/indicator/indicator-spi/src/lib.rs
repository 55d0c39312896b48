//! Streaming Indicator Service Provider Interface
//!
//! Defines the sample model, selectors, metadata, errors and the
//! [`StreamingIndicator`] contract every filter implements.
//!
//! A filter consumes one sample per call and answers with one value.
//! Until it has seen its warm-up count it answers `NaN` and reports
//! `is_primed() == false`; once primed it stays primed. A `NaN` input is
//! returned as-is and leaves the filter untouched.

use thiserror::Error;

pub mod component;
pub mod metadata;
pub mod sample;

pub use component::{BarComponent, Components, QuoteComponent, TradeComponent};
pub use metadata::{IndicatorKind, Metadata, OutputMetadata, OutputType};
pub use sample::{Bar, Quote, Scalar, Trade};

// ============================================================================
// Error Types
// ============================================================================

/// Indicator errors.
#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Unknown {kind}: '{value}'")]
    UnknownIdentifier { kind: &'static str, value: String },
}

impl IndicatorError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IndicatorError>;

// ============================================================================
// Core Traits
// ============================================================================

/// Incremental indicator fed one sample at a time.
pub trait StreamingIndicator: Send {
    /// Feed one value and return the latest output, or `NaN` while not primed.
    fn update(&mut self, sample: f64) -> f64;

    /// Whether enough samples have been seen for outputs to be valid.
    fn is_primed(&self) -> bool;

    /// Identification and output description.
    fn metadata(&self) -> Metadata;

    /// Selectors applied to bar, quote and trade samples.
    fn components(&self) -> Components;

    fn update_scalar(&mut self, sample: &Scalar) -> Scalar {
        Scalar::new(sample.time, self.update(sample.value))
    }

    fn update_bar(&mut self, sample: &Bar) -> Scalar {
        let value = self.components().bar.value(sample);
        Scalar::new(sample.time, self.update(value))
    }

    fn update_quote(&mut self, sample: &Quote) -> Scalar {
        let value = self.components().quote.value(sample);
        Scalar::new(sample.time, self.update(value))
    }

    fn update_trade(&mut self, sample: &Trade) -> Scalar {
        let value = self.components().trade.value(sample);
        Scalar::new(sample.time, self.update(value))
    }

    fn update_scalars(&mut self, samples: &[Scalar]) -> Vec<Scalar> {
        samples.iter().map(|s| self.update_scalar(s)).collect()
    }

    fn update_bars(&mut self, samples: &[Bar]) -> Vec<Scalar> {
        samples.iter().map(|s| self.update_bar(s)).collect()
    }

    fn update_quotes(&mut self, samples: &[Quote]) -> Vec<Scalar> {
        samples.iter().map(|s| self.update_quote(s)).collect()
    }

    fn update_trades(&mut self, samples: &[Trade]) -> Vec<Scalar> {
        samples.iter().map(|s| self.update_trade(s)).collect()
    }
}

impl<T: StreamingIndicator + ?Sized> StreamingIndicator for Box<T> {
    fn update(&mut self, sample: f64) -> f64 {
        (**self).update(sample)
    }

    fn is_primed(&self) -> bool {
        (**self).is_primed()
    }

    fn metadata(&self) -> Metadata {
        (**self).metadata()
    }

    fn components(&self) -> Components {
        (**self).components()
    }
}
