//! Exponential Moving Average implementation.

use indicator_api::EMAConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::debug;

use super::cascade::{Cascade, Recombination, Smoothing};

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent prices using an exponential decay.
/// Primes on sample `period` in both seeding modes.
#[derive(Debug, Clone)]
pub struct EMA {
    cascade: Cascade,
    name: String,
    components: Components,
}

impl EMA {
    pub fn new(config: &EMAConfig) -> Result<Self> {
        let smoothing = Smoothing::resolve(config.period, config.alpha, 1)?;
        let name = if smoothing.explicit {
            format!("ema({}, {:.8})", smoothing.length, smoothing.alpha)
        } else {
            format!("ema({})", smoothing.length)
        };
        debug!(indicator = %name, seeding = ?config.seeding, "created");

        Ok(Self {
            cascade: Cascade::new(smoothing, config.seeding, Recombination::Single),
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&EMAConfig::new(period))
    }

    /// Smoothing factor applied on every step.
    pub fn alpha(&self) -> f64 {
        self.cascade.smoothing().alpha
    }

    pub fn period(&self) -> usize {
        self.cascade.smoothing().length
    }
}

impl StreamingIndicator for EMA {
    fn update(&mut self, sample: f64) -> f64 {
        self.cascade.update(sample)
    }

    fn is_primed(&self) -> bool {
        self.cascade.is_primed()
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::ExponentialMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
