//! Double Exponential Moving Average (DEMA) implementation.

use indicator_api::DEMAConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::debug;

use super::cascade::{Cascade, Recombination, Smoothing};

/// Double Exponential Moving Average.
///
/// DEMA = 2 * EMA - EMA(EMA)
/// Reduces lag compared to a single EMA. Primes on sample `2 * period - 1`.
#[derive(Debug, Clone)]
pub struct DEMA {
    cascade: Cascade,
    name: String,
    components: Components,
}

impl DEMA {
    pub fn new(config: &DEMAConfig) -> Result<Self> {
        let smoothing = Smoothing::resolve(config.period, config.alpha, 1)?;
        let name = if smoothing.explicit {
            format!("dema({}, {:.8})", smoothing.length, smoothing.alpha)
        } else {
            format!("dema({})", smoothing.length)
        };
        debug!(indicator = %name, seeding = ?config.seeding, "created");

        Ok(Self {
            cascade: Cascade::new(smoothing, config.seeding, Recombination::Double),
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&DEMAConfig::new(period))
    }

    pub fn period(&self) -> usize {
        self.cascade.smoothing().length
    }
}

impl StreamingIndicator for DEMA {
    fn update(&mut self, sample: f64) -> f64 {
        self.cascade.update(sample)
    }

    fn is_primed(&self) -> bool {
        self.cascade.is_primed()
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::DoubleExponentialMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
