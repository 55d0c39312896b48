//! Triple Exponential Moving Average (TEMA) implementation.

use indicator_api::TEMAConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::debug;

use super::cascade::{Cascade, Recombination, Smoothing};

/// Triple Exponential Moving Average.
///
/// TEMA = 3 * EMA - 3 * EMA(EMA) + EMA(EMA(EMA))
/// Further reduces lag compared to DEMA. Primes on sample `3 * period - 2`.
#[derive(Debug, Clone)]
pub struct TEMA {
    cascade: Cascade,
    name: String,
    components: Components,
}

impl TEMA {
    pub fn new(config: &TEMAConfig) -> Result<Self> {
        let smoothing = Smoothing::resolve(config.period, config.alpha, 2)?;
        let name = if smoothing.explicit {
            format!("tema({}, {:.8})", smoothing.length, smoothing.alpha)
        } else {
            format!("tema({})", smoothing.length)
        };
        debug!(indicator = %name, seeding = ?config.seeding, "created");

        Ok(Self {
            cascade: Cascade::new(smoothing, config.seeding, Recombination::Triple),
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&TEMAConfig::new(period))
    }

    pub fn period(&self) -> usize {
        self.cascade.smoothing().length
    }
}

impl StreamingIndicator for TEMA {
    fn update(&mut self, sample: f64) -> f64 {
        self.cascade.update(sample)
    }

    fn is_primed(&self) -> bool {
        self.cascade.is_primed()
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::TripleExponentialMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
