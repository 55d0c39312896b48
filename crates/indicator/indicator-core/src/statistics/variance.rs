//! Windowed variance implementation.

use indicator_api::VarianceConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::check_period;
use crate::window::Window;

/// Variance of the samples within a moving window of length n.
///
/// The population estimate is `(Σx² - (Σx)²/n) / n`, the unbiased sample
/// estimate divides by `n - 1` instead. Both sums are slid incrementally.
#[derive(Debug, Clone)]
pub struct Variance {
    window: Window,
    sum: f64,
    sum_squares: f64,
    unbiased: bool,
    primed: bool,
    name: String,
    components: Components,
}

impl Variance {
    pub fn new(config: &VarianceConfig) -> Result<Self> {
        Self::build(config, "var")
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&VarianceConfig::new(period, true))
    }

    /// Shared with [`StandardDeviation`](super::StandardDeviation), which
    /// names itself with its own `prefix`.
    pub(crate) fn build(config: &VarianceConfig, prefix: &str) -> Result<Self> {
        check_period(config.period, 2)?;
        let estimate = if config.unbiased { 's' } else { 'p' };
        let name = format!("{}.{}({})", prefix, estimate, config.period);
        debug!(indicator = %name, "created");

        Ok(Self {
            window: Window::new(config.period),
            sum: 0.0,
            sum_squares: 0.0,
            unbiased: config.unbiased,
            primed: false,
            name,
            components: config.components,
        })
    }

    pub fn period(&self) -> usize {
        self.window.capacity()
    }

    pub fn is_unbiased(&self) -> bool {
        self.unbiased
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> f64 {
        let n = self.window.capacity() as f64;
        if self.unbiased {
            (self.sum_squares - self.sum * self.sum / n) / (n - 1.0)
        } else {
            let mean = self.sum / n;
            self.sum_squares / n - mean * mean
        }
    }
}

impl StreamingIndicator for Variance {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        self.sum += sample;
        self.sum_squares += sample * sample;
        if let Some(evicted) = self.window.push(sample) {
            self.sum -= evicted;
            self.sum_squares -= evicted * evicted;
        }

        if !self.primed {
            if !self.window.is_full() {
                return f64::NAN;
            }
            self.primed = true;
            trace!(indicator = %self.name, "primed");
        }
        self.value()
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        let description = if self.unbiased {
            format!("Unbiased estimation of the sample variance {}", self.name)
        } else {
            format!("Estimation of the population variance {}", self.name)
        };
        Metadata::described(IndicatorKind::Variance, &self.name, description)
    }

    fn components(&self) -> Components {
        self.components
    }
}
