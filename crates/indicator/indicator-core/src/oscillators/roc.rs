//! Rate of Change implementation.

use indicator_api::ROCConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::check_period;
use crate::window::Window;

/// Divisors at or below this magnitude yield 0.
const EPSILON: f64 = 1e-13;

/// Rate of Change.
///
/// Ratio of the current sample to the one `period` samples ago, minus one.
/// [`ROC::new`] scales it by 100; [`ROC::percent`] reports the bare fraction.
#[derive(Debug, Clone)]
pub struct ROC {
    window: Window,
    scale: f64,
    kind: IndicatorKind,
    primed: bool,
    name: String,
    components: Components,
}

impl ROC {
    /// `100 * (sample / previous - 1)`
    pub fn new(config: &ROCConfig) -> Result<Self> {
        Self::build(config, IndicatorKind::RateOfChange, 100.0, "roc")
    }

    /// `sample / previous - 1`
    pub fn percent(config: &ROCConfig) -> Result<Self> {
        Self::build(config, IndicatorKind::RateOfChangePercent, 1.0, "rocp")
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&ROCConfig::new(period))
    }

    fn build(config: &ROCConfig, kind: IndicatorKind, scale: f64, prefix: &str) -> Result<Self> {
        check_period(config.period, 1)?;
        let name = format!("{}({})", prefix, config.period);
        debug!(indicator = %name, "created");

        Ok(Self {
            window: Window::new(config.period + 1),
            scale,
            kind,
            primed: false,
            name,
            components: config.components,
        })
    }
}

impl StreamingIndicator for ROC {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        self.window.push(sample);
        if !self.primed {
            if !self.window.is_full() {
                return f64::NAN;
            }
            self.primed = true;
            trace!(indicator = %self.name, "primed");
        }

        let previous = self.window.oldest();
        if previous.abs() <= EPSILON {
            return 0.0;
        }
        (sample / previous - 1.0) * self.scale
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(self.kind, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
