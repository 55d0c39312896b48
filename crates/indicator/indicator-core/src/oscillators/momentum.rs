//! Momentum implementation.

use indicator_api::MomentumConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::check_period;
use crate::window::Window;

/// Momentum.
///
/// Difference between the current sample and the one `period` samples ago.
/// Returns NaN for the first `period` samples.
#[derive(Debug, Clone)]
pub struct Momentum {
    window: Window,
    primed: bool,
    name: String,
    components: Components,
}

impl Momentum {
    pub fn new(config: &MomentumConfig) -> Result<Self> {
        check_period(config.period, 1)?;
        let name = format!("mom({})", config.period);
        debug!(indicator = %name, "created");

        Ok(Self {
            window: Window::new(config.period + 1),
            primed: false,
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&MomentumConfig::new(period))
    }
}

impl StreamingIndicator for Momentum {
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
        sample - self.window.oldest()
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::Momentum, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
