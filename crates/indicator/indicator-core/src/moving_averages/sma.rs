//! Simple Moving Average implementation.

use indicator_api::SMAConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::check_period;
use crate::window::Window;

/// Simple Moving Average (SMA).
///
/// Calculates the unweighted mean of the previous n data points, keeping a
/// running sum so each update costs one add and one subtract.
#[derive(Debug, Clone)]
pub struct SMA {
    window: Window,
    sum: f64,
    primed: bool,
    name: String,
    components: Components,
}

impl SMA {
    pub fn new(config: &SMAConfig) -> Result<Self> {
        check_period(config.period, 2)?;
        let name = format!("sma({})", config.period);
        debug!(indicator = %name, "created");

        Ok(Self {
            window: Window::new(config.period),
            sum: 0.0,
            primed: false,
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&SMAConfig::new(period))
    }

    pub fn period(&self) -> usize {
        self.window.capacity()
    }
}

impl StreamingIndicator for SMA {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        self.sum += sample;
        if let Some(evicted) = self.window.push(sample) {
            self.sum -= evicted;
        }

        if !self.primed {
            if !self.window.is_full() {
                return f64::NAN;
            }
            self.primed = true;
            trace!(indicator = %self.name, "primed");
        }
        self.sum / self.window.capacity() as f64
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::SimpleMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
