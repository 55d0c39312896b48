//! Weighted Moving Average implementation.

use indicator_api::WMAConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::check_period;
use crate::window::Window;

/// Weighted Moving Average (WMA).
///
/// Linearly weighted mean of the last n samples: the newest carries weight
/// n, the oldest weight 1, and the sum is divided by n(n+1)/2.
///
/// Both the weighted sum and the plain sum are carried across updates, so
/// sliding the window costs a constant number of operations.
#[derive(Debug, Clone)]
pub struct WMA {
    window: Window,
    /// Sum of weight times sample over the window.
    weighted_sum: f64,
    /// Plain sum over the window.
    sum: f64,
    divider: f64,
    primed: bool,
    name: String,
    components: Components,
}

impl WMA {
    pub fn new(config: &WMAConfig) -> Result<Self> {
        check_period(config.period, 2)?;
        let name = format!("wma({})", config.period);
        debug!(indicator = %name, "created");

        let n = config.period as f64;
        Ok(Self {
            window: Window::new(config.period),
            weighted_sum: 0.0,
            sum: 0.0,
            divider: n * (n + 1.0) / 2.0,
            primed: false,
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&WMAConfig::new(period))
    }

    pub fn period(&self) -> usize {
        self.window.capacity()
    }
}

impl StreamingIndicator for WMA {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        if self.primed {
            // Every retained sample loses one unit of weight.
            self.weighted_sum -= self.sum;
            self.weighted_sum += sample * self.window.capacity() as f64;
            if let Some(evicted) = self.window.push(sample) {
                self.sum -= evicted;
            }
            self.sum += sample;
        } else {
            self.window.push(sample);
            self.sum += sample;
            self.weighted_sum += sample * self.window.len() as f64;
            if !self.window.is_full() {
                return f64::NAN;
            }
            self.primed = true;
            trace!(indicator = %self.name, "primed");
        }
        self.weighted_sum / self.divider
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::WeightedMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
