//! Chande Momentum Oscillator (CMO).

use indicator_api::CMOConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::check_period;
use crate::window::Window;

/// Chande Momentum Oscillator (CMO).
///
/// Measures momentum on a scale of -100 to +100.
/// CMO = ((Sum of up changes - Sum of down changes) / (Sum of up + Sum of down)) * 100
///
/// The sums cover the last `period` sample-to-sample changes and are kept
/// incrementally as changes enter and leave the window.
#[derive(Debug, Clone)]
pub struct ChandeMomentum {
    changes: Window,
    previous: Option<f64>,
    sum_up: f64,
    sum_down: f64,
    primed: bool,
    name: String,
    components: Components,
}

impl ChandeMomentum {
    pub fn new(config: &CMOConfig) -> Result<Self> {
        check_period(config.period, 1)?;
        let name = format!("cmo({})", config.period);
        debug!(indicator = %name, "created");

        Ok(Self {
            changes: Window::new(config.period),
            previous: None,
            sum_up: 0.0,
            sum_down: 0.0,
            primed: false,
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&CMOConfig::new(period))
    }

    fn value(&self) -> f64 {
        let total = self.sum_up + self.sum_down;
        if total == 0.0 {
            0.0
        } else {
            100.0 * (self.sum_up - self.sum_down) / total
        }
    }
}

impl StreamingIndicator for ChandeMomentum {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        let Some(previous) = self.previous.replace(sample) else {
            return f64::NAN;
        };

        let change = sample - previous;
        if let Some(oldest) = self.changes.push(change) {
            if oldest < 0.0 {
                self.sum_down += oldest;
            } else if oldest > 0.0 {
                self.sum_up -= oldest;
            }
        }
        if change < 0.0 {
            self.sum_down -= change;
        } else if change > 0.0 {
            self.sum_up += change;
        }

        if !self.primed {
            if !self.changes.is_full() {
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
        Metadata::scalar(IndicatorKind::ChandeMomentumOscillator, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
