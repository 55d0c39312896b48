//! Triangular Moving Average implementation.

use indicator_api::TRIMAConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::check_period;
use crate::window::Window;

/// Triangular Moving Average (TRIMA).
///
/// An SMA of an SMA: weights rise linearly towards the middle of the window
/// and fall linearly after it. For n = 5 the weights are 1, 2, 3, 2, 1.
///
/// The numerator is split into a rising half and a falling half whose sums
/// are slid incrementally, so no pass over the window happens once primed.
#[derive(Debug, Clone)]
pub struct TRIMA {
    window: Window,
    /// Index of the last sample in the rising half.
    middle: usize,
    odd: bool,
    factor: f64,
    numerator: f64,
    /// Sum of the rising half.
    rising: f64,
    /// Sum of the falling half.
    falling: f64,
    primed: bool,
    name: String,
    components: Components,
}

impl TRIMA {
    pub fn new(config: &TRIMAConfig) -> Result<Self> {
        check_period(config.period, 2)?;
        let name = format!("trima({})", config.period);
        debug!(indicator = %name, "created");

        let half = config.period / 2;
        let peak = (half + 1) as f64;
        let odd = config.period % 2 == 1;
        let (factor, middle) = if odd {
            (1.0 / (peak * peak), half)
        } else {
            (1.0 / (half as f64 * peak), half - 1)
        };

        Ok(Self {
            window: Window::new(config.period),
            middle,
            odd,
            factor,
            numerator: 0.0,
            rising: 0.0,
            falling: 0.0,
            primed: false,
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&TRIMAConfig::new(period))
    }

    pub fn period(&self) -> usize {
        self.window.capacity()
    }

    fn prime(&mut self) {
        for i in (0..=self.middle).rev() {
            self.rising += self.window.get(i);
            self.numerator += self.rising;
        }
        for i in self.middle + 1..self.window.capacity() {
            self.falling += self.window.get(i);
            self.numerator += self.falling;
        }
    }
}

impl StreamingIndicator for TRIMA {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        if self.primed {
            self.numerator -= self.rising;
            if let Some(evicted) = self.window.push(sample) {
                self.rising -= evicted;
            }
            let crossing = self.window.get(self.middle);
            self.rising += crossing;
            if self.odd {
                self.numerator += self.falling;
                self.falling -= crossing;
            } else {
                self.falling -= crossing;
                self.numerator += self.falling;
            }
            self.falling += sample;
            self.numerator += sample;
        } else {
            self.window.push(sample);
            if !self.window.is_full() {
                return f64::NAN;
            }
            self.prime();
            self.primed = true;
            trace!(indicator = %self.name, "primed");
        }
        self.numerator * self.factor
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::TriangularMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
