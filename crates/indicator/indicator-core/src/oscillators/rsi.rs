//! Relative Strength Index implementation.

use indicator_api::RSIConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::check_period;

/// Relative Strength Index (RSI).
///
/// Momentum oscillator measuring speed and magnitude of price changes.
/// Values range from 0 to 100. Average gain and loss start as the plain
/// mean of the first `period` changes and then follow Wilder's smoothing.
#[derive(Debug, Clone)]
pub struct RSI {
    period: usize,
    previous: Option<f64>,
    count: usize,
    avg_gain: f64,
    avg_loss: f64,
    primed: bool,
    name: String,
    components: Components,
}

impl RSI {
    pub fn new(config: &RSIConfig) -> Result<Self> {
        check_period(config.period, 1)?;
        let name = format!("rsi({})", config.period);
        debug!(indicator = %name, "created");

        Ok(Self {
            period: config.period,
            previous: None,
            count: 0,
            avg_gain: 0.0,
            avg_loss: 0.0,
            primed: false,
            name,
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&RSIConfig::new(period))
    }

    pub fn period(&self) -> usize {
        self.period
    }

    fn value(&self) -> f64 {
        let total = self.avg_gain + self.avg_loss;
        if total == 0.0 {
            0.0
        } else {
            100.0 * self.avg_gain / total
        }
    }
}

impl StreamingIndicator for RSI {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        let Some(previous) = self.previous.replace(sample) else {
            return f64::NAN;
        };

        let change = sample - previous;
        let gain = if change > 0.0 { change } else { 0.0 };
        let loss = if change < 0.0 { -change } else { 0.0 };
        let period = self.period as f64;

        if self.primed {
            self.avg_gain = (self.avg_gain * (period - 1.0) + gain) / period;
            self.avg_loss = (self.avg_loss * (period - 1.0) + loss) / period;
            return self.value();
        }

        self.avg_gain += gain;
        self.avg_loss += loss;
        self.count += 1;
        if self.count < self.period {
            return f64::NAN;
        }

        self.avg_gain /= period;
        self.avg_loss /= period;
        self.primed = true;
        trace!(indicator = %self.name, "primed");
        self.value()
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::RelativeStrengthIndex, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
