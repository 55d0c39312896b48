//! Kaufman Adaptive Moving Average implementation.

use indicator_api::{length_to_alpha, KAMAConfig, MIN_ALPHA};
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::{check_length, check_period, check_unit};
use crate::window::Window;

/// Below this total path length the series counts as flat.
const FLAT_PATH: f64 = 0.00000001;

/// Kaufman Adaptive Moving Average (KAMA).
///
/// An exponential average whose smoothing follows the efficiency ratio:
/// net change over the window divided by the sum of absolute changes.
/// A trending series (ratio near 1) is smoothed with the fastest factor,
/// a choppy one (ratio near 0) with the slowest, and the blend is squared.
///
/// Primes on sample `efficiency_ratio_length + 1`, seeding from the sample
/// before it.
#[derive(Debug, Clone)]
pub struct KAMA {
    /// Last `efficiency_ratio_length + 1` samples.
    window: Window,
    /// Last `efficiency_ratio_length` absolute changes.
    changes: Window,
    path: f64,
    alpha_fastest: f64,
    alpha_slowest: f64,
    value: f64,
    efficiency_ratio: f64,
    primed: bool,
    name: String,
    ratio_name: String,
    components: Components,
}

impl KAMA {
    /// Output identifier of the efficiency ratio in [`Metadata`].
    pub const EFFICIENCY_RATIO: u32 = 1;

    pub fn new(config: &KAMAConfig) -> Result<Self> {
        let length = config.efficiency_ratio_length;
        check_period(length, 2)?;

        let (alpha_fastest, alpha_slowest, name) = match (config.fastest_alpha, config.slowest_alpha) {
            (None, None) => {
                check_length("fastest_length", config.fastest_length, 2)?;
                check_length("slowest_length", config.slowest_length, 2)?;
                (
                    length_to_alpha(config.fastest_length),
                    length_to_alpha(config.slowest_length),
                    format!("kama({}, {}, {})", length, config.fastest_length, config.slowest_length),
                )
            }
            (fastest, slowest) => {
                let fastest = Self::factor("fastest_alpha", "fastest", fastest, config.fastest_length)?;
                let slowest = Self::factor("slowest_alpha", "slowest", slowest, config.slowest_length)?;
                let name = format!("kama({}, {:.4}, {:.4})", length, fastest, slowest);
                (fastest, slowest, name)
            }
        };
        debug!(indicator = %name, alpha_fastest, alpha_slowest, "created");

        Ok(Self {
            window: Window::new(length + 1),
            changes: Window::new(length),
            path: 0.0,
            alpha_fastest,
            alpha_slowest,
            value: f64::NAN,
            efficiency_ratio: f64::NAN,
            primed: false,
            name,
            ratio_name: format!("er({})", length),
            components: config.components,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&KAMAConfig { efficiency_ratio_length: period, ..KAMAConfig::default() })
    }

    /// Efficiency ratio of the latest update, NaN until primed.
    pub fn efficiency_ratio(&self) -> f64 {
        self.efficiency_ratio
    }

    pub fn efficiency_ratio_length(&self) -> usize {
        self.changes.capacity()
    }

    /// Fastest and slowest smoothing factors in use.
    pub fn smoothing_factors(&self) -> (f64, f64) {
        (self.alpha_fastest, self.alpha_slowest)
    }

    /// Explicit factor if given, otherwise the one derived from `length`.
    fn factor(name: &str, what: &str, alpha: Option<f64>, length: usize) -> Result<f64> {
        match alpha {
            Some(alpha) => {
                check_unit(name, &format!("{} smoothing factor", what), alpha)?;
                Ok(alpha.max(MIN_ALPHA))
            }
            None => {
                check_length(&format!("{}_length", what), length, 2)?;
                Ok(length_to_alpha(length))
            }
        }
    }

    /// Squared smoothing constant for the window ending at `sample`.
    fn smoothing(&mut self, sample: f64) -> f64 {
        let direction = (sample - self.window.oldest()).abs();
        self.efficiency_ratio = if self.path <= direction || self.path < FLAT_PATH {
            1.0
        } else {
            direction / self.path
        };
        self.alpha_slowest + self.efficiency_ratio * (self.alpha_fastest - self.alpha_slowest)
    }
}

impl StreamingIndicator for KAMA {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        let previous = self.window.newest();
        self.window.push(sample);
        if let Some(previous) = previous {
            let change = (sample - previous).abs();
            let evicted = self.changes.push(change).unwrap_or(0.0);
            self.path += change - evicted;
        }

        if !self.primed {
            let seed = match previous {
                Some(seed) if self.window.is_full() => seed,
                _ => return f64::NAN,
            };
            self.value = seed;
            self.primed = true;
            trace!(indicator = %self.name, "primed");
        }

        let sc = self.smoothing(sample);
        self.value += (sample - self.value) * sc * sc;
        self.value
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::KaufmanAdaptiveMovingAverage, &self.name)
            .with_scalar(Self::EFFICIENCY_RATIO, &self.ratio_name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
