//! Tillson T3 Moving Average implementation.
//!
//! A six-fold smoothed EMA with volume factor for reduced lag.

use indicator_api::T3Config;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::debug;

use super::cascade::{Cascade, Recombination, Smoothing};
use crate::params::check_unit;

/// Tillson T3 Moving Average.
///
/// T3 is a smoother moving average with less lag than traditional EMAs.
/// It is the generalized DEMA applied three times, which expands over six
/// chained EMAs:
/// T3 = c1*e6 + c2*e5 + c3*e4 + c4*e3
/// where c1 = -v^3, c2 = 3v^2 + 3v^3, c3 = -6v^2 - 3v - 3v^3, c4 = 1 + 3v + v^3 + 3v^2
#[derive(Debug, Clone)]
pub struct T3 {
    cascade: Cascade,
    volume_factor: f64,
    name: String,
    components: Components,
}

impl T3 {
    pub fn new(config: &T3Config) -> Result<Self> {
        check_unit("volume_factor", "volume factor", config.volume_factor)?;
        let smoothing = Smoothing::resolve(config.period, config.alpha, 2)?;
        let name = if smoothing.explicit {
            format!(
                "t3({:.4} ({}), {:.2})",
                smoothing.alpha, smoothing.length, config.volume_factor
            )
        } else {
            format!("t3({}, {:.2})", smoothing.length, config.volume_factor)
        };
        debug!(indicator = %name, seeding = ?config.seeding, "created");

        Ok(Self {
            cascade: Cascade::new(
                smoothing,
                config.seeding,
                Recombination::t3(config.volume_factor),
            ),
            volume_factor: config.volume_factor,
            name,
            components: config.components,
        })
    }

    pub fn period(&self) -> usize {
        self.cascade.smoothing().length
    }

    pub fn volume_factor(&self) -> f64 {
        self.volume_factor
    }
}

impl StreamingIndicator for T3 {
    fn update(&mut self, sample: f64) -> f64 {
        self.cascade.update(sample)
    }

    fn is_primed(&self) -> bool {
        self.cascade.is_primed()
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::T3ExponentialMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
