//! Tillson T2 Moving Average implementation.

use indicator_api::T2Config;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::debug;

use super::cascade::{Cascade, Recombination, Smoothing};
use crate::params::check_unit;

/// Tillson T2 Moving Average.
///
/// The generalized DEMA `GD(x) = (1 + v) EMA(x) - v EMA(EMA(x))` applied twice,
/// which expands over four chained EMAs:
/// T2 = c1*e4 + c2*e3 + c3*e2
/// where c1 = v^2, c2 = -2v(1 + v), c3 = (1 + v)^2.
#[derive(Debug, Clone)]
pub struct T2 {
    cascade: Cascade,
    volume_factor: f64,
    name: String,
    components: Components,
}

impl T2 {
    pub fn new(config: &T2Config) -> Result<Self> {
        check_unit("volume_factor", "volume factor", config.volume_factor)?;
        let smoothing = Smoothing::resolve(config.period, config.alpha, 2)?;
        let name = if smoothing.explicit {
            format!(
                "t2({:.4} ({}), {:.2})",
                smoothing.alpha, smoothing.length, config.volume_factor
            )
        } else {
            format!("t2({}, {:.2})", smoothing.length, config.volume_factor)
        };
        debug!(indicator = %name, seeding = ?config.seeding, "created");

        Ok(Self {
            cascade: Cascade::new(
                smoothing,
                config.seeding,
                Recombination::t2(config.volume_factor),
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

impl StreamingIndicator for T2 {
    fn update(&mut self, sample: f64) -> f64 {
        self.cascade.update(sample)
    }

    fn is_primed(&self) -> bool {
        self.cascade.is_primed()
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::T2ExponentialMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
