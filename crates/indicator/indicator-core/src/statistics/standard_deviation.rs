//! Windowed standard deviation implementation.

use indicator_api::VarianceConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};

use super::Variance;

/// Standard deviation of the samples within a moving window: the square
/// root of [`Variance`] with the same estimate.
#[derive(Debug, Clone)]
pub struct StandardDeviation {
    variance: Variance,
}

impl StandardDeviation {
    pub fn new(config: &VarianceConfig) -> Result<Self> {
        Ok(Self {
            variance: Variance::build(config, "stdev")?,
        })
    }

    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&VarianceConfig::new(period, true))
    }

    pub fn period(&self) -> usize {
        self.variance.period()
    }

    pub fn is_unbiased(&self) -> bool {
        self.variance.is_unbiased()
    }
}

impl StreamingIndicator for StandardDeviation {
    fn update(&mut self, sample: f64) -> f64 {
        let variance = self.variance.update(sample);
        // Rounding can leave a flat window slightly negative.
        if variance < 0.0 {
            0.0
        } else {
            variance.sqrt()
        }
    }

    fn is_primed(&self) -> bool {
        self.variance.is_primed()
    }

    fn metadata(&self) -> Metadata {
        let name = self.variance.name();
        let description = if self.is_unbiased() {
            format!("Standard deviation based on unbiased estimation of the sample variance {}", name)
        } else {
            format!("Standard deviation based on estimation of the population variance {}", name)
        };
        Metadata::described(IndicatorKind::StandardDeviation, name, description)
    }

    fn components(&self) -> Components {
        self.variance.components()
    }
}
