//! Indicator construction from tagged configuration.

use indicator_api::FilterConfig;
use indicator_spi::{Result, StreamingIndicator};

use crate::moving_averages::{JurikMA, DEMA, EMA, KAMA, SMA, T2, T3, TEMA, TRIMA, WMA};
use crate::oscillators::{ChandeMomentum, Momentum, RSI, ROC};
use crate::statistics::{StandardDeviation, Variance};

/// Create indicator from configuration.
pub fn create_indicator(config: &FilterConfig) -> Result<Box<dyn StreamingIndicator>> {
    Ok(match config {
        FilterConfig::SimpleMovingAverage(c) => Box::new(SMA::new(c)?),
        FilterConfig::ExponentialMovingAverage(c) => Box::new(EMA::new(c)?),
        FilterConfig::DoubleExponentialMovingAverage(c) => Box::new(DEMA::new(c)?),
        FilterConfig::TripleExponentialMovingAverage(c) => Box::new(TEMA::new(c)?),
        FilterConfig::T2ExponentialMovingAverage(c) => Box::new(T2::new(c)?),
        FilterConfig::T3ExponentialMovingAverage(c) => Box::new(T3::new(c)?),
        FilterConfig::JurikMovingAverage(c) => Box::new(JurikMA::new(c)?),
        FilterConfig::WeightedMovingAverage(c) => Box::new(WMA::new(c)?),
        FilterConfig::TriangularMovingAverage(c) => Box::new(TRIMA::new(c)?),
        FilterConfig::KaufmanAdaptiveMovingAverage(c) => Box::new(KAMA::new(c)?),
        FilterConfig::Momentum(c) => Box::new(Momentum::new(c)?),
        FilterConfig::RateOfChange(c) => Box::new(ROC::new(c)?),
        FilterConfig::RateOfChangePercent(c) => Box::new(ROC::percent(c)?),
        FilterConfig::ChandeMomentumOscillator(c) => Box::new(ChandeMomentum::new(c)?),
        FilterConfig::RelativeStrengthIndex(c) => Box::new(RSI::new(c)?),
        FilterConfig::Variance(c) => Box::new(Variance::new(c)?),
        FilterConfig::StandardDeviation(c) => Box::new(StandardDeviation::new(c)?),
    })
}
