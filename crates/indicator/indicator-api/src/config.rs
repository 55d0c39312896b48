//! Indicator configuration types.
//!
//! Every config deserializes from partial JSON: missing fields take the
//! values of its `Default`. Ranges are checked when the indicator is built.

use indicator_spi::{Components, IndicatorKind};
use serde::{Deserialize, Serialize};

/// Smoothing factor equivalent to an exponential length: 2 / (length + 1).
pub fn length_to_alpha(length: usize) -> f64 {
    2.0 / (length as f64 + 1.0)
}

/// Smallest smoothing factor accepted; lower factors are raised to it.
pub const MIN_ALPHA: f64 = 0.00000001;

/// Exponential length equivalent to a smoothing factor: round(2 / alpha) - 1.
///
/// Factors below [`MIN_ALPHA`] are treated as [`MIN_ALPHA`].
pub fn alpha_to_length(alpha: f64) -> usize {
    let alpha = if alpha < MIN_ALPHA { MIN_ALPHA } else { alpha };
    ((2.0 / alpha).round() as usize).saturating_sub(1)
}

/// How an exponential stage obtains its first value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Seeding {
    /// Arithmetic mean of the first `period` inputs.
    #[default]
    Average,
    /// The first input itself (Metastock style).
    FirstSample,
}

// ============================================================================
// Moving Averages
// ============================================================================

/// Simple Moving Average configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SMAConfig {
    pub period: usize,
    pub components: Components,
}

impl SMAConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }
}

impl Default for SMAConfig {
    fn default() -> Self {
        Self { period: 20, components: Components::default() }
    }
}

/// Exponential Moving Average configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EMAConfig {
    pub period: usize,
    /// Optional smoothing factor in [0, 1]; takes precedence over `period`.
    pub alpha: Option<f64>,
    pub seeding: Seeding,
    pub components: Components,
}

impl EMAConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }

    pub fn with_alpha(alpha: f64) -> Self {
        Self { alpha: Some(alpha), ..Self::default() }
    }

    pub fn seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }
}

impl Default for EMAConfig {
    fn default() -> Self {
        Self {
            period: 20,
            alpha: None,
            seeding: Seeding::default(),
            components: Components::default(),
        }
    }
}

/// Double Exponential Moving Average configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DEMAConfig {
    pub period: usize,
    pub alpha: Option<f64>,
    pub seeding: Seeding,
    pub components: Components,
}

impl DEMAConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }

    pub fn with_alpha(alpha: f64) -> Self {
        Self { alpha: Some(alpha), ..Self::default() }
    }

    pub fn seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }
}

impl Default for DEMAConfig {
    fn default() -> Self {
        Self {
            period: 20,
            alpha: None,
            seeding: Seeding::default(),
            components: Components::default(),
        }
    }
}

/// Triple Exponential Moving Average configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TEMAConfig {
    pub period: usize,
    pub alpha: Option<f64>,
    pub seeding: Seeding,
    pub components: Components,
}

impl TEMAConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }

    pub fn with_alpha(alpha: f64) -> Self {
        Self { alpha: Some(alpha), ..Self::default() }
    }

    pub fn seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }
}

impl Default for TEMAConfig {
    fn default() -> Self {
        Self {
            period: 20,
            alpha: None,
            seeding: Seeding::default(),
            components: Components::default(),
        }
    }
}

/// Tillson T2 configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct T2Config {
    pub period: usize,
    pub alpha: Option<f64>,
    /// Volume factor (0.0 to 1.0, default: 0.7).
    pub volume_factor: f64,
    pub seeding: Seeding,
    pub components: Components,
}

impl T2Config {
    pub fn new(period: usize, volume_factor: f64) -> Self {
        Self { period, volume_factor, ..Self::default() }
    }

    pub fn with_alpha(alpha: f64, volume_factor: f64) -> Self {
        Self { alpha: Some(alpha), volume_factor, ..Self::default() }
    }

    pub fn seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }
}

impl Default for T2Config {
    fn default() -> Self {
        Self {
            period: 5,
            alpha: None,
            volume_factor: 0.7,
            seeding: Seeding::default(),
            components: Components::default(),
        }
    }
}

/// Tillson T3 configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct T3Config {
    pub period: usize,
    pub alpha: Option<f64>,
    /// Volume factor (0.0 to 1.0, default: 0.7).
    pub volume_factor: f64,
    pub seeding: Seeding,
    pub components: Components,
}

impl T3Config {
    pub fn new(period: usize, volume_factor: f64) -> Self {
        Self { period, volume_factor, ..Self::default() }
    }

    pub fn with_alpha(alpha: f64, volume_factor: f64) -> Self {
        Self { alpha: Some(alpha), volume_factor, ..Self::default() }
    }

    pub fn seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }
}

impl Default for T3Config {
    fn default() -> Self {
        Self {
            period: 5,
            alpha: None,
            volume_factor: 0.7,
            seeding: Seeding::default(),
            components: Components::default(),
        }
    }
}

/// Jurik Moving Average configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JurikMAConfig {
    /// Smoothing period (similar to EMA period).
    pub period: usize,
    /// Phase adjustment (-100 to +100).
    /// Negative values increase smoothness, positive values reduce lag.
    pub phase: i32,
    pub components: Components,
}

impl JurikMAConfig {
    pub fn new(period: usize, phase: i32) -> Self {
        Self { period, phase, ..Self::default() }
    }

    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }
}

impl Default for JurikMAConfig {
    fn default() -> Self {
        Self { period: 14, phase: 0, components: Components::default() }
    }
}

/// Weighted Moving Average configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WMAConfig {
    pub period: usize,
    pub components: Components,
}

impl WMAConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }
}

impl Default for WMAConfig {
    fn default() -> Self {
        Self { period: 20, components: Components::default() }
    }
}

/// Triangular Moving Average configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TRIMAConfig {
    pub period: usize,
    pub components: Components,
}

impl TRIMAConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }
}

impl Default for TRIMAConfig {
    fn default() -> Self {
        Self { period: 20, components: Components::default() }
    }
}

/// Kaufman Adaptive Moving Average configuration.
///
/// The fastest and slowest smoothing come from lengths unless both
/// factors are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KAMAConfig {
    /// Samples spanned by the efficiency ratio.
    pub efficiency_ratio_length: usize,
    pub fastest_length: usize,
    pub slowest_length: usize,
    /// Optional fastest smoothing factor in [0, 1].
    pub fastest_alpha: Option<f64>,
    /// Optional slowest smoothing factor in [0, 1].
    pub slowest_alpha: Option<f64>,
    pub components: Components,
}

impl KAMAConfig {
    pub fn new(efficiency_ratio_length: usize, fastest_length: usize, slowest_length: usize) -> Self {
        Self { efficiency_ratio_length, fastest_length, slowest_length, ..Self::default() }
    }

    pub fn with_alpha(efficiency_ratio_length: usize, fastest_alpha: f64, slowest_alpha: f64) -> Self {
        Self {
            efficiency_ratio_length,
            fastest_alpha: Some(fastest_alpha),
            slowest_alpha: Some(slowest_alpha),
            ..Self::default()
        }
    }

    pub fn components(mut self, components: Components) -> Self {
        self.components = components;
        self
    }
}

impl Default for KAMAConfig {
    fn default() -> Self {
        Self {
            efficiency_ratio_length: 10,
            fastest_length: 2,
            slowest_length: 30,
            fastest_alpha: None,
            slowest_alpha: None,
            components: Components::default(),
        }
    }
}

// ============================================================================
// Momentum and Oscillators
// ============================================================================

/// Momentum configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    pub period: usize,
    pub components: Components,
}

impl MomentumConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self { period: 10, components: Components::default() }
    }
}

/// Rate of Change configuration, shared by the ratio and percent forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ROCConfig {
    pub period: usize,
    pub components: Components,
}

impl ROCConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }
}

impl Default for ROCConfig {
    fn default() -> Self {
        Self { period: 10, components: Components::default() }
    }
}

/// Chande Momentum Oscillator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CMOConfig {
    pub period: usize,
    pub components: Components,
}

impl CMOConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }
}

impl Default for CMOConfig {
    fn default() -> Self {
        Self { period: 14, components: Components::default() }
    }
}

/// Relative Strength Index configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RSIConfig {
    pub period: usize,
    pub components: Components,
}

impl RSIConfig {
    pub fn new(period: usize) -> Self {
        Self { period, ..Self::default() }
    }
}

impl Default for RSIConfig {
    fn default() -> Self {
        Self { period: 14, components: Components::default() }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Windowed variance configuration, shared by variance and standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VarianceConfig {
    pub period: usize,
    /// Divide by `period - 1` (sample) instead of `period` (population).
    pub unbiased: bool,
    pub components: Components,
}

impl VarianceConfig {
    pub fn new(period: usize, unbiased: bool) -> Self {
        Self { period, unbiased, ..Self::default() }
    }
}

impl Default for VarianceConfig {
    fn default() -> Self {
        Self { period: 20, unbiased: true, components: Components::default() }
    }
}

// ============================================================================
// Tagged Union
// ============================================================================

/// Any indicator configuration, tagged by its [`IndicatorKind`] in JSON.
///
/// ```json
/// { "type": "jurikMovingAverage", "period": 7, "phase": 50 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterConfig {
    SimpleMovingAverage(SMAConfig),
    ExponentialMovingAverage(EMAConfig),
    DoubleExponentialMovingAverage(DEMAConfig),
    TripleExponentialMovingAverage(TEMAConfig),
    T2ExponentialMovingAverage(T2Config),
    T3ExponentialMovingAverage(T3Config),
    JurikMovingAverage(JurikMAConfig),
    WeightedMovingAverage(WMAConfig),
    TriangularMovingAverage(TRIMAConfig),
    KaufmanAdaptiveMovingAverage(KAMAConfig),
    Momentum(MomentumConfig),
    RateOfChange(ROCConfig),
    RateOfChangePercent(ROCConfig),
    ChandeMomentumOscillator(CMOConfig),
    RelativeStrengthIndex(RSIConfig),
    Variance(VarianceConfig),
    StandardDeviation(VarianceConfig),
}

impl FilterConfig {
    /// Default configuration of the given kind.
    pub fn default_for(kind: IndicatorKind) -> Self {
        match kind {
            IndicatorKind::SimpleMovingAverage => Self::SimpleMovingAverage(SMAConfig::default()),
            IndicatorKind::ExponentialMovingAverage => Self::ExponentialMovingAverage(EMAConfig::default()),
            IndicatorKind::DoubleExponentialMovingAverage => {
                Self::DoubleExponentialMovingAverage(DEMAConfig::default())
            }
            IndicatorKind::TripleExponentialMovingAverage => {
                Self::TripleExponentialMovingAverage(TEMAConfig::default())
            }
            IndicatorKind::T2ExponentialMovingAverage => Self::T2ExponentialMovingAverage(T2Config::default()),
            IndicatorKind::T3ExponentialMovingAverage => Self::T3ExponentialMovingAverage(T3Config::default()),
            IndicatorKind::JurikMovingAverage => Self::JurikMovingAverage(JurikMAConfig::default()),
            IndicatorKind::WeightedMovingAverage => Self::WeightedMovingAverage(WMAConfig::default()),
            IndicatorKind::TriangularMovingAverage => Self::TriangularMovingAverage(TRIMAConfig::default()),
            IndicatorKind::KaufmanAdaptiveMovingAverage => {
                Self::KaufmanAdaptiveMovingAverage(KAMAConfig::default())
            }
            IndicatorKind::Momentum => Self::Momentum(MomentumConfig::default()),
            IndicatorKind::RateOfChange => Self::RateOfChange(ROCConfig::default()),
            IndicatorKind::RateOfChangePercent => Self::RateOfChangePercent(ROCConfig::default()),
            IndicatorKind::ChandeMomentumOscillator => Self::ChandeMomentumOscillator(CMOConfig::default()),
            IndicatorKind::RelativeStrengthIndex => Self::RelativeStrengthIndex(RSIConfig::default()),
            IndicatorKind::Variance => Self::Variance(VarianceConfig::default()),
            IndicatorKind::StandardDeviation => Self::StandardDeviation(VarianceConfig::default()),
        }
    }

    pub fn kind(&self) -> IndicatorKind {
        match self {
            Self::SimpleMovingAverage(_) => IndicatorKind::SimpleMovingAverage,
            Self::ExponentialMovingAverage(_) => IndicatorKind::ExponentialMovingAverage,
            Self::DoubleExponentialMovingAverage(_) => IndicatorKind::DoubleExponentialMovingAverage,
            Self::TripleExponentialMovingAverage(_) => IndicatorKind::TripleExponentialMovingAverage,
            Self::T2ExponentialMovingAverage(_) => IndicatorKind::T2ExponentialMovingAverage,
            Self::T3ExponentialMovingAverage(_) => IndicatorKind::T3ExponentialMovingAverage,
            Self::JurikMovingAverage(_) => IndicatorKind::JurikMovingAverage,
            Self::WeightedMovingAverage(_) => IndicatorKind::WeightedMovingAverage,
            Self::TriangularMovingAverage(_) => IndicatorKind::TriangularMovingAverage,
            Self::KaufmanAdaptiveMovingAverage(_) => IndicatorKind::KaufmanAdaptiveMovingAverage,
            Self::Momentum(_) => IndicatorKind::Momentum,
            Self::RateOfChange(_) => IndicatorKind::RateOfChange,
            Self::RateOfChangePercent(_) => IndicatorKind::RateOfChangePercent,
            Self::ChandeMomentumOscillator(_) => IndicatorKind::ChandeMomentumOscillator,
            Self::RelativeStrengthIndex(_) => IndicatorKind::RelativeStrengthIndex,
            Self::Variance(_) => IndicatorKind::Variance,
            Self::StandardDeviation(_) => IndicatorKind::StandardDeviation,
        }
    }

    /// Primary length parameter; the efficiency ratio length for KAMA.
    pub fn period(&self) -> usize {
        match self {
            Self::SimpleMovingAverage(c) => c.period,
            Self::ExponentialMovingAverage(c) => c.period,
            Self::DoubleExponentialMovingAverage(c) => c.period,
            Self::TripleExponentialMovingAverage(c) => c.period,
            Self::T2ExponentialMovingAverage(c) => c.period,
            Self::T3ExponentialMovingAverage(c) => c.period,
            Self::JurikMovingAverage(c) => c.period,
            Self::WeightedMovingAverage(c) => c.period,
            Self::TriangularMovingAverage(c) => c.period,
            Self::KaufmanAdaptiveMovingAverage(c) => c.efficiency_ratio_length,
            Self::Momentum(c) => c.period,
            Self::RateOfChange(c) | Self::RateOfChangePercent(c) => c.period,
            Self::ChandeMomentumOscillator(c) => c.period,
            Self::RelativeStrengthIndex(c) => c.period,
            Self::Variance(c) | Self::StandardDeviation(c) => c.period,
        }
    }

    /// Replace the primary length parameter.
    pub fn with_period(mut self, period: usize) -> Self {
        match &mut self {
            Self::SimpleMovingAverage(c) => c.period = period,
            Self::ExponentialMovingAverage(c) => c.period = period,
            Self::DoubleExponentialMovingAverage(c) => c.period = period,
            Self::TripleExponentialMovingAverage(c) => c.period = period,
            Self::T2ExponentialMovingAverage(c) => c.period = period,
            Self::T3ExponentialMovingAverage(c) => c.period = period,
            Self::JurikMovingAverage(c) => c.period = period,
            Self::WeightedMovingAverage(c) => c.period = period,
            Self::TriangularMovingAverage(c) => c.period = period,
            Self::KaufmanAdaptiveMovingAverage(c) => c.efficiency_ratio_length = period,
            Self::Momentum(c) => c.period = period,
            Self::RateOfChange(c) | Self::RateOfChangePercent(c) => c.period = period,
            Self::ChandeMomentumOscillator(c) => c.period = period,
            Self::RelativeStrengthIndex(c) => c.period = period,
            Self::Variance(c) | Self::StandardDeviation(c) => c.period = period,
        }
        self
    }

    pub fn components(&self) -> Components {
        match self {
            Self::SimpleMovingAverage(c) => c.components,
            Self::ExponentialMovingAverage(c) => c.components,
            Self::DoubleExponentialMovingAverage(c) => c.components,
            Self::TripleExponentialMovingAverage(c) => c.components,
            Self::T2ExponentialMovingAverage(c) => c.components,
            Self::T3ExponentialMovingAverage(c) => c.components,
            Self::JurikMovingAverage(c) => c.components,
            Self::WeightedMovingAverage(c) => c.components,
            Self::TriangularMovingAverage(c) => c.components,
            Self::KaufmanAdaptiveMovingAverage(c) => c.components,
            Self::Momentum(c) => c.components,
            Self::RateOfChange(c) | Self::RateOfChangePercent(c) => c.components,
            Self::ChandeMomentumOscillator(c) => c.components,
            Self::RelativeStrengthIndex(c) => c.components,
            Self::Variance(c) | Self::StandardDeviation(c) => c.components,
        }
    }
}
