//! Indicator identification and output descriptions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::IndicatorError;

/// Identifies an indicator family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndicatorKind {
    SimpleMovingAverage,
    ExponentialMovingAverage,
    DoubleExponentialMovingAverage,
    TripleExponentialMovingAverage,
    T2ExponentialMovingAverage,
    T3ExponentialMovingAverage,
    JurikMovingAverage,
    WeightedMovingAverage,
    TriangularMovingAverage,
    KaufmanAdaptiveMovingAverage,
    Momentum,
    RateOfChange,
    RateOfChangePercent,
    ChandeMomentumOscillator,
    RelativeStrengthIndex,
    Variance,
    StandardDeviation,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 17] = [
        Self::SimpleMovingAverage,
        Self::ExponentialMovingAverage,
        Self::DoubleExponentialMovingAverage,
        Self::TripleExponentialMovingAverage,
        Self::T2ExponentialMovingAverage,
        Self::T3ExponentialMovingAverage,
        Self::JurikMovingAverage,
        Self::WeightedMovingAverage,
        Self::TriangularMovingAverage,
        Self::KaufmanAdaptiveMovingAverage,
        Self::Momentum,
        Self::RateOfChange,
        Self::RateOfChangePercent,
        Self::ChandeMomentumOscillator,
        Self::RelativeStrengthIndex,
        Self::Variance,
        Self::StandardDeviation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SimpleMovingAverage => "simpleMovingAverage",
            Self::ExponentialMovingAverage => "exponentialMovingAverage",
            Self::DoubleExponentialMovingAverage => "doubleExponentialMovingAverage",
            Self::TripleExponentialMovingAverage => "tripleExponentialMovingAverage",
            Self::T2ExponentialMovingAverage => "t2ExponentialMovingAverage",
            Self::T3ExponentialMovingAverage => "t3ExponentialMovingAverage",
            Self::JurikMovingAverage => "jurikMovingAverage",
            Self::WeightedMovingAverage => "weightedMovingAverage",
            Self::TriangularMovingAverage => "triangularMovingAverage",
            Self::KaufmanAdaptiveMovingAverage => "kaufmanAdaptiveMovingAverage",
            Self::Momentum => "momentum",
            Self::RateOfChange => "rateOfChange",
            Self::RateOfChangePercent => "rateOfChangePercent",
            Self::ChandeMomentumOscillator => "chandeMomentumOscillator",
            Self::RelativeStrengthIndex => "relativeStrengthIndex",
            Self::Variance => "variance",
            Self::StandardDeviation => "standardDeviation",
        }
    }

    /// Human-readable title used as the description prefix.
    pub fn title(self) -> &'static str {
        match self {
            Self::SimpleMovingAverage => "Simple moving average",
            Self::ExponentialMovingAverage => "Exponential moving average",
            Self::DoubleExponentialMovingAverage => "Double exponential moving average",
            Self::TripleExponentialMovingAverage => "Triple exponential moving average",
            Self::T2ExponentialMovingAverage => "T2 exponential moving average",
            Self::T3ExponentialMovingAverage => "T3 exponential moving average",
            Self::JurikMovingAverage => "Jurik moving average",
            Self::WeightedMovingAverage => "Weighted moving average",
            Self::TriangularMovingAverage => "Triangular moving average",
            Self::KaufmanAdaptiveMovingAverage => "Kaufman adaptive moving average",
            Self::Momentum => "Momentum",
            Self::RateOfChange => "Rate of Change",
            Self::RateOfChangePercent => "Rate of Change percent",
            Self::ChandeMomentumOscillator => "Chande Momentum Oscillator",
            Self::RelativeStrengthIndex => "Relative Strength Index",
            Self::Variance => "Variance",
            Self::StandardDeviation => "Standard deviation",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| IndicatorError::UnknownIdentifier {
                kind: "indicator kind",
                value: s.to_string(),
            })
    }
}

/// Shape of an indicator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputType {
    Scalar,
    Band,
    Heatmap,
}

/// Describes one output of an indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputMetadata {
    /// Output identifier within its indicator.
    pub kind: u32,
    #[serde(rename = "type")]
    pub output_type: OutputType,
    pub name: String,
    pub description: String,
}

/// Describes an indicator and all of its outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "type")]
    pub kind: IndicatorKind,
    pub outputs: Vec<OutputMetadata>,
}

impl Metadata {
    /// Output identifier of the single value every streaming filter emits.
    pub const VALUE: u32 = 0;

    /// Metadata for an indicator with a single scalar output.
    pub fn scalar(kind: IndicatorKind, name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("{} {}", kind.title(), name);
        Self::described(kind, name, description)
    }

    /// Single scalar output with a description other than the kind title.
    pub fn described(kind: IndicatorKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            outputs: vec![OutputMetadata {
                kind: Self::VALUE,
                output_type: OutputType::Scalar,
                name: name.into(),
                description: description.into(),
            }],
        }
    }

    /// Append another scalar output, described under the kind title.
    pub fn with_scalar(mut self, kind: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        let description = format!("{} {}", self.kind.title(), name);
        self.outputs.push(OutputMetadata {
            kind,
            output_type: OutputType::Scalar,
            name,
            description,
        });
        self
    }

    /// Name of the first output, if any.
    pub fn name(&self) -> &str {
        self.outputs.first().map(|o| o.name.as_str()).unwrap_or_default()
    }

    /// Description of the first output, if any.
    pub fn description(&self) -> &str {
        self.outputs
            .first()
            .map(|o| o.description.as_str())
            .unwrap_or_default()
    }
}
