//! Parameter range checks shared by indicator constructors.

use indicator_spi::{IndicatorError, Result};

/// Longest window any indicator will allocate.
pub(crate) const MAX_PERIOD: usize = 1 << 20;

/// Reject periods shorter than `min` or longer than [`MAX_PERIOD`].
pub(crate) fn check_period(period: usize, min: usize) -> Result<()> {
    check_length("period", period, min)
}

/// Range check for any length parameter, reported under `name`.
pub(crate) fn check_length(name: &str, length: usize, min: usize) -> Result<()> {
    if length > MAX_PERIOD {
        return Err(IndicatorError::invalid(
            name,
            format!("length should not exceed {}", MAX_PERIOD),
        ));
    }
    if length >= min {
        return Ok(());
    }
    let reason = if min <= 1 {
        "length should be positive".to_string()
    } else {
        format!("length should be greater than {}", min - 1)
    };
    Err(IndicatorError::invalid(name, reason))
}

/// Reject values outside [0, 1], including NaN.
pub(crate) fn check_unit(name: &str, what: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(IndicatorError::invalid(name, format!("{} should be in range [0, 1]", what)))
    }
}

/// Reject phases outside [-100, 100].
pub(crate) fn check_phase(phase: i32) -> Result<()> {
    if (-100..=100).contains(&phase) {
        Ok(())
    } else {
        Err(IndicatorError::invalid("phase", "phase should be in range [-100, 100]"))
    }
}
