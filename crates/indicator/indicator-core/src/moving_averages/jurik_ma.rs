//! Jurik Moving Average (JMA) implementation.
//!
//! An adaptive smoother with low lag characteristics. Volatility is measured
//! as the distance of each sample from a pair of decaying price paths; the
//! recent volatility is ranked against the middle band of a sorted history,
//! and that rank steers how fast the paths decay and how strongly the final
//! two-pole output stage follows the input.

use indicator_api::JurikMAConfig;
use indicator_spi::{Components, IndicatorKind, Metadata, Result, StreamingIndicator};
use tracing::{debug, trace};

use crate::params::{check_period, check_phase};

const HISTORY: usize = 128;
const RECENT: usize = 11;
const WARMUP: usize = 62;

/// Samples buffered before the first output.
const PRIMING: usize = 30;

/// Jurik Moving Average.
///
/// # Parameters
/// - `period`: The smoothing period (similar to EMA period)
/// - `phase`: Phase adjustment (-100 to +100), affects the trade-off between
///   smoothness and lag. Negative values increase smoothness, positive values
///   reduce lag.
///
/// Returns NaN for the first 30 samples. On the 31st the buffered samples
/// are replayed through the volatility tracker, and outputs follow from then on.
#[derive(Debug, Clone)]
pub struct JurikMA {
    period: usize,
    phase: i32,

    /// Sorted volatility history; outer slots hold sentinels until filled.
    sorted: [f64; HISTORY],
    /// Volatility history in arrival order, written backwards.
    history: [f64; HISTORY],
    /// Last ten raw deviations, written backwards.
    recent: [f64; RECENT],
    /// Raw samples seen during warm-up, 1-based.
    warmup: [f64; WARMUP],

    top: usize,
    bottom: usize,
    band_top: usize,
    band_bottom: usize,
    history_cursor: usize,
    recent_cursor: usize,
    inserted: usize,
    first_pass: bool,
    buffered: usize,
    passes: usize,

    recent_sum: f64,
    band_sum: f64,
    phase_ratio: f64,
    upper_path: f64,
    lower_path: f64,
    output_decay: f64,
    volatility_rank: f64,
    path_length: f64,
    rank_power: f64,
    path_decay: f64,
    rank_limit: f64,

    velocity: f64,
    value: f64,
    smooth: f64,
    detrend: f64,

    primed: bool,
    name: String,
    components: Components,
}

impl JurikMA {
    /// Create a new JurikMA from configuration.
    ///
    /// Fails when `period` is zero or `phase` is outside [-100, 100].
    pub fn new(config: &JurikMAConfig) -> Result<Self> {
        check_period(config.period, 1)?;
        check_phase(config.phase)?;

        let mut span = if config.period > 1 {
            (config.period - 1) as f64 / 2.0
        } else {
            1.0e-10
        };
        let log_span = span.sqrt().ln();
        let rank_limit = (log_span / 2.0_f64.ln() + 2.0).max(0.0);
        let rank_power = (rank_limit - 2.0).max(0.5);
        let path_length = span.sqrt() * rank_limit;
        let path_decay = path_length / (path_length + 1.0);
        span *= 0.9;
        let output_decay = span / (span + 2.0);

        let mut sorted = [0.0; HISTORY];
        sorted[..HISTORY / 2].fill(-1_000_000.0);
        sorted[HISTORY / 2..].fill(1_000_000.0);

        let name = format!("jma({}, {})", config.period, config.phase);
        debug!(indicator = %name, "created");

        Ok(Self {
            period: config.period,
            phase: config.phase,
            sorted,
            history: [0.0; HISTORY],
            recent: [0.0; RECENT],
            warmup: [0.0; WARMUP],
            top: 63,
            bottom: 64,
            band_top: 0,
            band_bottom: 0,
            history_cursor: 0,
            recent_cursor: 0,
            inserted: 0,
            first_pass: true,
            buffered: 0,
            passes: 0,
            recent_sum: 0.0,
            band_sum: 0.0,
            phase_ratio: config.phase as f64 / 100.0 + 1.5,
            upper_path: 0.0,
            lower_path: 0.0,
            output_decay,
            volatility_rank: 0.0,
            path_length,
            rank_power,
            path_decay,
            rank_limit,
            velocity: 0.0,
            value: 0.0,
            smooth: 0.0,
            detrend: 0.0,
            primed: false,
            name,
            components: config.components,
        })
    }

    /// Create JurikMA with default phase (0).
    pub fn with_period(period: usize) -> Result<Self> {
        Self::new(&JurikMAConfig::new(period, 0))
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn phase(&self) -> i32 {
        self.phase
    }

    /// One step of the volatility tracker and path decay.
    fn pass(&mut self, x: f64, sample: f64) {
        let up = x - self.upper_path;
        let down = x - self.lower_path;
        let deviation = if up.abs() > down.abs() { up.abs() } else { down.abs() };
        let band_average = self.rank(deviation);

        self.passes = (self.passes + 1).min(PRIMING + 1);
        if self.passes <= PRIMING {
            self.upper_path = if up > 0.0 { x } else { x - up * self.path_decay };
            self.lower_path = if down < 0.0 { x } else { x - down * self.path_decay };
            self.value = sample;
            if self.passes == PRIMING {
                self.seed_velocity(sample);
            }
            return;
        }

        let ratio = (deviation / band_average).powf(self.rank_power);
        let capped = if self.rank_limit >= ratio { ratio } else { self.rank_limit };
        self.volatility_rank = if capped < 1.0 { 1.0 } else { capped };

        let decay = self.path_decay.powf(self.volatility_rank.sqrt());
        self.upper_path = if up > 0.0 { x } else { x - up * decay };
        self.lower_path = if down < 0.0 { x } else { x - down * decay };
    }

    /// Record a deviation and return the mean of the middle band of the
    /// sorted volatility history.
    fn rank(&mut self, deviation: f64) -> f64 {
        let deviation = deviation + 1.0e-10;

        self.history_cursor = if self.history_cursor <= 1 { HISTORY - 1 } else { self.history_cursor - 1 };
        self.recent_cursor = if self.recent_cursor <= 1 { RECENT - 1 } else { self.recent_cursor - 1 };
        if self.inserted < HISTORY {
            self.inserted += 1;
        }

        self.recent_sum += deviation - self.recent[self.recent_cursor];
        self.recent[self.recent_cursor] = deviation;
        let average = if self.inserted > RECENT - 1 {
            self.recent_sum / (RECENT - 1) as f64
        } else {
            self.recent_sum / self.inserted as f64
        };

        let full = self.inserted > HISTORY - 1;
        let from = if full {
            let retired = self.history[self.history_cursor];
            self.history[self.history_cursor] = average;
            self.locate(retired)
        } else {
            self.history[self.history_cursor] = average;
            let from = if self.top + self.bottom > HISTORY - 1 {
                self.bottom -= 1;
                self.bottom
            } else {
                self.top += 1;
                self.top
            };
            self.band_top = self.top.min(96);
            self.band_bottom = self.bottom.max(32);
            from
        };

        let to = self.insertion_point(average);
        if full {
            self.adjust_band_sum(from, to, average);
        }

        if from <= to {
            if from == to {
                self.sorted[to] = average;
            } else {
                self.sorted.copy_within(from + 1..to, from);
                self.sorted[to - 1] = average;
            }
        } else {
            self.sorted.copy_within(to..from, to + 1);
            self.sorted[to] = average;
        }

        if !full {
            self.band_sum = self.sorted[self.band_bottom..=self.band_top].iter().sum();
        }
        self.band_sum / (self.band_top - self.band_bottom + 1) as f64
    }

    /// Slot of the value leaving the history.
    fn locate(&self, retired: f64) -> usize {
        let mut step = HISTORY / 2;
        let mut at = step;
        while step > 1 {
            if self.sorted[at] < retired {
                step /= 2;
                at += step;
            } else if self.sorted[at] <= retired {
                step = 1;
            } else {
                step /= 2;
                at -= step;
            }
        }
        at
    }

    /// Slot where `value` belongs; `HISTORY` past the largest entry.
    fn insertion_point(&self, value: f64) -> usize {
        let mut step = HISTORY / 2;
        let mut at = step;
        while step > 1 {
            if self.sorted[at] >= value {
                if self.sorted[at - 1] <= value {
                    step = 1;
                } else {
                    step /= 2;
                    at -= step;
                }
            } else {
                step /= 2;
                at += step;
            }
            if at == HISTORY - 1 && value > self.sorted[HISTORY - 1] {
                at = HISTORY;
            }
        }
        at
    }

    /// Keep the band sum current as one entry moves from `from` to `to`.
    fn adjust_band_sum(&mut self, from: usize, to: usize, value: f64) {
        let top = self.band_top;
        let bottom = self.band_bottom;

        if from >= to {
            if top + 1 > to && bottom - 1 < to {
                self.band_sum += value;
            } else if bottom > to && bottom - 1 < from {
                self.band_sum += self.sorted[bottom - 1];
            }
        } else if bottom >= to {
            if top + 1 < to && top + 1 > from {
                self.band_sum += self.sorted[top + 1];
            }
        } else if top + 2 > to {
            self.band_sum += value;
        } else if top + 1 < to && top + 1 > from {
            self.band_sum += self.sorted[top + 1];
        }

        if from > to {
            if bottom - 1 < from && top + 1 > from {
                self.band_sum -= self.sorted[from];
            } else if top < from && top + 1 > to {
                self.band_sum -= self.sorted[top];
            }
        } else if top + 1 > from && bottom - 1 < from {
            self.band_sum -= self.sorted[from];
        } else if bottom > from && bottom < to {
            self.band_sum -= self.sorted[bottom];
        }
    }

    /// Initial slope, interpolated between the two whole lags around the path length.
    fn seed_velocity(&mut self, sample: f64) {
        self.smooth = sample;

        let ceil = self.path_length.ceil();
        let floor = self.path_length.floor();
        let upper = if ceil >= 1.0 { ceil as usize } else { 1 };
        let lower = if floor >= 1.0 { floor as usize } else { 1 };
        let fraction = if upper != lower {
            (self.path_length - lower as f64) / (upper - lower) as f64
        } else {
            1.0
        };

        let back_lower = lower.min(PRIMING - 1);
        let back_upper = upper.min(PRIMING - 1);
        self.velocity = (sample - self.warmup[self.buffered - back_lower]) * (1.0 - fraction)
            / lower as f64
            + (sample - self.warmup[self.buffered - back_upper]) * fraction / upper as f64;
    }

    fn smooth_output(&mut self, sample: f64) {
        let decay = self.output_decay.powf(self.volatility_rank);
        self.smooth = (1.0 - decay) * sample + decay * self.smooth;
        self.detrend = (sample - self.smooth) * (1.0 - self.output_decay)
            + self.output_decay * self.detrend;
        let target = self.phase_ratio * self.detrend + self.smooth;

        let squared = decay * decay;
        let gain = decay * -2.0 + squared + 1.0;
        self.velocity = (target - self.value) * gain + squared * self.velocity;
        self.value += self.velocity;
    }
}

impl StreamingIndicator for JurikMA {
    fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        if self.buffered < WARMUP - 1 {
            self.buffered += 1;
            self.warmup[self.buffered] = sample;
        }
        if self.buffered <= PRIMING {
            return f64::NAN;
        }
        if !self.primed {
            self.primed = true;
            trace!(indicator = %self.name, "primed");
        }

        let mut replay = 0;
        if self.first_pass {
            self.first_pass = false;
            let varied = self.warmup[1..=PRIMING].windows(2).any(|w| w[1] != w[0]);
            if varied {
                replay = PRIMING - 1;
                self.lower_path = self.warmup[1];
            } else {
                self.lower_path = sample;
            }
            self.upper_path = self.lower_path;
        }

        for i in (0..=replay).rev() {
            let x = if i == 0 { sample } else { self.warmup[PRIMING + 1 - i] };
            self.pass(x, sample);
        }

        if self.passes > PRIMING {
            self.smooth_output(sample);
        }
        self.value
    }

    fn is_primed(&self) -> bool {
        self.primed
    }

    fn metadata(&self) -> Metadata {
        Metadata::scalar(IndicatorKind::JurikMovingAverage, &self.name)
    }

    fn components(&self) -> Components {
        self.components
    }
}
