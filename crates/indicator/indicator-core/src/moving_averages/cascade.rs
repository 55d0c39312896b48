//! N-stage exponential cascade.
//!
//! A chain of N first-order exponential smoothers, each one smoothing the
//! output of the one before it, whose stage values are recombined into a
//! single output. EMA, DEMA, TEMA, T2 and T3 are all instances.
//!
//! Stage `k` (1-based) finishes seeding on sample `k * length - (k - 1)`,
//! so the whole cascade primes on sample `N * length - (N - 1)` whichever
//! [`Seeding`] is used. Once primed, each update walks the stages in order
//! and every stage reads the value its upstream stage has just produced.

use indicator_api::{alpha_to_length, length_to_alpha, Seeding, MIN_ALPHA};
use indicator_spi::Result;
use tracing::trace;

use crate::params::{check_period, check_unit};

/// Length and smoothing factor of a cascade, resolved from either form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Smoothing {
    pub length: usize,
    pub alpha: f64,
    /// Whether the factor was given directly rather than derived from a length.
    pub explicit: bool,
}

impl Smoothing {
    pub fn resolve(period: usize, alpha: Option<f64>, min_period: usize) -> Result<Self> {
        match alpha {
            None => {
                check_period(period, min_period)?;
                Ok(Self {
                    length: period,
                    alpha: length_to_alpha(period),
                    explicit: false,
                })
            }
            Some(alpha) => {
                check_unit("alpha", "smoothing factor", alpha)?;
                let alpha = if alpha < MIN_ALPHA { MIN_ALPHA } else { alpha };
                Ok(Self {
                    length: alpha_to_length(alpha),
                    alpha,
                    explicit: true,
                })
            }
        }
    }
}

/// Linear recombination of the stage values into the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Recombination {
    /// One stage, output as is.
    Single,
    /// `2 e1 - e2`
    Double,
    /// `3 (e1 - e2) + e3`
    Triple,
    /// Generalized DEMA `(1 + v) x - v x^2` composed twice, over four stages.
    T2 { c1: f64, c2: f64, c3: f64 },
    /// Generalized DEMA composed three times, over six stages.
    T3 { c1: f64, c2: f64, c3: f64, c4: f64 },
}

impl Recombination {
    pub fn t2(volume_factor: f64) -> Self {
        let v = volume_factor;
        let v1 = v + 1.0;
        Self::T2 {
            c1: v * v,
            c2: -2.0 * v * v1,
            c3: v1 * v1,
        }
    }

    pub fn t3(volume_factor: f64) -> Self {
        let v = volume_factor;
        let vv = v * v;
        let c1 = -vv * v;
        let c2 = 3.0 * (vv - c1);
        let c3 = -6.0 * vv - 3.0 * (v - c1);
        let c4 = 1.0 + 3.0 * v - c1 + 3.0 * vv;
        Self::T3 { c1, c2, c3, c4 }
    }

    pub fn stages(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
            Self::T2 { .. } => 4,
            Self::T3 { .. } => 6,
        }
    }

    fn combine(&self, e: &[f64]) -> f64 {
        match *self {
            Self::Single => e[0],
            Self::Double => 2.0 * e[0] - e[1],
            Self::Triple => 3.0 * (e[0] - e[1]) + e[2],
            Self::T2 { c1, c2, c3 } => c1 * e[3] + c2 * e[2] + c3 * e[1],
            Self::T3 { c1, c2, c3, c4 } => c1 * e[5] + c2 * e[4] + c3 * e[3] + c4 * e[2],
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Cascade {
    stages: Vec<f64>,
    smoothing: Smoothing,
    seeding: Seeding,
    recombination: Recombination,
    sum: f64,
    count: usize,
    primed: bool,
}

impl Cascade {
    pub fn new(smoothing: Smoothing, seeding: Seeding, recombination: Recombination) -> Self {
        Self {
            stages: vec![0.0; recombination.stages()],
            smoothing,
            seeding,
            recombination,
            sum: 0.0,
            count: 0,
            primed: false,
        }
    }

    pub fn update(&mut self, sample: f64) -> f64 {
        if sample.is_nan() {
            return sample;
        }

        let n = self.stages.len();
        if self.primed {
            self.recurse(sample, n);
            return self.recombination.combine(&self.stages);
        }

        self.count += 1;
        let stage = (0..n)
            .find(|&k| self.count <= self.seed_end(k))
            .unwrap_or(n - 1);

        match self.seeding {
            Seeding::Average => {
                if stage == 0 {
                    self.sum += sample;
                } else {
                    self.recurse(sample, stage);
                    self.sum += self.stages[stage - 1];
                }
                if self.count == self.seed_end(stage) {
                    self.stages[stage] = self.sum / self.smoothing.length as f64;
                    self.sum = self.stages[stage];
                    self.seed_downstream(stage, false);
                }
            }
            Seeding::FirstSample => {
                if self.count == 1 {
                    self.stages[0] = sample;
                } else {
                    self.recurse(sample, stage + 1);
                }
                if self.count == self.seed_end(stage) {
                    self.seed_downstream(stage, true);
                }
            }
        }

        if self.count == self.seed_end(n - 1) {
            self.primed = true;
            trace!(stages = n, length = self.smoothing.length, "primed");
            return self.recombination.combine(&self.stages);
        }
        f64::NAN
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    /// Number of samples consumed before the first output.
    #[cfg(test)]
    pub fn priming_length(&self) -> usize {
        self.seed_end(self.stages.len() - 1)
    }

    /// 1-based sample on which 0-based stage `k` finishes seeding.
    fn seed_end(&self, k: usize) -> usize {
        (k + 1) * self.smoothing.length - k
    }

    /// Advance stages `0..upto` by one step, each reading its freshly updated upstream.
    fn recurse(&mut self, sample: f64, upto: usize) {
        let a = self.smoothing.alpha;
        self.stages[0] += (sample - self.stages[0]) * a;
        for i in 1..upto {
            self.stages[i] += (self.stages[i - 1] - self.stages[i]) * a;
        }
    }

    /// Called once `stage` has its seed. Stages whose seeding window is empty
    /// (length 1) copy their upstream value; in first-sample mode the next
    /// stage with a real window starts from it as well.
    fn seed_downstream(&mut self, stage: usize, start_next: bool) {
        let n = self.stages.len();
        let mut k = stage;
        while k + 1 < n && self.seed_end(k + 1) == self.count {
            self.stages[k + 1] = self.stages[k];
            k += 1;
        }
        if start_next && k + 1 < n {
            self.stages[k + 1] = self.stages[k];
        }
    }
}
