//! Observed statistics of drawn samples.
//!
//! Batch helpers work on a slice; [`SampleAccumulator`] keeps the same
//! figures up to date one draw at a time so a running session never
//! rescans its history.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier-compensated summation for O(ε) error independent of n.
//! - **Variance**: Welford's online algorithm, sample (n − 1) denominator.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

use serde::{Deserialize, Serialize};

/// Arithmetic mean with compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use frontier_dist::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Sample variance (denominator `n − 1`).
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use frontier_dist::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    SampleAccumulator::from_samples(data).variance()
}

/// Sample standard deviation, `sqrt(variance(data))`.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Smallest value, or `None` if `data` is empty or contains NaN.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Largest value, or `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Neumaier's improved Kahan summation.
///
/// Handles the case where the addend is larger in magnitude than the
/// running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik
/// und Mechanik* 54(1), pp. 39–51.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Running summary
// ---------------------------------------------------------------------------

/// Snapshot of the observed sample statistics.
///
/// `variance` and `std_dev` are `None` until two samples exist; every
/// other field is `None` only for an empty sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleSummary {
    pub count: u64,
    pub mean: Option<f64>,
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Streaming count, mean, variance and range.
///
/// # Examples
/// ```
/// use frontier_dist::stats::SampleAccumulator;
/// let mut acc = SampleAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.push(x);
/// }
/// let s = acc.summary();
/// assert_eq!(s.count, 8);
/// assert!((s.mean.unwrap() - 5.0).abs() < 1e-15);
/// assert_eq!((s.min, s.max), (Some(2.0), Some(9.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleAccumulator {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl SampleAccumulator {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn from_samples(data: &[f64]) -> Self {
        let mut acc = Self::new();
        data.iter().for_each(|&x| acc.push(x));
        acc
    }

    /// Feeds one sample.
    ///
    /// The first sample only seeds the mean, which avoids overflowing
    /// `delta²` for values near `f64::MAX`.
    pub fn push(&mut self, value: f64) {
        let n1 = self.count;
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);

        if n1 == 0 {
            self.mean = value;
            return;
        }

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance, `None` below two samples.
    pub fn variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }

    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    pub fn summary(&self) -> SampleSummary {
        let nonempty = self.count > 0;
        SampleSummary {
            count: self.count,
            mean: self.mean(),
            variance: self.variance(),
            std_dev: self.std_dev(),
            min: nonempty.then_some(self.min),
            max: nonempty.then_some(self.max),
        }
    }
}

impl Default for SampleAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
