//! Probability distributions.
//!
//! Eleven families behind one parameter-vector interface, so a caller can
//! walk [`DistributionFamily::ALL`], render a slider per entry of
//! [`DistributionFamily::param_names`], and evaluate any of them through
//! [`Distribution`] without per-family branching.
//!
//! # Supported Distributions
//!
//! | Family | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Beta`] | α, β | α/(α+β) | αβ/((α+β)²(α+β+1)) |
//! | [`Weibull`] | k, λ | λΓ(1+1/k) | λ²(Γ(1+2/k) − Γ(1+1/k)²) |
//! | [`Pareto`] | α, θ | θ/(α−1), ∞ if α ≤ 1 | αθ²/((α−1)²(α−2)), ∞ if α ≤ 2 |
//! | [`Exponential`] | θ (mean) | θ | θ² |
//! | [`Gamma`] | α, θ (scale) | αθ | αθ² |
//! | [`ChiSquare`] | r | r | 2r |
//! | [`Normal`] | μ, σ | μ | σ² |
//! | [`Binomial`] | n, p | np | np(1−p) |
//! | [`Poisson`] | λ | λ | λ |
//! | [`NegativeBinomial`] | r, p | r/p | r(1−p)/p² |
//! | [`Uniform`] | a, b | (a+b)/2 | (b−a)²/12 |
//!
//! # Edge Policy
//!
//! Outside the support `pdf` is `0` and `cdf` is `0` or `1`. Moments that
//! do not exist are `+∞`. Parameters are validated once, at construction;
//! out-of-domain values are rejected, never clamped.

mod continuous;
mod discrete;

pub use continuous::{Beta, ChiSquare, Exponential, Gamma, Normal, Pareto, Uniform, Weibull};
pub use discrete::{Binomial, NegativeBinomial, Poisson};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of standard deviations above the mean covered by the display
/// window of an unbounded family.
pub const DEFAULT_DISPLAY_SIGMAS: f64 = 4.0;

/// Largest trial count accepted for Binomial `n` and Negative Binomial `r`.
///
/// Both samplers spend one uniform per trial.
pub const MAX_TRIALS: u64 = 1_000_000;

/// Largest Poisson mean accepted. Knuth's method costs O(λ) per draw.
pub const MAX_POISSON_MEAN: f64 = 1e6;

/// Probability mass every unbounded display window must cover, so the
/// density integrates to one over it within 1e-3.
pub const DISPLAY_COVERAGE: f64 = 0.9995;

/// Doublings allowed while bracketing a quantile without a closed form.
const MAX_BRACKET_DOUBLINGS: usize = 1100;

/// Bisection steps after bracketing.
const QUANTILE_BISECTIONS: usize = 100;

/// Tag selecting a distribution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionFamily {
    Beta,
    Weibull,
    Pareto,
    Exponential,
    Gamma,
    ChiSquare,
    Normal,
    Binomial,
    Poisson,
    NegativeBinomial,
    Uniform,
}

impl DistributionFamily {
    /// Every supported family, in menu order.
    pub const ALL: [DistributionFamily; 11] = [
        DistributionFamily::Beta,
        DistributionFamily::Weibull,
        DistributionFamily::Pareto,
        DistributionFamily::Exponential,
        DistributionFamily::Gamma,
        DistributionFamily::ChiSquare,
        DistributionFamily::Normal,
        DistributionFamily::Binomial,
        DistributionFamily::Poisson,
        DistributionFamily::NegativeBinomial,
        DistributionFamily::Uniform,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DistributionFamily::Beta => "Beta",
            DistributionFamily::Weibull => "Weibull",
            DistributionFamily::Pareto => "Pareto",
            DistributionFamily::Exponential => "Exponential",
            DistributionFamily::Gamma => "Gamma",
            DistributionFamily::ChiSquare => "Chi-Square",
            DistributionFamily::Normal => "Normal",
            DistributionFamily::Binomial => "Binomial",
            DistributionFamily::Poisson => "Poisson",
            DistributionFamily::NegativeBinomial => "Negative Binomial",
            DistributionFamily::Uniform => "Uniform",
        }
    }

    /// Parameter names, in the order [`Distribution::new`] expects them.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            DistributionFamily::Beta => &["alpha", "beta"],
            DistributionFamily::Weibull => &["k", "lambda"],
            DistributionFamily::Pareto => &["alpha", "theta"],
            DistributionFamily::Exponential => &["theta"],
            DistributionFamily::Gamma => &["alpha", "theta"],
            DistributionFamily::ChiSquare => &["r"],
            DistributionFamily::Normal => &["mu", "sigma"],
            DistributionFamily::Binomial => &["n", "p"],
            DistributionFamily::Poisson => &["lambda"],
            DistributionFamily::NegativeBinomial => &["r", "p"],
            DistributionFamily::Uniform => &["a", "b"],
        }
    }

    /// Starting slider positions; always inside the valid domain.
    pub fn default_params(self) -> &'static [f64] {
        match self {
            DistributionFamily::Beta => &[2.0, 5.0],
            DistributionFamily::Weibull => &[1.5, 1.0],
            DistributionFamily::Pareto => &[3.0, 1.0],
            DistributionFamily::Exponential => &[1.0],
            DistributionFamily::Gamma => &[2.0, 1.0],
            DistributionFamily::ChiSquare => &[4.0],
            DistributionFamily::Normal => &[0.0, 1.0],
            DistributionFamily::Binomial => &[10.0, 0.5],
            DistributionFamily::Poisson => &[3.0],
            DistributionFamily::NegativeBinomial => &[3.0, 0.5],
            DistributionFamily::Uniform => &[0.0, 1.0],
        }
    }

    pub fn param_count(self) -> usize {
        self.param_names().len()
    }

    /// True for the integer-valued families.
    pub fn is_discrete(self) -> bool {
        matches!(
            self,
            DistributionFamily::Binomial
                | DistributionFamily::Poisson
                | DistributionFamily::NegativeBinomial
        )
    }
}

impl std::fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display window `[min, max]` of a distribution.
///
/// For families unbounded above, `max` is a presentation heuristic
/// (mean + kσ), not the mathematical support. The CDF stays defined past it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    pub min: f64,
    pub max: f64,
}

impl Support {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Closed-interval membership.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

/// A validated distribution of any supported family.
///
/// # Examples
/// ```
/// use frontier_dist::distributions::{Distribution, DistributionFamily};
/// let d = Distribution::new(DistributionFamily::Gamma, &[3.0, 2.0]).unwrap();
/// assert!((d.mean() - 6.0).abs() < 1e-12);
/// assert!((d.variance() - 12.0).abs() < 1e-12);
/// assert!(Distribution::new(DistributionFamily::Gamma, &[-1.0, 2.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Beta(Beta),
    Weibull(Weibull),
    Pareto(Pareto),
    Exponential(Exponential),
    Gamma(Gamma),
    ChiSquare(ChiSquare),
    Normal(Normal),
    Binomial(Binomial),
    Poisson(Poisson),
    NegativeBinomial(NegativeBinomial),
    Uniform(Uniform),
}

macro_rules! dispatch {
    ($self:expr, $d:ident => $body:expr) => {
        match $self {
            Distribution::Beta($d) => $body,
            Distribution::Weibull($d) => $body,
            Distribution::Pareto($d) => $body,
            Distribution::Exponential($d) => $body,
            Distribution::Gamma($d) => $body,
            Distribution::ChiSquare($d) => $body,
            Distribution::Normal($d) => $body,
            Distribution::Binomial($d) => $body,
            Distribution::Poisson($d) => $body,
            Distribution::NegativeBinomial($d) => $body,
            Distribution::Uniform($d) => $body,
        }
    };
}

impl Distribution {
    /// Builds a distribution from a family tag and its parameter vector.
    ///
    /// # Errors
    /// [`Error::ParameterCount`] on wrong arity, [`Error::InvalidParameter`]
    /// when any value is outside the family's domain.
    pub fn new(family: DistributionFamily, params: &[f64]) -> Result<Self> {
        let expected = family.param_count();
        if params.len() != expected {
            return Err(Error::ParameterCount {
                family,
                expected,
                got: params.len(),
            });
        }
        let p = params;
        Ok(match family {
            DistributionFamily::Beta => Distribution::Beta(Beta::new(p[0], p[1])?),
            DistributionFamily::Weibull => Distribution::Weibull(Weibull::new(p[0], p[1])?),
            DistributionFamily::Pareto => Distribution::Pareto(Pareto::new(p[0], p[1])?),
            DistributionFamily::Exponential => {
                Distribution::Exponential(Exponential::new(p[0])?)
            }
            DistributionFamily::Gamma => Distribution::Gamma(Gamma::new(p[0], p[1])?),
            DistributionFamily::ChiSquare => Distribution::ChiSquare(ChiSquare::new(p[0])?),
            DistributionFamily::Normal => Distribution::Normal(Normal::new(p[0], p[1])?),
            DistributionFamily::Binomial => {
                let n = require_count(family, "n", p[0], 0)?;
                Distribution::Binomial(Binomial::new(n, p[1])?)
            }
            DistributionFamily::Poisson => Distribution::Poisson(Poisson::new(p[0])?),
            DistributionFamily::NegativeBinomial => {
                let r = require_count(family, "r", p[0], 1)?;
                Distribution::NegativeBinomial(NegativeBinomial::new(r, p[1])?)
            }
            DistributionFamily::Uniform => Distribution::Uniform(Uniform::new(p[0], p[1])?),
        })
    }

    /// The family's defaults, e.g. for a freshly selected simulator tab.
    pub fn with_defaults(family: DistributionFamily) -> Result<Self> {
        Self::new(family, family.default_params())
    }

    pub fn family(&self) -> DistributionFamily {
        match self {
            Distribution::Beta(_) => DistributionFamily::Beta,
            Distribution::Weibull(_) => DistributionFamily::Weibull,
            Distribution::Pareto(_) => DistributionFamily::Pareto,
            Distribution::Exponential(_) => DistributionFamily::Exponential,
            Distribution::Gamma(_) => DistributionFamily::Gamma,
            Distribution::ChiSquare(_) => DistributionFamily::ChiSquare,
            Distribution::Normal(_) => DistributionFamily::Normal,
            Distribution::Binomial(_) => DistributionFamily::Binomial,
            Distribution::Poisson(_) => DistributionFamily::Poisson,
            Distribution::NegativeBinomial(_) => DistributionFamily::NegativeBinomial,
            Distribution::Uniform(_) => DistributionFamily::Uniform,
        }
    }

    /// The parameter vector this distribution was built from.
    pub fn params(&self) -> Vec<f64> {
        dispatch!(self, d => d.params())
    }

    pub fn is_discrete(&self) -> bool {
        self.family().is_discrete()
    }

    /// Density for continuous families, probability mass for discrete ones
    /// (zero at non-integers).
    pub fn pdf(&self, x: f64) -> f64 {
        dispatch!(self, d => d.pdf(x))
    }

    /// P(X ≤ x).
    pub fn cdf(&self, x: f64) -> f64 {
        dispatch!(self, d => d.cdf(x))
    }

    /// P(a < X ≤ b); zero when `b ≤ a`.
    pub fn interval_probability(&self, a: f64, b: f64) -> f64 {
        if b <= a {
            return 0.0;
        }
        (self.cdf(b) - self.cdf(a)).max(0.0)
    }

    pub fn mean(&self) -> f64 {
        dispatch!(self, d => d.mean())
    }

    pub fn variance(&self) -> f64 {
        dispatch!(self, d => d.variance())
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Closed-form inverse CDF, where the family has one.
    ///
    /// Returns `None` for families without a closed form or for `p`
    /// outside `[0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        match self {
            Distribution::Uniform(d) => d.quantile(p),
            Distribution::Exponential(d) => d.quantile(p),
            Distribution::Weibull(d) => d.quantile(p),
            Distribution::Pareto(d) => d.quantile(p),
            _ => None,
        }
    }

    /// Display window using [`DEFAULT_DISPLAY_SIGMAS`].
    pub fn support(&self) -> Support {
        self.display_window(DEFAULT_DISPLAY_SIGMAS)
    }

    /// Smallest `x` with `F(x) ≥ p`.
    ///
    /// Uses the closed form where one exists, otherwise brackets by
    /// doubling from the origin and bisects on `cdf`. Discrete results are
    /// whole numbers.
    pub fn upper_quantile(&self, p: f64) -> f64 {
        if let Some(q) = self.quantile(p) {
            return q;
        }
        let mut lo = 0.0;
        let mut hi = (self.mean() + self.std_dev()).max(1.0);
        if !hi.is_finite() {
            hi = 1.0;
        }
        for _ in 0..MAX_BRACKET_DOUBLINGS {
            if self.cdf(hi) >= p || !(2.0 * hi).is_finite() {
                break;
            }
            lo = hi;
            hi *= 2.0;
        }
        for _ in 0..QUANTILE_BISECTIONS {
            let mid = 0.5 * (lo + hi);
            if self.cdf(mid) >= p {
                hi = mid;
            } else {
                lo = mid;
            }
        }
        // F is a step function: hi sits at or just above the jump.
        if self.is_discrete() {
            hi.floor()
        } else {
            hi
        }
    }

    /// Display window for plotting.
    ///
    /// Families unbounded above reach the larger of `sigmas` standard
    /// deviations above the mean and the [`DISPLAY_COVERAGE`] quantile;
    /// without a finite variance only the quantile is used. Discrete
    /// windows are widened to integer bounds and never collapse to a
    /// single point.
    pub fn display_window(&self, sigmas: f64) -> Support {
        let mean = self.mean();
        let sd = self.std_dev();
        let reach = |floor: f64| -> f64 {
            let coverage = self.upper_quantile(DISPLAY_COVERAGE);
            if mean.is_finite() && sd.is_finite() {
                floor.max(mean + sigmas * sd).max(coverage)
            } else {
                floor.max(coverage)
            }
        };
        match self {
            Distribution::Beta(_) => Support::new(0.0, 1.0),
            Distribution::Uniform(d) => Support::new(d.a(), d.b()),
            Distribution::Normal(d) => {
                Support::new(d.mu() - sigmas * d.sigma(), d.mu() + sigmas * d.sigma())
            }
            Distribution::Weibull(_)
            | Distribution::Pareto(_)
            | Distribution::Exponential(_)
            | Distribution::Gamma(_)
            | Distribution::ChiSquare(_) => Support::new(0.0, reach(0.0)),
            Distribution::Binomial(d) => Support::new(0.0, (d.n() as f64).max(1.0)),
            Distribution::Poisson(_) => Support::new(0.0, reach(1.0).ceil()),
            Distribution::NegativeBinomial(d) => {
                let min = d.r() as f64;
                Support::new(min, reach(min + 1.0).ceil())
            }
        }
    }
}

// ============================================================================
// Parameter validation
// ============================================================================

pub(crate) fn require_positive(
    family: DistributionFamily,
    name: &'static str,
    value: f64,
) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            family,
            name,
            value,
            reason: "must be finite and > 0",
        })
    }
}

pub(crate) fn require_finite(
    family: DistributionFamily,
    name: &'static str,
    value: f64,
) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            family,
            name,
            value,
            reason: "must be finite",
        })
    }
}

/// Accepts a probability in `[0, 1]`, or in `(0, 1]` when `allow_zero` is false.
pub(crate) fn require_probability(
    family: DistributionFamily,
    name: &'static str,
    value: f64,
    allow_zero: bool,
) -> Result<f64> {
    let ok = if allow_zero {
        (0.0..=1.0).contains(&value)
    } else {
        value > 0.0 && value <= 1.0
    };
    if ok {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            family,
            name,
            value,
            reason: if allow_zero {
                "must lie in [0, 1]"
            } else {
                "must lie in (0, 1]"
            },
        })
    }
}

/// Accepts an integer-valued `f64` in `[min, MAX_TRIALS]`.
pub(crate) fn require_count(
    family: DistributionFamily,
    name: &'static str,
    value: f64,
    min: u64,
) -> Result<u64> {
    match as_count(value) {
        Some(n) if n >= min => require_trials(family, name, n),
        _ => Err(Error::InvalidParameter {
            family,
            name,
            value,
            reason: if min == 0 {
                "must be a non-negative integer"
            } else {
                "must be a positive integer"
            },
        }),
    }
}

/// Rejects trial counts above [`MAX_TRIALS`].
pub(crate) fn require_trials(family: DistributionFamily, name: &'static str, n: u64) -> Result<u64> {
    if n <= MAX_TRIALS {
        Ok(n)
    } else {
        Err(Error::InvalidParameter {
            family,
            name,
            value: n as f64,
            reason: "must not exceed 1000000",
        })
    }
}

/// `Some(k)` when `x` is a finite, non-negative whole number.
pub(crate) fn as_count(x: f64) -> Option<u64> {
    if x.is_finite() && x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64 {
        Some(x as u64)
    } else {
        None
    }
}
