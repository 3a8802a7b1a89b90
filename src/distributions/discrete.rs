//! Discrete families.
//!
//! Probability masses use multiplicative binomial coefficients rather than
//! factorial ratios. CDFs are evaluated through the incomplete beta/gamma
//! identities, so they stay O(1) in the support size.

use super::{
    as_count, require_positive, require_probability, require_trials, DistributionFamily,
    MAX_POISSON_MEAN,
};
use crate::error::{Error, Result};
use crate::special;

// ============================================================================
// Binomial Distribution
// ============================================================================

/// Number of successes in `n` independent trials with success probability `p`.
///
/// P(X = k) = C(n, k) p^k (1−p)^{n−k}
///
/// # Examples
/// ```
/// use frontier_dist::distributions::Binomial;
/// let b = Binomial::new(10, 0.7).unwrap();
/// assert!((b.pmf(7) - 0.2668).abs() < 5e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    pub fn new(n: u64, p: f64) -> Result<Self> {
        let n = require_trials(DistributionFamily::Binomial, "n", n)?;
        let p = require_probability(DistributionFamily::Binomial, "p", p, true)?;
        Ok(Self { n, p })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.n as f64, self.p]
    }

    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    pub fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    /// P(X = k).
    pub fn pmf(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }
        let q = 1.0 - self.p;
        let failures = self.n - k;
        let c = special::choose(self.n, k);
        if c.is_finite() {
            c * self.p.powf(k as f64) * q.powf(failures as f64)
        } else {
            (special::ln_choose(self.n, k) + k as f64 * self.p.ln() + failures as f64 * q.ln())
                .exp()
        }
    }

    /// Mass at integer `x`, zero elsewhere.
    pub fn pdf(&self, x: f64) -> f64 {
        as_count(x).map_or(0.0, |k| self.pmf(k))
    }

    /// P(X ≤ x) = I_{1−p}(n−k, k+1) with k = ⌊x⌋.
    pub fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x >= self.n as f64 {
            return 1.0;
        }
        let k = x.floor();
        special::regularized_incomplete_beta(1.0 - self.p, self.n as f64 - k, k + 1.0)
    }
}

// ============================================================================
// Poisson Distribution
// ============================================================================

/// Poisson distribution with mean λ.
///
/// P(X = k) = e^{−λ} λ^k / k!
#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    pub fn new(lambda: f64) -> Result<Self> {
        let family = DistributionFamily::Poisson;
        let lambda = require_positive(family, "lambda", lambda)?;
        if lambda > MAX_POISSON_MEAN {
            return Err(Error::InvalidParameter {
                family,
                name: "lambda",
                value: lambda,
                reason: "must not exceed 1000000",
            });
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.lambda]
    }

    pub fn mean(&self) -> f64 {
        self.lambda
    }

    pub fn variance(&self) -> f64 {
        self.lambda
    }

    /// P(X = k), evaluated in log space so large λ does not underflow e^{−λ}.
    pub fn pmf(&self, k: u64) -> f64 {
        (-self.lambda + k as f64 * self.lambda.ln() - special::ln_factorial(k)).exp()
    }

    pub fn pdf(&self, x: f64) -> f64 {
        as_count(x).map_or(0.0, |k| self.pmf(k))
    }

    /// P(X ≤ x) = Q(⌊x⌋+1, λ).
    pub fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        special::regularized_upper_gamma(x.floor() + 1.0, self.lambda)
    }
}

// ============================================================================
// Negative Binomial Distribution
// ============================================================================

/// Trial number of the `r`-th success in independent Bernoulli(`p`) trials.
///
/// P(X = x) = C(x−1, r−1) p^r (1−p)^{x−r} for x = r, r+1, …
///
/// `r = 1` is the geometric distribution on {1, 2, …}.
#[derive(Debug, Clone, PartialEq)]
pub struct NegativeBinomial {
    r: u64,
    p: f64,
}

impl NegativeBinomial {
    pub fn new(r: u64, p: f64) -> Result<Self> {
        let family = DistributionFamily::NegativeBinomial;
        if r == 0 {
            return Err(Error::InvalidParameter {
                family,
                name: "r",
                value: 0.0,
                reason: "must be a positive integer",
            });
        }
        let r = require_trials(family, "r", r)?;
        let p = require_probability(family, "p", p, false)?;
        Ok(Self { r, p })
    }

    /// Geometric distribution: trials until the first success.
    pub fn geometric(p: f64) -> Result<Self> {
        Self::new(1, p)
    }

    pub fn r(&self) -> u64 {
        self.r
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.r as f64, self.p]
    }

    pub fn mean(&self) -> f64 {
        self.r as f64 / self.p
    }

    pub fn variance(&self) -> f64 {
        self.r as f64 * (1.0 - self.p) / (self.p * self.p)
    }

    pub fn pmf(&self, x: u64) -> f64 {
        if x < self.r {
            return 0.0;
        }
        if self.p == 1.0 {
            return if x == self.r { 1.0 } else { 0.0 };
        }
        let q = 1.0 - self.p;
        let failures = x - self.r;
        let c = special::choose(x - 1, self.r - 1);
        if c.is_finite() {
            c * self.p.powf(self.r as f64) * q.powf(failures as f64)
        } else {
            (special::ln_choose(x - 1, self.r - 1)
                + self.r as f64 * self.p.ln()
                + failures as f64 * q.ln())
            .exp()
        }
    }

    pub fn pdf(&self, x: f64) -> f64 {
        as_count(x).map_or(0.0, |k| self.pmf(k))
    }

    /// P(X ≤ x): at least `r` successes in the first ⌊x⌋ trials,
    /// I_p(r, ⌊x⌋ − r + 1).
    pub fn cdf(&self, x: f64) -> f64 {
        let r = self.r as f64;
        if x < r {
            return 0.0;
        }
        let m = x.floor();
        special::regularized_incomplete_beta(self.p, r, m - r + 1.0)
    }
}
