//! Continuous families.
//!
//! Uniform, Exponential, Weibull and Pareto are closed-form. Beta, Gamma
//! and Chi-Square delegate their CDFs to the regularized incomplete
//! functions in [`crate::special`].

use super::{require_finite, require_positive, DistributionFamily};
use crate::error::{Error, Result};
use crate::special;

// ============================================================================
// Uniform Distribution
// ============================================================================

/// Continuous uniform distribution on `[a, b]`.
///
/// - PDF: 1/(b−a) on `[a, b]`
/// - CDF: (x−a)/(b−a), clamped to `[0, 1]`
/// - Mean: (a+b)/2
/// - Variance: (b−a)²/12
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Uniform {
    /// # Errors
    /// Returns `Err` if `a >= b` or either bound is not finite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let family = DistributionFamily::Uniform;
        require_finite(family, "a", a)?;
        require_finite(family, "b", b)?;
        if a >= b {
            return Err(Error::InvalidParameter {
                family,
                name: "b",
                value: b,
                reason: "must exceed a",
            });
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.a, self.b]
    }

    pub fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    pub fn variance(&self) -> f64 {
        let range = self.b - self.a;
        range * range / 12.0
    }

    pub fn pdf(&self, x: f64) -> f64 {
        if x >= self.a && x <= self.b {
            1.0 / (self.b - self.a)
        } else {
            0.0
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }

    /// x = a + p·(b−a). `None` if `p ∉ [0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(self.a + p * (self.b - self.a))
    }
}

// ============================================================================
// Exponential Distribution
// ============================================================================

/// Exponential distribution parameterized by its mean θ (rate 1/θ).
///
/// - PDF: e^{−x/θ}/θ for x ≥ 0
/// - CDF: 1 − e^{−x/θ}
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    theta: f64,
}

impl Exponential {
    pub fn new(theta: f64) -> Result<Self> {
        let theta = require_positive(DistributionFamily::Exponential, "theta", theta)?;
        Ok(Self { theta })
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// λ = 1/θ.
    pub fn rate(&self) -> f64 {
        1.0 / self.theta
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.theta]
    }

    pub fn mean(&self) -> f64 {
        self.theta
    }

    pub fn variance(&self) -> f64 {
        self.theta * self.theta
    }

    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        (-x / self.theta).exp() / self.theta
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-x / self.theta).exp_m1()
    }

    /// x = −θ ln(1−p). `None` if `p ∉ [0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(-self.theta * (-p).ln_1p())
    }
}

// ============================================================================
// Weibull Distribution
// ============================================================================

/// Weibull distribution with shape `k` and scale `λ`.
///
/// - PDF: (k/λ)(x/λ)^{k−1} e^{−(x/λ)^k} for x ≥ 0
/// - CDF: 1 − e^{−(x/λ)^k}
/// - Mean: λΓ(1 + 1/k)
/// - Variance: λ²[Γ(1 + 2/k) − Γ(1 + 1/k)²]
///
/// With `k = 1` this is the exponential distribution with mean `λ`.
#[derive(Debug, Clone, PartialEq)]
pub struct Weibull {
    k: f64,
    lambda: f64,
}

impl Weibull {
    pub fn new(k: f64, lambda: f64) -> Result<Self> {
        let family = DistributionFamily::Weibull;
        let k = require_positive(family, "k", k)?;
        let lambda = require_positive(family, "lambda", lambda)?;
        Ok(Self { k, lambda })
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.k, self.lambda]
    }

    pub fn mean(&self) -> f64 {
        self.lambda * special::gamma(1.0 + 1.0 / self.k)
    }

    pub fn variance(&self) -> f64 {
        let g1 = special::gamma(1.0 + 1.0 / self.k);
        let g2 = special::gamma(1.0 + 2.0 / self.k);
        self.lambda * self.lambda * (g2 - g1 * g1)
    }

    /// At `x = 0` the density is `+∞` for `k < 1` and `1/λ` for `k = 1`.
    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let z = x / self.lambda;
        (self.k / self.lambda) * z.powf(self.k - 1.0) * (-z.powf(self.k)).exp()
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-(x / self.lambda).powf(self.k)).exp_m1()
    }

    /// x = λ(−ln(1−p))^{1/k}. `None` if `p ∉ [0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(self.lambda * (-(-p).ln_1p()).powf(1.0 / self.k))
    }
}

// ============================================================================
// Pareto Distribution
// ============================================================================

/// Two-parameter Pareto distribution (shifted to start at zero), the form
/// used in actuarial loss models.
///
/// - PDF: αθ^α / (x+θ)^{α+1} for x ≥ 0
/// - CDF: 1 − (θ/(x+θ))^α
/// - Mean: θ/(α−1), `+∞` when α ≤ 1
/// - Variance: αθ² / ((α−1)²(α−2)), `+∞` when α ≤ 2
#[derive(Debug, Clone, PartialEq)]
pub struct Pareto {
    alpha: f64,
    theta: f64,
}

impl Pareto {
    pub fn new(alpha: f64, theta: f64) -> Result<Self> {
        let family = DistributionFamily::Pareto;
        let alpha = require_positive(family, "alpha", alpha)?;
        let theta = require_positive(family, "theta", theta)?;
        Ok(Self { alpha, theta })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.theta]
    }

    pub fn mean(&self) -> f64 {
        if self.alpha <= 1.0 {
            return f64::INFINITY;
        }
        self.theta / (self.alpha - 1.0)
    }

    pub fn variance(&self) -> f64 {
        if self.alpha <= 2.0 {
            return f64::INFINITY;
        }
        let am1 = self.alpha - 1.0;
        self.alpha * self.theta * self.theta / (am1 * am1 * (self.alpha - 2.0))
    }

    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let ratio = self.theta / (x + self.theta);
        self.alpha / self.theta * ratio.powf(self.alpha + 1.0)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        1.0 - (self.theta / (x + self.theta)).powf(self.alpha)
    }

    /// x = θ((1−p)^{−1/α} − 1). `None` if `p ∉ [0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(self.theta * ((1.0 - p).powf(-1.0 / self.alpha) - 1.0))
    }
}

// ============================================================================
// Beta Distribution
// ============================================================================

/// Beta distribution on `[0, 1]`.
///
/// - PDF: x^{α−1}(1−x)^{β−1} / B(α, β)
/// - CDF: I_x(α, β)
#[derive(Debug, Clone, PartialEq)]
pub struct Beta {
    alpha: f64,
    beta: f64,
    ln_norm: f64,
}

impl Beta {
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        let family = DistributionFamily::Beta;
        let alpha = require_positive(family, "alpha", alpha)?;
        let beta = require_positive(family, "beta", beta)?;
        Ok(Self {
            alpha,
            beta,
            ln_norm: special::ln_beta(alpha, beta),
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.beta]
    }

    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    pub fn variance(&self) -> f64 {
        let ab = self.alpha + self.beta;
        self.alpha * self.beta / (ab * ab * (ab + 1.0))
    }

    /// Unbounded at an endpoint whose shape parameter is below 1.
    pub fn pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        x.powf(self.alpha - 1.0) * (1.0 - x).powf(self.beta - 1.0) * (-self.ln_norm).exp()
    }

    pub fn cdf(&self, x: f64) -> f64 {
        special::regularized_incomplete_beta(x, self.alpha, self.beta)
    }
}

// ============================================================================
// Gamma Distribution
// ============================================================================

/// Gamma distribution with shape α and scale θ.
///
/// - PDF: x^{α−1} e^{−x/θ} / (Γ(α) θ^α)
/// - CDF: P(α, x/θ)
#[derive(Debug, Clone, PartialEq)]
pub struct Gamma {
    alpha: f64,
    theta: f64,
}

impl Gamma {
    pub fn new(alpha: f64, theta: f64) -> Result<Self> {
        let family = DistributionFamily::Gamma;
        let alpha = require_positive(family, "alpha", alpha)?;
        let theta = require_positive(family, "theta", theta)?;
        Ok(Self { alpha, theta })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.alpha, self.theta]
    }

    pub fn mean(&self) -> f64 {
        self.alpha * self.theta
    }

    pub fn variance(&self) -> f64 {
        self.alpha * self.theta * self.theta
    }

    pub fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return match self.alpha.partial_cmp(&1.0) {
                Some(std::cmp::Ordering::Less) => f64::INFINITY,
                Some(std::cmp::Ordering::Equal) => 1.0 / self.theta,
                _ => 0.0,
            };
        }
        let ln_pdf = (self.alpha - 1.0) * x.ln()
            - x / self.theta
            - special::ln_gamma(self.alpha)
            - self.alpha * self.theta.ln();
        ln_pdf.exp()
    }

    pub fn cdf(&self, x: f64) -> f64 {
        special::regularized_lower_gamma(self.alpha, x / self.theta)
    }
}

// ============================================================================
// Chi-Square Distribution
// ============================================================================

/// Chi-square distribution with `r` degrees of freedom, i.e. Gamma(r/2, 2).
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquare {
    r: f64,
    inner: Gamma,
}

impl ChiSquare {
    pub fn new(r: f64) -> Result<Self> {
        let r = require_positive(DistributionFamily::ChiSquare, "r", r)?;
        Ok(Self {
            r,
            inner: Gamma {
                alpha: r / 2.0,
                theta: 2.0,
            },
        })
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    /// The equivalent Gamma(r/2, 2).
    pub fn as_gamma(&self) -> &Gamma {
        &self.inner
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.r]
    }

    pub fn mean(&self) -> f64 {
        self.r
    }

    pub fn variance(&self) -> f64 {
        2.0 * self.r
    }

    pub fn pdf(&self, x: f64) -> f64 {
        self.inner.pdf(x)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.inner.cdf(x)
    }
}

// ============================================================================
// Normal Distribution
// ============================================================================

/// Normal distribution N(μ, σ²).
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        let family = DistributionFamily::Normal;
        let mu = require_finite(family, "mu", mu)?;
        let sigma = require_positive(family, "sigma", sigma)?;
        Ok(Self { mu, sigma })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn params(&self) -> Vec<f64> {
        vec![self.mu, self.sigma]
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    pub fn pdf(&self, x: f64) -> f64 {
        special::standard_normal_pdf((x - self.mu) / self.sigma) / self.sigma
    }

    pub fn cdf(&self, x: f64) -> f64 {
        special::standard_normal_cdf((x - self.mu) / self.sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Uniform ---

    #[test]
    fn test_uniform_basic() {
        let u = Uniform::new(0.0, 10.0).unwrap();
        assert!((u.mean() - 5.0).abs() < 1e-15);
        assert!((u.variance() - 100.0 / 12.0).abs() < 1e-10);
        assert_eq!(u.cdf(-1.0), 0.0);
        assert_eq!(u.cdf(11.0), 1.0);
        assert!((u.pdf(2.5) - 0.1).abs() < 1e-15);
        assert_eq!(u.pdf(10.5), 0.0);
    }

    #[test]
    fn test_uniform_quantile() {
        let u = Uniform::new(2.0, 8.0).unwrap();
        assert_eq!(u.quantile(0.0), Some(2.0));
        assert_eq!(u.quantile(1.0), Some(8.0));
        assert_eq!(u.quantile(1.5), None);
    }

    // --- Exponential ---

    #[test]
    fn test_exponential_moments_and_cdf() {
        let e = Exponential::new(0.5).unwrap();
        assert_eq!(e.mean(), 0.5);
        assert!((e.variance() - 0.25).abs() < 1e-15);
        assert!((e.rate() - 2.0).abs() < 1e-15);
        assert!((e.cdf(1.0) - (1.0 - (-2.0_f64).exp())).abs() < 1e-15);
        assert_eq!(e.cdf(-3.0), 0.0);
        assert_eq!(e.pdf(-3.0), 0.0);
        assert!((e.pdf(0.0) - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_exponential_quantile_roundtrip() {
        let e = Exponential::new(3.0).unwrap();
        for &p in &[0.01, 0.25, 0.5, 0.9, 0.999] {
            let x = e.quantile(p).unwrap();
            assert!((e.cdf(x) - p).abs() < 1e-12);
        }
    }

    // --- Weibull ---

    #[test]
    fn test_weibull_k1_matches_exponential() {
        for &lambda in &[0.5, 1.0, 4.0] {
            let w = Weibull::new(1.0, lambda).unwrap();
            let e = Exponential::new(lambda).unwrap();
            for i in 0..=40 {
                let x = i as f64 * 0.25;
                assert!((w.cdf(x) - e.cdf(x)).abs() < 1e-14, "x={x} lambda={lambda}");
                assert!((w.pdf(x) - e.pdf(x)).abs() < 1e-12);
            }
            assert!((w.mean() - lambda).abs() < 1e-9);
            assert!((w.variance() - lambda * lambda).abs() < 1e-8);
        }
    }

    #[test]
    fn test_weibull_rayleigh_mean() {
        // k = 2: mean = λ√π/2
        let w = Weibull::new(2.0, 3.0).unwrap();
        assert!((w.mean() - 3.0 * std::f64::consts::PI.sqrt() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_weibull_pdf_at_zero() {
        assert_eq!(Weibull::new(0.5, 1.0).unwrap().pdf(0.0), f64::INFINITY);
        assert_eq!(Weibull::new(3.0, 1.0).unwrap().pdf(0.0), 0.0);
    }

    // --- Pareto ---

    #[test]
    fn test_pareto_moments() {
        let p = Pareto::new(3.0, 2.0).unwrap();
        assert!((p.mean() - 1.0).abs() < 1e-15);
        // 3·4 / (4·1) = 3
        assert!((p.variance() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pareto_missing_moments_are_infinite() {
        for &alpha in &[0.3, 0.9, 1.0] {
            let p = Pareto::new(alpha, 5.0).unwrap();
            assert_eq!(p.mean(), f64::INFINITY);
            assert_eq!(p.variance(), f64::INFINITY);
        }
        for &alpha in &[1.5, 2.0] {
            let p = Pareto::new(alpha, 5.0).unwrap();
            assert!(p.mean().is_finite());
            assert_eq!(p.variance(), f64::INFINITY);
        }
    }

    #[test]
    fn test_pareto_cdf_and_quantile() {
        let p = Pareto::new(2.0, 100.0).unwrap();
        // P(X ≤ 100) = 1 - (1/2)^2
        assert!((p.cdf(100.0) - 0.75).abs() < 1e-15);
        assert_eq!(p.cdf(0.0), 0.0);
        let x = p.quantile(0.75).unwrap();
        assert!((x - 100.0).abs() < 1e-9);
        assert!((p.pdf(0.0) - 0.02).abs() < 1e-15);
    }

    // --- Beta ---

    #[test]
    fn test_beta_one_one_is_uniform() {
        let b = Beta::new(1.0, 1.0).unwrap();
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            assert!((b.pdf(x) - 1.0).abs() < 1e-12, "pdf({x}) = {}", b.pdf(x));
            assert!((b.cdf(x) - x).abs() < 1e-12);
        }
        assert_eq!(b.pdf(1.2), 0.0);
        assert_eq!(b.pdf(-0.1), 0.0);
    }

    #[test]
    fn test_beta_moments() {
        let b = Beta::new(2.0, 5.0).unwrap();
        assert!((b.mean() - 2.0 / 7.0).abs() < 1e-15);
        assert!((b.variance() - 10.0 / (49.0 * 8.0)).abs() < 1e-15);
    }

    #[test]
    fn test_beta_pdf_known_value() {
        // Beta(2,2): 6x(1-x)
        let b = Beta::new(2.0, 2.0).unwrap();
        assert!((b.pdf(0.3) - 6.0 * 0.3 * 0.7).abs() < 1e-12);
        assert!((b.cdf(0.5) - 0.5).abs() < 1e-12);
    }

    // --- Gamma ---

    #[test]
    fn test_gamma_shape_one_is_exponential() {
        let g = Gamma::new(1.0, 2.0).unwrap();
        let e = Exponential::new(2.0).unwrap();
        for &x in &[0.0, 0.5, 1.0, 3.0, 10.0] {
            assert!((g.pdf(x) - e.pdf(x)).abs() < 1e-12);
            assert!((g.cdf(x) - e.cdf(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gamma_pdf_at_zero() {
        assert_eq!(Gamma::new(0.5, 1.0).unwrap().pdf(0.0), f64::INFINITY);
        assert_eq!(Gamma::new(3.0, 1.0).unwrap().pdf(0.0), 0.0);
        assert_eq!(Gamma::new(3.0, 1.0).unwrap().pdf(-1.0), 0.0);
    }

    #[test]
    fn test_gamma_erlang_cdf() {
        // Gamma(2, θ): 1 - e^{-x/θ}(1 + x/θ)
        let g = Gamma::new(2.0, 0.5).unwrap();
        let x: f64 = 1.3;
        let z = x / 0.5;
        assert!((g.cdf(x) - (1.0 - (-z).exp() * (1.0 + z))).abs() < 1e-12);
    }

    // --- Chi-Square ---

    #[test]
    fn test_chi_square_moments_exact() {
        for &r in &[1.0, 2.0, 5.0, 17.0] {
            let c = ChiSquare::new(r).unwrap();
            assert_eq!(c.mean(), r);
            assert_eq!(c.variance(), 2.0 * r);
        }
    }

    #[test]
    fn test_chi_square_critical_values() {
        let c1 = ChiSquare::new(1.0).unwrap();
        assert!((c1.cdf(3.841) - 0.95).abs() < 1e-3);
        let c2 = ChiSquare::new(2.0).unwrap();
        assert!((c2.cdf(5.991) - 0.95).abs() < 1e-3);
        assert_eq!(c2.as_gamma().alpha(), 1.0);
    }

    // --- Normal ---

    #[test]
    fn test_normal_basic() {
        let n = Normal::new(10.0, 2.0).unwrap();
        assert!((n.cdf(10.0) - 0.5).abs() < 1e-7);
        assert!((n.pdf(10.0) - 0.3989422804014327 / 2.0).abs() < 1e-14);
        assert!((n.variance() - 4.0).abs() < 1e-15);
    }
}
