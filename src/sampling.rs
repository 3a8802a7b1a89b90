//! Random variate generators.
//!
//! One routine per family, all driven by the `[0, 1)` primitive of an
//! injected [`Rng`]:
//!
//! | Family | Method |
//! |---|---|
//! | Uniform, Exponential, Weibull, Pareto | inverse transform |
//! | Normal | Box–Muller |
//! | Gamma | Marsaglia–Tsang rejection (α ≥ 1), `Gamma(α+1)·U^{1/α}` boost (α < 1) |
//! | Chi-Square | Gamma(r/2, 2) |
//! | Beta | X/(X+Y), X ~ Gamma(α,1), Y ~ Gamma(β,1) |
//! | Binomial | sum of Bernoulli trials |
//! | Poisson | Knuth's product method, λ split into chunks |
//! | Negative Binomial | sum of `r` inverse-transform geometric draws |
//!
//! Reference: Marsaglia & Tsang (2000), "A Simple Method for Generating
//! Gamma Variables", *ACM TOMS* 26(3).

use std::f64::consts::PI;

use rand::Rng;

use crate::distributions::{Distribution, DistributionFamily};
use crate::error::{Error, Result};
use crate::random::{uniform, uniform_open0};

/// Rejection attempts allowed per Gamma (or Beta) variate before giving up.
pub const MAX_REJECTION_ATTEMPTS: usize = 10_000;

/// Largest Poisson mean handled by a single Knuth product loop.
const POISSON_CHUNK: f64 = 30.0;

/// Uniform variate on `[a, b)`.
pub fn sample_uniform<R: Rng + ?Sized>(a: f64, b: f64, rng: &mut R) -> f64 {
    a + (b - a) * uniform(rng)
}

/// Exponential variate with mean θ: `−θ ln U`.
pub fn sample_exponential<R: Rng + ?Sized>(theta: f64, rng: &mut R) -> f64 {
    -theta * uniform_open0(rng).ln()
}

/// Weibull variate: `λ(−ln U)^{1/k}`.
pub fn sample_weibull<R: Rng + ?Sized>(k: f64, lambda: f64, rng: &mut R) -> f64 {
    lambda * (-uniform_open0(rng).ln()).powf(1.0 / k)
}

/// Two-parameter Pareto variate: `θ(U^{−1/α} − 1)`.
pub fn sample_pareto<R: Rng + ?Sized>(alpha: f64, theta: f64, rng: &mut R) -> f64 {
    theta * (uniform_open0(rng).powf(-1.0 / alpha) - 1.0)
}

/// Standard normal variate via the Box–Muller transform.
///
/// Only the cosine branch is returned, keeping the generator stateless.
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1 = uniform_open0(rng);
    let u2 = uniform(rng);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

pub fn sample_normal<R: Rng + ?Sized>(mu: f64, sigma: f64, rng: &mut R) -> f64 {
    mu + sigma * sample_standard_normal(rng)
}

/// Gamma variate with shape α and scale θ.
///
/// # Errors
/// [`Error::SamplingExhausted`] if the rejection loop exceeds
/// [`MAX_REJECTION_ATTEMPTS`].
pub fn sample_gamma<R: Rng + ?Sized>(alpha: f64, theta: f64, rng: &mut R) -> Result<f64> {
    Ok(theta * standard_gamma(alpha, DistributionFamily::Gamma, MAX_REJECTION_ATTEMPTS, rng)?)
}

/// Chi-square variate with `r` degrees of freedom, drawn as Gamma(r/2, 2).
pub fn sample_chi_square<R: Rng + ?Sized>(r: f64, rng: &mut R) -> Result<f64> {
    Ok(2.0 * standard_gamma(r / 2.0, DistributionFamily::ChiSquare, MAX_REJECTION_ATTEMPTS, rng)?)
}

/// Beta variate as the ratio X/(X+Y) of two unit-scale Gamma variates.
pub fn sample_beta<R: Rng + ?Sized>(alpha: f64, beta: f64, rng: &mut R) -> Result<f64> {
    let family = DistributionFamily::Beta;
    // Both draws underflow to zero only for extremely small shapes.
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let x = standard_gamma(alpha, family, MAX_REJECTION_ATTEMPTS, rng)?;
        let y = standard_gamma(beta, family, MAX_REJECTION_ATTEMPTS, rng)?;
        let sum = x + y;
        if sum > 0.0 {
            return Ok(x / sum);
        }
    }
    Err(exhausted(family, MAX_REJECTION_ATTEMPTS))
}

/// Gamma(α, 1) variate.
///
/// α ≥ 1 uses Marsaglia–Tsang directly. α < 1 draws Gamma(α+1, 1) and
/// scales by U^{1/α}.
fn standard_gamma<R: Rng + ?Sized>(
    alpha: f64,
    family: DistributionFamily,
    max_attempts: usize,
    rng: &mut R,
) -> Result<f64> {
    if alpha < 1.0 {
        let boosted = standard_gamma(alpha + 1.0, family, max_attempts, rng)?;
        return Ok(boosted * uniform_open0(rng).powf(1.0 / alpha));
    }

    let d = alpha - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    for _ in 0..max_attempts {
        let x = sample_standard_normal(rng);
        let v = 1.0 + c * x;
        if v <= 0.0 {
            continue;
        }
        let v = v * v * v;
        let u = uniform(rng);

        // squeeze
        if u < 1.0 - 0.0331 * x.powi(4) {
            return Ok(d * v);
        }
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return Ok(d * v);
        }
    }
    Err(exhausted(family, max_attempts))
}

fn exhausted(family: DistributionFamily, attempts: usize) -> Error {
    tracing::warn!(%family, attempts, "rejection sampler exhausted its attempt budget");
    Error::SamplingExhausted { family, attempts }
}

/// Number of successes in `n` Bernoulli(`p`) trials.
///
/// Costs one uniform per trial; [`Distribution::new`] caps `n` at
/// [`MAX_TRIALS`](crate::distributions::MAX_TRIALS).
pub fn sample_binomial<R: Rng + ?Sized>(n: u64, p: f64, rng: &mut R) -> u64 {
    (0..n).filter(|_| uniform(rng) < p).count() as u64
}

/// Poisson variate via Knuth's product-of-uniforms method.
///
/// λ is split into chunks of at most 30 and the chunk draws summed, so
/// e^{−λ} never underflows.
pub fn sample_poisson<R: Rng + ?Sized>(lambda: f64, rng: &mut R) -> u64 {
    let mut remaining = lambda;
    let mut total = 0;
    while remaining > 0.0 {
        let chunk = remaining.min(POISSON_CHUNK);
        remaining -= chunk;
        let limit = (-chunk).exp();
        let mut product = uniform(rng);
        while product > limit {
            total += 1;
            product *= uniform(rng);
        }
    }
    total
}

/// Trials until the first success, by inverse transform:
/// ⌈ln U / ln(1−p)⌉.
pub fn sample_geometric<R: Rng + ?Sized>(p: f64, rng: &mut R) -> u64 {
    if p >= 1.0 {
        return 1;
    }
    let trials = (uniform_open0(rng).ln() / (-p).ln_1p()).ceil();
    (trials as u64).max(1)
}

/// Trial number of the `r`-th success: the sum of `r` geometric draws.
pub fn sample_negative_binomial<R: Rng + ?Sized>(r: u64, p: f64, rng: &mut R) -> u64 {
    (0..r).map(|_| sample_geometric(p, rng)).sum()
}

impl Distribution {
    /// Draws a single variate.
    ///
    /// # Examples
    /// ```
    /// use frontier_dist::distributions::{Distribution, DistributionFamily};
    /// use frontier_dist::random::create_rng;
    /// let d = Distribution::new(DistributionFamily::Beta, &[2.0, 3.0]).unwrap();
    /// let x = d.sample(&mut create_rng(1)).unwrap();
    /// assert!((0.0..=1.0).contains(&x));
    /// ```
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64> {
        Ok(match self {
            Distribution::Uniform(d) => sample_uniform(d.a(), d.b(), rng),
            Distribution::Exponential(d) => sample_exponential(d.theta(), rng),
            Distribution::Weibull(d) => sample_weibull(d.k(), d.lambda(), rng),
            Distribution::Pareto(d) => sample_pareto(d.alpha(), d.theta(), rng),
            Distribution::Normal(d) => sample_normal(d.mu(), d.sigma(), rng),
            Distribution::Gamma(d) => sample_gamma(d.alpha(), d.theta(), rng)?,
            Distribution::ChiSquare(d) => sample_chi_square(d.r(), rng)?,
            Distribution::Beta(d) => sample_beta(d.alpha(), d.beta(), rng)?,
            Distribution::Binomial(d) => sample_binomial(d.n(), d.p(), rng) as f64,
            Distribution::Poisson(d) => sample_poisson(d.lambda(), rng) as f64,
            Distribution::NegativeBinomial(d) => {
                sample_negative_binomial(d.r(), d.p(), rng) as f64
            }
        })
    }

    /// Draws `count` independent variates.
    pub fn sample_n<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<f64>> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

/// Validates `params` for `family` and draws one variate.
pub fn generate_sample<R: Rng + ?Sized>(
    family: DistributionFamily,
    params: &[f64],
    rng: &mut R,
) -> Result<f64> {
    Distribution::new(family, params)?.sample(rng)
}

/// Validates `params` for `family` and draws `count` variates.
///
/// # Examples
/// ```
/// use frontier_dist::distributions::DistributionFamily;
/// use frontier_dist::random::create_rng;
/// use frontier_dist::sampling::run_many;
/// let xs = run_many(DistributionFamily::Poisson, &[4.0], 100, &mut create_rng(3)).unwrap();
/// assert_eq!(xs.len(), 100);
/// assert!(xs.iter().all(|x| x.fract() == 0.0 && *x >= 0.0));
/// ```
pub fn run_many<R: Rng + ?Sized>(
    family: DistributionFamily,
    params: &[f64],
    count: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    let dist = Distribution::new(family, params)?;
    tracing::debug!(%family, count, "drawing batch");
    dist.sample_n(count, rng)
}
