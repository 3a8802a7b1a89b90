//! # frontier-dist
//!
//! Numerical engine behind the FrontierMinds Exam P probability simulators.
//!
//! The crate evaluates densities, distribution functions and moments of the
//! eleven families covered by the exam, draws random variates from them,
//! and keeps a sampling session that compares an observed sample against
//! the theoretical curve. Rendering is left to the caller; this crate only
//! produces numbers and plot geometry.
//!
//! ## Modules
//!
//! - [`special`] — Gamma, beta, regularized incomplete beta/gamma, binomial coefficients
//! - [`distributions`] — Distribution descriptors behind one parameter-vector interface
//! - [`sampling`] — Random variate generators over an injected RNG
//! - [`random`] — Seeded and OS-seeded RNG sources
//! - [`projection`] — Curves, shaded regions, histograms and viewport mapping
//! - [`session`] — Idle/Running sampling session driven by `dispatch(event)`
//! - [`stats`] — Observed sample statistics
//! - [`export`] — CSV export of raw samples
//! - [`config`] — Simulator tunables
//!
//! ## Data Flow
//!
//! ```text
//! special → distributions → { projection, sampling } → session
//! ```
//!
//! ## Design Philosophy
//!
//! - **Validate once**: parameters are checked when a [`distributions::Distribution`]
//!   is built; evaluation never fails afterwards
//! - **Infinity over errors**: moments that do not exist are `+∞`
//! - **Injected randomness**: every sampler takes `&mut impl Rng`, so tests
//!   run on a seeded generator
//! - **Property-based testing**: invariants verified via proptest

pub mod config;
pub mod distributions;
pub mod error;
pub mod export;
pub mod projection;
pub mod random;
pub mod sampling;
pub mod session;
pub mod special;
pub mod stats;

pub use error::{Error, Result};
