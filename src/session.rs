//! Sampling session: accumulate draws and compare them with theory.
//!
//! A [`SamplingSession`] is a reducer over [`SessionEvent`]s with two
//! states. The caller owns the clock: while the session is
//! [`SessionState::Running`] it should send [`SessionEvent::Tick`] every
//! [`SamplingSession::tick_interval`].
//!
//! ```text
//!            Start(speed)
//!   Idle ─────────────────▶ Running(speed)
//!    ▲  ◀──────────────────    │
//!    │     Stop / Pause        │ Tick: draw one sample
//!    │                         ▼
//!    └──── Reset, SetFamily, SetParams (clear samples)
//! ```
//!
//! `AddOne` and `AddMany` draw synchronously in either state without
//! changing it.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::SimulatorConfig;
use crate::distributions::{Distribution, DistributionFamily, Support};
use crate::error::Result;
use crate::projection::{self, Histogram, Point};
use crate::random;
use crate::stats::{SampleAccumulator, SampleSummary};

/// Auto-run pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunSpeed {
    Animated,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Idle,
    Running(RunSpeed),
}

/// Messages accepted by [`SamplingSession::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Start(RunSpeed),
    Stop,
    Pause,
    /// Timer fired; draws one sample only while running.
    Tick,
    AddOne,
    AddMany(usize),
    Reset,
    /// Switches family, loading its default parameters.
    SetFamily(DistributionFamily),
    SetParams(Vec<f64>),
}

/// Sample accumulator bound to one parameterized distribution.
///
/// Samples are only comparable within one parameterization, so any
/// family or parameter change clears them and stops the run.
#[derive(Debug)]
pub struct SamplingSession<R = SmallRng> {
    config: SimulatorConfig,
    distribution: Distribution,
    state: SessionState,
    samples: Vec<f64>,
    rng: R,
}

impl SamplingSession<SmallRng> {
    /// Session on `family`'s default parameters, seeded from OS entropy.
    pub fn new(config: SimulatorConfig, family: DistributionFamily) -> Result<Self> {
        Self::with_rng(config, family, random::system_rng())
    }

    /// Reproducible session seeded with `seed`.
    pub fn seeded(config: SimulatorConfig, family: DistributionFamily, seed: u64) -> Result<Self> {
        Self::with_rng(config, family, random::create_rng(seed))
    }
}

impl<R: Rng> SamplingSession<R> {
    pub fn with_rng(config: SimulatorConfig, family: DistributionFamily, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            distribution: Distribution::with_defaults(family)?,
            state: SessionState::Idle,
            samples: Vec::new(),
            rng,
        })
    }

    /// Applies one event.
    ///
    /// On error the session is left as it was before the event, except
    /// that a failed `Tick` also stops the run so the timer does not keep
    /// retrying.
    ///
    /// # Examples
    /// ```
    /// use frontier_dist::config::SimulatorConfig;
    /// use frontier_dist::distributions::DistributionFamily;
    /// use frontier_dist::session::{RunSpeed, SamplingSession, SessionEvent, SessionState};
    ///
    /// let mut s = SamplingSession::seeded(SimulatorConfig::default(), DistributionFamily::Poisson, 1).unwrap();
    /// s.dispatch(SessionEvent::Start(RunSpeed::Fast)).unwrap();
    /// s.dispatch(SessionEvent::Tick).unwrap();
    /// s.dispatch(SessionEvent::AddMany(9)).unwrap();
    /// assert_eq!(s.samples().len(), 10);
    /// assert_eq!(s.state(), SessionState::Running(RunSpeed::Fast));
    ///
    /// s.dispatch(SessionEvent::SetParams(vec![7.5])).unwrap();
    /// assert!(s.samples().is_empty());
    /// assert_eq!(s.state(), SessionState::Idle);
    /// ```
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<()> {
        match event {
            SessionEvent::Start(speed) => self.transition(SessionState::Running(speed)),
            SessionEvent::Stop | SessionEvent::Pause => self.transition(SessionState::Idle),
            SessionEvent::Tick => {
                if self.is_running() {
                    if let Err(e) = self.add(1) {
                        tracing::warn!(error = %e, "tick failed, stopping run");
                        self.transition(SessionState::Idle);
                        return Err(e);
                    }
                }
            }
            SessionEvent::AddOne => self.add(1)?,
            SessionEvent::AddMany(n) => self.add(n)?,
            SessionEvent::Reset => self.reset(),
            SessionEvent::SetFamily(family) => {
                self.distribution = Distribution::with_defaults(family)?;
                self.reset();
            }
            SessionEvent::SetParams(params) => {
                self.distribution = Distribution::new(self.family(), &params)?;
                self.reset();
            }
        }
        Ok(())
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "session state change");
            self.state = next;
        }
    }

    /// Draws `n` samples, appending them only if every draw succeeds.
    fn add(&mut self, n: usize) -> Result<()> {
        let drawn = self.distribution.sample_n(n, &mut self.rng)?;
        self.samples.extend(drawn);
        Ok(())
    }

    fn reset(&mut self) {
        tracing::debug!(
            family = %self.family(),
            discarded = self.samples.len(),
            "session reset"
        );
        self.samples.clear();
        self.transition(SessionState::Idle);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running(_))
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn family(&self) -> DistributionFamily {
        self.distribution.family()
    }

    pub fn params(&self) -> Vec<f64> {
        self.distribution.params()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Observed statistics, recomputed from the full sample.
    pub fn observed(&self) -> SampleSummary {
        SampleAccumulator::from_samples(&self.samples).summary()
    }

    /// Theoretical `(mean, variance)`; either may be `+∞`.
    pub fn theoretical(&self) -> (f64, f64) {
        (self.distribution.mean(), self.distribution.variance())
    }

    /// Display window at the configured sigma reach.
    pub fn window(&self) -> Support {
        self.distribution.display_window(self.config.display_sigmas)
    }

    pub fn histogram(&self) -> Histogram {
        Histogram::for_distribution(
            &self.samples,
            &self.distribution,
            self.window(),
            self.config.histogram_bins,
        )
    }

    pub fn pdf_curve(&self) -> Vec<Point> {
        projection::pdf_curve(&self.distribution, self.window(), self.config.curve_points)
    }

    /// Period between ticks, or `None` while idle.
    pub fn tick_interval(&self) -> Option<Duration> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Running(speed) => Some(self.config.interval(speed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn session(family: DistributionFamily) -> SamplingSession {
        SamplingSession::seeded(SimulatorConfig::default(), family, 42).unwrap()
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let s = session(DistributionFamily::Normal);
        assert_eq!(s.state(), SessionState::Idle);
        assert!(s.samples().is_empty());
        assert_eq!(s.observed().count, 0);
        assert_eq!(s.observed().mean, None);
        assert_eq!(s.tick_interval(), None);
        assert_eq!(s.params(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_tick_only_draws_while_running() {
        let mut s = session(DistributionFamily::Exponential);
        s.dispatch(SessionEvent::Tick).unwrap();
        assert!(s.samples().is_empty());

        s.dispatch(SessionEvent::Start(RunSpeed::Animated)).unwrap();
        assert_eq!(s.tick_interval(), Some(Duration::from_millis(200)));
        for _ in 0..3 {
            s.dispatch(SessionEvent::Tick).unwrap();
        }
        assert_eq!(s.samples().len(), 3);

        s.dispatch(SessionEvent::Pause).unwrap();
        s.dispatch(SessionEvent::Tick).unwrap();
        assert_eq!(s.samples().len(), 3);
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_start_while_running_changes_speed() {
        let mut s = session(DistributionFamily::Gamma);
        s.dispatch(SessionEvent::Start(RunSpeed::Animated)).unwrap();
        s.dispatch(SessionEvent::Start(RunSpeed::Fast)).unwrap();
        assert_eq!(s.state(), SessionState::Running(RunSpeed::Fast));
        assert_eq!(s.tick_interval(), Some(Duration::from_millis(10)));
        s.dispatch(SessionEvent::Stop).unwrap();
        s.dispatch(SessionEvent::Stop).unwrap();
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_add_does_not_change_state() {
        let mut s = session(DistributionFamily::Binomial);
        s.dispatch(SessionEvent::AddOne).unwrap();
        s.dispatch(SessionEvent::AddMany(99)).unwrap();
        assert_eq!(s.samples().len(), 100);
        assert_eq!(s.state(), SessionState::Idle);

        s.dispatch(SessionEvent::Start(RunSpeed::Fast)).unwrap();
        s.dispatch(SessionEvent::AddMany(5)).unwrap();
        assert_eq!(s.state(), SessionState::Running(RunSpeed::Fast));
    }

    #[test]
    fn test_reset_clears_and_stops() {
        let mut s = session(DistributionFamily::Beta);
        s.dispatch(SessionEvent::Start(RunSpeed::Fast)).unwrap();
        s.dispatch(SessionEvent::AddMany(10)).unwrap();
        s.dispatch(SessionEvent::Reset).unwrap();
        assert!(s.samples().is_empty());
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_set_family_loads_defaults_and_resets() {
        let mut s = session(DistributionFamily::Normal);
        s.dispatch(SessionEvent::AddMany(10)).unwrap();
        s.dispatch(SessionEvent::Start(RunSpeed::Animated)).unwrap();
        s.dispatch(SessionEvent::SetFamily(DistributionFamily::Weibull)).unwrap();
        assert_eq!(s.family(), DistributionFamily::Weibull);
        assert_eq!(s.params(), DistributionFamily::Weibull.default_params().to_vec());
        assert!(s.samples().is_empty());
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_invalid_params_leave_session_untouched() {
        let mut s = session(DistributionFamily::Pareto);
        s.dispatch(SessionEvent::AddMany(4)).unwrap();
        s.dispatch(SessionEvent::Start(RunSpeed::Fast)).unwrap();

        let err = s.dispatch(SessionEvent::SetParams(vec![0.0, 1.0])).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "alpha", .. }));
        let err = s.dispatch(SessionEvent::SetParams(vec![2.0])).unwrap_err();
        assert!(matches!(err, Error::ParameterCount { .. }));

        assert_eq!(s.samples().len(), 4);
        assert_eq!(s.state(), SessionState::Running(RunSpeed::Fast));
        assert_eq!(s.params(), DistributionFamily::Pareto.default_params().to_vec());
    }

    #[test]
    fn test_observed_matches_batch_statistics() {
        let mut s = session(DistributionFamily::Uniform);
        s.dispatch(SessionEvent::AddMany(500)).unwrap();
        let obs = s.observed();
        assert_eq!(obs.count, 500);
        let batch_mean = crate::stats::mean(s.samples()).unwrap();
        let batch_var = crate::stats::variance(s.samples()).unwrap();
        assert!((obs.mean.unwrap() - batch_mean).abs() < 1e-12);
        assert!((obs.variance.unwrap() - batch_var).abs() < 1e-12);
        assert!(obs.min.unwrap() >= 0.0 && obs.max.unwrap() < 1.0);
    }

    #[test]
    fn test_theoretical_and_histogram() {
        let mut s = session(DistributionFamily::Poisson);
        assert_eq!(s.theoretical(), (3.0, 3.0));
        s.dispatch(SessionEvent::AddMany(200)).unwrap();
        let h = s.histogram();
        assert_eq!(h.total, 200);
        // unit bins centred on 0..=10
        assert_eq!(h.bin_count(), 11);
        assert!(!s.pdf_curve().is_empty());
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = session(DistributionFamily::NegativeBinomial);
        let mut b = session(DistributionFamily::NegativeBinomial);
        a.dispatch(SessionEvent::AddMany(25)).unwrap();
        b.dispatch(SessionEvent::AddMany(25)).unwrap();
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SimulatorConfig {
            histogram_bins: 0,
            ..SimulatorConfig::default()
        };
        assert!(SamplingSession::seeded(config, DistributionFamily::Normal, 0).is_err());
    }
}
