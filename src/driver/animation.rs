//! Animation driver: the time-advancing state machine
//!
//! The driver owns the simulated clock. On every [`AnimationDriver::tick`]
//! it advances time by a fixed step, applies the end-of-horizon policy, and
//! asks the (precomputed) evaluator for a fresh profile. It holds no
//! derived state beyond the clock: profiles are recomputed from scratch on
//! every tick, so pause, resume and reset can never leave stale results
//! behind.
//!
//! The driver is deliberately free of any wall-clock dependency — it does
//! not know how often `tick()` is called. Pairing it with a real timer is
//! the job of [`TickScheduler`](super::TickScheduler); keeping the two
//! apart makes every driver behavior testable without sleeping.

use log::{debug, info};

use crate::error::{FickError, FickResult};
use crate::physics::{ConcentrationProfile, EvaluatorConfig, ProfileEvaluator, SlabParameters};

use std::time::Duration;

// =================================================================================================
// Horizon Policy
// =================================================================================================

/// What happens when the simulated clock passes the animation horizon
///
/// The original animation loops silently: past the horizon the clock snaps
/// back to zero and the saturation replays. Both behaviors are offered and
/// the choice is explicit:
///
/// - [`HorizonPolicy::Wrap`] — snap back to t = 0 and replay (default,
///   matches the looping animation)
/// - [`HorizonPolicy::Clamp`] — hold at the horizon; the profile freezes at
///   its most saturated state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizonPolicy {
    /// Snap back to t = 0 once the horizon is passed
    #[default]
    Wrap,

    /// Hold the clock at the horizon
    Clamp,
}

// =================================================================================================
// Driver Configuration
// =================================================================================================

/// Timing configuration of the animation driver
///
/// # Fields
///
/// - `time_step` — simulated seconds added per tick (default: 5 s)
/// - `horizon` — simulated time at which the policy applies (default: 3600 s)
/// - `tick_interval` — wall-clock period between scheduler ticks
///   (default: 100 ms); ignored when ticking the driver manually
/// - `policy` — end-of-horizon behavior (default: wrap)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use fick_rs::driver::{DriverConfig, HorizonPolicy};
///
/// let config = DriverConfig::default()
///     .with_time_step(10.0)
///     .with_policy(HorizonPolicy::Clamp);
///
/// assert_eq!(config.tick_interval, Duration::from_millis(100));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverConfig {
    /// Simulated seconds per tick
    pub time_step: f64,

    /// Simulated horizon [s] after which the policy applies
    pub horizon: f64,

    /// Wall-clock period between scheduler ticks
    pub tick_interval: Duration,

    /// End-of-horizon behavior
    pub policy: HorizonPolicy,
}

impl Default for DriverConfig {
    /// 5 simulated seconds every 100 ms of wall clock, looping at one hour
    fn default() -> Self {
        Self {
            time_step: 5.0,
            horizon: 3600.0,
            tick_interval: Duration::from_millis(100),
            policy: HorizonPolicy::Wrap,
        }
    }
}

impl DriverConfig {
    /// Builder pattern: set the simulated time step
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Builder pattern: set the simulated horizon
    pub fn with_horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Builder pattern: set the wall-clock tick interval
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Builder pattern: set the end-of-horizon policy
    pub fn with_policy(mut self, policy: HorizonPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the timing values
    pub fn validate(&self) -> FickResult<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(FickError::parameter(
                "time_step",
                self.time_step,
                "finite and strictly positive",
            ));
        }

        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(FickError::parameter(
                "horizon",
                self.horizon,
                "finite and strictly positive",
            ));
        }

        if self.tick_interval.is_zero() {
            return Err(FickError::configuration(
                "tick_interval_ms",
                0,
                "at least 1 millisecond",
            ));
        }

        Ok(())
    }
}

// =================================================================================================
// Animation Driver
// =================================================================================================

/// Time-advancing driver around a precomputed evaluator
///
/// State machine with two modes, running and paused. While running, each
/// [`tick`](Self::tick) advances the simulated clock and evaluates; while
/// paused, ticks return `None` and the clock stands still. Pausing never
/// affects the correctness of the next evaluation — the evaluator is
/// stateless, so resume simply continues from the held time.
///
/// # Example
///
/// ```rust
/// use fick_rs::driver::{AnimationDriver, DriverConfig};
/// use fick_rs::physics::{EvaluatorConfig, SlabParameters};
///
/// let mut driver = AnimationDriver::new(
///     SlabParameters::default(),
///     EvaluatorConfig::default(),
///     DriverConfig::default(),
/// ).unwrap();
///
/// let profile = driver.tick().unwrap().expect("driver starts running");
/// assert_eq!(profile.time(), 5.0);
///
/// driver.pause();
/// assert!(driver.tick().unwrap().is_none());
///
/// driver.reset();
/// assert_eq!(driver.time(), 0.0);
/// ```
#[derive(Debug)]
pub struct AnimationDriver {
    /// Evaluator with precomputed mode tables for the current parameters
    evaluator: ProfileEvaluator,

    /// Timing configuration
    config: DriverConfig,

    /// Current simulated time [s]
    time: f64,

    /// True while ticks are suspended
    paused: bool,
}

impl AnimationDriver {
    /// Create a driver at t = 0, running
    ///
    /// # Errors
    ///
    /// Propagates validation failures from the slab parameters, the
    /// evaluator knobs, and the driver timing.
    pub fn new(
        params: SlabParameters,
        evaluator_config: EvaluatorConfig,
        config: DriverConfig,
    ) -> FickResult<Self> {
        config.validate()?;
        let evaluator = ProfileEvaluator::new(params, evaluator_config)?;

        Ok(Self {
            evaluator,
            config,
            time: 0.0,
            paused: false,
        })
    }

    /// Advance the clock one step and evaluate
    ///
    /// Returns `Ok(None)` while paused. Otherwise advances the simulated
    /// time by `time_step`, applies the horizon policy, and returns the
    /// profile at the new time.
    pub fn tick(&mut self) -> FickResult<Option<ConcentrationProfile>> {
        if self.paused {
            return Ok(None);
        }

        let advanced = self.time + self.config.time_step;
        self.time = if advanced > self.config.horizon {
            match self.config.policy {
                HorizonPolicy::Wrap => {
                    debug!(
                        "horizon {} s passed, wrapping simulated time to 0",
                        self.config.horizon
                    );
                    0.0
                }
                HorizonPolicy::Clamp => self.config.horizon,
            }
        } else {
            advanced
        };

        self.evaluator.profile_at(self.time).map(Some)
    }

    /// Evaluate at the current simulated time without advancing
    pub fn current_profile(&self) -> FickResult<ConcentrationProfile> {
        self.evaluator.profile_at(self.time)
    }

    /// Suspend ticking; the clock holds its value
    pub fn pause(&mut self) {
        if !self.paused {
            info!("animation paused at t = {} s", self.time);
            self.paused = true;
        }
    }

    /// Resume ticking from the held time
    pub fn resume(&mut self) {
        if self.paused {
            info!("animation resumed at t = {} s", self.time);
            self.paused = false;
        }
    }

    /// Snap the clock back to t = 0 (run state is unchanged)
    pub fn reset(&mut self) {
        info!("animation reset to t = 0");
        self.time = 0.0;
    }

    /// Replace the slab parameters, rebuilding the precomputed tables
    ///
    /// The simulated clock is kept: the next tick shows the new slab at the
    /// current time, exactly as if the parameters had been in effect all
    /// along (the evaluation depends only on the arguments, not history).
    pub fn set_parameters(&mut self, params: SlabParameters) -> FickResult<()> {
        self.evaluator = ProfileEvaluator::new(params, *self.evaluator.config())?;
        Ok(())
    }

    /// Current simulated time [s]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// True while ticks are suspended
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Timing configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Slab parameters currently driving the evaluator
    pub fn parameters(&self) -> &SlabParameters {
        self.evaluator.parameters()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_with(config: DriverConfig) -> AnimationDriver {
        AnimationDriver::new(
            SlabParameters::default(),
            EvaluatorConfig::default(),
            config,
        )
        .unwrap()
    }

    // ====== Configuration Tests ======

    #[test]
    fn test_default_config_matches_animation_defaults() {
        let config = DriverConfig::default();

        assert_eq!(config.time_step, 5.0);
        assert_eq!(config.horizon, 3600.0);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.policy, HorizonPolicy::Wrap);
    }

    #[test]
    fn test_non_positive_time_step_rejected() {
        let config = DriverConfig::default().with_time_step(0.0);
        let err = config.validate().unwrap_err();

        assert!(matches!(
            err,
            FickError::InvalidParameter { field: "time_step", .. }
        ));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = DriverConfig::default().with_tick_interval(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    // ====== Tick Tests ======

    #[test]
    fn test_ticks_advance_by_time_step() {
        let mut driver = driver_with(DriverConfig::default());

        let first = driver.tick().unwrap().unwrap();
        let second = driver.tick().unwrap().unwrap();

        assert_eq!(first.time(), 5.0);
        assert_eq!(second.time(), 10.0);
        assert_eq!(driver.time(), 10.0);
    }

    #[test]
    fn test_profiles_grow_toward_saturation() {
        let mut driver = driver_with(DriverConfig::default().with_time_step(100.0));

        let early = driver.tick().unwrap().unwrap();
        for _ in 0..9 {
            driver.tick().unwrap();
        }
        let late = driver.current_profile().unwrap();

        let mid = early.len() / 2;
        assert!(
            late.samples()[mid].concentration > early.samples()[mid].concentration,
            "mid-slab concentration should rise as the clock advances"
        );
    }

    // ====== Pause / Resume / Reset Tests ======

    #[test]
    fn test_pause_suspends_clock_and_tick() {
        let mut driver = driver_with(DriverConfig::default());
        driver.tick().unwrap();

        driver.pause();
        assert!(driver.is_paused());
        assert!(driver.tick().unwrap().is_none());
        assert_eq!(driver.time(), 5.0);
    }

    #[test]
    fn test_resume_continues_from_held_time() {
        let mut driver = driver_with(DriverConfig::default());
        driver.tick().unwrap();
        driver.pause();
        driver.tick().unwrap();
        driver.resume();

        let profile = driver.tick().unwrap().unwrap();
        assert_eq!(profile.time(), 10.0);
    }

    #[test]
    fn test_reset_snaps_clock_to_zero() {
        let mut driver = driver_with(DriverConfig::default());
        for _ in 0..7 {
            driver.tick().unwrap();
        }

        driver.reset();
        assert_eq!(driver.time(), 0.0);

        // Next tick restarts the saturation from the first step
        let profile = driver.tick().unwrap().unwrap();
        assert_eq!(profile.time(), 5.0);
    }

    #[test]
    fn test_pause_does_not_corrupt_next_evaluation() {
        // The evaluator is stateless: a profile after pause/resume must be
        // identical to one computed without any pause
        let mut paused_driver = driver_with(DriverConfig::default());
        let mut straight_driver = driver_with(DriverConfig::default());

        paused_driver.tick().unwrap();
        paused_driver.pause();
        paused_driver.tick().unwrap();
        paused_driver.resume();
        let a = paused_driver.tick().unwrap().unwrap();

        straight_driver.tick().unwrap();
        let b = straight_driver.tick().unwrap().unwrap();

        assert_eq!(a, b);
    }

    // ====== Horizon Tests ======

    #[test]
    fn test_wrap_policy_loops_to_zero() {
        let config = DriverConfig::default()
            .with_time_step(1000.0)
            .with_horizon(3600.0);
        let mut driver = driver_with(config);

        // 1000, 2000, 3000, then 4000 > 3600 wraps to 0
        for _ in 0..3 {
            driver.tick().unwrap();
        }
        let wrapped = driver.tick().unwrap().unwrap();

        assert_eq!(wrapped.time(), 0.0);
        assert_eq!(driver.time(), 0.0);
    }

    #[test]
    fn test_clamp_policy_holds_at_horizon() {
        let config = DriverConfig::default()
            .with_time_step(1000.0)
            .with_horizon(3600.0)
            .with_policy(HorizonPolicy::Clamp);
        let mut driver = driver_with(config);

        for _ in 0..10 {
            driver.tick().unwrap();
        }

        assert_eq!(driver.time(), 3600.0);
        let held = driver.tick().unwrap().unwrap();
        assert_eq!(held.time(), 3600.0);
    }

    #[test]
    fn test_step_landing_exactly_on_horizon_does_not_wrap() {
        let config = DriverConfig::default()
            .with_time_step(1800.0)
            .with_horizon(3600.0);
        let mut driver = driver_with(config);

        driver.tick().unwrap();
        let at_horizon = driver.tick().unwrap().unwrap();

        // 3600 is inside the horizon; only *past* it wraps
        assert_eq!(at_horizon.time(), 3600.0);
    }

    // ====== Parameter Update Tests ======

    #[test]
    fn test_set_parameters_rebuilds_evaluator() {
        let mut driver = driver_with(DriverConfig::default());
        driver.tick().unwrap();

        let doubled = SlabParameters::new(2e-10, 200e-6, 1.0);
        driver.set_parameters(doubled).unwrap();

        assert_eq!(driver.parameters().diffusivity, 2e-10);
        // Clock is preserved across the swap
        assert_eq!(driver.time(), 5.0);
    }

    #[test]
    fn test_set_parameters_rejects_invalid() {
        let mut driver = driver_with(DriverConfig::default());
        let bad = SlabParameters::new(-1.0, 200e-6, 1.0);

        assert!(driver.set_parameters(bad).is_err());
        // Driver keeps the previous, valid parameters
        assert_eq!(driver.parameters().diffusivity, 1e-10);
    }
}
