//! Periodic scheduler: runs an animation driver on a background thread
//!
//! The scheduler is the only place in the crate where wall-clock time
//! exists. It owns an [`AnimationDriver`] on a dedicated thread, ticks it
//! on a fixed period, and hands each fresh profile to a host callback
//! (chart redraw, logger, test collector, ...).
//!
//! Control from the host side goes through shared atomic flags — pause,
//! resume and reset can be requested at any point and are applied at the
//! next tick boundary. Evaluations are cheap and non-blocking, so no
//! mid-computation cancellation is needed: stopping waits at most one tick
//! interval plus one evaluation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error, info};

use crate::physics::ConcentrationProfile;

use super::animation::AnimationDriver;

// =================================================================================================
// Tick Scheduler
// =================================================================================================

/// Fixed-period background runner for an [`AnimationDriver`]
///
/// The driver moves onto the scheduler thread at spawn and comes back when
/// the scheduler stops, so its final clock state can be inspected.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::mpsc;
/// use fick_rs::driver::{AnimationDriver, DriverConfig, TickScheduler};
/// use fick_rs::physics::{EvaluatorConfig, SlabParameters};
///
/// let driver = AnimationDriver::new(
///     SlabParameters::default(),
///     EvaluatorConfig::default(),
///     DriverConfig::default(),
/// ).unwrap();
///
/// let (sender, receiver) = mpsc::channel();
/// let scheduler = TickScheduler::spawn(driver, move |profile| {
///     let _ = sender.send(profile);
/// });
///
/// // ... consume profiles from `receiver`, then:
/// let driver = scheduler.stop().expect("scheduler thread finished cleanly");
/// println!("stopped at t = {} s", driver.time());
/// ```
pub struct TickScheduler {
    /// Worker thread; returns the driver on join
    handle: Option<JoinHandle<AnimationDriver>>,

    /// Cleared to make the worker loop exit
    running: Arc<AtomicBool>,

    /// Mirrored into the driver's pause state at each tick boundary
    paused: Arc<AtomicBool>,

    /// One-shot flag: reset the driver clock at the next tick boundary
    reset_requested: Arc<AtomicBool>,
}

impl TickScheduler {
    /// Start ticking `driver` on a background thread
    ///
    /// The tick period is the driver's configured `tick_interval`. The
    /// callback runs on the scheduler thread once per successful tick;
    /// while paused, no callbacks fire.
    pub fn spawn<F>(mut driver: AnimationDriver, mut callback: F) -> Self
    where
        F: FnMut(ConcentrationProfile) + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let paused = Arc::new(AtomicBool::new(driver.is_paused()));
        let reset_requested = Arc::new(AtomicBool::new(false));

        let interval = driver.config().tick_interval;

        let worker_running = Arc::clone(&running);
        let worker_paused = Arc::clone(&paused);
        let worker_reset = Arc::clone(&reset_requested);

        info!(
            "scheduler started: {} simulated s every {:?}",
            driver.config().time_step,
            interval
        );

        let handle = thread::spawn(move || {
            // Relaxed ordering throughout: the flags carry no data, they
            // only steer the loop, and one-tick latency is acceptable.
            while worker_running.load(Ordering::Relaxed) {
                if worker_reset.swap(false, Ordering::Relaxed) {
                    driver.reset();
                }

                let want_paused = worker_paused.load(Ordering::Relaxed);
                if want_paused != driver.is_paused() {
                    if want_paused {
                        driver.pause();
                    } else {
                        driver.resume();
                    }
                }

                match driver.tick() {
                    Ok(Some(profile)) => {
                        debug!("tick: t = {} s", profile.time());
                        callback(profile);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        // Cannot happen for a validated driver (time stays
                        // non-negative), but a broken invariant must not
                        // spin silently.
                        error!("tick failed, stopping scheduler: {}", err);
                        break;
                    }
                }

                thread::sleep(interval);
            }

            driver
        });

        Self {
            handle: Some(handle),
            running,
            paused,
            reset_requested,
        }
    }

    /// Request a pause; applied at the next tick boundary
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    /// Request a resume; applied at the next tick boundary
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Relaxed);
    }

    /// Request a clock reset; applied at the next tick boundary
    pub fn reset(&self) {
        self.reset_requested.store(true, Ordering::Relaxed);
    }

    /// True until [`Self::stop`] is called (or the worker hit an error)
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Stop the scheduler and recover the driver
    ///
    /// Blocks until the worker finishes its current tick. Returns `None`
    /// only if the worker thread panicked (a panicking host callback).
    pub fn stop(mut self) -> Option<AnimationDriver> {
        self.running.store(false, Ordering::Relaxed);
        self.handle.take().and_then(|handle| handle.join().ok())
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::DriverConfig;
    use crate::physics::{EvaluatorConfig, SlabParameters};
    use std::sync::mpsc;
    use std::time::Duration;

    fn fast_driver() -> AnimationDriver {
        let config = DriverConfig::default()
            .with_time_step(5.0)
            .with_tick_interval(Duration::from_millis(2));
        AnimationDriver::new(
            SlabParameters::default(),
            EvaluatorConfig::default(),
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_scheduler_delivers_profiles() {
        let (sender, receiver) = mpsc::channel();
        let scheduler = TickScheduler::spawn(fast_driver(), move |profile| {
            let _ = sender.send(profile.time());
        });

        // Wait for a handful of ticks to arrive
        let mut times = Vec::new();
        for _ in 0..3 {
            times.push(receiver.recv_timeout(Duration::from_secs(5)).unwrap());
        }
        scheduler.stop();

        // Simulated time advances by the configured step each tick
        assert_eq!(times, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_stop_returns_driver_with_advanced_clock() {
        let (sender, receiver) = mpsc::channel();
        let scheduler = TickScheduler::spawn(fast_driver(), move |profile| {
            let _ = sender.send(profile.time());
        });

        // Let at least one tick happen
        receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        let driver = scheduler.stop().expect("worker finished cleanly");

        assert!(driver.time() >= 5.0);
    }

    #[test]
    fn test_pause_stops_deliveries() {
        let (sender, receiver) = mpsc::channel();
        let scheduler = TickScheduler::spawn(fast_driver(), move |profile| {
            let _ = sender.send(profile.time());
        });

        receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        scheduler.pause();

        // Drain anything already in flight, then expect silence
        while receiver.recv_timeout(Duration::from_millis(50)).is_ok() {}
        assert!(receiver.recv_timeout(Duration::from_millis(50)).is_err());

        scheduler.resume();
        assert!(receiver.recv_timeout(Duration::from_secs(5)).is_ok());

        scheduler.stop();
    }

    #[test]
    fn test_reset_rewinds_simulated_time() {
        let (sender, receiver) = mpsc::channel();
        let scheduler = TickScheduler::spawn(fast_driver(), move |profile| {
            let _ = sender.send(profile.time());
        });

        // Let the clock move forward a bit
        for _ in 0..5 {
            receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        }

        scheduler.reset();

        // After the reset is applied, delivered times start over near zero
        let mut saw_rewind = false;
        for _ in 0..20 {
            let t = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
            if t <= 10.0 {
                saw_rewind = true;
                break;
            }
        }
        scheduler.stop();

        assert!(saw_rewind, "clock never rewound after reset");
    }

    #[test]
    fn test_is_running_tracks_lifecycle() {
        let scheduler = TickScheduler::spawn(fast_driver(), |_| {});
        assert!(scheduler.is_running());
        scheduler.stop();
    }
}
