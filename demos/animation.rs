//! Animated Recomputation
//!
//! Runs the tick scheduler for a few wall-clock seconds, printing one line
//! per recomputed profile, then pauses, resumes and stops — the same
//! lifecycle a charting UI would drive.
//!
//! ```bash
//! RUST_LOG=info cargo run --example animation
//! ```

use std::error::Error;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use fick_rs::driver::{AnimationDriver, DriverConfig, TickScheduler};
use fick_rs::physics::{EvaluatorConfig, SlabParameters};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Fickian Diffusion: Animated Recomputation ===\n");

    let params = SlabParameters::default();
    let driver_config = DriverConfig::default()
        .with_time_step(60.0) // one simulated minute per tick
        .with_tick_interval(Duration::from_millis(100));

    println!("Driver:");
    println!("  Simulated step: {} s per tick", driver_config.time_step);
    println!("  Tick interval: {:?}", driver_config.tick_interval);
    println!("  Horizon: {} s ({:?})\n", driver_config.horizon, driver_config.policy);

    let driver = AnimationDriver::new(params, EvaluatorConfig::default(), driver_config)?;

    let (sender, receiver) = mpsc::channel();
    let scheduler = TickScheduler::spawn(driver, move |profile| {
        let _ = sender.send(profile);
    });

    // Consume two seconds of animation
    for _ in 0..20 {
        let profile = receiver.recv_timeout(Duration::from_secs(5))?;
        println!(
            "t = {:>6.0} s  surface {:.3}  mid {:.3}  sealed {:.3}",
            profile.time(),
            profile.surface().unwrap().concentration,
            profile.samples()[profile.len() / 2].concentration,
            profile.deepest().unwrap().concentration,
        );
    }

    println!("\npausing for one second...");
    scheduler.pause();
    thread::sleep(Duration::from_secs(1));

    println!("resuming...\n");
    scheduler.resume();
    for _ in 0..5 {
        let profile = receiver.recv_timeout(Duration::from_secs(5))?;
        println!("t = {:>6.0} s (resumed)", profile.time());
    }

    let driver = scheduler.stop().expect("scheduler stopped cleanly");
    println!("\nstopped at simulated t = {} s", driver.time());

    Ok(())
}
