//! Basic example of ticks, periods and a standalone timer.
//!
//! Shows how to:
//! - capture ticks in different units and subtract them
//! - use a timer with intermediate marks
//! - log the elapsed time of a timer when it stops
//!
//! Run with: `cargo run --example chronologger_basic`.

use std::thread;
use std::time::Duration;

use chronologger::{Clock, Error, TimeUnit, Timer};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().init();

    let clock = Clock::new();

    // Ticks keep their own unit; periods reconcile units when read.
    let start = clock.tick("start");
    thread::sleep(Duration::from_millis(15));
    let end = clock.tick_in("end", TimeUnit::Nanoseconds);

    let period = &end - &start;
    println!("{period}");
    println!("{}", period.to(TimeUnit::Milliseconds));
    println!();

    let mut timer = Timer::builder()
        .name("download")
        .description("fetches and unpacks an archive")
        .unit(TimeUnit::Milliseconds)
        .log_on_exit(true)
        .build();

    timer.start()?;
    thread::sleep(Duration::from_millis(20));
    timer.mark("fetched")?;
    thread::sleep(Duration::from_millis(10));
    timer.stop()?;

    println!("{timer}");

    Ok(())
}
