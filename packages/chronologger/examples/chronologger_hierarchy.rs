//! Example of timers arranged into a hierarchy in the process-wide root repository.
//!
//! Each timer is registered under a parent timer and every tick it captures is recorded
//! against its own node, so the whole run can be printed as one report at the end.
//!
//! Run with: `cargo run --example chronologger_hierarchy`.

use std::thread;
use std::time::Duration;

use chronologger::{Error, TimeUnit, Timer, global};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut pipeline = Timer::builder()
        .name("pipeline")
        .log_on_exit(true)
        .build_global()?;

    let mut extract = Timer::builder()
        .name("extract")
        .parent("pipeline")
        .unit(TimeUnit::Milliseconds)
        .build_global()?;

    let mut transform = Timer::builder()
        .name("transform")
        .parent("pipeline")
        .unit(TimeUnit::Milliseconds)
        .log_on_exit(true)
        .verbose_log(true)
        .build_global()?;

    {
        let mut pipeline_guard = pipeline.scope()?;

        let (records, _) = extract.measure(|| {
            thread::sleep(Duration::from_millis(10));
            vec!["a", "b", "c"]
        })?;

        pipeline_guard.mark("extracted")?;

        {
            let mut guard = transform.scope()?;

            for record in &records {
                thread::sleep(Duration::from_millis(5));
                guard.mark(format!("transformed {record}"))?;
            }
        }
    }

    global::show_time();

    Ok(())
}
