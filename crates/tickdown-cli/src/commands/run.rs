//! Live terminal countdown.
//!
//! Drives the engine from a 1 Hz tokio interval on a current-thread
//! runtime, rewriting the display in place (or emitting JSON events with
//! `--json`).

use std::io::Write;
use std::time::Duration;

use tickdown_core::{parse_duration, CoreError, CountdownEngine, Event, Result};

pub fn run(duration: &str, json: bool) -> Result<()> {
    let secs = parse_duration(duration)?;
    if secs == 0 {
        return Err(CoreError::Custom("duration must be positive".into()));
    }

    let mut engine = CountdownEngine::new();
    let started = engine
        .start(secs)
        .ok_or_else(|| CoreError::Custom("engine refused to start".into()))?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    rt.block_on(async move {
        emit(&started, json)?;
        if !json {
            print_inline(&engine.display())?;
        }

        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.tick().await; // First tick completes immediately.
        loop {
            interval.tick().await;
            match engine.tick() {
                Some(event @ Event::Finished { .. }) => {
                    emit(&event, json)?;
                    if !json {
                        print_inline(&engine.display())?;
                        println!();
                    }
                    return Ok(());
                }
                Some(event) => {
                    emit(&event, json)?;
                    if !json {
                        print_inline(&engine.display())?;
                    }
                }
                None => return Ok(()),
            }
        }
    })
}

fn emit(event: &Event, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}

fn print_inline(display: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout();
    write!(out, "\r{display}")?;
    out.flush()
}
