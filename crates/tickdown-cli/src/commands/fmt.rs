use tickdown_core::{format_hms, parse_duration, Result};

pub fn run(duration: &str) -> Result<()> {
    let secs = parse_duration(duration)?;
    println!("{}", format_hms(secs));
    Ok(())
}
