use anyhow::{bail, Context, Result};
use log::{debug, info};
use tenor::math::Interval;

const USAGE: &str = "Usage: tenor <value> <interval>...\n\nExample: tenor 2.5 \"[0, 10)\" \"(2.5, 3]\"";

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (value, intervals) = match args.split_first() {
        Some((value, intervals)) if !intervals.is_empty() => (value, intervals),
        _ => bail!("{}", USAGE),
    };

    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value '{}'", value))?;
    debug!("Checking {} against {} interval(s)", value, intervals.len());

    for text in intervals {
        let interval: Interval<f64> = text
            .parse()
            .with_context(|| format!("Invalid interval '{}'", text))?;

        if interval.is_empty() {
            info!("{} is empty", interval);
        }

        println!(
            "{} in {}: {} (clamped: {})",
            value,
            interval,
            interval.contains(&value),
            interval.clamp(value)
        );
    }

    Ok(())
}
