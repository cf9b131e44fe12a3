use auction_countdown::*;

use anyhow::Result;
use clap::Parser;
use domain::{parse_instant, Clock, FixedClock, SystemClock};

/// Print the remaining time until an end date.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// End date-time (ISO-8601)
    #[arg(short, long)]
    end: Option<String>,

    /// Reference "now" (ISO-8601); defaults to the system clock
    #[arg(short, long)]
    now: Option<String>,

    /// Text shown when nothing remains
    #[arg(short, long, default_value = "انتهى")]
    placeholder: String,
}

/// The line to print: remaining time, or the placeholder.
fn run(args: &Args) -> Result<String> {
    let remaining = match &args.now {
        Some(text) => {
            let clock = FixedClock(parse_instant(text)?);
            time_remaining_with(args.end.as_deref(), &clock)?
        }
        None => time_remaining(args.end.as_deref(), SystemClock.now())?,
    };

    Ok(remaining.unwrap_or_else(|| args.placeholder.clone()))
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let args = Args::parse();
    println!("{}", run(&args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("countdown").chain(argv.iter().copied()))
    }

    #[test]
    fn unreadable_end_is_an_error() {
        let err = run(&args(&["--end", "garbage"])).unwrap_err();
        assert!(err.downcast_ref::<CountdownError>().is_some());
    }

    #[test]
    fn unreadable_now_is_an_error() {
        assert!(run(&args(&["--end", "2026-01-01T13:00:00", "--now", "soon"])).is_err());
    }

    #[test]
    fn past_end_prints_placeholder() {
        assert_eq!(run(&args(&["--end", "2001-01-01T00:00:00Z"])).unwrap(), "انتهى");
        assert_eq!(
            run(&args(&["--end", "2001-01-01T00:00:00Z", "--placeholder", "closed"])).unwrap(),
            "closed"
        );
    }

    #[test]
    fn missing_end_prints_placeholder() {
        assert_eq!(run(&args(&[])).unwrap(), "انتهى");
    }

    #[test]
    fn fixed_now_formats_remaining() {
        let out = run(&args(&[
            "--end",
            "2026-01-01T13:00:00",
            "--now",
            "2025-12-30T13:00:00",
        ]))
        .unwrap();
        assert_eq!(out, "2 أيام");
    }
}
