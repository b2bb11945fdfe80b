use std::time::Duration;

use clap::Parser;

use crate::constants::DEFAULT_TICK_MS;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    /// Seed for the piece sequence [default: random]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between gravity steps
    #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
}

impl Cli {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["blockfall"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.tick_interval(), Duration::from_millis(DEFAULT_TICK_MS));
    }

    #[test]
    fn seed_and_tick() {
        let cli = Cli::try_parse_from(["blockfall", "--seed", "9", "--tick-ms", "120"]).unwrap();
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.tick_ms, 120);
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(Cli::try_parse_from(["blockfall", "--tick-ms", "0"]).is_err());
    }
}
