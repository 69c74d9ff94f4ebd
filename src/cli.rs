//! Command-line interface.
//!
//! `-h` is taken by `--history`, so the automatic help short flag is
//! disabled and help is reachable via `--help` only. The show/hide
//! pairs use `overrides_with`: the flag given last wins.

use std::time::Duration;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "netchart",
    version,
    about = "Network traffic monitor with real-time charts",
    disable_help_flag = true
)]
pub struct Cli {
    /// Update interval in seconds
    #[arg(short = 'i', long, default_value_t = 1.0)]
    pub interval: f64,

    /// Number of data points to keep in history
    #[arg(short = 'h', long, default_value_t = 60)]
    pub history: usize,

    /// Show the statistics panel (default)
    #[arg(long, overrides_with = "no_stats")]
    pub stats: bool,

    /// Hide the statistics panel
    #[arg(long)]
    pub no_stats: bool,

    /// Auto-scale the y-axis with headroom above the peak (default)
    #[arg(long, overrides_with = "no_auto_scale")]
    pub auto_scale: bool,

    /// Fit the y-axis tightly to the data
    #[arg(long)]
    pub no_auto_scale: bool,

    /// Use the dark theme
    #[arg(long, overrides_with = "light")]
    pub dark: bool,

    /// Use the light theme (default)
    #[arg(long)]
    pub light: bool,

    /// Print help
    #[arg(long, action = ArgAction::HelpLong)]
    help: Option<bool>,
}

impl Cli {
    pub fn show_stats(&self) -> bool {
        !self.no_stats
    }

    pub fn auto_scale(&self) -> bool {
        !self.no_auto_scale
    }

    pub fn dark_mode(&self) -> bool {
        self.dark
    }

    /// Tick period. Clamped to a sane floor so `--interval 0` cannot
    /// spin the sampling loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs_f64(self.interval.max(0.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_documentation() {
        let cli = Cli::try_parse_from(["netchart"]).unwrap();
        assert_eq!(cli.interval, 1.0);
        assert_eq!(cli.history, 60);
        assert!(cli.show_stats());
        assert!(cli.auto_scale());
        assert!(!cli.dark_mode());
    }

    #[test]
    fn short_flags_and_negations_parse() {
        let cli =
            Cli::try_parse_from(["netchart", "-i", "0.5", "-h", "120", "--no-stats", "--dark"])
                .unwrap();
        assert_eq!(cli.interval, 0.5);
        assert_eq!(cli.history, 120);
        assert!(!cli.show_stats());
        assert!(cli.dark_mode());
    }

    #[test]
    fn last_flag_of_a_pair_wins() {
        let cli = Cli::try_parse_from(["netchart", "--no-stats", "--stats"]).unwrap();
        assert!(cli.show_stats());

        let cli = Cli::try_parse_from(["netchart", "--dark", "--light"]).unwrap();
        assert!(!cli.dark_mode());

        let cli = Cli::try_parse_from(["netchart", "--auto-scale", "--no-auto-scale"]).unwrap();
        assert!(!cli.auto_scale());
    }

    #[test]
    fn interval_floor_guards_busy_loop() {
        let cli = Cli::try_parse_from(["netchart", "-i", "0"]).unwrap();
        assert!((cli.tick_rate().as_secs_f64() - 0.1).abs() < 1e-9);
    }
}
