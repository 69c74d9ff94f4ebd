use chrono::{DateTime, Local};

use crate::cli::Cli;
use crate::color_scheme::Theme;
use crate::metrics::MetricEngine;

/// Main application state, owned by the driver loop and passed by
/// reference to the renderer.
pub struct App {
    pub engine: MetricEngine,
    pub theme: Theme,
    pub show_stats: bool,
    pub auto_scale: bool,
    pub should_quit: bool,
    /// Session start; the "Monitor Duration" field counts from here.
    pub started_at: DateTime<Local>,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        Self {
            engine: MetricEngine::new(cli.history),
            theme: Theme::from_flag(cli.dark_mode()),
            show_stats: cli.show_stats(),
            auto_scale: cli.auto_scale(),
            should_quit: false,
            started_at: Local::now(),
        }
    }

    /// Whole seconds since the monitor started.
    pub fn elapsed_secs(&self) -> i64 {
        Local::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}
