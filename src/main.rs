//! netchart — a real-time network traffic monitor for the terminal.
//!
//! Features:
//!   - Live TX/RX line chart per interface, color-paired
//!   - Rolling history window with configurable length
//!   - Summary panel: totals, peaks, current throughput, link status
//!   - Light & dark themes
//!
//! Press q, Esc or Ctrl-C to quit.

mod app;
mod cli;
mod color_scheme;
mod fmt;
mod metrics;
mod system;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;
use cli::Cli;
use system::counters::CounterSource;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the monitor
    let result = run_app(&mut terminal, &cli);

    // Restore terminal on every exit path before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Exiting...");
    Ok(())
}

/// Main sampling/render loop: draw → poll input → on tick elapsed,
/// snapshot counters and fold them into the rolling state.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, cli: &Cli) -> Result<()> {
    let mut app = App::new(cli);
    let mut source = CounterSource::new();
    let tick_rate = cli.tick_rate();

    // Speed needs two observations; prime the previous snapshot so the
    // first tick already yields samples.
    let mut previous = source.snapshot();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit {
            return Ok(());
        }

        // Short poll timeout keeps quit handling responsive between ticks
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only act on Press: Windows fires Press and Release
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            let current = source.snapshot();
            app.engine.update(&current, &previous);
            app.engine.refresh_link_status(|name| source.is_up(name));
            previous = current;
            last_tick = Instant::now();
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        _ => {}
    }
}
