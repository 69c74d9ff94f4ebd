pub mod chart;
pub mod stats;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::App;

/// Fixed margin kept clear of content: room for chart borders/labels.
const MARGIN_COLS: u16 = 5;
const MARGIN_ROWS: u16 = 3;

/// Share of the content width given to the chart when the stats panel
/// is visible.
const CHART_WIDTH_RATIO: f32 = 0.75;

/// Render the complete UI: chart on the left, stats panel on the right.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let content = Rect {
        x: area.x,
        y: area.y,
        width: area.width.saturating_sub(MARGIN_COLS),
        height: area.height.saturating_sub(MARGIN_ROWS),
    };
    if content.width == 0 || content.height == 0 {
        return;
    }

    if !app.show_stats {
        chart::draw_chart(f, app, content);
        return;
    }

    let chart_width = (content.width as f32 * CHART_WIDTH_RATIO) as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(chart_width),
            Constraint::Length(content.width - chart_width),
        ])
        .split(content);

    chart::draw_chart(f, app, chunks[0]);
    stats::draw_stats(f, app, chunks[1]);
}
