//! The live TX/RX line chart, drawn with ratatui's `Chart` widget.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::app::App;

/// One interface's plot data, owned for the lifetime of a draw call.
struct PlotSeries {
    tx_label: String,
    rx_label: String,
    tx_color: Color,
    rx_color: Color,
    tx_points: Vec<(f64, f64)>,
    rx_points: Vec<(f64, f64)>,
}

pub fn draw_chart(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let theme = &app.theme;

    let plots: Vec<PlotSeries> = engine
        .interfaces
        .iter()
        .filter(|s| s.is_active())
        .enumerate()
        .map(|(idx, series)| {
            let (tx_color, rx_color) = series_colors(&theme.palette, idx);
            PlotSeries {
                tx_label: format!("{} (TX)", series.name),
                rx_label: format!("{} (RX)", series.name),
                tx_color,
                rx_color,
                tx_points: points(&series.time_index, &series.sent_history),
                rx_points: points(&series.time_index, &series.recv_history),
            }
        })
        .collect();

    let datasets: Vec<Dataset> = plots
        .iter()
        .flat_map(|p| {
            [
                dataset(p.tx_label.clone(), p.tx_color, &p.tx_points),
                dataset(p.rx_label.clone(), p.rx_color, &p.rx_points),
            ]
        })
        .collect();

    let x_max = engine.history_size as f64;
    let y_bounds = y_axis_bounds(engine.max_observed_speed(), app.auto_scale);

    let x_labels: Vec<String> = [0.0, x_max / 2.0, x_max]
        .iter()
        .map(|v| format!("{v:.0}"))
        .collect();
    let y_labels: Vec<String> = [0.0, y_bounds[1] / 2.0, y_bounds[1]]
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::bordered()
                .title("Network Traffic Monitor")
                .title_style(theme.title_style())
                .border_style(theme.border_style())
                .style(Style::default().bg(theme.background)),
        )
        .x_axis(
            Axis::default()
                .title(format!("Seconds ago (last {}s)", engine.history_size))
                .style(theme.axis_style())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Speed (KB/s)")
                .style(theme.axis_style())
                .bounds(y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn dataset<'a>(label: String, color: Color, data: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(label)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

fn points(time_index: &[usize], history: &[f64]) -> Vec<(f64, f64)> {
    time_index
        .iter()
        .zip(history)
        .map(|(&t, &v)| (t as f64, v))
        .collect()
}

/// Y range for the chart. Auto-scale leaves 10% headroom above the
/// largest sample in any window; otherwise the range fits the data
/// tightly. Never below 1.0 so an idle link keeps a readable axis.
pub(crate) fn y_axis_bounds(max_speed: f64, auto_scale: bool) -> [f64; 2] {
    let upper = if auto_scale {
        max_speed * 1.1
    } else {
        max_speed
    };
    [0.0, upper.max(1.0)]
}

/// TX/RX colors for the interface at `idx` (insertion order): adjacent
/// palette entries, advancing two per interface, wrapping at six.
pub(crate) fn series_colors(palette: &[Color; 6], idx: usize) -> (Color, Color) {
    (palette[(2 * idx) % 6], palette[(2 * idx + 1) % 6])
}
