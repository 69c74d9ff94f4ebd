//! The bordered summary panel on the right side of the frame.
//!
//! The panel is built line by line as plain text so its geometry is
//! exact: every line fills the panel width in display columns (the
//! status glyphs are double-width) and the line count always equals the
//! chart height, padding with blank bordered rows or clipping content
//! as needed.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::fmt::{format_bytes, format_duration, format_speed};
use crate::metrics::MetricEngine;

pub fn draw_stats(f: &mut Frame, app: &App, area: Rect) {
    let lines = panel_lines(&app.engine, app.elapsed_secs(), area.width, area.height);
    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    f.render_widget(Paragraph::new(text).style(app.theme.panel_style()), area);
}

/// Build the panel as exactly `height` strings of `width` display
/// columns each. Degenerate areas (width < 2) render nothing.
pub(crate) fn panel_lines(
    engine: &MetricEngine,
    elapsed_secs: i64,
    width: u16,
    height: u16,
) -> Vec<String> {
    let height = height as usize;
    let width = width as usize;
    if height == 0 || width < 2 {
        return Vec::new();
    }
    let inner = width - 2;
    let top = format!("┌{}┐", "─".repeat(inner));
    if height == 1 {
        return vec![top];
    }

    let (total_tx, total_rx) = engine.total_transferred();
    let (peak_tx, peak_rx) = engine.peak_throughput();
    let (cur_tx, cur_rx) = engine.current_throughput();

    let mut content: Vec<String> = Vec::new();
    content.push(center("Network Summary", inner));
    content.push("═".repeat(inner));
    content.push(String::new());

    content.push(" Total Transferred:".into());
    content.push(format!("   ↑ {}", format_bytes(total_tx)));
    content.push(format!("   ↓ {}", format_bytes(total_rx)));
    content.push(String::new());

    content.push(" Peak Throughput:".into());
    content.push(format!("   ↑ {}", format_speed(peak_tx)));
    content.push(format!("   ↓ {}", format_speed(peak_rx)));
    content.push(String::new());

    content.push(" Current Throughput:".into());
    content.push(format!("   ↑ {}", format_speed(cur_tx)));
    content.push(format!("   ↓ {}", format_speed(cur_rx)));
    content.push(String::new());

    content.push(" Interface Details:".into());
    for series in engine.interfaces.iter().filter(|s| s.is_active()) {
        let status = if series.link_up { "🟢" } else { "🔴" };
        let (tx, rx) = series.latest().unwrap_or((0.0, 0.0));
        content.push(String::new());
        content.push(format!(" {} {}:", status, series.name));
        content.push(format!("   Current: ↑{}", format_speed(tx)));
        content.push(format!("           ↓{}", format_speed(rx)));
    }
    content.push(String::new());

    content.push(" Active Interfaces:".into());
    content.push(format!("   {}", engine.active_count()));
    content.push(String::new());

    content.push(" Monitor Duration:".into());
    content.push(format!("   {}", format_duration(elapsed_secs)));

    // Exactly `height` rows: top border + body + bottom border.
    let body_rows = height - 2;
    content.truncate(body_rows);
    while content.len() < body_rows {
        content.push(String::new());
    }

    let mut lines = Vec::with_capacity(height);
    lines.push(top);
    lines.extend(content.iter().map(|c| format!("│{}│", clip_pad(c, inner))));
    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines
}

/// Pad (or clip) `text` to exactly `cols` display columns. A
/// double-width glyph that would straddle the boundary is dropped and
/// replaced by padding, so the border stays aligned.
fn clip_pad(text: &str, cols: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > cols {
            break;
        }
        out.push(ch);
        used += w;
    }
    for _ in used..cols {
        out.push(' ');
    }
    out
}

fn center(text: &str, cols: usize) -> String {
    let w = text.width();
    if w >= cols {
        return text.to_string();
    }
    // Right side is filled by clip_pad.
    format!("{}{}", " ".repeat((cols - w) / 2), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::counters::{Counters, Snapshot};
    use unicode_width::UnicodeWidthStr;

    fn engine_with_traffic() -> MetricEngine {
        let mut engine = MetricEngine::new(60);
        let snap = |sent: u64, recv: u64| -> Snapshot {
            [
                ("eth0".to_string(), Counters { sent, recv }),
                ("wlan0".to_string(), Counters { sent, recv }),
            ]
            .into_iter()
            .collect()
        };
        let a = snap(0, 0);
        let b = snap(2048, 4096);
        engine.update(&b, &a);
        engine.refresh_link_status(|name| name == "eth0");
        engine
    }

    #[test]
    fn line_count_matches_height_at_two_sizes() {
        let engine = engine_with_traffic();
        for (w, h) in [(30u16, 20u16), (25, 12)] {
            let lines = panel_lines(&engine, 0, w, h);
            assert_eq!(lines.len(), h as usize, "height {h}");
        }
    }

    #[test]
    fn every_line_fills_the_panel_width() {
        let engine = engine_with_traffic();
        for (w, h) in [(30u16, 40u16), (24, 14)] {
            for line in panel_lines(&engine, 0, w, h) {
                assert_eq!(line.width(), w as usize, "line {line:?}");
            }
        }
    }

    #[test]
    fn status_glyphs_keep_borders_aligned() {
        let engine = engine_with_traffic();
        let lines = panel_lines(&engine, 0, 30, 40);
        let up = lines.iter().find(|l| l.contains('🟢')).unwrap();
        let down = lines.iter().find(|l| l.contains('🔴')).unwrap();
        assert!(up.contains("eth0"));
        assert!(down.contains("wlan0"));
        for line in [up, down] {
            assert_eq!(line.width(), 30);
            assert!(line.ends_with('│'));
        }
    }

    #[test]
    fn summary_fields_are_present_in_order() {
        let engine = engine_with_traffic();
        let lines = panel_lines(&engine, 3661, 30, 40);
        let joined = lines.join("\n");
        let order = [
            "Network Summary",
            "Total Transferred:",
            "Peak Throughput:",
            "Current Throughput:",
            "Interface Details:",
            "Active Interfaces:",
            "Monitor Duration:",
            "01:01:01",
        ];
        let mut last = 0;
        for needle in order {
            let pos = joined[last..]
                .find(needle)
                .unwrap_or_else(|| panic!("{needle} missing or out of order"));
            last += pos;
        }
        // Both interfaces produced one 2 KB-sample; totals sum them.
        assert!(joined.contains("4.00 KB"));
    }

    #[test]
    fn short_panel_clips_instead_of_overflowing() {
        let engine = engine_with_traffic();
        let lines = panel_lines(&engine, 0, 30, 8);
        assert_eq!(lines.len(), 8);
        assert!(lines.last().unwrap().starts_with('└'));
    }

    #[test]
    fn empty_engine_still_renders_a_full_panel() {
        let engine = MetricEngine::new(60);
        let lines = panel_lines(&engine, 0, 28, 20);
        assert_eq!(lines.len(), 20);
        let joined = lines.join("\n");
        assert!(joined.contains("Active Interfaces:"));
        assert!(joined.contains("   0"));
    }
}
