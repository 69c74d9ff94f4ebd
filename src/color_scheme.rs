use ratatui::style::{Color, Modifier, Style};

/// Colors for the two supported chart themes.
///
/// The six-entry palette is cycled by interface insertion order, TX and
/// RX of one interface taking adjacent entries.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub title: Color,
    pub axis: Color,
    pub border: Color,
    pub palette: [Color; 6],
}

impl Theme {
    /// Default theme for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Reset,
            title: Color::Blue,
            axis: Color::DarkGray,
            border: Color::DarkGray,
            palette: [
                Color::Red,
                Color::Blue,
                Color::Green,
                Color::Yellow,
                Color::Magenta,
                Color::Cyan,
            ],
        }
    }

    /// High-contrast variant for dark terminals (`--dark`).
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            text: Color::Gray,
            title: Color::LightCyan,
            axis: Color::Gray,
            border: Color::Gray,
            palette: [
                Color::LightRed,
                Color::LightBlue,
                Color::LightGreen,
                Color::LightYellow,
                Color::LightMagenta,
                Color::LightCyan,
            ],
        }
    }

    pub fn from_flag(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn panel_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn axis_style(&self) -> Style {
        Style::default().fg(self.axis)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
