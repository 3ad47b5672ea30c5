use ratatui::style::Color;

/// Fixed palette; hop carries no configuration system, so the defaults
/// are the theme.
pub struct Theme {
    pub accent: Color,
    pub border: Color,
    pub muted: Color,
    pub highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Magenta,
            border: Color::DarkGray,
            muted: Color::DarkGray,
            highlight_fg: Color::Magenta,
        }
    }
}
