use ratatui::style::Color;

/// Slate-and-red palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub focus: Color,
    pub dimmed: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(2, 6, 23),     // #020617
            text: Color::Rgb(226, 232, 240),      // #E2E8F0
            focus: Color::Rgb(239, 68, 68),       // #EF4444
            dimmed: Color::Rgb(100, 116, 139),    // #64748B
            error: Color::Rgb(248, 113, 113),     // #F87171
        }
    }

    pub fn current() -> Self {
        Self::slate()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn focus() -> Color {
        Theme::current().focus
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}
