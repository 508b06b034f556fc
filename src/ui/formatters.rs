use colored::{Color, ColoredString, Colorize};

/// Color used for separators and the footer
pub const GRAY: Color = Color::BrightBlack;

/// Width of the dashed separator line
pub const SEPARATOR_WIDTH: usize = 48;

/// Color and weight applied to a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
}

impl Style {
    pub const fn plain(color: Color) -> Self {
        Self { color, bold: false }
    }

    pub const fn bold(color: Color) -> Self {
        Self { color, bold: true }
    }
}

/// Wrap `text` in the given style
pub fn styled(text: &str, style: Style) -> ColoredString {
    let colored = text.color(style.color);
    if style.bold {
        colored.bold()
    } else {
        colored
    }
}

/// Bold dashed line in `color`
pub fn separator(color: Color) -> ColoredString {
    styled(&"-".repeat(SEPARATOR_WIDTH), Style::bold(color))
}
