//! Shared styles for the Folio panes
//!
//! Components hardcode one-off colors where it reads better, but the styles
//! with a behavioral contract live here: the character counter's warning
//! color, validation error text, and the focused-pane border.

use ratatui::style::{Color, Modifier, Style};

/// Accent for titles, highlights, and the active field
pub fn accent() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Default body text
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// De-emphasized detail lines (image paths, counters in range)
pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Inline validation error text
pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

/// Character counter past its display limit
pub fn warning() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Border of a pane, brighter when it has keyboard focus
pub fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Field label inside the contact form
pub fn label(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}
