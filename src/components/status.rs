use crate::app::AppState;
use crate::components::Component;
use crate::events::{Action, Focus, Mode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct StatusBar {}

impl StatusBar {
    pub fn new() -> Self {
        Self {}
    }
}

impl Component for StatusBar {
    fn handle_key_events(
        &mut self,
        _key: crossterm::event::KeyCode,
        _app: &mut AppState,
    ) -> Option<Action> {
        None
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let mode_info = match app.mode {
            Mode::Loading => ("LOADING", Color::Yellow, "Loading portfolio data..."),
            Mode::Normal => match app.focus {
                Focus::Cards => (
                    "NORMAL",
                    Color::Green,
                    "↑↓ cards | ←→ scroll | Enter spotlight | Tab form | '?' help | 'q' quit",
                ),
                Focus::Form => (
                    "FORM",
                    Color::Blue,
                    "Type to edit | ↑↓ field | Enter submit | Tab cards",
                ),
            },
            Mode::Help => ("HELP", Color::Yellow, "Esc or 'q' to close"),
        };

        let mode_span = Span::styled(
            format!(" {} ", mode_info.0),
            Style::default()
                .fg(Color::Black)
                .bg(mode_info.1)
                .add_modifier(Modifier::BOLD),
        );

        // Background activity indicators for the two independent loads
        let mut bg_spans: Vec<Span> = Vec::new();
        if app.is_loading_bio {
            bg_spans.push(Span::styled(
                " ⟳ Bio ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if app.is_loading_projects {
            bg_spans.push(Span::styled(
                " ⟳ Projects ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let notice_span = if let Some(notice) = &app.contact.notice {
            Span::styled(
                format!(" {notice} "),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("")
        };

        let help_text = Span::styled(
            format!(" {} ", mode_info.2),
            Style::default().fg(Color::DarkGray),
        );

        let mut spans = vec![mode_span, Span::raw(" ")];
        for span in bg_spans {
            spans.push(span);
        }
        spans.push(notice_span);
        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        spans.push(help_text);

        let status_bar =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));

        f.render_widget(status_bar, area);
    }
}
