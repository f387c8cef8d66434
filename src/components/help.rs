use crate::app::AppState;
use crate::components::Component;
use crate::events::Action;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub struct Help {}

impl Help {
    pub fn new() -> Self {
        Self {}
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Component for Help {
    fn handle_key_events(&mut self, key: KeyCode, _app: &mut AppState) -> Option<Action> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::EnterNormalMode),
            _ => None,
        }
    }

    fn draw(&mut self, f: &mut Frame, _app: &mut AppState, area: Rect) {
        let popup_area = Self::centered_rect(70, 75, area);

        f.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(popup_area);

        let title = Block::default()
            .title(" Folio - Portfolio Viewer ")
            .title_alignment(Alignment::Center)
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(title, chunks[0]);

        let help_lines = vec![
            Line::from(vec![Span::styled(
                "Projects",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ↑↓ / j k     ", Style::default().fg(Color::Cyan)),
                Span::raw("Move the card highlight"),
            ]),
            Line::from(vec![
                Span::styled("  ←→ / h l     ", Style::default().fg(Color::Cyan)),
                Span::raw("Scroll the carousel one card"),
            ]),
            Line::from(vec![
                Span::styled("  Enter / Space ", Style::default().fg(Color::Cyan)),
                Span::raw("Spotlight the highlighted card"),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Contact Form",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Tab           ", Style::default().fg(Color::Cyan)),
                Span::raw("Switch between cards and form"),
            ]),
            Line::from(vec![
                Span::styled("  ↑↓            ", Style::default().fg(Color::Cyan)),
                Span::raw("Switch between email and message"),
            ]),
            Line::from(vec![
                Span::styled("  Enter         ", Style::default().fg(Color::Cyan)),
                Span::raw("Validate and submit"),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "General",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ?             ", Style::default().fg(Color::Cyan)),
                Span::raw("Toggle this help"),
            ]),
            Line::from(vec![
                Span::styled("  q / Ctrl+C    ", Style::default().fg(Color::Cyan)),
                Span::raw("Quit"),
            ]),
        ];

        let help = Paragraph::new(help_lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(help, chunks[1]);
    }
}
