//! Contact form with field validation and a live character counter
//!
//! The form never transmits anything; a valid submission just shows an
//! acknowledgment in the status line. Error messages come from
//! [`crate::validate`] and are rewritten on every submit attempt.

use crate::app::AppState;
use crate::components::Component;
use crate::events::{Action, Focus};
use crate::ui::theme;
use crate::validate::{COUNTER_LIMIT, ValidationReport, trimmed_len};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{Input, backend::crossterm::EventHandler};

/// Which form field currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Message,
            Self::Message => Self::Email,
        }
    }
}

/// Mutable state of the contact form
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub email: Input,
    pub message: Input,
    pub active_field: ContactField,
    /// Errors currently shown under the fields; cleared on every submit
    pub displayed_errors: ValidationReport,
    /// Success acknowledgment after a valid submission
    pub notice: Option<String>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed length of the message buffer, as shown by the counter
    pub fn message_chars(&self) -> usize {
        trimmed_len(self.message.value())
    }

    /// Whether the counter should render in the warning color
    pub fn over_counter_limit(&self) -> bool {
        self.message_chars() > COUNTER_LIMIT
    }
}

pub struct ContactForm {}

impl ContactForm {
    pub fn new() -> Self {
        Self {}
    }
}

impl Component for ContactForm {
    fn handle_key_events(&mut self, key: KeyCode, app: &mut AppState) -> Option<Action> {
        match key {
            KeyCode::Up => Some(Action::FormPreviousField),
            KeyCode::Down => Some(Action::FormNextField),
            KeyCode::Enter => Some(Action::SubmitContactForm),
            _ => {
                let active = match app.contact.active_field {
                    ContactField::Email => &app.contact.email,
                    ContactField::Message => &app.contact.message,
                };
                let mut input = active.clone();
                if input
                    .handle_event(&crossterm::event::Event::Key(key.into()))
                    .is_some()
                {
                    let value = input.value().to_string();
                    match app.contact.active_field {
                        ContactField::Email => Some(Action::UpdateEmailInput(value)),
                        ContactField::Message => Some(Action::UpdateMessageInput(value)),
                    }
                } else {
                    None
                }
            }
        }
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let focused = app.focus == Focus::Form;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Contact ")
            .border_style(theme::pane_border(focused));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // email
                Constraint::Length(1), // email error
                Constraint::Length(1), // message
                Constraint::Length(1), // message error
                Constraint::Length(1), // counter
            ])
            .split(inner);

        let field_line = |label: &str, input: &Input, active: bool| {
            let marker = if focused && active { "▶ " } else { "  " };
            Line::from(vec![
                Span::raw(marker.to_string()),
                Span::styled(format!("{label}: "), theme::label(focused && active)),
                Span::raw(input.value().to_string()),
            ])
        };

        let email_active = app.contact.active_field == ContactField::Email;
        f.render_widget(
            Paragraph::new(field_line("Email", &app.contact.email, email_active)),
            rows[0],
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                app.contact.displayed_errors.email_error.clone(),
                theme::error(),
            ))),
            rows[1],
        );

        f.render_widget(
            Paragraph::new(field_line("Message", &app.contact.message, !email_active)),
            rows[2],
        );
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                app.contact.displayed_errors.message_error.clone(),
                theme::error(),
            ))),
            rows[3],
        );

        let chars = app.contact.message_chars();
        let counter_style = if app.contact.over_counter_limit() {
            theme::warning()
        } else {
            theme::dim()
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("Characters: {chars}/{COUNTER_LIMIT}"),
                counter_style,
            ))),
            rows[4],
        );

        // Cursor on the active field while the form has focus
        if focused {
            let (row, input) = if email_active {
                (rows[0], &app.contact.email)
            } else {
                (rows[2], &app.contact.message)
            };
            let label_width = if email_active { 9 } else { 11 }; // "▶ Email: " / "▶ Message: "
            let x = row.x + label_width + input.visual_cursor() as u16;
            f.set_cursor_position((x.min(row.x + row.width.saturating_sub(1)), row.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_reflects_trimmed_length() {
        let mut state = ContactFormState::new();
        state.message = state.message.clone().with_value("  hello  ".to_string());
        assert_eq!(state.message_chars(), 5);
        assert!(!state.over_counter_limit());
    }

    #[test]
    fn counter_flags_over_limit_input() {
        let mut state = ContactFormState::new();
        state.message = state.message.clone().with_value("a".repeat(COUNTER_LIMIT));
        assert!(!state.over_counter_limit());

        state.message = state.message.clone().with_value("a".repeat(COUNTER_LIMIT + 1));
        assert!(state.over_counter_limit());
    }

    #[test]
    fn field_cycle_covers_both_fields() {
        assert_eq!(ContactField::Email.next(), ContactField::Message);
        assert_eq!(ContactField::Message.next(), ContactField::Email);
    }
}
