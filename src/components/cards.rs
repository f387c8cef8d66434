use crate::app::AppState;
use crate::carousel::{Axis, ScrollDirection};
use crate::components::Component;
use crate::events::{Action, Focus};
use crate::ui::theme;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct CardStrip {}

impl CardStrip {
    pub fn new() -> Self {
        Self {}
    }

    /// How many cards fit in the pane along the scroll axis
    fn visible_count(axis: Axis, area: Rect) -> usize {
        let extent = match axis {
            Axis::Vertical => area.height / 5,
            Axis::Horizontal => area.width / 24,
        };
        (extent as usize).max(1)
    }
}

impl Component for CardStrip {
    fn handle_key_events(&mut self, key: KeyCode, _app: &mut AppState) -> Option<Action> {
        match key {
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNextCard),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPreviousCard),
            KeyCode::Left | KeyCode::Char('h') => {
                Some(Action::ScrollCards(ScrollDirection::Back))
            }
            KeyCode::Right | KeyCode::Char('l') => {
                Some(Action::ScrollCards(ScrollDirection::Forward))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateCard),
            _ => None,
        }
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let focused = app.focus == Focus::Cards;
        let axis = app.carousel.axis();
        let title = format!(" Projects ({}) ", app.projects.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme::pane_border(focused));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if app.projects.is_empty() {
            return;
        }

        let first = app.carousel.displayed_index(app.projects.len());
        let count = Self::visible_count(axis, inner).min(app.projects.len() - first);
        let highlighted = app.cards_state.selected();

        let constraints: Vec<Constraint> = match axis {
            Axis::Vertical => (0..count).map(|_| Constraint::Length(5)).collect(),
            Axis::Horizontal => (0..count).map(|_| Constraint::Length(24)).collect(),
        };
        let slots = Layout::default()
            .direction(match axis {
                Axis::Vertical => Direction::Vertical,
                Axis::Horizontal => Direction::Horizontal,
            })
            .constraints(constraints)
            .split(inner);

        for (slot, offset) in slots.iter().zip(0..count) {
            let index = first + offset;
            let project = &app.projects[index];
            let is_highlighted = highlighted == Some(index);

            let name_style = if is_highlighted {
                theme::accent().add_modifier(Modifier::BOLD)
            } else {
                theme::text()
            };
            let border = if is_highlighted && focused {
                theme::accent()
            } else {
                theme::dim()
            };

            let card = Paragraph::new(vec![
                Line::from(Span::styled(project.project_name.clone(), name_style)),
                Line::from(Span::raw(project.short_description.clone())),
                Line::from(Span::styled(
                    project.card_image_or_default().to_string(),
                    theme::dim(),
                )),
            ])
            .block(Block::default().borders(Borders::ALL).border_style(border))
            .wrap(Wrap { trim: true });

            f.render_widget(card, *slot);
        }
    }
}
