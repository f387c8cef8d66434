use crate::app::AppState;
use crate::components::Component;
use crate::events::Action;
use crate::ui::theme;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Biography pane: headshot placeholder above the about text
///
/// Renders nothing beyond its frame when the payload was missing or
/// incomplete; the warning was already logged when the load finished.
pub struct AboutPane {}

impl AboutPane {
    pub fn new() -> Self {
        Self {}
    }
}

impl Component for AboutPane {
    fn handle_key_events(&mut self, _key: KeyCode, _app: &mut AppState) -> Option<Action> {
        None
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" About ")
            .border_style(theme::pane_border(false));

        let Some(bio) = &app.bio else {
            f.render_widget(block, area);
            return;
        };

        let inner = block.inner(area);
        f.render_widget(block, area);

        // Headshot first, text after; same order as the page lays them out
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        let headshot = Paragraph::new(Line::from(Span::styled(
            bio.headshot.clone().unwrap_or_default(),
            theme::dim(),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::dim()),
        );
        f.render_widget(headshot, rows[0]);

        let about = Paragraph::new(bio.about_me.clone().unwrap_or_default())
            .style(theme::text())
            .wrap(Wrap { trim: false });
        f.render_widget(about, rows[1]);
    }
}
