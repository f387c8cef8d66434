//! Spotlight pane for the selected project
//!
//! Holds the derived display fields of whichever card was activated last.
//! Cards go through [`SpotlightState::update`] rather than poking at the
//! pane directly, so exactly one project is spotlighted at a time.

use crate::app::AppState;
use crate::components::Component;
use crate::data::Project;
use crate::events::Action;
use crate::ui::theme;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Link label shown under the spotlight description
pub const LINK_LABEL: &str = "Click here to see more...";

/// Display fields of the currently spotlighted project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotlightState {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub image: String,
}

impl SpotlightState {
    /// Overwrite the spotlight with a project's long-form fields
    pub fn update(&mut self, project: &Project) {
        self.title = project.project_name.clone();
        self.description = project.long_description.clone();
        self.link = project.url.clone();
        self.image = project.spotlight_image_or_default().to_string();
    }
}

pub struct SpotlightPane {}

impl SpotlightPane {
    pub fn new() -> Self {
        Self {}
    }
}

impl Component for SpotlightPane {
    fn handle_key_events(&mut self, _key: KeyCode, _app: &mut AppState) -> Option<Action> {
        None
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Spotlight ")
            .border_style(theme::pane_border(false));

        let Some(spotlight) = &app.spotlight else {
            f.render_widget(block, area);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                spotlight.title.clone(),
                theme::accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.push(Line::from(spotlight.description.clone()));
        lines.push(Line::from(""));

        if let Some(url) = &spotlight.link {
            lines.push(Line::from(vec![
                Span::styled(LINK_LABEL, theme::accent().add_modifier(Modifier::UNDERLINED)),
                Span::raw("  "),
                Span::styled(url.clone(), theme::dim()),
            ]));
        }
        lines.push(Line::from(Span::styled(
            format!("backdrop: {}", spotlight.image),
            theme::dim(),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(Style::default())
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEFAULT_SPOTLIGHT_IMAGE;

    fn sample_project() -> Project {
        serde_json::from_str(
            r#"{
                "project_name": "Alpha",
                "long_description": "The full story of Alpha",
                "url": "https://example.com/alpha",
                "spotlight_image": "images/alpha_spotlight.webp"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn update_overwrites_all_display_fields() {
        let mut spotlight = SpotlightState::default();
        spotlight.update(&sample_project());

        assert_eq!(spotlight.title, "Alpha");
        assert_eq!(spotlight.description, "The full story of Alpha");
        assert_eq!(spotlight.link.as_deref(), Some("https://example.com/alpha"));
        assert_eq!(spotlight.image, "images/alpha_spotlight.webp");
    }

    #[test]
    fn update_falls_back_for_missing_optionals() {
        let bare: Project = serde_json::from_str(r#"{"project_name": "Bare"}"#).unwrap();
        let mut spotlight = SpotlightState::default();
        spotlight.update(&sample_project());
        spotlight.update(&bare);

        assert_eq!(spotlight.title, "Bare");
        assert_eq!(spotlight.description, "");
        assert_eq!(spotlight.link, None);
        assert_eq!(spotlight.image, DEFAULT_SPOTLIGHT_IMAGE);
    }
}
