//! Application state management
//!
//! This module defines the core application state for Folio: the loaded
//! portfolio data, the carousel and card highlight, the spotlight, and the
//! contact form. State changes flow through [`reducer`].

use crate::carousel::Carousel;
use crate::components::{contact::ContactFormState, spotlight::SpotlightState};
use crate::data::{Bio, Project};
use crate::events::{Action, Focus, Mode};
use ratatui::widgets::ListState;

/// Represents the complete state of the Folio application
///
/// The two data sections load independently: each has its own loading flag
/// and its own slice of state, so a failed bio load never affects the
/// project strip and vice versa.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Whether the biography resource is still loading
    pub is_loading_bio: bool,
    /// Whether the projects resource is still loading
    pub is_loading_projects: bool,
    /// Current application mode
    pub mode: Mode,
    /// Pane that receives keyboard input
    pub focus: Focus,
    /// Biography payload, present only when renderable
    pub bio: Option<Bio>,
    /// Ordered project records; order is display and carousel order
    pub projects: Vec<Project>,
    /// Highlight position in the card strip
    pub cards_state: ListState,
    /// Scroll position over the card strip
    pub carousel: Carousel,
    /// Currently spotlighted project, if any card has been activated
    pub spotlight: Option<SpotlightState>,
    /// Contact form buffers, errors, and submit notice
    pub contact: ContactFormState,
}

impl AppState {
    /// Build the initial state, binding the carousel axis to the viewport
    pub fn new(viewport_cols: u16) -> Self {
        Self {
            should_quit: false,
            is_loading_bio: true,
            is_loading_projects: true,
            mode: Mode::Loading,
            focus: Focus::default(),
            bio: None,
            projects: Vec::new(),
            cards_state: ListState::default(),
            carousel: Carousel::new(viewport_cols),
            spotlight: None,
            contact: ContactFormState::new(),
        }
    }

    /// The project under the card highlight
    pub fn highlighted_project(&self) -> Option<&Project> {
        self.cards_state
            .selected()
            .and_then(|index| self.projects.get(index))
    }

    /// Loading mode ends once both sections have reported in
    pub fn finish_loading_if_done(&mut self) {
        if self.mode == Mode::Loading && !self.is_loading_bio && !self.is_loading_projects {
            self.mode = Mode::Normal;
        }
    }
}

/// Main reducer function that dispatches actions to appropriate handlers
///
/// This function acts as a clean dispatch layer, delegating actual state
/// mutations to specialized handler functions in the handlers module.
pub fn reducer(state: &mut AppState, action: Action) {
    use crate::handlers::*;

    match action {
        Action::Quit => handle_quit(state),
        Action::EnterNormalMode => handle_enter_normal_mode(state),
        Action::ShowHelp => handle_show_help(state),
        Action::FocusNext => handle_focus_next(state),
        Action::FinishBioLoad(bio) => handle_finish_bio_load(state, bio),
        Action::FinishProjectLoad(projects) => handle_finish_project_load(state, projects),
        Action::SelectNextCard => handle_select_next_card(state),
        Action::SelectPreviousCard => handle_select_previous_card(state),
        Action::ActivateCard => handle_activate_card(state),
        Action::ScrollCards(direction) => handle_scroll_cards(state, direction),
        Action::FormNextField => handle_form_next_field(state),
        Action::FormPreviousField => handle_form_previous_field(state),
        Action::UpdateEmailInput(value) => handle_update_email_input(state, value),
        Action::UpdateMessageInput(value) => handle_update_message_input(state, value),
        Action::SubmitContactForm => handle_submit_contact_form(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_project(name: &str, long_description: &str) -> Project {
        serde_json::from_str(&format!(
            r#"{{"project_name": "{name}", "long_description": "{long_description}"}}"#
        ))
        .unwrap()
    }

    fn loaded_state(projects: Vec<Project>) -> AppState {
        let mut state = AppState::new(80);
        reducer(&mut state, Action::FinishBioLoad(None));
        reducer(&mut state, Action::FinishProjectLoad(Some(projects)));
        state
    }

    #[test]
    fn test_app_state_new() {
        let state = AppState::new(80);
        assert!(!state.should_quit);
        assert!(state.is_loading_bio);
        assert!(state.is_loading_projects);
        assert_eq!(state.mode, Mode::Loading);
        assert!(state.projects.is_empty());
        assert!(state.spotlight.is_none());
    }

    #[test]
    fn test_reducer_quit() {
        let mut state = AppState::new(80);
        assert!(!state.should_quit);

        reducer(&mut state, Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_loading_ends_only_after_both_sections_report() {
        let mut state = AppState::new(80);
        reducer(&mut state, Action::FinishBioLoad(None));
        assert_eq!(state.mode, Mode::Loading);

        reducer(&mut state, Action::FinishProjectLoad(None));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_first_project_spotlighted_without_activation() {
        let state = loaded_state(vec![
            test_project("Alpha", "Alpha long form"),
            test_project("Beta", "Beta long form"),
        ]);

        let spotlight = state.spotlight.expect("first card auto-spotlighted");
        assert_eq!(spotlight.title, "Alpha");
        assert_eq!(spotlight.description, "Alpha long form");
        assert_eq!(state.cards_state.selected(), Some(0));
    }

    #[test]
    fn test_empty_project_list_leaves_spotlight_unwired() {
        let state = loaded_state(Vec::new());
        assert!(state.projects.is_empty());
        assert!(state.spotlight.is_none());
        assert_eq!(state.cards_state.selected(), None);
    }

    #[test]
    fn test_failed_project_load_leaves_section_empty() {
        let mut state = AppState::new(80);
        reducer(&mut state, Action::FinishProjectLoad(None));
        assert!(state.projects.is_empty());
        assert!(state.spotlight.is_none());
        assert!(!state.is_loading_projects);
    }

    #[test]
    fn test_activate_card_updates_spotlight() {
        let mut state = loaded_state(vec![
            test_project("Alpha", "Alpha long form"),
            test_project("Beta", "Beta long form"),
        ]);

        reducer(&mut state, Action::SelectNextCard);
        reducer(&mut state, Action::ActivateCard);

        let spotlight = state.spotlight.as_ref().expect("spotlight stays wired");
        assert_eq!(spotlight.title, "Beta");
        assert_eq!(spotlight.description, "Beta long form");
    }

    #[test]
    fn test_card_highlight_stays_in_bounds() {
        let mut state = loaded_state(vec![test_project("Only", "one")]);
        reducer(&mut state, Action::SelectNextCard);
        assert_eq!(state.cards_state.selected(), Some(0));
        reducer(&mut state, Action::SelectPreviousCard);
        assert_eq!(state.cards_state.selected(), Some(0));
    }

    #[test]
    fn test_renderable_bio_is_kept() {
        let mut state = AppState::new(80);
        let bio: Bio =
            serde_json::from_str(r#"{"aboutMe": "Hi", "headshot": "images/me.webp"}"#).unwrap();
        reducer(&mut state, Action::FinishBioLoad(Some(bio)));
        assert!(state.bio.is_some());
    }

    #[test]
    fn test_incomplete_bio_is_dropped() {
        let mut state = AppState::new(80);
        let bio: Bio = serde_json::from_str(r#"{"aboutMe": "Hi"}"#).unwrap();
        reducer(&mut state, Action::FinishBioLoad(Some(bio)));
        assert!(state.bio.is_none());
        assert!(!state.is_loading_bio);
    }

    #[test]
    fn test_submit_writes_errors_for_invalid_form() {
        let mut state = loaded_state(Vec::new());
        reducer(&mut state, Action::SubmitContactForm);

        assert_eq!(
            state.contact.displayed_errors.email_error,
            "Please provide an email!"
        );
        assert_eq!(
            state.contact.displayed_errors.message_error,
            "Description box is empty!!"
        );
        assert!(state.contact.notice.is_none());
    }

    #[test]
    fn test_submit_clears_stale_errors_before_rewriting() {
        let mut state = loaded_state(Vec::new());
        reducer(&mut state, Action::SubmitContactForm);
        assert!(!state.contact.displayed_errors.email_error.is_empty());

        reducer(
            &mut state,
            Action::UpdateEmailInput("someone@example.com".to_string()),
        );
        reducer(&mut state, Action::SubmitContactForm);

        // Email error cleared even though the message is still invalid
        assert_eq!(state.contact.displayed_errors.email_error, "");
        assert!(!state.contact.displayed_errors.message_error.is_empty());
    }

    #[test]
    fn test_valid_submit_sets_notice_and_keeps_fields() {
        let mut state = loaded_state(Vec::new());
        reducer(
            &mut state,
            Action::UpdateEmailInput("someone@example.com".to_string()),
        );
        reducer(
            &mut state,
            Action::UpdateMessageInput("Nice_portfolio.".to_string()),
        );
        reducer(&mut state, Action::SubmitContactForm);

        assert!(state.contact.displayed_errors.is_valid());
        assert!(state.contact.notice.is_some());
        // The form is not reset on success
        assert_eq!(state.contact.email.value(), "someone@example.com");
        assert_eq!(state.contact.message.value(), "Nice_portfolio.");
    }
}
