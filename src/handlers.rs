//! Action handlers for state mutations
//!
//! This module contains handler functions for each Action type, providing
//! a clean separation between action dispatch and state mutation logic.

use crate::app::AppState;
use crate::carousel::ScrollDirection;
use crate::components::spotlight::SpotlightState;
use crate::data::{Bio, Project};
use crate::events::Mode;
use crate::validate::{FormFields, ValidationReport, validate};
use tracing::warn;

/// Handle application quit
pub fn handle_quit(state: &mut AppState) {
    state.should_quit = true;
}

/// Handle entering normal mode
pub fn handle_enter_normal_mode(state: &mut AppState) {
    state.mode = Mode::Normal;
}

/// Handle showing help
pub fn handle_show_help(state: &mut AppState) {
    state.mode = Mode::Help;
}

/// Cycle keyboard focus to the next pane
pub fn handle_focus_next(state: &mut AppState) {
    state.focus = state.focus.next();
}

/// Handle the biography load finishing
///
/// A payload missing either required field is dropped with a warning, the
/// same as a failed load; the bio pane simply stays empty.
pub fn handle_finish_bio_load(state: &mut AppState, bio: Option<Bio>) {
    state.is_loading_bio = false;
    match bio {
        Some(bio) if bio.is_renderable() => state.bio = Some(bio),
        Some(_) => warn!("bio payload is missing aboutMe or headshot, skipping render"),
        None => {}
    }
    state.finish_loading_if_done();
}

/// Handle the projects load finishing
///
/// A non-empty list wires the spotlight by activating the first card, the
/// way the page spotlights the first project on initial render. An empty
/// list renders nothing and leaves the spotlight unwired.
pub fn handle_finish_project_load(state: &mut AppState, projects: Option<Vec<Project>>) {
    state.is_loading_projects = false;
    if let Some(projects) = projects {
        if projects.is_empty() {
            warn!("no projects found in the data");
        } else {
            state.projects = projects;
            state.cards_state.select(Some(0));
            activate_highlighted(state);
        }
    }
    state.finish_loading_if_done();
}

/// Move the card highlight down the strip
pub fn handle_select_next_card(state: &mut AppState) {
    if state.projects.is_empty() {
        return;
    }
    let last = state.projects.len() - 1;
    let next = match state.cards_state.selected() {
        Some(index) => (index + 1).min(last),
        None => 0,
    };
    state.cards_state.select(Some(next));
}

/// Move the card highlight up the strip
pub fn handle_select_previous_card(state: &mut AppState) {
    if state.projects.is_empty() {
        return;
    }
    let previous = match state.cards_state.selected() {
        Some(index) => index.saturating_sub(1),
        None => 0,
    };
    state.cards_state.select(Some(previous));
}

/// Spotlight the highlighted card
pub fn handle_activate_card(state: &mut AppState) {
    activate_highlighted(state);
}

fn activate_highlighted(state: &mut AppState) {
    if let Some(project) = state.highlighted_project().cloned() {
        state
            .spotlight
            .get_or_insert_with(SpotlightState::default)
            .update(&project);
    }
}

/// Scroll the card strip by one card in the given direction
pub fn handle_scroll_cards(state: &mut AppState, direction: ScrollDirection) {
    state.carousel.nudge(direction);
}

/// Move to the next contact form field
pub fn handle_form_next_field(state: &mut AppState) {
    state.contact.active_field = state.contact.active_field.next();
}

/// Move to the previous contact form field
pub fn handle_form_previous_field(state: &mut AppState) {
    // Two fields, so previous and next coincide
    state.contact.active_field = state.contact.active_field.next();
}

/// Handle email field edits
pub fn handle_update_email_input(state: &mut AppState, value: String) {
    state.contact.email = state.contact.email.clone().with_value(value);
}

/// Handle message field edits
///
/// The character counter is derived from this buffer at render time, so
/// updating the buffer is all the counter needs.
pub fn handle_update_message_input(state: &mut AppState, value: String) {
    state.contact.message = state.contact.message.clone().with_value(value);
}

/// Validate and submit the contact form
///
/// Both displayed errors are cleared unconditionally before the validator's
/// messages are written back, so a stale message from a previous attempt
/// can never survive a field that now passes. A valid submission shows the
/// acknowledgment and leaves the field buffers untouched; nothing is
/// transmitted anywhere.
pub fn handle_submit_contact_form(state: &mut AppState) {
    state.contact.displayed_errors = ValidationReport::default();
    state.contact.notice = None;

    let fields = FormFields {
        contact_email: state.contact.email.value().to_string(),
        contact_message: state.contact.message.value().to_string(),
    };
    let report = validate(&fields);

    if report.is_valid() {
        state.contact.notice = Some("Ola! Submission is Successful!".to_string());
    } else {
        state.contact.displayed_errors = report;
    }
}
