//! Actions, modes, and focus handling
//!
//! This module defines the types for handling user input and the internal
//! events produced by the data loads.

use crate::carousel::ScrollDirection;
use crate::data::{Bio, Project};

/// Application actions performed by the user or internal events
///
/// The two `Finish*Load` actions carry `None` when their load failed; the
/// failure is logged at the load site and the section simply stays empty.
#[derive(Debug, Clone)]
pub enum Action {
    /// Biography load finished (successfully or not)
    FinishBioLoad(Option<Bio>),
    /// Projects load finished (successfully or not)
    FinishProjectLoad(Option<Vec<Project>>),
    /// Move the card highlight to the next card
    SelectNextCard,
    /// Move the card highlight to the previous card
    SelectPreviousCard,
    /// Spotlight the highlighted card
    ActivateCard,
    /// Scroll the card strip by one card
    ScrollCards(ScrollDirection),
    /// Change focus to the next pane
    FocusNext,
    /// Move to the next contact form field
    FormNextField,
    /// Move to the previous contact form field
    FormPreviousField,
    /// Update the email field buffer
    UpdateEmailInput(String),
    /// Update the message field buffer
    UpdateMessageInput(String),
    /// Validate and submit the contact form
    SubmitContactForm,
    /// Show help screen
    ShowHelp,
    /// Enter normal mode
    EnterNormalMode,
    /// Quit the application
    Quit,
}

/// Current mode of the application UI
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for the data loads
    Loading,
    /// Normal browsing mode
    Normal,
    /// Help screen is displayed
    Help,
}

/// Tracks which pane currently has focus for keyboard input
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    /// Project card strip
    #[default]
    Cards,
    /// Contact form
    Form,
}

impl Focus {
    /// Cycle to the next pane in focus order
    pub fn next(&self) -> Self {
        match self {
            Self::Cards => Self::Form,
            Self::Form => Self::Cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_equality() {
        assert_eq!(Mode::Normal, Mode::Normal);
        assert_eq!(Mode::Loading, Mode::Loading);
        assert_ne!(Mode::Normal, Mode::Help);
    }

    #[test]
    fn test_focus_cycles_through_both_panes() {
        assert_eq!(Focus::Cards.next(), Focus::Form);
        assert_eq!(Focus::Form.next(), Focus::Cards);
    }

    #[test]
    fn test_action_clone() {
        let action = Action::UpdateEmailInput("a@b.c".to_string());
        if let Action::UpdateEmailInput(value) = action.clone() {
            assert_eq!(value, "a@b.c");
        } else {
            panic!("clone changed the action variant");
        }
    }
}
