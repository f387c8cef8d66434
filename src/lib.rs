//! Folio - A beautiful TUI portfolio viewer
//!
//! Folio renders a personal portfolio in the terminal: a biography pane, a
//! strip of project cards with carousel navigation, a spotlight pane showing
//! the selected project, and a contact form with live validation.
//!
//! # Features
//!
//! - **Project Carousel**: Scroll through project cards one card at a time,
//!   vertically on wide terminals and horizontally on narrow ones
//! - **Spotlight Pane**: Activating a card shows its long description, link,
//!   and backdrop image; the first project is spotlighted automatically
//! - **Contact Form**: Field-level validation with inline error messages and
//!   a live character counter
//! - **Data Driven**: Biography and project data load from plain JSON files,
//!   each section rendering independently of the other
//!
//! # Getting Started
//!
//! Point folio at a directory containing `aboutMeData.json` and
//! `projectsData.json`:
//!
//! ```sh
//! folio ./data
//! folio .  # Use the current directory
//! ```
//!
//! # Modules
//!
//! - [`app`] - Application state management
//! - [`carousel`] - Scroll-position arithmetic for the card strip
//! - [`components`] - UI components (cards, spotlight, contact form, etc.)
//! - [`data`] - Portfolio payloads and JSON loading
//! - [`events`] - Actions, modes, and focus handling
//! - [`logging`] - File-based diagnostics setup
//! - [`ui`] - Terminal UI rendering
//! - [`validate`] - Contact form validation rules

pub mod app;
pub mod carousel;
pub mod components;
pub mod data;
pub mod events;
mod handlers;
pub mod logging;
pub mod ui;
pub mod validate;

pub use clap::Parser;

/// Command-line arguments for Folio
///
/// # Fields
///
/// * `data_dir` - Directory holding the portfolio JSON files (defaults to `./data`)
/// * `log_dir` - Directory for the diagnostic log file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing aboutMeData.json and projectsData.json
    #[arg(default_value = "./data")]
    pub data_dir: String,

    /// Directory for the diagnostic log file (defaults to the platform cache dir)
    #[arg(long)]
    pub log_dir: Option<String>,
}
