use folio::Args;
use folio::app::{AppState, reducer};
use folio::components::{Component, cards::CardStrip, contact::ContactForm, help::Help};
use folio::data;
use folio::events::{Action, Focus, Mode};
use folio::ui::ui;

use clap::Parser;
use crossterm::{
    event::{Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up panic handler to ensure clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let args = Args::parse();

    // Keep the guard alive so buffered log lines flush on exit
    let _log_guard = folio::logging::init(args.log_dir.as_deref())?;

    // Check if we have a TTY (after argument parsing so --help works)
    if !crossterm::tty::IsTty::is_tty(&io::stdin()) {
        anyhow::bail!("Folio requires an interactive terminal (TTY).");
    }

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    // Clear screen immediately to prevent any error messages from showing
    let _ = terminal.clear();

    // The carousel axis binds to the viewport width once, here
    let viewport_cols = terminal.size().map(|size| size.width).unwrap_or(80);
    let mut state = AppState::new(viewport_cols);

    let res = run_app(&mut terminal, &mut state, PathBuf::from(args.data_dir)).await;

    restore_terminal().context("Failed to restore terminal")?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

fn handle_event(event: Event, state: &mut AppState) {
    if let Event::Key(key) = event {
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            reducer(state, Action::Quit);
            return;
        }

        let action: Option<Action> = match state.mode {
            Mode::Loading => {
                // Allow quitting even while loading
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                    _ => None,
                }
            }
            Mode::Help => {
                let mut help = Help::new();
                help.handle_key_events(key.code, state)
            }
            Mode::Normal => match key.code {
                KeyCode::Tab => Some(Action::FocusNext),
                // Typing in the form must win over global shortcuts
                KeyCode::Char('?') if state.focus != Focus::Form => Some(Action::ShowHelp),
                KeyCode::Char('q') if state.focus != Focus::Form => Some(Action::Quit),
                _ => match state.focus {
                    Focus::Cards => {
                        let mut cards = CardStrip::new();
                        cards.handle_key_events(key.code, state)
                    }
                    Focus::Form => {
                        let mut contact = ContactForm::new();
                        contact.handle_key_events(key.code, state)
                    }
                },
            },
        };

        if let Some(action) = action {
            reducer(state, action);
        }
    }
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    data_dir: PathBuf,
) -> io::Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut event_stream = crossterm::event::EventStream::new();

    // Set up frame rate for consistent redraws (following ratatui async pattern)
    const FRAMES_PER_SECOND: f32 = 30.0;
    let period = std::time::Duration::from_secs_f32(1.0 / FRAMES_PER_SECOND);
    let mut interval = tokio::time::interval(period);

    // The two sections load independently; neither waits on the other and a
    // failure in one never touches the other's state
    let bio_tx = action_tx.clone();
    let bio_dir = data_dir.clone();
    tokio::spawn(async move {
        let bio = match data::load_bio(&bio_dir).await {
            Ok(bio) => Some(bio),
            Err(err) => {
                tracing::error!("Error fetching About Me data: {err}");
                None
            }
        };
        let _ = bio_tx.send(Action::FinishBioLoad(bio)).await;
    });

    let projects_tx = action_tx.clone();
    let projects_dir = data_dir.clone();
    tokio::spawn(async move {
        let projects = match data::load_projects(&projects_dir).await {
            Ok(projects) => Some(projects),
            Err(err) => {
                tracing::error!("Error fetching Project data: {err}");
                None
            }
        };
        let _ = projects_tx.send(Action::FinishProjectLoad(projects)).await;
    });

    loop {
        tokio::select! {
            // Prioritize keyboard events with biased selection
            biased;

            Some(Ok(event)) = event_stream.next() => {
                handle_event(event, state);
            }
            // Redraw at consistent frame rate (30 FPS); the carousel eases
            // toward its target offset one step per frame
            _ = interval.tick() => {
                state.carousel.tick();
                if let Err(e) = terminal.draw(|f| ui(f, state)) {
                    eprintln!("Draw error: {}", e);
                    return Err(e);
                }
            }
            Some(action) = action_rx.recv() => {
                reducer(state, action);
            }
        };

        if state.should_quit {
            return Ok(());
        }
    }
}
