use crate::app::AppState;
use crate::carousel::Axis;
use crate::components::{
    Component, bio::AboutPane, cards::CardStrip, contact::ContactForm, help::Help,
    spotlight::SpotlightPane, status::StatusBar,
};
use crate::events::Mode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};

pub mod theme;

pub fn ui(f: &mut Frame, app: &mut AppState) {
    let mut cards = CardStrip::new();
    let mut spotlight = SpotlightPane::new();
    let mut about = AboutPane::new();
    let mut contact = ContactForm::new();
    let mut status = StatusBar::new();

    if app.mode == Mode::Loading {
        let loading = Paragraph::new("Loading portfolio data...")
            .block(Block::default().borders(Borders::ALL).title("Loading"))
            .alignment(Alignment::Center);
        f.render_widget(loading, f.area());
        return;
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    match app.carousel.axis() {
        Axis::Vertical => {
            // Wide layout: card column on the left, spotlight and the rest
            // stacked on the right
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
                .split(main_chunks[0]);

            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(45),
                    Constraint::Percentage(30),
                    Constraint::Min(9),
                ])
                .split(columns[1]);

            cards.draw(f, app, columns[0]);
            spotlight.draw(f, app, right[0]);
            about.draw(f, app, right[1]);
            contact.draw(f, app, right[2]);
        }
        Axis::Horizontal => {
            // Narrow layout: card row across the top, everything else below
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(7),
                    Constraint::Percentage(40),
                    Constraint::Percentage(25),
                    Constraint::Min(9),
                ])
                .split(main_chunks[0]);

            cards.draw(f, app, rows[0]);
            spotlight.draw(f, app, rows[1]);
            about.draw(f, app, rows[2]);
            contact.draw(f, app, rows[3]);
        }
    }

    status.draw(f, app, main_chunks[1]);

    if app.mode == Mode::Help {
        let mut help = Help::new();
        help.draw(f, app, f.area());
    }
}
