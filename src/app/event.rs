use crate::timer::{Timer, TimerId};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A scheduled timer elapsed
    Timer { id: TimerId, timer: Timer },

    /// The platform opener could not be launched for a link
    UrlOpenFailed { url: String, error: String },

    /// Tick for animation and UI refresh
    Tick,
}
