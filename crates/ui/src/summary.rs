//! Order summary — read-only totals review between cart and payment.
//!
//! The entry guard (context set, cart non-empty) is enforced by
//! [`crate::App`] when the screen is pushed; by the time events arrive here
//! the order is known to be valid.

use crate::input::InputEvent;
use crate::screen::{Screen, ScreenRequest};

/// Summary screen state (stateless beyond its existence).
#[derive(Debug, Default)]
pub struct SummaryScreen;

impl SummaryScreen {
    /// Create the summary screen.
    pub fn new() -> Self {
        Self
    }

    /// Handle one input event. `Select` proceeds to payment.
    pub fn handle(&mut self, event: InputEvent) -> Option<ScreenRequest> {
        match event {
            InputEvent::Select => Some(ScreenRequest::Push(Screen::Payment)),
            InputEvent::Back => Some(ScreenRequest::Pop),
            _ => None,
        }
    }
}
