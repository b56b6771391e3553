//! Cuisine picker — choose which kitchen's menu to browse.

use catalog::Cuisine;

use crate::input::InputEvent;
use crate::screen::{Screen, ScreenRequest};

/// Cuisine picker state.
#[derive(Debug, Default)]
pub struct CuisineScreen {
    /// Focused row, `0..Cuisine::ALL.len()`.
    pub cursor: usize,
}

impl CuisineScreen {
    /// Create the picker with the first cuisine focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cuisine currently under the cursor.
    #[must_use]
    pub fn focused(&self) -> Option<Cuisine> {
        Cuisine::ALL.get(self.cursor).copied()
    }

    /// Handle one input event.
    pub fn handle(&mut self, event: InputEvent) -> Option<ScreenRequest> {
        match event {
            InputEvent::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            InputEvent::Down => {
                self.cursor = self
                    .cursor
                    .saturating_add(1)
                    .min(Cuisine::ALL.len().saturating_sub(1));
                None
            }
            InputEvent::Select => {
                let cuisine = self.focused()?;
                Some(ScreenRequest::Push(Screen::Menu { cuisine }))
            }
            InputEvent::Back => Some(ScreenRequest::Pop),
            _ => None,
        }
    }
}
