//! Category picker — the three dining sections plus Take Away, as a 2×2 grid.

use catalog::SECTIONS;

use crate::input::InputEvent;
use crate::screen::{Screen, ScreenRequest};

/// Number of tiles on the picker (sections + takeaway).
pub const TILE_COUNT: usize = SECTIONS.len() + 1;

const GRID_COLS: usize = 2;

/// Category picker state.
#[derive(Debug, Default)]
pub struct CategoryScreen {
    /// Focused tile, `0..TILE_COUNT`; the last tile is Take Away.
    pub cursor: usize,
}

impl CategoryScreen {
    /// Create the picker with the first section focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for a tile index.
    #[must_use]
    pub fn label(index: usize) -> &'static str {
        SECTIONS
            .get(index)
            .map(|s| s.name)
            .unwrap_or("Take Away")
    }

    /// Handle one input event.
    pub fn handle(&mut self, event: InputEvent) -> Option<ScreenRequest> {
        match event {
            InputEvent::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            InputEvent::Right => {
                self.cursor = (self.cursor.saturating_add(1)).min(TILE_COUNT.saturating_sub(1));
                None
            }
            InputEvent::Up => {
                self.cursor = self.cursor.saturating_sub(GRID_COLS);
                None
            }
            InputEvent::Down => {
                self.cursor =
                    (self.cursor.saturating_add(GRID_COLS)).min(TILE_COUNT.saturating_sub(1));
                None
            }
            InputEvent::Select => {
                if self.cursor < SECTIONS.len() {
                    #[allow(clippy::cast_possible_truncation)] // cursor < 3
                    Some(ScreenRequest::Push(Screen::Tables {
                        section: self.cursor as u8,
                    }))
                } else {
                    Some(ScreenRequest::Push(Screen::Takeaway))
                }
            }
            InputEvent::Back => Some(ScreenRequest::Pop),
            _ => None,
        }
    }
}
