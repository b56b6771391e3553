//! Table grid (dine-in sections) and takeaway slot grid.
//!
//! Selecting a tile sets the order context — overwriting any previous one —
//! and moves on to the cuisine picker.

use catalog::{Section, SECTIONS, TAKEAWAY_SLOTS};
use order::{OrderContext, OrderContextStore};

use crate::input::InputEvent;
use crate::screen::{Screen, ScreenRequest};

/// Tiles per grid row on the table/slot screens.
pub const GRID_COLS: usize = 7;

fn move_cursor(cursor: usize, len: usize, event: InputEvent) -> usize {
    let last = len.saturating_sub(1);
    match event {
        InputEvent::Left => cursor.saturating_sub(1),
        InputEvent::Right => cursor.saturating_add(1).min(last),
        InputEvent::Up => cursor.saturating_sub(GRID_COLS),
        InputEvent::Down => cursor.saturating_add(GRID_COLS).min(last),
        _ => cursor,
    }
}

/// Table grid for one dine-in section.
#[derive(Debug, Default)]
pub struct TablesScreen {
    /// Focused table tile.
    pub cursor: usize,
}

impl TablesScreen {
    /// Create the grid with the first table focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one input event for the section at `section_index`.
    ///
    /// `Select` writes a dine-in [`OrderContext`] and navigates to the
    /// cuisine picker.
    pub fn handle(
        &mut self,
        event: InputEvent,
        section_index: u8,
        context: &mut OrderContextStore,
    ) -> Option<ScreenRequest> {
        let Some(section) = SECTIONS.get(usize::from(section_index)) else {
            // Unknown section index: nothing sensible to select.
            return matches!(event, InputEvent::Back).then_some(ScreenRequest::Pop);
        };
        match event {
            InputEvent::Up | InputEvent::Down | InputEvent::Left | InputEvent::Right => {
                self.cursor = move_cursor(self.cursor, section.tables.len(), event);
                None
            }
            InputEvent::Select => {
                let table = self.focused_table(section)?;
                context.set(OrderContext::dine_in(section.name, table));
                Some(ScreenRequest::Push(Screen::Cuisine))
            }
            InputEvent::Back => Some(ScreenRequest::Pop),
            _ => None,
        }
    }

    /// The focused table label, if the cursor is in range.
    #[must_use]
    pub fn focused_table(&self, section: &Section) -> Option<&'static str> {
        section.tables.get(self.cursor).copied()
    }
}

/// Takeaway slot grid.
#[derive(Debug, Default)]
pub struct TakeawayScreen {
    /// Focused slot tile.
    pub cursor: usize,
}

impl TakeawayScreen {
    /// Create the grid with the first slot focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one input event. `Select` writes a takeaway [`OrderContext`]
    /// and navigates to the cuisine picker.
    pub fn handle(
        &mut self,
        event: InputEvent,
        context: &mut OrderContextStore,
    ) -> Option<ScreenRequest> {
        match event {
            InputEvent::Up | InputEvent::Down | InputEvent::Left | InputEvent::Right => {
                self.cursor = move_cursor(self.cursor, TAKEAWAY_SLOTS.len(), event);
                None
            }
            InputEvent::Select => {
                let slot = TAKEAWAY_SLOTS.get(self.cursor)?;
                context.set(OrderContext::takeaway(slot));
                Some(ScreenRequest::Push(Screen::Cuisine))
            }
            InputEvent::Back => Some(ScreenRequest::Pop),
            _ => None,
        }
    }
}
