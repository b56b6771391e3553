//! Navigation state machine — a bounded stack of [`Screen`]s.
//!
//! The stack is capped at 8 entries; pushing when full is a silent no-op.
//! The deepest flow (category → tables → cuisine → menu → cart →
//! summary → payment) is 7 deep, one below the cap.

use heapless::Vec;

use crate::screen::Screen;

/// Navigation stack bounded at 8 entries.
pub struct Navigator {
    stack: Vec<Screen, 8>,
}

impl Navigator {
    /// Create a new navigator with `Login` as the root screen.
    pub fn new() -> Self {
        let mut stack = Vec::new();
        // This push always succeeds: the stack starts empty and cap is 8.
        stack.push(Screen::Login).ok();
        Navigator { stack }
    }

    /// Return the screen currently at the top of the stack.
    #[must_use]
    pub fn current(&self) -> Screen {
        match self.stack.last() {
            Some(s) => *s,
            None => Screen::Login, // unreachable by construction
        }
    }

    /// Push a new screen. If the stack is already at capacity the push is a
    /// silent no-op.
    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen).ok();
    }

    /// Pop the top screen. Does nothing if only the root screen remains.
    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Drop everything and restart the stack at `root`.
    ///
    /// Used on login success, when payment completes and by the
    /// summary/payment guards.
    pub fn reset_to(&mut self, root: Screen) {
        self.stack.clear();
        self.stack.push(root).ok();
    }

    /// Return the number of entries currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
