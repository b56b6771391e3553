//! Input events fed to the screens.
//!
//! The terminal binary translates simulator keyboard events into these;
//! tests construct them directly.

/// A discrete user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move the cursor up / previous row.
    Up,
    /// Move the cursor down / next row.
    Down,
    /// Move left / previous column / decrement quantity.
    Left,
    /// Move right / next column / increment quantity.
    Right,
    /// Activate the focused element (Enter).
    Select,
    /// Leave the current screen (Escape).
    Back,
    /// Clear the cart (Delete, cart screen only).
    Clear,
    /// A digit key `0..=9` (cash tender entry).
    Digit(u8),
    /// A printable character (text fields, shortcut keys).
    Char(char),
    /// Delete the last character of the focused text field.
    Backspace,
}
