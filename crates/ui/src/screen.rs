//! Screen identifier enum — every screen the terminal can display.

use catalog::Cuisine;

/// Every screen the navigator can push onto its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Staff login (the root screen).
    Login,
    /// Section / takeaway category picker.
    Category,
    /// Table grid for one dine-in section (index into [`catalog::SECTIONS`]).
    Tables {
        /// Section index.
        section: u8,
    },
    /// Takeaway slot grid.
    Takeaway,
    /// Cuisine picker.
    Cuisine,
    /// Menu browser for one cuisine.
    Menu {
        /// The kitchen being browsed.
        cuisine: Cuisine,
    },
    /// Cart view with quantity controls.
    CartView,
    /// Order summary with totals (guarded).
    Summary,
    /// Payment flow (guarded).
    Payment,
}

/// Navigation requested by a screen in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenRequest {
    /// Push a new screen on top of the current one.
    Push(Screen),
    /// Pop back to the previous screen.
    Pop,
    /// Drop the whole stack and restart at `Screen` (login success hands
    /// the stack over to the category root).
    ResetTo(Screen),
}
