//! Cart view — quantity controls per line, clear cart, proceed to summary.

use order::Cart;

use crate::input::InputEvent;
use crate::screen::{Screen, ScreenRequest};

/// Cart screen state.
#[derive(Debug, Default)]
pub struct CartViewScreen {
    /// Focused line index.
    pub cursor: usize,
}

impl CartViewScreen {
    /// Create the view with the first line focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one input event.
    ///
    /// `Right` adds one unit of the focused line, `Left` removes one (the
    /// line disappears at zero), `Clear` empties the cart, `Select` proceeds
    /// to the summary.
    pub fn handle(&mut self, event: InputEvent, cart: &mut Cart) -> Option<ScreenRequest> {
        // The cursor may be past the end after removals.
        self.cursor = self.cursor.min(cart.len().saturating_sub(1));
        match event {
            InputEvent::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            InputEvent::Down => {
                self.cursor = self
                    .cursor
                    .saturating_add(1)
                    .min(cart.len().saturating_sub(1));
                None
            }
            InputEvent::Right => {
                if let Some(line) = cart.lines().get(self.cursor).cloned() {
                    // Same identity: merges back into the focused line.
                    cart.add(
                        line.item_id,
                        line.name,
                        line.unit_price,
                        line.customization,
                    )
                    .ok();
                }
                None
            }
            InputEvent::Left => {
                if let Some(line) = cart.lines().get(self.cursor).cloned() {
                    cart.remove(line.item_id, &line.customization);
                }
                None
            }
            InputEvent::Clear => {
                cart.clear();
                self.cursor = 0;
                None
            }
            InputEvent::Select => Some(ScreenRequest::Push(Screen::Summary)),
            InputEvent::Back => Some(ScreenRequest::Pop),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order::{Customization, Money};

    fn cart_with(names: &[(&'static str, &'static str, u64)]) -> Cart {
        let mut cart = Cart::new();
        for (id, name, cents) in names.iter().copied() {
            cart.add(id, name, Money::from_cents(cents), Customization::default())
                .expect("cart not full");
        }
        cart
    }

    #[test]
    fn test_cart_view_plus_increments_focused_line() {
        let mut view = CartViewScreen::new();
        let mut cart = cart_with(&[("w1", "Burger", 850), ("w2", "Pasta", 1000)]);
        view.handle(InputEvent::Down, &mut cart);
        view.handle(InputEvent::Right, &mut cart);
        let pasta = cart.lines().get(1).expect("pasta line");
        assert_eq!(pasta.quantity, 2);
    }

    #[test]
    fn test_cart_view_minus_removes_line_at_one() {
        let mut view = CartViewScreen::new();
        let mut cart = cart_with(&[("w1", "Burger", 850)]);
        view.handle(InputEvent::Left, &mut cart);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_view_cursor_follows_removals() {
        let mut view = CartViewScreen::new();
        let mut cart = cart_with(&[("w1", "Burger", 850), ("w2", "Pasta", 1000)]);
        view.handle(InputEvent::Down, &mut cart);
        view.handle(InputEvent::Left, &mut cart); // pasta gone, cursor was 1
        view.handle(InputEvent::Left, &mut cart); // must hit the burger line
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_view_clear() {
        let mut view = CartViewScreen::new();
        let mut cart = cart_with(&[("w1", "Burger", 850), ("w2", "Pasta", 1000)]);
        view.handle(InputEvent::Clear, &mut cart);
        assert!(cart.is_empty());
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn test_cart_view_proceed() {
        let mut view = CartViewScreen::new();
        let mut cart = cart_with(&[("w1", "Burger", 850)]);
        let req = view.handle(InputEvent::Select, &mut cart);
        assert_eq!(req, Some(ScreenRequest::Push(Screen::Summary)));
    }

    #[test]
    fn test_cart_view_empty_cart_handles_events() {
        let mut view = CartViewScreen::new();
        let mut cart = Cart::new();
        view.handle(InputEvent::Left, &mut cart);
        view.handle(InputEvent::Right, &mut cart);
        view.handle(InputEvent::Down, &mut cart);
        assert!(cart.is_empty());
    }
}
