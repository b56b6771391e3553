//! Cart store — the line items of the in-progress order.
//!
//! Lines are keyed by item id **plus** the full customization tuple: two
//! additions merge into one line (quantity + 1) only when every modifier and
//! the note match exactly. A "Less spicy" Butter Chicken and a regular one
//! are different lines.
//!
//! The store is a fixed-capacity `heapless::Vec`; `add` on a full cart is the
//! only operation that can fail.

use core::fmt;

use heapless::Vec;

use crate::money::Money;

/// Maximum number of distinct lines a terminal cart holds.
pub const MAX_LINES: usize = 32;

/// Maximum byte length of a free-text kitchen note.
pub const MAX_NOTE: usize = 64;

/// Spice level for customizable dishes. `Medium` is the kitchen default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpiceLevel {
    /// Milder than the kitchen default.
    Less,
    /// Kitchen default; not shown on cart rows.
    #[default]
    Medium,
    /// Hotter than the kitchen default.
    Extra,
}

/// Oil / salt / sugar level. `Normal` is the kitchen default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountLevel {
    /// Reduced amount.
    Less,
    /// Kitchen default; not shown on cart rows.
    #[default]
    Normal,
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpiceLevel::Less => "Less",
            SpiceLevel::Medium => "Medium",
            SpiceLevel::Extra => "Extra",
        })
    }
}

impl fmt::Display for AmountLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AmountLevel::Less => "Less",
            AmountLevel::Normal => "Normal",
        })
    }
}

/// Per-line modifiers collected by the customize sheet.
///
/// Part of the line identity: any difference here splits cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Customization {
    /// Spice level (shown on the cart row when not `Medium`).
    pub spice: SpiceLevel,
    /// Oil level (shown when not `Normal`).
    pub oil: AmountLevel,
    /// Salt level (shown when not `Normal`).
    pub salt: AmountLevel,
    /// Sugar level (shown when not `Normal`).
    pub sugar: AmountLevel,
    /// Free-text kitchen note, bounded at [`MAX_NOTE`] bytes.
    pub note: heapless::String<MAX_NOTE>,
}

impl Customization {
    /// `true` when every modifier is at its kitchen default and the note is
    /// empty — the row renders with no modifier sub-lines.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Customization::default()
    }
}

/// One aggregated row of the cart: an item, its customization, a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Catalog item id.
    pub item_id: &'static str,
    /// Display name, copied from the catalog at add time.
    pub name: &'static str,
    /// Price per unit.
    pub unit_price: Money,
    /// Always `>= 1`; a line that would reach 0 is deleted instead.
    pub quantity: u32,
    /// Modifier tuple; part of the line identity.
    pub customization: Customization,
}

impl CartLine {
    /// `unit_price * quantity` for this row.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }

    fn matches(&self, item_id: &str, customization: &Customization) -> bool {
        self.item_id == item_id && &self.customization == customization
    }
}

/// Errors returned by [`CartStore`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// The cart already holds the maximum number of distinct lines.
    Full,
}

/// Fixed-capacity cart. `N` is the maximum number of distinct lines; use
/// [`Cart`] in the application and a small `N` in capacity tests.
#[derive(Debug, Default)]
pub struct CartStore<const N: usize> {
    lines: Vec<CartLine, N>,
}

/// The terminal's cart type.
pub type Cart = CartStore<MAX_LINES>;

impl<const N: usize> CartStore<N> {
    /// Create an empty cart.
    pub const fn new() -> Self {
        CartStore { lines: Vec::new() }
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Add one unit of an item.
    ///
    /// Increments the quantity of the line with the same `(item_id,
    /// customization)` identity, or appends a new line with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns `Err(CartError::Full)` when a new line is needed but the cart
    /// already holds `N` lines. Re-adding an existing identity never fails.
    pub fn add(
        &mut self,
        item_id: &'static str,
        name: &'static str,
        unit_price: Money,
        customization: Customization,
    ) -> Result<(), CartError> {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(item_id, &customization))
        {
            line.quantity = line.quantity.saturating_add(1);
            return Ok(());
        }
        self.lines
            .push(CartLine {
                item_id,
                name,
                unit_price,
                quantity: 1,
                customization,
            })
            .map_err(|_| CartError::Full)
    }

    /// Remove one unit of the identified line.
    ///
    /// Decrements the quantity; deletes the line entirely when the quantity
    /// would reach 0. A miss is a silent no-op, not an error.
    pub fn remove(&mut self, item_id: &str, customization: &Customization) {
        let Some(pos) = self
            .lines
            .iter()
            .position(|l| l.matches(item_id, customization))
        else {
            return;
        };
        let delete = match self.lines.get_mut(pos) {
            Some(line) if line.quantity > 1 => {
                line.quantity = line.quantity.saturating_sub(1);
                false
            }
            Some(_) => true,
            None => false,
        };
        if delete {
            // Preserves insertion order of the remaining lines.
            self.lines.remove(pos);
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity` over all lines. Recomputed on every
    /// call, never cached.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::ZERO, |sum, l| sum.saturating_add(l.line_total()))
    }

    /// Total unit count across all lines (the cart badge on menu screens).
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |sum, l| sum.saturating_add(l.quantity))
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` when the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spicy() -> Customization {
        Customization {
            spice: SpiceLevel::Extra,
            ..Customization::default()
        }
    }

    #[test]
    fn test_cart_starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
    }

    #[test]
    fn test_cart_add_same_identity_merges() {
        let mut cart = Cart::new();
        for _ in 0..2 {
            cart.add("h1", "Tea", Money::from_units(25), Customization::default())
                .expect("cart not full");
        }
        assert_eq!(cart.len(), 1);
        let line = cart.lines().first().expect("one line");
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.subtotal(), Money::from_units(50));
    }

    #[test]
    fn test_cart_different_customization_splits_lines() {
        let mut cart = Cart::new();
        cart.add("mc1", "Butter Chicken", Money::from_cents(1350), Customization::default())
            .expect("add plain");
        cart.add("mc1", "Butter Chicken", Money::from_cents(1350), spicy())
            .expect("add spicy");
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_cart_note_splits_lines() {
        let mut note = Customization::default();
        note.note.push_str("no onions").expect("note fits");
        let mut cart = Cart::new();
        cart.add("mc2", "Dal Tadka", Money::from_cents(900), Customization::default())
            .expect("add");
        cart.add("mc2", "Dal Tadka", Money::from_cents(900), note)
            .expect("add noted");
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_cart_remove_decrements() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add("w1", "Burger", Money::from_cents(850), Customization::default())
                .expect("add");
        }
        cart.remove("w1", &Customization::default());
        let line = cart.lines().first().expect("line present");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_cart_remove_at_one_deletes_line() {
        let mut cart = Cart::new();
        cart.add("w1", "Burger", Money::from_cents(850), Customization::default())
            .expect("add");
        cart.remove("w1", &Customization::default());
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
    }

    #[test]
    fn test_cart_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add("w1", "Burger", Money::from_cents(850), Customization::default())
            .expect("add");
        cart.remove("nope", &Customization::default());
        cart.remove("w1", &spicy()); // same id, different identity
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_cart_remove_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add("a", "A", Money::from_cents(100), Customization::default())
            .expect("add");
        cart.add("b", "B", Money::from_cents(200), Customization::default())
            .expect("add");
        cart.add("c", "C", Money::from_cents(300), Customization::default())
            .expect("add");
        cart.remove("b", &Customization::default());
        let ids: Vec<&str, 4> = cart.lines().iter().map(|l| l.item_id).collect();
        assert_eq!(&ids, &["a", "c"]);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add("a", "A", Money::from_cents(100), Customization::default())
            .expect("add");
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn test_cart_full_returns_err() {
        let mut cart = CartStore::<2>::new();
        cart.add("a", "A", Money::from_cents(100), Customization::default())
            .expect("add a");
        cart.add("b", "B", Money::from_cents(100), Customization::default())
            .expect("add b");
        let err = cart
            .add("c", "C", Money::from_cents(100), Customization::default())
            .unwrap_err();
        assert_eq!(err, CartError::Full);
        // Existing identities still merge on a full cart.
        cart.add("a", "A", Money::from_cents(100), Customization::default())
            .expect("merge on full cart");
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_cart_free_item_is_not_an_error() {
        let mut cart = Cart::new();
        cart.add("promo", "Tasting Spoon", Money::ZERO, Customization::default())
            .expect("add free item");
        assert_eq!(cart.subtotal(), Money::ZERO);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_customization_is_plain() {
        assert!(Customization::default().is_plain());
        assert!(!spicy().is_plain());
    }
}
