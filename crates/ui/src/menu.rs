//! Menu browser — category filter, item list, customize sheet, add flash.
//!
//! Plain items go straight into the cart and flash an "Added" highlight for
//! [`FLASH_MS`]. Customizable items open the [`CustomizeSheet`] first; the
//! collected modifier tuple becomes part of the cart-line identity.

use catalog::{CatalogItem, Cuisine};
use heapless::Vec;
use order::{AmountLevel, Cart, Customization, SpiceLevel};

use crate::input::InputEvent;
use crate::screen::{Screen, ScreenRequest};

/// How long the "Added" highlight stays on an item, in milliseconds.
pub const FLASH_MS: u64 = 1000;

/// Most flashes that can be live at once; older ones expire within a second
/// anyway.
const MAX_FLASHES: usize = 8;

/// Rows of the customize sheet, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetRow {
    /// Spice level (Less / Medium / Extra).
    #[default]
    Spice,
    /// Oil level (Less / Normal).
    Oil,
    /// Salt level (Less / Normal).
    Salt,
    /// Sugar level (Less / Normal).
    Sugar,
    /// Free-text kitchen note.
    Note,
}

impl SheetRow {
    fn next(self) -> Self {
        match self {
            SheetRow::Spice => SheetRow::Oil,
            SheetRow::Oil => SheetRow::Salt,
            SheetRow::Salt => SheetRow::Sugar,
            SheetRow::Sugar => SheetRow::Note,
            SheetRow::Note => SheetRow::Note,
        }
    }

    fn prev(self) -> Self {
        match self {
            SheetRow::Spice => SheetRow::Spice,
            SheetRow::Oil => SheetRow::Spice,
            SheetRow::Salt => SheetRow::Oil,
            SheetRow::Sugar => SheetRow::Salt,
            SheetRow::Note => SheetRow::Sugar,
        }
    }
}

/// Modal customize sheet for one catalog item.
#[derive(Debug)]
pub struct CustomizeSheet {
    /// The item being customized.
    pub item: &'static CatalogItem,
    /// Modifiers collected so far (kitchen defaults initially).
    pub customization: Customization,
    /// Focused row.
    pub row: SheetRow,
}

impl CustomizeSheet {
    /// Open the sheet for `item` with kitchen-default modifiers.
    pub fn new(item: &'static CatalogItem) -> Self {
        CustomizeSheet {
            item,
            customization: Customization::default(),
            row: SheetRow::default(),
        }
    }

    /// Cycle the focused row's level. `forward` is the Right key.
    fn cycle(&mut self, forward: bool) {
        match self.row {
            SheetRow::Spice => {
                self.customization.spice = cycle_spice(self.customization.spice, forward);
            }
            SheetRow::Oil => {
                self.customization.oil = toggle_amount(self.customization.oil);
            }
            SheetRow::Salt => {
                self.customization.salt = toggle_amount(self.customization.salt);
            }
            SheetRow::Sugar => {
                self.customization.sugar = toggle_amount(self.customization.sugar);
            }
            SheetRow::Note => {}
        }
    }
}

fn cycle_spice(level: SpiceLevel, forward: bool) -> SpiceLevel {
    if forward {
        match level {
            SpiceLevel::Less => SpiceLevel::Medium,
            SpiceLevel::Medium => SpiceLevel::Extra,
            SpiceLevel::Extra => SpiceLevel::Extra,
        }
    } else {
        match level {
            SpiceLevel::Less => SpiceLevel::Less,
            SpiceLevel::Medium => SpiceLevel::Less,
            SpiceLevel::Extra => SpiceLevel::Medium,
        }
    }
}

fn toggle_amount(level: AmountLevel) -> AmountLevel {
    match level {
        AmountLevel::Less => AmountLevel::Normal,
        AmountLevel::Normal => AmountLevel::Less,
    }
}

/// Menu browser state for one cuisine.
#[derive(Debug)]
pub struct MenuScreen {
    /// The kitchen being browsed.
    pub cuisine: Cuisine,
    /// Index into `cuisine.categories()`.
    pub category: usize,
    /// Index into the filtered item list.
    pub cursor: usize,
    /// Open customize sheet, if any.
    pub sheet: Option<CustomizeSheet>,
    /// Item ids currently flashing "Added", with expiry timestamps.
    flashes: Vec<(&'static str, u64), MAX_FLASHES>,
}

impl MenuScreen {
    /// Open the menu for `cuisine` on its first category.
    pub fn new(cuisine: Cuisine) -> Self {
        MenuScreen {
            cuisine,
            category: 0,
            cursor: 0,
            sheet: None,
            flashes: Vec::new(),
        }
    }

    /// The active category name.
    #[must_use]
    pub fn category_name(&self) -> &'static str {
        self.cuisine
            .categories()
            .get(self.category)
            .copied()
            .unwrap_or("")
    }

    /// Items visible under the active category filter.
    pub fn visible_items(&self) -> impl Iterator<Item = &'static CatalogItem> {
        self.cuisine.items_in_category(self.category_name())
    }

    /// The item under the cursor.
    #[must_use]
    pub fn focused_item(&self) -> Option<&'static CatalogItem> {
        self.visible_items().nth(self.cursor)
    }

    /// Whether `item_id` is inside its [`FLASH_MS`] highlight window.
    #[must_use]
    pub fn is_flashing(&self, item_id: &str, now_ms: u64) -> bool {
        self.flashes
            .iter()
            .any(|(id, until)| *id == item_id && *until > now_ms)
    }

    /// Drop expired flash highlights.
    pub fn tick(&mut self, now_ms: u64) {
        self.flashes.retain(|(_, until)| *until > now_ms);
    }

    /// Handle one input event.
    ///
    /// The cart mutation happens here (add on select / sheet confirm); a full
    /// cart drops the addition silently, matching the never-fails contract of
    /// the original screens.
    pub fn handle(
        &mut self,
        event: InputEvent,
        cart: &mut Cart,
        now_ms: u64,
    ) -> Option<ScreenRequest> {
        if self.sheet.is_some() {
            return self.handle_sheet(event, cart, now_ms);
        }
        match event {
            InputEvent::Left => {
                self.category = self.category.saturating_sub(1);
                self.cursor = 0;
                None
            }
            InputEvent::Right => {
                let last = self.cuisine.categories().len().saturating_sub(1);
                self.category = self.category.saturating_add(1).min(last);
                self.cursor = 0;
                None
            }
            InputEvent::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            InputEvent::Down => {
                let count = self.visible_items().count();
                self.cursor = self.cursor.saturating_add(1).min(count.saturating_sub(1));
                None
            }
            InputEvent::Select => {
                let item = self.focused_item()?;
                if item.customizable {
                    self.sheet = Some(CustomizeSheet::new(item));
                } else {
                    self.add_with_flash(item, Customization::default(), cart, now_ms);
                }
                None
            }
            InputEvent::Char('c') | InputEvent::Char('C') => {
                Some(ScreenRequest::Push(Screen::CartView))
            }
            InputEvent::Back => Some(ScreenRequest::Pop),
            _ => None,
        }
    }

    fn handle_sheet(
        &mut self,
        event: InputEvent,
        cart: &mut Cart,
        now_ms: u64,
    ) -> Option<ScreenRequest> {
        let sheet = self.sheet.as_mut()?;
        match event {
            InputEvent::Up => sheet.row = sheet.row.prev(),
            InputEvent::Down => sheet.row = sheet.row.next(),
            InputEvent::Left => sheet.cycle(false),
            InputEvent::Right => sheet.cycle(true),
            InputEvent::Char(c) if sheet.row == SheetRow::Note => {
                sheet.customization.note.push(c).ok();
            }
            InputEvent::Digit(d) if sheet.row == SheetRow::Note => {
                let c = char::from(b'0'.saturating_add(d.min(9)));
                sheet.customization.note.push(c).ok();
            }
            InputEvent::Backspace if sheet.row == SheetRow::Note => {
                sheet.customization.note.pop();
            }
            InputEvent::Select => {
                let item = sheet.item;
                let customization = sheet.customization.clone();
                self.sheet = None;
                self.add_with_flash(item, customization, cart, now_ms);
            }
            InputEvent::Back => self.sheet = None,
            _ => {}
        }
        None
    }

    fn add_with_flash(
        &mut self,
        item: &'static CatalogItem,
        customization: Customization,
        cart: &mut Cart,
        now_ms: u64,
    ) {
        if cart
            .add(item.id, item.name, item.price, customization)
            .is_ok()
        {
            // Flash list full: skip the highlight, the add still happened.
            self.flashes
                .push((item.id, now_ms.saturating_add(FLASH_MS)))
                .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_plain_add_flashes() {
        let mut menu = MenuScreen::new(Cuisine::Western);
        let mut cart = Cart::new();
        menu.handle(InputEvent::Select, &mut cart, 1_000);
        assert_eq!(cart.total_items(), 1);
        assert!(menu.is_flashing("w1", 1_500));
    }

    #[test]
    fn test_menu_flash_expires_after_one_second() {
        let mut menu = MenuScreen::new(Cuisine::Western);
        let mut cart = Cart::new();
        menu.handle(InputEvent::Select, &mut cart, 1_000);
        assert!(menu.is_flashing("w1", 1_999));
        menu.tick(2_000);
        assert!(!menu.is_flashing("w1", 2_000));
    }

    #[test]
    fn test_menu_category_filter_resets_cursor() {
        let mut menu = MenuScreen::new(Cuisine::Drinks);
        let mut cart = Cart::new();
        menu.handle(InputEvent::Down, &mut cart, 0);
        assert_eq!(menu.cursor, 1);
        menu.handle(InputEvent::Right, &mut cart, 0);
        assert_eq!(menu.category_name(), "HOT");
        assert_eq!(menu.cursor, 0);
        let item = menu.focused_item().expect("tea focused");
        assert_eq!(item.id, "h1");
    }

    #[test]
    fn test_menu_customizable_item_opens_sheet() {
        let mut menu = MenuScreen::new(Cuisine::Indian);
        let mut cart = Cart::new();
        menu.handle(InputEvent::Select, &mut cart, 0);
        assert!(menu.sheet.is_some());
        assert!(cart.is_empty()); // nothing added until the sheet confirms
    }

    #[test]
    fn test_sheet_confirm_adds_customized_line() {
        let mut menu = MenuScreen::new(Cuisine::Indian);
        let mut cart = Cart::new();
        menu.handle(InputEvent::Select, &mut cart, 0); // open sheet
        menu.handle(InputEvent::Right, &mut cart, 0); // spice Medium -> Extra
        menu.handle(InputEvent::Down, &mut cart, 0); // focus oil
        menu.handle(InputEvent::Right, &mut cart, 0); // oil Normal -> Less
        menu.handle(InputEvent::Select, &mut cart, 0); // confirm
        assert!(menu.sheet.is_none());
        let line = cart.lines().first().expect("line added");
        assert_eq!(line.customization.spice, SpiceLevel::Extra);
        assert_eq!(line.customization.oil, AmountLevel::Less);
    }

    #[test]
    fn test_sheet_note_entry() {
        let mut menu = MenuScreen::new(Cuisine::Indian);
        let mut cart = Cart::new();
        menu.handle(InputEvent::Select, &mut cart, 0);
        for _ in 0..4 {
            menu.handle(InputEvent::Down, &mut cart, 0); // focus note row
        }
        for c in "no gh".chars() {
            menu.handle(InputEvent::Char(c), &mut cart, 0);
        }
        menu.handle(InputEvent::Backspace, &mut cart, 0);
        menu.handle(InputEvent::Backspace, &mut cart, 0);
        menu.handle(InputEvent::Select, &mut cart, 0);
        let line = cart.lines().first().expect("line added");
        assert_eq!(line.customization.note.as_str(), "no ");
    }

    #[test]
    fn test_sheet_cancel_adds_nothing() {
        let mut menu = MenuScreen::new(Cuisine::Indian);
        let mut cart = Cart::new();
        menu.handle(InputEvent::Select, &mut cart, 0);
        menu.handle(InputEvent::Back, &mut cart, 0);
        assert!(menu.sheet.is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_menu_cart_shortcut() {
        let mut menu = MenuScreen::new(Cuisine::Thai);
        let mut cart = Cart::new();
        let req = menu.handle(InputEvent::Char('c'), &mut cart, 0);
        assert_eq!(req, Some(ScreenRequest::Push(Screen::CartView)));
    }

    #[test]
    fn test_spice_cycle_bounds() {
        assert_eq!(cycle_spice(SpiceLevel::Extra, true), SpiceLevel::Extra);
        assert_eq!(cycle_spice(SpiceLevel::Less, false), SpiceLevel::Less);
        assert_eq!(cycle_spice(SpiceLevel::Medium, true), SpiceLevel::Extra);
    }
}
