//! Application composition root.
//!
//! [`App`] owns the cart, the order context and every screen state, wired
//! together by explicit injection — there are no global singletons. The
//! terminal binary constructs one `App`, feeds it input events and clock
//! ticks, and renders whatever `nav.current()` says is on top.

use order::{Cart, OrderContextStore, Totals};

use crate::cart_view::CartViewScreen;
use crate::category::CategoryScreen;
use crate::cuisine::CuisineScreen;
use crate::input::InputEvent;
use crate::login::LoginScreen;
use crate::menu::MenuScreen;
use crate::navigation::Navigator;
use crate::payment::PaymentScreen;
use crate::screen::{Screen, ScreenRequest};
use crate::summary::SummaryScreen;
use crate::tables::{TablesScreen, TakeawayScreen};

/// The whole terminal application state.
pub struct App {
    /// Cart store, injected into the screens that mutate it.
    pub cart: Cart,
    /// Order context store.
    pub context: OrderContextStore,
    /// Navigation stack.
    pub nav: Navigator,
    /// Login screen state.
    pub login: LoginScreen,
    /// Category picker state.
    pub category: CategoryScreen,
    /// Table grid state (for the section currently on the stack).
    pub tables: TablesScreen,
    /// Takeaway grid state.
    pub takeaway: TakeawayScreen,
    /// Cuisine picker state.
    pub cuisine: CuisineScreen,
    /// Menu browser state (for the cuisine currently on the stack).
    pub menu: MenuScreen,
    /// Cart view state.
    pub cart_view: CartViewScreen,
    /// Summary screen state.
    pub summary: SummaryScreen,
    /// Payment flow state.
    pub payment: PaymentScreen,
}

impl App {
    /// Create a fresh terminal at the login screen with empty stores.
    pub fn new() -> Self {
        App {
            cart: Cart::new(),
            context: OrderContextStore::new(),
            nav: Navigator::new(),
            login: LoginScreen::new(),
            category: CategoryScreen::new(),
            tables: TablesScreen::new(),
            takeaway: TakeawayScreen::new(),
            cuisine: CuisineScreen::new(),
            menu: MenuScreen::new(catalog::Cuisine::Thai),
            cart_view: CartViewScreen::new(),
            summary: SummaryScreen::new(),
            payment: PaymentScreen::new(),
        }
    }

    /// Totals for the current cart (summary and payment rendering).
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::from_subtotal(self.cart.subtotal())
    }

    /// Route one input event to the focused screen and apply any navigation
    /// it requests.
    pub fn handle(&mut self, event: InputEvent, now_ms: u64) {
        let request = match self.nav.current() {
            Screen::Login => self.login.handle(event),
            Screen::Category => self.category.handle(event),
            Screen::Tables { section } => self.tables.handle(event, section, &mut self.context),
            Screen::Takeaway => self.takeaway.handle(event, &mut self.context),
            Screen::Cuisine => self.cuisine.handle(event),
            Screen::Menu { .. } => self.menu.handle(event, &mut self.cart, now_ms),
            Screen::CartView => self.cart_view.handle(event, &mut self.cart),
            Screen::Summary => self.summary.handle(event),
            Screen::Payment => {
                let totals = Totals::from_subtotal(self.cart.subtotal());
                self.payment.handle(event, &totals, now_ms)
            }
        };
        if let Some(request) = request {
            self.apply(request);
        }
    }

    /// Advance time-driven behavior: menu flashes and the payment phases.
    /// Completing the success phase clears both stores and restarts at the
    /// category picker.
    pub fn tick(&mut self, now_ms: u64) {
        self.menu.tick(now_ms);
        if self.payment.tick(now_ms) {
            self.cart.clear();
            self.context.clear();
            self.payment.reset();
            self.nav.reset_to(Screen::Category);
        }
    }

    fn apply(&mut self, request: ScreenRequest) {
        match request {
            ScreenRequest::Push(screen) => {
                if self.guard_blocks(screen) {
                    self.nav.reset_to(Screen::Category);
                    return;
                }
                self.prepare(screen);
                self.nav.push(screen);
            }
            ScreenRequest::Pop => self.nav.back(),
            ScreenRequest::ResetTo(screen) => {
                self.prepare(screen);
                self.nav.reset_to(screen);
            }
        }
    }

    /// Summary and payment refuse entry without an order context and a
    /// non-empty cart; the terminal falls back to the category picker.
    fn guard_blocks(&self, screen: Screen) -> bool {
        matches!(screen, Screen::Summary | Screen::Payment)
            && (!self.context.is_set() || self.cart.is_empty())
    }

    /// Screens remount with fresh local state when navigated to, matching
    /// screen-per-visit semantics (cursor positions do survive going *back*).
    fn prepare(&mut self, screen: Screen) {
        match screen {
            Screen::Category => self.category = CategoryScreen::new(),
            Screen::Tables { .. } => self.tables = TablesScreen::new(),
            Screen::Takeaway => self.takeaway = TakeawayScreen::new(),
            Screen::Cuisine => self.cuisine = CuisineScreen::new(),
            Screen::Menu { cuisine } => self.menu = MenuScreen::new(cuisine),
            Screen::CartView => self.cart_view = CartViewScreen::new(),
            Screen::Payment => self.payment.reset(),
            Screen::Login | Screen::Summary => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::{STAFF_EMAIL, STAFF_PASSWORD};

    fn logged_in_app() -> App {
        let mut app = App::new();
        for c in STAFF_EMAIL.chars() {
            app.handle(InputEvent::Char(c), 0);
        }
        app.handle(InputEvent::Down, 0);
        for c in STAFF_PASSWORD.chars() {
            app.handle(InputEvent::Char(c), 0);
        }
        app.handle(InputEvent::Select, 0);
        app
    }

    #[test]
    fn test_app_starts_at_login() {
        let app = App::new();
        assert_eq!(app.nav.current(), Screen::Login);
    }

    #[test]
    fn test_app_login_reaches_category() {
        let app = logged_in_app();
        assert_eq!(app.nav.current(), Screen::Category);
    }

    #[test]
    fn test_app_back_after_login_stays_at_category() {
        let mut app = logged_in_app();
        // Login replaced the stack root; Back must not expose the form.
        assert_eq!(app.nav.depth(), 1);
        app.handle(InputEvent::Back, 0);
        assert_eq!(app.nav.current(), Screen::Category);
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_app_summary_guard_redirects_without_context() {
        let mut app = logged_in_app();
        // Force a summary request with no context and an empty cart: jump
        // into the cart view and hit proceed.
        app.nav.push(Screen::CartView);
        app.handle(InputEvent::Select, 0);
        assert_eq!(app.nav.current(), Screen::Category);
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_app_menu_screen_follows_pushed_cuisine() {
        let mut app = logged_in_app();
        app.handle(InputEvent::Down, 0); // cursor to row 2 (Section 3)
        app.handle(InputEvent::Right, 0); // Take Away
        app.handle(InputEvent::Select, 0); // -> Takeaway grid
        app.handle(InputEvent::Select, 0); // slot T1 -> Cuisine
        app.handle(InputEvent::Down, 0); // Indian
        app.handle(InputEvent::Select, 0); // -> Menu
        assert_eq!(
            app.nav.current(),
            Screen::Menu {
                cuisine: catalog::Cuisine::Indian
            }
        );
        assert_eq!(app.menu.cuisine, catalog::Cuisine::Indian);
    }

    #[test]
    fn test_app_payment_completion_resets_everything() {
        let mut app = logged_in_app();
        app.handle(InputEvent::Select, 0); // Section 1 -> tables
        app.handle(InputEvent::Select, 0); // table 1 -> cuisine
        for _ in 0..3 {
            app.handle(InputEvent::Down, 0); // Western
        }
        app.handle(InputEvent::Select, 0); // -> menu
        app.handle(InputEvent::Select, 0); // add Burger
        app.handle(InputEvent::Char('c'), 0); // -> cart
        app.handle(InputEvent::Select, 0); // -> summary
        app.handle(InputEvent::Select, 0); // -> payment
        assert_eq!(app.nav.current(), Screen::Payment);

        app.handle(InputEvent::Right, 0); // method: Cash
        app.handle(InputEvent::Down, 0); // tender: first covering note
        app.handle(InputEvent::Select, 0); // confirm -> processing
        app.tick(2_500); // -> success
        app.tick(7_500); // -> finalize
        assert_eq!(app.nav.current(), Screen::Category);
        assert!(app.cart.is_empty());
        assert!(!app.context.is_set());
    }
}
