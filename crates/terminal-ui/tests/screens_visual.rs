//! Visual checks for every terminal screen.
//! Renders into a headless SimulatorDisplay and asserts on pixels.
//!
//! Run: cargo test -p terminal-ui --test screens_visual

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

use terminal_ui::{render_app, theme};
use ui::input::InputEvent;
use ui::login::{STAFF_EMAIL, STAFF_PASSWORD};
use ui::screen::Screen;
use ui::App;

fn display() -> SimulatorDisplay<Rgb565> {
    SimulatorDisplay::with_default_color(
        Size::new(theme::DISPLAY_WIDTH, theme::DISPLAY_HEIGHT),
        Rgb565::BLACK,
    )
}

fn logged_in() -> App {
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

/// Drive a logged-in app to the payment screen with one Burger in the cart.
fn app_at_payment() -> App {
    let mut app = logged_in();
    app.handle(InputEvent::Select, 0); // Section 1
    app.handle(InputEvent::Select, 0); // table 1
    for _ in 0..3 {
        app.handle(InputEvent::Down, 0);
    }
    app.handle(InputEvent::Select, 0); // Western menu
    app.handle(InputEvent::Select, 0); // add Burger
    app.handle(InputEvent::Char('c'), 0);
    app.handle(InputEvent::Select, 0); // summary
    app.handle(InputEvent::Select, 0); // payment
    assert_eq!(app.nav.current(), Screen::Payment);
    app
}

#[test]
fn every_screen_renders_without_error() {
    let mut d = display();
    let mut app = App::new();
    render_app(&mut d, &app, 0).unwrap(); // login

    app = logged_in();
    render_app(&mut d, &app, 0).unwrap(); // category

    app.handle(InputEvent::Select, 0);
    render_app(&mut d, &app, 0).unwrap(); // tables

    app.handle(InputEvent::Back, 0);
    app.handle(InputEvent::Down, 0);
    app.handle(InputEvent::Right, 0);
    app.handle(InputEvent::Select, 0);
    render_app(&mut d, &app, 0).unwrap(); // takeaway

    app.handle(InputEvent::Select, 0); // slot T1
    render_app(&mut d, &app, 0).unwrap(); // cuisine

    app.handle(InputEvent::Down, 0);
    app.handle(InputEvent::Select, 0); // Indian menu
    render_app(&mut d, &app, 0).unwrap();

    app.handle(InputEvent::Select, 0); // customize sheet open
    render_app(&mut d, &app, 0).unwrap();

    app.handle(InputEvent::Select, 0); // confirm -> cart has one line
    app.handle(InputEvent::Char('c'), 0);
    render_app(&mut d, &app, 0).unwrap(); // cart

    app.handle(InputEvent::Select, 0);
    render_app(&mut d, &app, 0).unwrap(); // summary

    app.handle(InputEvent::Select, 0);
    render_app(&mut d, &app, 0).unwrap(); // payment
}

#[test]
fn header_bar_is_drawn() {
    let mut d = display();
    let app = App::new();
    render_app(&mut d, &app, 0).unwrap();
    assert_eq!(d.get_pixel(Point::new(5, 5)), theme::HEADER);
    // Below the header the login screen sits on the light background.
    assert_eq!(d.get_pixel(Point::new(5, 60)), theme::BG);
}

#[test]
fn category_focused_tile_is_green() {
    let mut d = display();
    let app = logged_in();
    render_app(&mut d, &app, 0).unwrap();
    // Center of the first tile (cursor starts there).
    assert_eq!(d.get_pixel(Point::new(120, 95)), theme::PRIMARY);
    // Center of the second tile is an unselected surface.
    assert_eq!(d.get_pixel(Point::new(360, 95)), theme::SURFACE);
}

#[test]
fn menu_added_row_flashes() {
    let mut d = display();
    let mut app = logged_in();
    app.handle(InputEvent::Down, 0);
    app.handle(InputEvent::Right, 0);
    app.handle(InputEvent::Select, 0); // takeaway grid
    app.handle(InputEvent::Select, 0); // slot T1
    for _ in 0..3 {
        app.handle(InputEvent::Down, 0);
    }
    app.handle(InputEvent::Select, 0); // Western menu
    app.handle(InputEvent::Select, 2_000); // add Burger, flash until 3000

    render_app(&mut d, &app, 2_500).unwrap();
    // First item row starts at BODY_TOP + 34; left margin pixels show the fill.
    assert_eq!(d.get_pixel(Point::new(16, 90)), theme::FLASH);

    app.tick(3_000);
    render_app(&mut d, &app, 3_000).unwrap();
    // Flash expired; the row falls back to the selection highlight.
    assert_eq!(d.get_pixel(Point::new(16, 90)), theme::PRIMARY);
}

#[test]
fn payment_success_fills_body_green() {
    let mut d = display();
    let mut app = app_at_payment();
    app.handle(InputEvent::Right, 0); // Cash
    app.handle(InputEvent::Down, 0); // first covering note
    app.handle(InputEvent::Select, 0); // confirm
    app.tick(2_500); // processing -> success

    render_app(&mut d, &app, 2_500).unwrap();
    assert_eq!(d.get_pixel(Point::new(240, 250)), theme::PRIMARY);
}

#[test]
fn summary_long_cart_stops_above_totals() {
    let mut app = app_at_payment();
    app.handle(InputEvent::Back, 0); // back to summary
    // Grow the cart far past what the list area fits.
    for item in catalog::Cuisine::Thai.items() {
        app.cart
            .add(item.id, item.name, item.price, order::Customization::default())
            .unwrap();
    }
    assert!(app.cart.lines().len() > 15);

    let mut d = display();
    render_app(&mut d, &app, 0).unwrap();
    // The strip between the totals block and the footer stays clear; hidden
    // lines are folded into a "+ N more" row instead of running through it.
    for x in 12..150 {
        for y in 294..300 {
            assert_eq!(d.get_pixel(Point::new(x, y)), theme::BG, "pixel at {x},{y}");
        }
    }
}

#[test]
fn summary_shows_context_banner() {
    let mut app = app_at_payment();
    app.handle(InputEvent::Back, 0); // back to summary
    assert_eq!(app.nav.current(), Screen::Summary);

    let mut d = display();
    render_app(&mut d, &app, 0).unwrap();
    // The dine-in banner strip right under the header.
    assert_eq!(d.get_pixel(Point::new(30, 55)), theme::PRIMARY);
}
