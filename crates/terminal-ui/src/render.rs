//! One render function per screen, all over a generic `DrawTarget`.
//!
//! [`render_app`] clears the frame, draws the header and footer chrome, and
//! dispatches on the navigation stack's top screen. Rendering never mutates
//! state; the screens expose everything the drawing code needs as fields.

use core::fmt::Write as _;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::String;

use catalog::SECTIONS;
use order::{CashTender, Customization, Money, OrderContext};
use ui::app::App;
use ui::login::LoginField;
use ui::menu::SheetRow;
use ui::payment::{PayMethod, PaymentPhase, PaymentScreen};
use ui::screen::Screen;
use ui::tables::GRID_COLS;

use crate::theme;
use crate::widgets::{draw_text, draw_text_right, text_width, Field, ListRow, RowHighlight, Tile};

const PAD: i32 = 12;
const BODY_TOP: i32 = theme::HEADER_H as i32 + PAD;
const BODY_RIGHT: i32 = theme::DISPLAY_WIDTH as i32 - PAD;
const FOOTER_TOP: i32 = (theme::DISPLAY_HEIGHT - theme::FOOTER_H) as i32;

/// Format a [`Money`] amount with a leading dollar sign.
fn money_text(amount: Money) -> String<20> {
    let mut out = String::new();
    write!(out, "${amount}").ok();
    out
}

/// Human summary of non-default modifiers, e.g. `"Extra spice, Less oil"`.
fn customization_text(c: &Customization) -> String<96> {
    let mut out: String<96> = String::new();
    if c.spice != Default::default() {
        write!(out, "{} spice", c.spice).ok();
    }
    for (level, what) in [(c.oil, "oil"), (c.salt, "salt"), (c.sugar, "sugar")] {
        if level != Default::default() {
            if !out.is_empty() {
                out.push_str(", ").ok();
            }
            write!(out, "{level} {what}").ok();
        }
    }
    if !c.note.is_empty() {
        if !out.is_empty() {
            out.push_str(", ").ok();
        }
        out.push_str("\"").ok();
        out.push_str(c.note.as_str()).ok();
        out.push_str("\"").ok();
    }
    out
}

/// Render the whole frame for the app's current screen.
pub fn render_app<D>(display: &mut D, app: &App, now_ms: u64) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    display.clear(theme::BG)?;
    let screen = app.nav.current();
    render_header(display, app, screen)?;
    match screen {
        Screen::Login => render_login(display, app)?,
        Screen::Category => render_category(display, app)?,
        Screen::Tables { section } => render_tables(display, app, section)?,
        Screen::Takeaway => render_takeaway(display, app)?,
        Screen::Cuisine => render_cuisine(display, app)?,
        Screen::Menu { .. } => render_menu(display, app, now_ms)?,
        Screen::CartView => render_cart(display, app)?,
        Screen::Summary => render_summary(display, app)?,
        Screen::Payment => render_payment(display, app)?,
    }
    render_footer(display, screen)
}

fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => "STAFF LOGIN",
        Screen::Category => "SELECT AREA",
        Screen::Tables { .. } => "SELECT TABLE",
        Screen::Takeaway => "TAKE AWAY",
        Screen::Cuisine => "SELECT KITCHEN",
        Screen::Menu { cuisine } => cuisine.name(),
        Screen::CartView => "CART",
        Screen::Summary => "ORDER SUMMARY",
        Screen::Payment => "PAYMENT",
    }
}

fn render_header<D>(display: &mut D, app: &App, screen: Screen) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    Rectangle::new(
        Point::zero(),
        Size::new(theme::DISPLAY_WIDTH, theme::HEADER_H),
    )
    .into_styled(PrimitiveStyle::with_fill(theme::HEADER))
    .draw(display)?;

    draw_text(
        display,
        screen_title(screen),
        Point::new(PAD, 8),
        theme::FONT_BODY,
        theme::TEXT_INVERT,
    )?;

    // Right side: active order context and cart count, once logged in.
    if screen != Screen::Login {
        let mut status: String<64> = String::new();
        if let Some(context) = app.context.get() {
            write!(status, "{context}  |  ").ok();
        }
        write!(status, "CART {}", app.cart.total_items()).ok();
        draw_text_right(
            display,
            status.as_str(),
            BODY_RIGHT,
            13,
            theme::FONT_SMALL,
            theme::TEXT_INVERT,
        )?;
    }
    Ok(())
}

fn render_footer<D>(display: &mut D, screen: Screen) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let hint = match screen {
        Screen::Login => "TYPE credentials   UP/DOWN switch field   ENTER sign in",
        Screen::Category | Screen::Tables { .. } | Screen::Takeaway | Screen::Cuisine => {
            "ARROWS move   ENTER select   ESC back"
        }
        Screen::Menu { .. } => "ARROWS move   ENTER add   C cart   ESC back",
        Screen::CartView => "LEFT/RIGHT qty   DEL clear   ENTER checkout   ESC back",
        Screen::Summary => "ENTER proceed to payment   ESC back",
        Screen::Payment => "LEFT/RIGHT method   DIGITS cash   UP/DOWN notes   ENTER pay",
    };
    draw_text(
        display,
        hint,
        Point::new(PAD, FOOTER_TOP + 5),
        theme::FONT_SMALL,
        theme::TEXT_MUTED,
    )
}

fn render_login<D>(display: &mut D, app: &App) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let login = &app.login;
    let field_w = 300u32;
    let x = (theme::DISPLAY_WIDTH as i32 - field_w as i32) / 2;

    draw_text(
        display,
        "Email",
        Point::new(x, 80),
        theme::FONT_SMALL,
        theme::TEXT_MUTED,
    )?;
    Field::new(login.email.as_str())
        .focused(login.focus == LoginField::Email)
        .render(display, Rectangle::new(Point::new(x, 94), Size::new(field_w, 32)))?;

    let mut masked: String<32> = String::new();
    for _ in login.password.chars() {
        masked.push('*').ok();
    }
    draw_text(
        display,
        "Password",
        Point::new(x, 140),
        theme::FONT_SMALL,
        theme::TEXT_MUTED,
    )?;
    Field::new(masked.as_str())
        .focused(login.focus == LoginField::Password)
        .render(display, Rectangle::new(Point::new(x, 154), Size::new(field_w, 32)))?;

    if let Some(error) = login.error {
        let tw = text_width(error.message(), theme::FONT_BODY) as i32;
        draw_text(
            display,
            error.message(),
            Point::new((theme::DISPLAY_WIDTH as i32 - tw) / 2, 210),
            theme::FONT_BODY,
            theme::DANGER,
        )?;
    }
    Ok(())
}

fn render_category<D>(display: &mut D, app: &App) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    use ui::category::{CategoryScreen, TILE_COUNT};

    let tile = Size::new(220, 100);
    let gap = 16i32;
    for index in 0..TILE_COUNT {
        let col = (index % 2) as i32;
        let row = (index / 2) as i32;
        let origin = Point::new(
            PAD + col * (tile.width as i32 + gap),
            BODY_TOP + row * (tile.height as i32 + gap),
        );
        Tile::new(CategoryScreen::label(index))
            .selected(index == app.category.cursor)
            .render(display, Rectangle::new(origin, tile))?;
    }
    Ok(())
}

fn render_grid<D>(
    display: &mut D,
    labels: &[&'static str],
    cursor: usize,
    heading: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    draw_text(
        display,
        heading,
        Point::new(PAD, BODY_TOP),
        theme::FONT_SMALL,
        theme::TEXT_MUTED,
    )?;
    let tile = Size::new(58, 44);
    let gap = 8i32;
    for (index, label) in labels.iter().enumerate() {
        let col = (index % GRID_COLS) as i32;
        let row = (index / GRID_COLS) as i32;
        let origin = Point::new(
            PAD + col * (tile.width as i32 + gap),
            BODY_TOP + 18 + row * (tile.height as i32 + gap),
        );
        Tile::new(label)
            .selected(index == cursor)
            .small()
            .render(display, Rectangle::new(origin, tile))?;
    }
    Ok(())
}

fn render_tables<D>(display: &mut D, app: &App, section_index: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let Some(section) = SECTIONS.get(usize::from(section_index)) else {
        return draw_text(
            display,
            "Unknown section",
            Point::new(PAD, BODY_TOP),
            theme::FONT_BODY,
            theme::DANGER,
        );
    };
    render_grid(display, section.tables, app.tables.cursor, section.name)
}

fn render_takeaway<D>(display: &mut D, app: &App) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    render_grid(
        display,
        catalog::TAKEAWAY_SLOTS,
        app.takeaway.cursor,
        "Pick an order slot",
    )
}

fn render_cuisine<D>(display: &mut D, app: &App) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let row_h = 42u32;
    for (index, cuisine) in catalog::Cuisine::ALL.iter().enumerate() {
        let origin = Point::new(PAD, BODY_TOP + index as i32 * (row_h as i32 + 6));
        let highlight = if index == app.cuisine.cursor {
            RowHighlight::Selected
        } else {
            RowHighlight::None
        };
        ListRow::new(cuisine.name())
            .highlight(highlight)
            .render(
                display,
                Rectangle::new(origin, Size::new((BODY_RIGHT - PAD) as u32, row_h)),
            )?;
    }
    Ok(())
}

/// First visible index so that `cursor` stays inside a `visible`-row window.
fn scroll_window(cursor: usize, visible: usize) -> usize {
    cursor.saturating_sub(visible.saturating_sub(1))
}

fn render_menu<D>(display: &mut D, app: &App, now_ms: u64) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let menu = &app.menu;

    // Category tabs.
    let mut x = PAD;
    for (index, name) in menu.cuisine.categories().iter().enumerate() {
        let w = text_width(name, theme::FONT_SMALL) + 20;
        Tile::new(name)
            .selected(index == menu.category)
            .small()
            .render(
                display,
                Rectangle::new(Point::new(x, BODY_TOP), Size::new(w, 24)),
            )?;
        x += w as i32 + 6;
    }

    // Item rows under the active tab.
    let row_h = 34u32;
    let visible = 6usize;
    let first = scroll_window(menu.cursor, visible);
    for (slot, (index, item)) in menu
        .visible_items()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let origin = Point::new(PAD, BODY_TOP + 34 + slot as i32 * (row_h as i32 + 4));
        let highlight = if menu.is_flashing(item.id, now_ms) {
            RowHighlight::Flash
        } else if index == menu.cursor {
            RowHighlight::Selected
        } else {
            RowHighlight::None
        };
        let price = money_text(item.price);
        ListRow::new(item.name)
            .trailing(price.as_str())
            .highlight(highlight)
            .render(
                display,
                Rectangle::new(origin, Size::new((BODY_RIGHT - PAD) as u32, row_h)),
            )?;
    }

    if let Some(sheet) = &menu.sheet {
        render_sheet(display, sheet)?;
    }
    Ok(())
}

fn render_sheet<D>(display: &mut D, sheet: &ui::menu::CustomizeSheet) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let size = Size::new(340, 216);
    let origin = Point::new(
        (theme::DISPLAY_WIDTH as i32 - size.width as i32) / 2,
        (theme::DISPLAY_HEIGHT as i32 - size.height as i32) / 2,
    );
    let bounds = Rectangle::new(origin, size);
    bounds
        .into_styled(PrimitiveStyle::with_fill(theme::SURFACE))
        .draw(display)?;
    bounds
        .into_styled(PrimitiveStyle::with_stroke(theme::PRIMARY_DARK, 2))
        .draw(display)?;

    draw_text(
        display,
        sheet.item.name,
        Point::new(origin.x + 12, origin.y + 10),
        theme::FONT_BODY,
        theme::TEXT,
    )?;

    let c = &sheet.customization;
    let mut spice: String<72> = String::new();
    write!(spice, "Spice:  < {} >", c.spice).ok();
    let mut oil: String<72> = String::new();
    write!(oil, "Oil:    < {} >", c.oil).ok();
    let mut salt: String<72> = String::new();
    write!(salt, "Salt:   < {} >", c.salt).ok();
    let mut sugar: String<72> = String::new();
    write!(sugar, "Sugar:  < {} >", c.sugar).ok();
    let mut note: String<72> = String::new();
    write!(note, "Note: {}", c.note).ok();
    let rows: [(SheetRow, &String<72>); 5] = [
        (SheetRow::Spice, &spice),
        (SheetRow::Oil, &oil),
        (SheetRow::Salt, &salt),
        (SheetRow::Sugar, &sugar),
        (SheetRow::Note, &note),
    ];

    for (index, (row, text)) in rows.iter().enumerate() {
        let y = origin.y + 42 + index as i32 * 30;
        let focused = *row == sheet.row;
        if focused {
            Rectangle::new(
                Point::new(origin.x + 6, y - 4),
                Size::new(size.width - 12, 28),
            )
            .into_styled(PrimitiveStyle::with_fill(theme::FLASH))
            .draw(display)?;
        }
        draw_text(
            display,
            text.as_str(),
            Point::new(origin.x + 14, y),
            theme::FONT_BODY,
            theme::TEXT,
        )?;
    }

    draw_text(
        display,
        "ENTER add to cart   ESC cancel",
        Point::new(origin.x + 12, origin.y + size.height as i32 - 16),
        theme::FONT_SMALL,
        theme::TEXT_MUTED,
    )
}

fn render_cart<D>(display: &mut D, app: &App) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    if app.cart.is_empty() {
        return draw_text(
            display,
            "Cart is empty",
            Point::new(PAD, BODY_TOP + 8),
            theme::FONT_BODY,
            theme::TEXT_MUTED,
        );
    }

    let row_h = 40u32;
    let visible = 5usize;
    let first = scroll_window(app.cart_view.cursor, visible);
    for (slot, (index, line)) in app
        .cart
        .lines()
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let origin = Point::new(PAD, BODY_TOP + slot as i32 * (row_h as i32 + 4));
        let bounds = Rectangle::new(origin, Size::new((BODY_RIGHT - PAD) as u32, row_h));
        let selected = index == app.cart_view.cursor;
        let (fill, fg, muted) = if selected {
            (theme::PRIMARY, theme::TEXT_INVERT, theme::TEXT_INVERT)
        } else {
            (theme::SURFACE, theme::TEXT, theme::TEXT_MUTED)
        };
        bounds
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)?;
        bounds
            .into_styled(PrimitiveStyle::with_stroke(theme::BORDER, 1))
            .draw(display)?;

        let mut name: String<72> = String::new();
        write!(name, "{} x {}", line.quantity, line.name).ok();
        draw_text(
            display,
            name.as_str(),
            Point::new(origin.x + 10, origin.y + 4),
            theme::FONT_BODY,
            fg,
        )?;
        let total = money_text(line.line_total());
        draw_text_right(display, total.as_str(), BODY_RIGHT - 10, origin.y + 4, theme::FONT_BODY, fg)?;

        if !line.customization.is_plain() {
            let summary = customization_text(&line.customization);
            draw_text(
                display,
                summary.as_str(),
                Point::new(origin.x + 10, origin.y + 26),
                theme::FONT_SMALL,
                muted,
            )?;
        }
    }

    let mut subtotal: String<40> = String::new();
    write!(subtotal, "Subtotal  {}", money_text(app.cart.subtotal())).ok();
    draw_text_right(
        display,
        subtotal.as_str(),
        BODY_RIGHT,
        FOOTER_TOP - 28,
        theme::FONT_BODY,
        theme::TEXT,
    )
}

/// Summary lines that fit between the context banner and the totals block.
const SUMMARY_ROWS: usize = 9;

/// Lines hidden from the summary list when the cart is longer than
/// [`SUMMARY_ROWS`].
fn summary_overflow(len: usize) -> Option<usize> {
    (len > SUMMARY_ROWS).then(|| len.saturating_sub(SUMMARY_ROWS))
}

fn render_summary<D>(display: &mut D, app: &App) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    if let Some(context) = app.context.get() {
        render_context_banner(display, context)?;
    }

    let mut y = BODY_TOP + 36;
    let lines = app.cart.lines();
    for line in lines.iter().take(SUMMARY_ROWS) {
        let mut name: String<72> = String::new();
        write!(name, "{} x {}", line.quantity, line.name).ok();
        draw_text(display, name.as_str(), Point::new(PAD, y), theme::FONT_SMALL, theme::TEXT)?;
        let total = money_text(line.line_total());
        draw_text_right(display, total.as_str(), BODY_RIGHT, y, theme::FONT_SMALL, theme::TEXT)?;
        y += 14;
    }
    if let Some(hidden) = summary_overflow(lines.len()) {
        let mut more: String<32> = String::new();
        write!(more, "+ {hidden} more lines").ok();
        draw_text(display, more.as_str(), Point::new(PAD, y), theme::FONT_SMALL, theme::TEXT_MUTED)?;
    }

    let totals = app.totals();
    y = FOOTER_TOP - 76;
    for (label, amount, color) in [
        ("Subtotal", totals.subtotal, theme::TEXT_MUTED),
        ("GST (9%)", totals.gst, theme::TEXT_MUTED),
        ("TOTAL", totals.grand_total, theme::TEXT),
    ] {
        draw_text(display, label, Point::new(PAD, y), theme::FONT_BODY, color)?;
        let amount = money_text(amount);
        draw_text_right(display, amount.as_str(), BODY_RIGHT, y, theme::FONT_BODY, color)?;
        y += 24;
    }
    Ok(())
}

fn render_context_banner<D>(display: &mut D, context: &OrderContext) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let bounds = Rectangle::new(
        Point::new(PAD, BODY_TOP),
        Size::new((BODY_RIGHT - PAD) as u32, 26),
    );
    bounds
        .into_styled(PrimitiveStyle::with_fill(theme::PRIMARY))
        .draw(display)?;
    let mut banner: String<64> = String::new();
    write!(banner, "{context}").ok();
    draw_text(
        display,
        banner.as_str(),
        Point::new(PAD + 10, BODY_TOP + 8),
        theme::FONT_SMALL,
        theme::TEXT_INVERT,
    )
}

fn render_payment<D>(display: &mut D, app: &App) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let payment = &app.payment;
    let totals = app.totals();
    match payment.phase {
        PaymentPhase::Choosing => render_payment_choosing(display, payment, &totals),
        PaymentPhase::Processing { .. } => {
            let text = "PROCESSING PAYMENT...";
            let tw = text_width(text, theme::FONT_BODY) as i32;
            draw_text(
                display,
                text,
                Point::new((theme::DISPLAY_WIDTH as i32 - tw) / 2, 150),
                theme::FONT_BODY,
                theme::TEXT,
            )
        }
        PaymentPhase::Success { .. } => render_payment_success(display, payment, &totals),
    }
}

fn render_payment_choosing<D>(
    display: &mut D,
    payment: &PaymentScreen,
    totals: &order::Totals,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    let mut due: String<40> = String::new();
    write!(due, "Amount due  {}", money_text(totals.grand_total)).ok();
    draw_text(display, due.as_str(), Point::new(PAD, BODY_TOP), theme::FONT_BODY, theme::TEXT)?;

    // Method row.
    let tile = Size::new(108, 48);
    for (index, method) in PayMethod::ALL.iter().enumerate() {
        let origin = Point::new(PAD + index as i32 * (tile.width as i32 + 8), BODY_TOP + 32);
        Tile::new(method.label())
            .selected(payment.method == Some(*method))
            .render(display, Rectangle::new(origin, tile))?;
    }

    if payment.method == Some(PayMethod::Cash) {
        draw_text(
            display,
            "Cash tendered",
            Point::new(PAD, BODY_TOP + 96),
            theme::FONT_SMALL,
            theme::TEXT_MUTED,
        )?;
        let paid = money_text(payment.paid());
        Field::new(paid.as_str()).focused(true).render(
            display,
            Rectangle::new(Point::new(PAD, BODY_TOP + 110), Size::new(180, 32)),
        )?;

        let mut line: String<40> = String::new();
        let color = match payment.tender(totals) {
            CashTender::Sufficient { change } => {
                write!(line, "Change  {}", money_text(change)).ok();
                theme::PRIMARY_DARK
            }
            CashTender::Insufficient { remaining } => {
                write!(line, "Short by  {}", money_text(remaining)).ok();
                theme::DANGER
            }
        };
        draw_text(
            display,
            line.as_str(),
            Point::new(PAD + 196, BODY_TOP + 116),
            theme::FONT_BODY,
            color,
        )?;
    }

    let enabled = payment.confirm_enabled(totals);
    let label = if enabled {
        "ENTER  CONFIRM PAYMENT"
    } else {
        "Select a method to continue"
    };
    let color = if enabled {
        theme::PRIMARY_DARK
    } else {
        theme::TEXT_MUTED
    };
    draw_text(display, label, Point::new(PAD, FOOTER_TOP - 32), theme::FONT_BODY, color)
}

fn render_payment_success<D>(
    display: &mut D,
    payment: &PaymentScreen,
    totals: &order::Totals,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = theme::Color>,
{
    Rectangle::new(
        Point::new(0, theme::HEADER_H as i32),
        Size::new(
            theme::DISPLAY_WIDTH,
            theme::DISPLAY_HEIGHT - theme::HEADER_H - theme::FOOTER_H,
        ),
    )
    .into_styled(PrimitiveStyle::with_fill(theme::PRIMARY))
    .draw(display)?;

    let center = |display: &mut D, text: &str, y: i32| {
        let tw = text_width(text, theme::FONT_BODY) as i32;
        draw_text(
            display,
            text,
            Point::new((theme::DISPLAY_WIDTH as i32 - tw) / 2, y),
            theme::FONT_BODY,
            theme::TEXT_INVERT,
        )
    };
    center(display, "PAYMENT SUCCESSFUL", 120)?;
    let mut paid: String<40> = String::new();
    write!(paid, "Paid  {}", money_text(totals.grand_total)).ok();
    center(display, paid.as_str(), 152)?;
    if payment.method == Some(PayMethod::Cash) {
        if let CashTender::Sufficient { change } = payment.tender(totals) {
            let mut line: String<40> = String::new();
            write!(line, "Change  {}", money_text(change)).ok();
            center(display, line.as_str(), 184)?;
        }
    }
    Ok(())
}
