//! Desktop order terminal.
//!
//! Runs the screen state machines in an SDL window via the
//! embedded-graphics simulator. Keyboard input maps onto the terminal's
//! input events; a monotonic millisecond clock drives the flash and payment
//! timers.

use std::time::{Duration, Instant};

use anyhow::Context as _;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use tracing_subscriber::EnvFilter;

use terminal_ui::{render_app, theme};
use ui::{App, InputEvent};

mod config;

use config::TerminalConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = TerminalConfig::from_env().context("loading terminal configuration")?;
    tracing::info!(scale = config.scale, "starting order terminal");

    let mut display = SimulatorDisplay::<Rgb565>::with_default_color(
        Size::new(theme::DISPLAY_WIDTH, theme::DISPLAY_HEIGHT),
        theme::BG,
    );
    let output_settings = OutputSettingsBuilder::new().scale(config.scale).build();
    let mut window = Window::new(&config.title, &output_settings);

    let mut app = App::new();
    let started = Instant::now();
    let mut last_screen = app.nav.current();

    'running: loop {
        let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        app.tick(now_ms);

        let screen = app.nav.current();
        if screen != last_screen {
            tracing::debug!(?screen, "screen changed");
            if screen == ui::Screen::Payment {
                tracing::info!(total = %app.totals().grand_total, "payment started");
            }
            if last_screen == ui::Screen::Payment && app.cart.is_empty() {
                tracing::info!("order completed, terminal reset");
            }
            last_screen = screen;
        }
        if let Err(e) = render_app(&mut display, &app, now_ms) {
            // SimulatorDisplay cannot fail to draw.
            match e {}
        }
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if let Some(input) = map_key(keycode) {
                        tracing::debug!(?input, "key event");
                        app.handle(input, now_ms);
                    }
                }
                _ => {}
            }
        }
        std::thread::sleep(Duration::from_millis(config.frame_ms));
    }

    tracing::info!("order terminal shut down");
    Ok(())
}

/// Translate an SDL keycode into a terminal input event.
///
/// Arrows, Enter, Escape and Delete drive navigation; digits and letters
/// feed the text fields and the cash tender entry.
fn map_key(keycode: Keycode) -> Option<InputEvent> {
    match keycode {
        Keycode::Up => Some(InputEvent::Up),
        Keycode::Down => Some(InputEvent::Down),
        Keycode::Left => Some(InputEvent::Left),
        Keycode::Right => Some(InputEvent::Right),
        Keycode::Return | Keycode::KpEnter => Some(InputEvent::Select),
        Keycode::Escape => Some(InputEvent::Back),
        Keycode::Delete => Some(InputEvent::Clear),
        Keycode::Backspace => Some(InputEvent::Backspace),
        other => {
            // Printable ASCII keys carry their character as the keycode value.
            let c = u8::try_from(other as i32).ok()?;
            match c {
                b'0'..=b'9' => Some(InputEvent::Digit(c.saturating_sub(b'0'))),
                b'a'..=b'z' | b'@' | b'.' | b'-' | b'_' | b' ' => {
                    Some(InputEvent::Char(char::from(c)))
                }
                _ => None,
            }
        }
    }
}
