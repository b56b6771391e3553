//! Palette, fonts and fixed display geometry.
//!
//! Colors are specified as 8-bit RGB and squeezed into `Rgb565` at compile
//! time, so the rest of the crate can speak in familiar hex values.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;

/// The terminal's color space.
pub type Color = Rgb565;

/// Display width in pixels.
pub const DISPLAY_WIDTH: u32 = 480;
/// Display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 320;

/// Header bar height.
pub const HEADER_H: u32 = 36;
/// Footer hint bar height.
pub const FOOTER_H: u32 = 20;

/// Body font (10x20).
pub const FONT_BODY: &MonoFont<'static> = &FONT_10X20;
/// Caption font (6x10).
pub const FONT_SMALL: &MonoFont<'static> = &FONT_6X10;

const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Screen background.
pub const BG: Rgb565 = rgb(0xf1, 0xf5, 0xf9);
/// Card / tile surface.
pub const SURFACE: Rgb565 = rgb(0xff, 0xff, 0xff);
/// Header bar fill.
pub const HEADER: Rgb565 = rgb(0x0f, 0x17, 0x2a);
/// Brand green, used for selection and confirm actions.
pub const PRIMARY: Rgb565 = rgb(0x22, 0xc5, 0x5e);
/// Darker green for pressed / active accents.
pub const PRIMARY_DARK: Rgb565 = rgb(0x16, 0xa3, 0x4a);
/// Soft green used for the "Added" flash on menu rows.
pub const FLASH: Rgb565 = rgb(0xbb, 0xf7, 0xd0);
/// Body text.
pub const TEXT: Rgb565 = rgb(0x0f, 0x17, 0x2a);
/// Secondary text.
pub const TEXT_MUTED: Rgb565 = rgb(0x64, 0x74, 0x8b);
/// Text on dark or green fills.
pub const TEXT_INVERT: Rgb565 = rgb(0xff, 0xff, 0xff);
/// Error banners and the insufficient-cash readout.
pub const DANGER: Rgb565 = rgb(0xef, 0x44, 0x44);
/// Tile and field borders.
pub const BORDER: Rgb565 = rgb(0xcb, 0xd5, 0xe1);

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;

    #[test]
    fn test_rgb_squeeze_keeps_channel_order() {
        // Pure channels survive the 8-bit -> 565 squeeze.
        assert_eq!(rgb(0xff, 0x00, 0x00), Rgb565::RED);
        assert_eq!(rgb(0x00, 0xff, 0x00), Rgb565::GREEN);
        assert_eq!(rgb(0x00, 0x00, 0xff), Rgb565::BLUE);
    }

    #[test]
    fn test_palette_is_distinct() {
        assert_ne!(PRIMARY, PRIMARY_DARK);
        assert_ne!(BG, SURFACE);
        assert_ne!(TEXT, TEXT_MUTED);
    }
}
