//! Rendering layer for the order terminal.
//!
//! Pure drawing over any `DrawTarget<Color = Rgb565>`: the `ui` crate's
//! screen state goes in, pixels come out, nothing is mutated. The `terminal`
//! binary points this at a simulator window; the visual tests point it at a
//! headless framebuffer.

// Layout math is plain i32/u32 arithmetic on a fixed 480x320 canvas where
// every coordinate is bounded by construction.
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::render_app;
