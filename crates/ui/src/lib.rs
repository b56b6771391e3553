//! Application UI layer — screen state machines, navigation, composition root.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.
//! Screens here are pure state: they consume [`input::InputEvent`]s, mutate
//! the injected stores, and request navigation. They never render and never
//! perform I/O — the `terminal-ui` crate draws them and the `terminal`
//! binary feeds them events, which keeps every flow testable on the host.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod app;
pub mod cart_view;
pub mod category;
pub mod cuisine;
pub mod input;
pub mod login;
pub mod menu;
pub mod navigation;
pub mod payment;
pub mod screen;
pub mod summary;
pub mod tables;

pub use app::App;
pub use input::InputEvent;
pub use navigation::Navigator;
pub use screen::{Screen, ScreenRequest};
