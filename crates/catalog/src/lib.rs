//! Static menu catalog and floor plan.
//!
//! Everything here is `const` data defined at build time and consumed
//! read-only by the screens: cuisines, per-cuisine categories, items with
//! prices, dining sections and takeaway slots. No lifecycle, no mutation.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod floor;
pub mod menu;

pub use floor::{Section, SECTIONS, TAKEAWAY_SLOTS};
pub use menu::{find, CatalogItem, Cuisine};
