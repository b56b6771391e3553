//! Order domain — cart store, order context, money and payment arithmetic.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.
//! It deliberately has **no** I/O and no rendering — screens own those
//! concerns and mutate these stores through the method API, which makes
//! every rule here trivially testable on the host.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod cart;
pub mod context;
pub mod money;
pub mod payment;

pub use cart::{AmountLevel, Cart, CartError, CartLine, CartStore, Customization, SpiceLevel};
pub use context::{OrderContext, OrderContextStore};
pub use money::Money;
pub use payment::{CashTender, Totals};
