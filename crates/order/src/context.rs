//! Order context — which table or takeaway slot the in-progress cart belongs to.
//!
//! At most one context exists at a time. `set` overwrites unconditionally
//! (last write wins, no merge); downstream screens treat an unset context as
//! "redirect to the category picker".

use core::fmt;

use heapless::String;

/// Maximum byte length of a section / table / slot label.
pub const MAX_LABEL: usize = 16;

/// A bounded label string for sections, tables and takeaway slots.
pub type Label = String<MAX_LABEL>;

/// The physical or logical slot an order is being rung up for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderContext {
    /// A table in one of the dining sections.
    DineIn {
        /// Section name, e.g. `"Section 1"`.
        section: Label,
        /// Table number within the section, e.g. `"5"`.
        table_no: Label,
    },
    /// A numbered takeaway slot, e.g. `"T7"` or `"D2"`.
    Takeaway {
        /// Slot label.
        slot: Label,
    },
}

impl OrderContext {
    /// Build a dine-in context, truncating labels that exceed [`MAX_LABEL`].
    pub fn dine_in(section: &str, table_no: &str) -> Self {
        OrderContext::DineIn {
            section: truncated(section),
            table_no: truncated(table_no),
        }
    }

    /// Build a takeaway context, truncating the label if needed.
    pub fn takeaway(slot: &str) -> Self {
        OrderContext::Takeaway {
            slot: truncated(slot),
        }
    }
}

impl fmt::Display for OrderContext {
    /// The banner shown on the summary and payment screens.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderContext::DineIn { section, table_no } => {
                write!(f, "DINE-IN | {section} | Table {table_no}")
            }
            OrderContext::Takeaway { slot } => write!(f, "TAKEAWAY | Order {slot}"),
        }
    }
}

fn truncated(s: &str) -> Label {
    let mut out = Label::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Holder for the single active [`OrderContext`].
///
/// Two states: unset (initial) and set. The terminal loops between them for
/// the life of the process.
#[derive(Debug, Default)]
pub struct OrderContextStore {
    current: Option<OrderContext>,
}

impl OrderContextStore {
    /// Create an empty store (no active context).
    pub const fn new() -> Self {
        OrderContextStore { current: None }
    }

    /// Replace any existing context with `context`.
    pub fn set(&mut self, context: OrderContext) {
        self.current = Some(context);
    }

    /// The active context, if one has been selected.
    #[must_use]
    pub fn get(&self) -> Option<&OrderContext> {
        self.current.as_ref()
    }

    /// Drop the active context (payment completed or order abandoned).
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// `true` when a context is active.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}
