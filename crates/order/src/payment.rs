//! Payment arithmetic — totals, cash tender, change.
//!
//! Pure, deterministic, stateless. The payment *flow* (method selection,
//! processing and success phases) lives in the UI layer; only the money
//! rules live here.

use crate::money::Money;

/// Note denominations offered as one-tap tender suggestions.
pub const TENDER_NOTES: [u64; 7] = [10, 20, 50, 100, 200, 500, 1000];

/// Subtotal, GST and grand total for a cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// 9% GST on the subtotal, truncated to the cent.
    pub gst: Money,
    /// `subtotal + gst`.
    pub grand_total: Money,
}

impl Totals {
    /// Derive totals from a subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Money) -> Self {
        let gst = subtotal.gst();
        Totals {
            subtotal,
            gst,
            grand_total: subtotal.saturating_add(gst),
        }
    }

    /// Tender note values (in whole currency units) that cover the grand
    /// total, smallest first. Empty when the total exceeds the largest note.
    pub fn tender_suggestions(&self) -> impl Iterator<Item = Money> + '_ {
        TENDER_NOTES
            .iter()
            .map(|units| Money::from_units(*units))
            .filter(|note| *note >= self.grand_total)
    }
}

/// Outcome of comparing a tendered cash amount against the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashTender {
    /// `paid >= grand_total`; `change` may be zero for exact payment.
    Sufficient {
        /// `paid - grand_total`.
        change: Money,
    },
    /// `paid < grand_total`; confirmation must stay disabled.
    Insufficient {
        /// `grand_total - paid` still owed.
        remaining: Money,
    },
}

impl CashTender {
    /// Evaluate a tendered amount against `totals`.
    #[must_use]
    pub fn evaluate(totals: &Totals, paid: Money) -> Self {
        if paid >= totals.grand_total {
            CashTender::Sufficient {
                change: paid.saturating_sub(totals.grand_total),
            }
        } else {
            CashTender::Insufficient {
                remaining: totals.grand_total.saturating_sub(paid),
            }
        }
    }

    /// `true` when the tendered amount covers the grand total.
    #[must_use]
    pub fn is_sufficient(&self) -> bool {
        matches!(self, CashTender::Sufficient { .. })
    }
}
