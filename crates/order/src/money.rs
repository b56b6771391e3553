//! Money — integer minor-unit (cent) arithmetic.
//!
//! Prices are carried as whole cents in a `u64`. Display formatting is the
//! only place a decimal point appears; no floating point is involved anywhere
//! in the totals path, so `subtotal + gst` always reconciles with the printed
//! receipt.

use core::fmt;

/// GST rate in percent applied on the summary and payment screens.
pub const GST_PERCENT: u64 = 9;

/// An amount of currency in whole cents.
///
/// All arithmetic saturates at the numeric bounds rather than wrapping or
/// panicking; a cart large enough to saturate `u64` cents is not a realistic
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(u64);

impl Money {
    /// Zero cents. Free items are representable, not an error.
    pub const ZERO: Self = Money(0);

    /// Construct from whole cents.
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Construct from whole currency units (dollars).
    pub const fn from_units(units: u64) -> Self {
        Money(units.saturating_mul(100))
    }

    /// The amount in whole cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Saturating addition.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction, clamping at zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn saturating_mul(self, qty: u32) -> Self {
        Money(self.0.saturating_mul(u64::from(qty)))
    }

    /// GST due on this amount: `amount * 9 / 100`, truncated to the cent.
    #[must_use]
    pub fn gst(self) -> Self {
        // u64 cents * 9 cannot overflow for any realistic order total, but
        // stay within the checked-arithmetic discipline anyway.
        Money(self.0.saturating_mul(GST_PERCENT) / 100)
    }
}

impl fmt::Display for Money {
    /// Renders as `units.cc`, e.g. `1250` cents -> `"12.50"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        write!(f, "{units}.{cents:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn test_money_from_units() {
        assert_eq!(Money::from_units(25).cents(), 2500);
    }

    #[test]
    fn test_money_display_two_places() {
        let m = Money::from_cents(1250);
        assert_eq!(format!("{m}"), "12.50");
    }

    #[test]
    fn test_money_display_pads_cents() {
        let m = Money::from_cents(905);
        assert_eq!(format!("{m}"), "9.05");
    }

    #[test]
    fn test_money_zero_display() {
        assert_eq!(format!("{}", Money::ZERO), "0.00");
    }

    #[test]
    fn test_money_gst_nine_percent() {
        // 100.00 -> 9.00
        assert_eq!(Money::from_units(100).gst(), Money::from_units(9));
    }

    #[test]
    fn test_money_gst_truncates_to_cent() {
        // 10.55 * 9% = 0.9495 -> 0.94 (truncated, never rounded up)
        assert_eq!(Money::from_cents(1055).gst(), Money::from_cents(94));
    }

    #[test]
    fn test_money_sub_clamps_at_zero() {
        let a = Money::from_cents(100);
        let b = Money::from_cents(250);
        assert_eq!(a.saturating_sub(b), Money::ZERO);
    }

    #[test]
    fn test_money_mul_by_quantity() {
        assert_eq!(Money::from_cents(250).saturating_mul(3).cents(), 750);
    }
}
