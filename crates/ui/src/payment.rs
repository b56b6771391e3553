//! Payment screen — method picker, cash tender entry, processing/success.
//!
//! Cash is keyed register-style: digits with an implicit decimal point, so
//! typing `1`, `5`, `0`, `0`, `0` reads as 150.00. Tender suggestion keys
//! overwrite the amount with a whole note. The confirm action stays disabled
//! until a method is chosen and (for cash) the tendered amount covers the
//! grand total.

use heapless::String;
use order::{CashTender, Money, Totals};

use crate::input::InputEvent;
use crate::screen::ScreenRequest;

/// Duration of the simulated processing phase, in milliseconds.
pub const PROCESSING_MS: u64 = 2500;

/// How long the success screen is shown before the terminal resets.
pub const SUCCESS_MS: u64 = 5000;

/// Maximum cash entry digits (raw cents).
const MAX_CASH_DIGITS: usize = 10;

/// Accepted payment methods, in picker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayMethod {
    /// Cash with tender/change handling.
    Cash,
    /// NETS terminal.
    Nets,
    /// PayNow QR.
    PayNow,
    /// Credit/debit card.
    Card,
}

impl PayMethod {
    /// All methods in picker order.
    pub const ALL: [PayMethod; 4] = [
        PayMethod::Cash,
        PayMethod::Nets,
        PayMethod::PayNow,
        PayMethod::Card,
    ];

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PayMethod::Cash => "CASH",
            PayMethod::Nets => "NETS",
            PayMethod::PayNow => "PAYNOW",
            PayMethod::Card => "CARD",
        }
    }
}

/// Where the payment flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentPhase {
    /// Picking a method / entering tender.
    #[default]
    Choosing,
    /// Simulated processing spinner.
    Processing {
        /// When the phase ends.
        until_ms: u64,
    },
    /// Success banner; the terminal resets when it expires.
    Success {
        /// When the phase ends.
        until_ms: u64,
    },
}

/// Payment screen state.
#[derive(Debug, Default)]
pub struct PaymentScreen {
    /// Selected method, if any.
    pub method: Option<PayMethod>,
    /// Raw cash digits (implicit cents).
    pub cash_input: String<MAX_CASH_DIGITS>,
    /// Current flow phase.
    pub phase: PaymentPhase,
}

impl PaymentScreen {
    /// Create a fresh payment screen in the choosing phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the initial state (after the success phase completes).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The tendered amount parsed from the digit buffer.
    #[must_use]
    pub fn paid(&self) -> Money {
        let cents = self
            .cash_input
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0u64, |acc, d| {
                acc.saturating_mul(10).saturating_add(u64::from(d))
            });
        Money::from_cents(cents)
    }

    /// Overwrite the digit buffer with an exact amount (tender shortcut).
    pub fn set_paid(&mut self, amount: Money) {
        self.cash_input.clear();
        let mut cents = amount.cents();
        let mut digits = [0u8; 20];
        let mut count = 0usize;
        loop {
            if let Some(slot) = digits.get_mut(count) {
                #[allow(clippy::cast_possible_truncation)] // % 10 fits in u8
                {
                    *slot = (cents % 10) as u8;
                }
            }
            count = count.saturating_add(1);
            cents /= 10;
            if cents == 0 {
                break;
            }
        }
        for i in (0..count).rev() {
            let Some(d) = digits.get(i) else { continue };
            if self
                .cash_input
                .push(char::from(b'0'.saturating_add(*d)))
                .is_err()
            {
                break;
            }
        }
    }

    /// Cash evaluation against `totals` (only meaningful when Cash is the
    /// selected method and digits have been entered).
    #[must_use]
    pub fn tender(&self, totals: &Totals) -> CashTender {
        CashTender::evaluate(totals, self.paid())
    }

    /// Whether the confirm action is enabled.
    #[must_use]
    pub fn confirm_enabled(&self, totals: &Totals) -> bool {
        match self.method {
            None => false,
            Some(PayMethod::Cash) => self.tender(totals).is_sufficient(),
            Some(_) => true,
        }
    }

    /// Handle one input event.
    ///
    /// Input is ignored during the processing and success phases; the flow
    /// only moves through [`tick`](Self::tick) once confirmed.
    pub fn handle(
        &mut self,
        event: InputEvent,
        totals: &Totals,
        now_ms: u64,
    ) -> Option<ScreenRequest> {
        if self.phase != PaymentPhase::Choosing {
            return None;
        }
        match event {
            InputEvent::Left => {
                self.select_method(false);
                None
            }
            InputEvent::Right => {
                self.select_method(true);
                None
            }
            InputEvent::Digit(d) if self.method == Some(PayMethod::Cash) => {
                self.cash_input
                    .push(char::from(b'0'.saturating_add(d.min(9))))
                    .ok();
                None
            }
            InputEvent::Backspace if self.method == Some(PayMethod::Cash) => {
                self.cash_input.pop();
                None
            }
            InputEvent::Up | InputEvent::Down
                if self.method == Some(PayMethod::Cash) =>
            {
                self.cycle_tender(totals, event == InputEvent::Down);
                None
            }
            InputEvent::Select => {
                if self.confirm_enabled(totals) {
                    self.phase = PaymentPhase::Processing {
                        until_ms: now_ms.saturating_add(PROCESSING_MS),
                    };
                }
                None
            }
            InputEvent::Back => Some(ScreenRequest::Pop),
            _ => None,
        }
    }

    fn select_method(&mut self, forward: bool) {
        let index = self
            .method
            .and_then(|m| PayMethod::ALL.iter().position(|x| *x == m));
        let next = match (index, forward) {
            (None, _) => 0,
            (Some(i), true) => i.saturating_add(1).min(PayMethod::ALL.len().saturating_sub(1)),
            (Some(i), false) => i.saturating_sub(1),
        };
        self.method = PayMethod::ALL.get(next).copied();
    }

    /// Step the tendered amount through the covering note denominations.
    fn cycle_tender(&mut self, totals: &Totals, forward: bool) {
        let paid = self.paid();
        let next = if forward {
            totals.tender_suggestions().find(|note| *note > paid)
        } else {
            totals
                .tender_suggestions()
                .filter(|note| *note < paid)
                .last()
                .or_else(|| totals.tender_suggestions().next())
        };
        if let Some(note) = next {
            self.set_paid(note);
        }
    }

    /// Advance timed phases. Returns `true` when the success phase has
    /// expired and the terminal should finalize the order (clear cart and
    /// context, reset navigation).
    #[must_use]
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.phase {
            PaymentPhase::Processing { until_ms } if now_ms >= until_ms => {
                self.phase = PaymentPhase::Success {
                    until_ms: now_ms.saturating_add(SUCCESS_MS),
                };
                false
            }
            PaymentPhase::Success { until_ms } if now_ms >= until_ms => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals_100() -> Totals {
        Totals::from_subtotal(Money::from_units(100))
    }

    #[test]
    fn test_payment_confirm_disabled_without_method() {
        let screen = PaymentScreen::new();
        assert!(!screen.confirm_enabled(&totals_100()));
    }

    #[test]
    fn test_payment_card_confirm_enabled() {
        let mut screen = PaymentScreen::new();
        for _ in 0..4 {
            screen.handle(InputEvent::Right, &totals_100(), 0);
        }
        assert_eq!(screen.method, Some(PayMethod::Card));
        assert!(screen.confirm_enabled(&totals_100()));
    }

    #[test]
    fn test_payment_cash_insufficient_disables_confirm() {
        let mut screen = PaymentScreen::new();
        screen.handle(InputEvent::Right, &totals_100(), 0); // Cash
        // Type 100.00.
        for d in [1, 0, 0, 0, 0] {
            screen.handle(InputEvent::Digit(d), &totals_100(), 0);
        }
        assert_eq!(screen.paid(), Money::from_units(100));
        assert!(!screen.confirm_enabled(&totals_100()));
        match screen.tender(&totals_100()) {
            CashTender::Insufficient { remaining } => {
                assert_eq!(remaining, Money::from_units(9));
            }
            CashTender::Sufficient { .. } => panic!("100 does not cover 109"),
        }
    }

    #[test]
    fn test_payment_cash_change() {
        let mut screen = PaymentScreen::new();
        screen.handle(InputEvent::Right, &totals_100(), 0);
        screen.set_paid(Money::from_units(150));
        assert_eq!(screen.cash_input.as_str(), "15000");
        match screen.tender(&totals_100()) {
            CashTender::Sufficient { change } => {
                assert_eq!(change, Money::from_units(41));
            }
            CashTender::Insufficient { .. } => panic!("150 covers 109"),
        }
        assert!(screen.confirm_enabled(&totals_100()));
    }

    #[test]
    fn test_payment_tender_cycle() {
        let mut screen = PaymentScreen::new();
        let totals = totals_100(); // grand total 109 -> notes 200, 500, 1000
        screen.handle(InputEvent::Right, &totals, 0); // Cash
        screen.handle(InputEvent::Down, &totals, 0);
        assert_eq!(screen.paid(), Money::from_units(200));
        screen.handle(InputEvent::Down, &totals, 0);
        assert_eq!(screen.paid(), Money::from_units(500));
        screen.handle(InputEvent::Up, &totals, 0);
        assert_eq!(screen.paid(), Money::from_units(200));
    }

    #[test]
    fn test_payment_confirm_starts_processing() {
        let mut screen = PaymentScreen::new();
        let totals = totals_100();
        screen.handle(InputEvent::Right, &totals, 0);
        screen.set_paid(Money::from_units(200));
        screen.handle(InputEvent::Select, &totals, 10_000);
        assert_eq!(
            screen.phase,
            PaymentPhase::Processing {
                until_ms: 10_000 + PROCESSING_MS
            }
        );
        // Input is ignored while processing.
        screen.handle(InputEvent::Backspace, &totals, 10_100);
        assert_eq!(screen.paid(), Money::from_units(200));
    }

    #[test]
    fn test_payment_phase_timers() {
        let mut screen = PaymentScreen::new();
        let totals = totals_100();
        screen.handle(InputEvent::Right, &totals, 0);
        screen.set_paid(Money::from_units(200));
        screen.handle(InputEvent::Select, &totals, 0);

        assert!(!screen.tick(2_499));
        assert!(!screen.tick(2_500)); // -> Success until 7_500
        assert_eq!(
            screen.phase,
            PaymentPhase::Success { until_ms: 7_500 }
        );
        assert!(!screen.tick(7_499));
        assert!(screen.tick(7_500)); // finalize
    }

    #[test]
    fn test_payment_reset() {
        let mut screen = PaymentScreen::new();
        screen.handle(InputEvent::Right, &totals_100(), 0);
        screen.set_paid(Money::from_units(200));
        screen.reset();
        assert_eq!(screen.method, None);
        assert!(screen.cash_input.is_empty());
        assert_eq!(screen.phase, PaymentPhase::Choosing);
    }
}
