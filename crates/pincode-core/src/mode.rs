//! Operating mode, reference PIN and retry accounting

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PinCodeError, Result};
use crate::pin::Pin;

/// Default number of wrong entries allowed before exhaustion
pub const DEFAULT_RETRY_BUDGET: u32 = 5;

/// What a completed row is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Capture a freshly chosen PIN for the host to store
    SetNew,
    /// Compare the entry against the reference PIN
    #[default]
    Verify,
}

/// Values the completion dispatcher reads once, at entry
#[derive(Debug, Clone)]
pub struct DispatchSnapshot {
    pub mode: Mode,
    pub reference_pin: Pin,
    pub retry_budget: u32,
}

/// Mode, reference PIN, retry budget and wrong-attempt counter
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
    reference_pin: Pin,
    retry_budget: u32,
    wrong_count: u32,
}

impl Default for ModeController {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            reference_pin: Pin::default(),
            retry_budget: DEFAULT_RETRY_BUDGET,
            wrong_count: 0,
        }
    }
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch mode. Cells and the wrong-attempt counter are left alone.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(?mode, "Pin code mode set");
        self.mode = mode;
    }

    pub fn reference_pin(&self) -> &Pin {
        &self.reference_pin
    }

    /// Replace the reference PIN after validating it
    pub fn set_reference_pin(&mut self, pin: &str) -> Result<()> {
        self.reference_pin = Pin::parse(pin)?;
        Ok(())
    }

    pub fn set_reference(&mut self, pin: Pin) {
        self.reference_pin = pin;
    }

    pub fn retry_budget(&self) -> u32 {
        self.retry_budget
    }

    /// Replace the retry budget.
    ///
    /// The counter is kept; if it already meets the new budget the next wrong
    /// entry exhausts immediately.
    pub fn set_retry_budget(&mut self, budget: u32) -> Result<()> {
        if budget == 0 {
            return Err(PinCodeError::InvalidRetryBudget(budget));
        }
        self.retry_budget = budget;
        Ok(())
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// Entries left before exhaustion
    pub fn remaining(&self) -> u32 {
        self.retry_budget.saturating_sub(self.wrong_count)
    }

    pub fn note_correct(&mut self) {
        self.wrong_count = 0;
    }

    /// Count a wrong entry and report whether the budget is now spent
    pub fn note_incorrect(&mut self) -> bool {
        self.wrong_count = self.wrong_count.saturating_add(1);
        self.wrong_count >= self.retry_budget
    }

    pub fn reset(&mut self) {
        self.wrong_count = 0;
    }

    pub fn snapshot(&self) -> DispatchSnapshot {
        DispatchSnapshot {
            mode: self.mode,
            reference_pin: self.reference_pin.clone(),
            retry_budget: self.retry_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let modes = ModeController::new();
        assert_eq!(modes.mode(), Mode::Verify);
        assert_eq!(modes.reference_pin().as_str(), "0000");
        assert_eq!(modes.retry_budget(), DEFAULT_RETRY_BUDGET);
        assert_eq!(modes.wrong_count(), 0);
    }

    #[test]
    fn test_exhaustion_at_budget() {
        let mut modes = ModeController::new();
        modes.set_retry_budget(3).unwrap();

        assert!(!modes.note_incorrect());
        assert_eq!(modes.remaining(), 2);
        assert!(!modes.note_incorrect());
        assert_eq!(modes.remaining(), 1);
        assert!(modes.note_incorrect());
        assert_eq!(modes.remaining(), 0);

        modes.reset();
        assert_eq!(modes.wrong_count(), 0);
    }

    #[test]
    fn test_lowered_budget_exhausts_on_next_wrong_entry() {
        let mut modes = ModeController::new();
        for _ in 0..3 {
            assert!(!modes.note_incorrect());
        }
        modes.set_retry_budget(2).unwrap();
        assert_eq!(modes.wrong_count(), 3);
        assert!(modes.note_incorrect());
    }

    #[test]
    fn test_correct_entry_clears_counter() {
        let mut modes = ModeController::new();
        modes.note_incorrect();
        modes.note_incorrect();
        modes.note_correct();
        assert_eq!(modes.wrong_count(), 0);
    }

    #[test]
    fn test_invalid_setters_leave_state_untouched() {
        let mut modes = ModeController::new();
        modes.set_reference_pin("1234").unwrap();
        modes.set_retry_budget(7).unwrap();

        assert_eq!(
            modes.set_retry_budget(0),
            Err(PinCodeError::InvalidRetryBudget(0))
        );
        assert_eq!(
            modes.set_reference_pin("12a4"),
            Err(PinCodeError::InvalidReferencePin)
        );

        assert_eq!(modes.retry_budget(), 7);
        assert_eq!(modes.reference_pin().as_str(), "1234");
    }

    #[test]
    fn test_mode_change_keeps_counter() {
        let mut modes = ModeController::new();
        modes.note_incorrect();
        modes.set_mode(Mode::SetNew);
        modes.set_mode(Mode::Verify);
        assert_eq!(modes.wrong_count(), 1);
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(serde_json::to_string(&Mode::SetNew).unwrap(), "\"set_new\"");
        assert_eq!(
            serde_json::from_str::<Mode>("\"verify\"").unwrap(),
            Mode::Verify
        );
    }

    #[test]
    fn test_snapshot_copies_dispatch_inputs() {
        let mut modes = ModeController::new();
        modes.set_mode(Mode::SetNew);
        modes.set_reference_pin("8642").unwrap();
        modes.set_retry_budget(3).unwrap();

        let snapshot = modes.snapshot();
        modes.set_mode(Mode::Verify);
        modes.set_retry_budget(9).unwrap();

        assert_eq!(snapshot.mode, Mode::SetNew);
        assert_eq!(snapshot.reference_pin.as_str(), "8642");
        assert_eq!(snapshot.retry_budget, 3);
    }
}
