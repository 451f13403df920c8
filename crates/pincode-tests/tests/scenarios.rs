//! End-to-end scenarios for the PIN entry widget
//!
//! Each test drives the widget through its public API the way a host would
//! and checks the callbacks, info message and cell state it observes.

use std::cell::RefCell;
use std::rc::Rc;

use pincode_core::{
    InputEvent, MessageColor, Mode, Outcome, Pin, PinCodeListener, PinCodeView,
};
use rstest::{fixture, rstest};

/// Host that records every callback
#[derive(Default)]
struct RecordingHost {
    new_pins: Vec<String>,
    verify_results: Vec<bool>,
}

impl PinCodeListener for RecordingHost {
    fn on_new_pin(&mut self, _view: &mut PinCodeView, pin: &Pin) {
        self.new_pins.push(pin.as_str().to_owned());
    }

    fn on_verify_result(&mut self, _view: &mut PinCodeView, ok: bool) {
        self.verify_results.push(ok);
    }
}

struct Harness {
    view: PinCodeView,
    host: Rc<RefCell<RecordingHost>>,
}

impl Harness {
    fn enter(&mut self, digits: &str) -> Vec<Outcome> {
        digits
            .chars()
            .map(|ch| self.view.type_digit(ch).unwrap())
            .collect()
    }

    fn digits_filled(&self) -> Vec<bool> {
        self.view.cells().iter().map(|c| c.is_filled()).collect()
    }
}

#[fixture]
fn harness() -> Harness {
    let mut view = PinCodeView::new();
    let host = Rc::new(RefCell::new(RecordingHost::default()));
    view.set_completion_listener(&host);
    Harness { view, host }
}

fn verifying(mut harness: Harness, reference: &str, budget: u32) -> Harness {
    harness.view.set_mode(Mode::Verify);
    harness.view.set_reference_pin(reference).unwrap();
    harness.view.set_retry_budget(budget).unwrap();
    harness
}

// ==========================================
// S1: set new PIN
// ==========================================
#[rstest]
fn set_new_pin(mut harness: Harness) {
    harness.view.set_mode(Mode::SetNew);

    let outcomes = harness.enter("1234");

    assert_eq!(outcomes.last(), Some(&Outcome::NewPin));
    let host = harness.host.borrow();
    assert_eq!(host.new_pins, vec!["1234".to_string()]);
    assert!(host.verify_results.is_empty());
    assert_eq!(harness.view.info_message().text(), "Your new Pin Code is 1234");
    assert_eq!(harness.view.info_message().color(), MessageColor::Neutral);
    assert_eq!(harness.digits_filled(), vec![true; 4]);
}

// ==========================================
// S2: verify correct
// ==========================================
#[rstest]
fn verify_correct(harness: Harness) {
    let mut harness = verifying(harness, "1234", 5);

    harness.enter("1234");

    assert_eq!(harness.host.borrow().verify_results, vec![true]);
    assert_eq!(harness.view.info_message().text(), "Pin Code verified");
    assert_eq!(harness.view.info_message().color(), MessageColor::Success);
    assert_eq!(harness.view.wrong_count(), 0);
}

// ==========================================
// S3: verify wrong, retries left
// ==========================================
#[rstest]
fn verify_wrong_with_retries_left(harness: Harness) {
    let mut harness = verifying(harness, "1234", 5);

    let outcomes = harness.enter("0000");

    assert_eq!(outcomes.last(), Some(&Outcome::Retry { remaining: 4 }));
    let host = harness.host.borrow();
    assert!(host.verify_results.is_empty());
    assert!(host.new_pins.is_empty());
    assert_eq!(harness.view.wrong_count(), 1);
    assert_eq!(harness.view.info_message().text(), "4 entries left");
    assert_eq!(harness.view.info_message().color(), MessageColor::Warning);
    assert_eq!(harness.digits_filled(), vec![false; 4]);
    assert_eq!(harness.view.focused(), Some(0));
}

// ==========================================
// S4: verify exhaustion
// ==========================================
#[rstest]
fn verify_exhaustion(harness: Harness) {
    let mut harness = verifying(harness, "1234", 3);

    harness.enter("0000");
    harness.enter("0000");
    assert_eq!(harness.view.info_message().text(), "1 entries left");
    assert!(harness.host.borrow().verify_results.is_empty());

    let outcomes = harness.enter("0000");

    assert_eq!(outcomes.last(), Some(&Outcome::Exhausted));
    assert_eq!(harness.host.borrow().verify_results, vec![false]);
    assert_eq!(harness.view.wrong_count(), 0);
    assert_eq!(harness.view.info_message().text(), "1 entries left");
    assert_eq!(harness.view.info_message().color(), MessageColor::Warning);
    assert!(harness.view.is_complete());
}

// ==========================================
// S5: backspace progression
// ==========================================
#[rstest]
fn backspace_progression(mut harness: Harness) {
    harness.view.set_mode(Mode::SetNew);

    let mut filled = Vec::new();
    harness.view.input(InputEvent::Digit { cell: 0, ch: '1' }).unwrap();
    filled.push(harness.view.filled_len());
    harness.view.input(InputEvent::Digit { cell: 1, ch: '2' }).unwrap();
    filled.push(harness.view.filled_len());
    harness.view.input(InputEvent::Clear { cell: 1 }).unwrap();
    filled.push(harness.view.filled_len());
    harness.view.input(InputEvent::Digit { cell: 1, ch: '3' }).unwrap();
    filled.push(harness.view.filled_len());

    assert_eq!(filled, vec![1, 2, 1, 2]);

    // Finish the row to read back what the cells held
    harness.enter("00");
    assert_eq!(harness.host.borrow().new_pins, vec!["1300".to_string()]);
}

#[rstest]
fn backspace_progression_fires_no_callback(mut harness: Harness) {
    harness.view.set_mode(Mode::SetNew);
    harness.enter("12");
    harness.view.backspace().unwrap();
    harness.enter("3");

    assert_eq!(harness.view.filled_len(), 2);
    assert_eq!(harness.digits_filled(), vec![true, true, false, false]);
    let host = harness.host.borrow();
    assert!(host.new_pins.is_empty());
    assert!(host.verify_results.is_empty());
}

// ==========================================
// S6: mode switch mid-entry
// ==========================================
#[rstest]
fn mode_switch_mid_entry(mut harness: Harness) {
    harness.view.set_mode(Mode::SetNew);
    harness.view.set_reference_pin("1234").unwrap();
    harness.enter("12");

    harness.view.set_mode(Mode::Verify);

    assert_eq!(harness.view.filled_len(), 2);
    assert_eq!(harness.view.focused(), Some(2));
    assert_eq!(harness.digits_filled(), vec![true, true, false, false]);

    harness.enter("34");
    let host = harness.host.borrow();
    assert_eq!(host.verify_results, vec![true]);
    assert!(host.new_pins.is_empty());
}

// ==========================================
// Reset idempotence and orthogonality
// ==========================================
#[rstest]
fn reset_boxes_is_idempotent(harness: Harness) {
    let mut harness = verifying(harness, "1234", 5);
    harness.enter("0000");
    harness.enter("56");

    harness.view.reset_pin_code_boxes();
    let once = (harness.digits_filled(), harness.view.focused());
    harness.view.reset_pin_code_boxes();
    let twice = (harness.digits_filled(), harness.view.focused());

    assert_eq!(once, twice);
    assert_eq!(once, (vec![false; 4], Some(0)));
    // Counter, mode and message survive a box reset
    assert_eq!(harness.view.wrong_count(), 1);
    assert_eq!(harness.view.mode(), Mode::Verify);
    assert_eq!(harness.view.info_message().text(), "4 entries left");
}

#[rstest]
fn reset_info_message_is_idempotent(harness: Harness) {
    let mut harness = verifying(harness, "1234", 5);
    harness.enter("0000");
    harness.enter("1");

    harness.view.reset_info_message();
    let once = harness.view.info_message().clone();
    harness.view.reset_info_message();

    assert_eq!(harness.view.info_message(), &once);
    assert_eq!(once.text(), "");
    assert_eq!(once.color(), MessageColor::Neutral);
    assert_eq!(harness.view.filled_len(), 1);
}

#[rstest]
#[case(Mode::SetNew)]
#[case(Mode::Verify)]
fn set_mode_leaves_state_alone(harness: Harness, #[case] mode: Mode) {
    let mut harness = verifying(harness, "1234", 5);
    harness.enter("0000");
    harness.enter("9");

    let before = (
        harness.digits_filled(),
        harness.view.wrong_count(),
        harness.view.info_message().clone(),
    );
    harness.view.set_mode(mode);
    let after = (
        harness.digits_filled(),
        harness.view.wrong_count(),
        harness.view.info_message().clone(),
    );

    assert_eq!(before, after);
}

// ==========================================
// Host contract violations
// ==========================================
#[rstest]
#[case("")]
#[case("123")]
#[case("12345")]
#[case("abcd")]
fn invalid_reference_pin_is_rejected(mut harness: Harness, #[case] pin: &str) {
    harness.view.set_reference_pin("4321").unwrap();
    assert!(harness.view.set_reference_pin(pin).is_err());

    harness.view.set_mode(Mode::Verify);
    harness.enter("4321");
    assert_eq!(harness.host.borrow().verify_results, vec![true]);
}

#[rstest]
fn zero_retry_budget_is_rejected(mut harness: Harness) {
    harness.view.set_retry_budget(2).unwrap();
    assert!(harness.view.set_retry_budget(0).is_err());
    assert_eq!(harness.view.retry_budget(), 2);
}
