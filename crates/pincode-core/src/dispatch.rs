//! Completion dispatch: what a full row means in the current mode

use tracing::debug;

use crate::message::InfoMessage;
use crate::mode::{Mode, ModeController};
use crate::pin::Pin;
use crate::row::CellRow;

/// Result of handling a complete row, before the host is told
#[derive(Debug)]
pub(crate) enum Completion {
    /// SET_NEW: hand the PIN to the host
    NewPin(Pin),
    /// VERIFY: entry matched the reference
    Verified,
    /// VERIFY: entry was wrong and the budget is spent
    Exhausted,
    /// VERIFY: entry was wrong, cells were cleared for another try
    Retry { remaining: u32 },
}

/// Update widget state for a completed row.
///
/// Mode, reference PIN and retry budget are read once on entry. Listener
/// invocation is left to the caller so that it is the last thing that happens.
pub(crate) fn complete(
    pin: Pin,
    modes: &mut ModeController,
    info: &mut InfoMessage,
    row: &mut CellRow,
) -> Completion {
    let snapshot = modes.snapshot();

    match snapshot.mode {
        Mode::SetNew => {
            debug!("New pin code captured");
            info.show_new_pin(&pin);
            Completion::NewPin(pin)
        }
        Mode::Verify if pin == snapshot.reference_pin => {
            debug!("Pin code verified");
            modes.note_correct();
            info.show_verified();
            Completion::Verified
        }
        Mode::Verify => {
            modes.note_incorrect();
            let remaining = snapshot.retry_budget.saturating_sub(modes.wrong_count());
            if remaining == 0 {
                debug!("Retry budget exhausted");
                modes.reset();
                Completion::Exhausted
            } else {
                debug!(remaining, "Wrong pin code");
                info.show_entries_left(remaining);
                row.reset();
                Completion::Retry { remaining }
            }
        }
    }
}
