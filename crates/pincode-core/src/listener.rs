//! Host callback capability

use crate::pin::Pin;
use crate::view::PinCodeView;

/// Callbacks a host registers to learn the outcome of a completed entry.
///
/// Both receive the widget so the host can change mode, reference PIN or
/// budget, or reset it, from inside the callback. Such changes apply to
/// later entries; the callback is always the last step of the dispatch.
pub trait PinCodeListener {
    /// A PIN was entered in SET_NEW mode. Fired once per completed row.
    fn on_new_pin(&mut self, view: &mut PinCodeView, pin: &Pin);

    /// VERIFY outcome: `true` for a correct entry, `false` once the retry
    /// budget is exhausted. Wrong entries with retries left are not reported.
    fn on_verify_result(&mut self, view: &mut PinCodeView, ok: bool);
}
