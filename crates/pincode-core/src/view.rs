//! The PIN entry widget as seen by its host

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::warn;

use crate::cell::Cell;
use crate::dispatch::{self, Completion};
use crate::error::{PinCodeError, Result};
use crate::listener::PinCodeListener;
use crate::message::InfoMessage;
use crate::mode::{Mode, ModeController};
use crate::row::{CellRow, InputEvent, RowTransition};
use crate::settings::PinCodeSettings;

/// What a single input did to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input was dropped
    Ignored,
    /// The filled prefix grew or shrank to `filled` cells
    Progress { filled: usize },
    /// SET_NEW entry completed and the host was given the PIN
    NewPin,
    /// VERIFY entry matched and the host was told
    Verified,
    /// VERIFY entry was wrong; cells were cleared for another try
    Retry { remaining: u32 },
    /// VERIFY budget exhausted and the host was told
    Exhausted,
    /// The row completed but no listener was registered
    Unhandled,
}

/// Four-digit PIN entry widget.
///
/// Owns the cell row, the mode controller and the info message. Everything
/// runs synchronously on the caller's thread.
#[derive(Debug)]
pub struct PinCodeView {
    row: CellRow,
    modes: ModeController,
    info: InfoMessage,
    listener: Option<Weak<RefCell<dyn PinCodeListener>>>,
}

impl Default for PinCodeView {
    fn default() -> Self {
        Self::new()
    }
}

impl PinCodeView {
    /// Create a widget in VERIFY mode against "0000" with five retries
    pub fn new() -> Self {
        Self {
            row: CellRow::new(),
            modes: ModeController::new(),
            info: InfoMessage::new(),
            listener: None,
        }
    }

    /// Create a widget from settings, validating them like the setters do
    pub fn with_settings(settings: PinCodeSettings) -> Result<Self> {
        let mut view = Self::new();
        view.set_retry_budget(settings.retry_budget)?;
        view.modes.set_mode(settings.mode);
        view.modes.set_reference(settings.reference_pin);
        view.info.set_visible(settings.info_message_visible);
        Ok(view)
    }

    // ------------------------------------------------------------------
    // Host configuration
    // ------------------------------------------------------------------

    /// Register or replace the completion listener.
    ///
    /// Only a weak reference is kept; once the host drops its `Rc` the
    /// widget behaves as if no listener were registered.
    pub fn set_completion_listener<L>(&mut self, listener: &Rc<RefCell<L>>)
    where
        L: PinCodeListener + 'static,
    {
        let listener: Rc<RefCell<dyn PinCodeListener>> = listener.clone();
        self.listener = Some(Rc::downgrade(&listener));
    }

    pub fn clear_completion_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|listener| listener.strong_count() > 0)
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.modes.set_mode(mode);
    }

    pub fn set_reference_pin(&mut self, pin: &str) -> Result<()> {
        self.modes.set_reference_pin(pin)
    }

    pub fn retry_budget(&self) -> u32 {
        self.modes.retry_budget()
    }

    pub fn set_retry_budget(&mut self, budget: u32) -> Result<()> {
        self.modes.set_retry_budget(budget)
    }

    /// Wrong VERIFY entries since the last correct one or exhaustion
    pub fn wrong_count(&self) -> u32 {
        self.modes.wrong_count()
    }

    pub fn set_info_message_visible(&mut self, visible: bool) {
        self.info.set_visible(visible);
    }

    pub fn info_message(&self) -> &InfoMessage {
        &self.info
    }

    /// Clear every cell and focus the first one. Mode, reference PIN,
    /// budget, counter and info message are kept.
    pub fn reset_pin_code_boxes(&mut self) {
        self.row.reset();
    }

    /// Blank the info message. Cells and mode are kept.
    pub fn reset_info_message(&mut self) {
        self.info.reset();
    }

    // ------------------------------------------------------------------
    // Cell state for renderers
    // ------------------------------------------------------------------

    pub fn cells(&self) -> &[Cell] {
        self.row.cells()
    }

    pub fn focused(&self) -> Option<usize> {
        self.row.focused()
    }

    pub fn filled_len(&self) -> usize {
        self.row.filled_len()
    }

    pub fn is_complete(&self) -> bool {
        self.row.is_complete()
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Apply one input event, dispatching to the listener if it completes
    /// the row.
    ///
    /// Returns [`PinCodeError::ListenerBusy`] without touching the row when the
    /// event would complete it while the listener is already borrowed.
    pub fn input(&mut self, event: InputEvent) -> Result<Outcome> {
        if self.row.would_complete(&event) && self.listener_busy() {
            return Err(PinCodeError::ListenerBusy);
        }
        match self.row.apply(event) {
            RowTransition::Ignored => Ok(Outcome::Ignored),
            RowTransition::Advanced { filled } | RowTransition::Retreated { filled } => {
                Ok(Outcome::Progress { filled })
            }
            RowTransition::Completed => self.dispatch(),
        }
    }

    /// Apply the events observed in one frame, clears first
    pub fn process_frame(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> Result<Vec<Outcome>> {
        let mut events: Vec<InputEvent> = events.into_iter().collect();
        events.sort_by_key(InputEvent::frame_order);
        events.into_iter().map(|event| self.input(event)).collect()
    }

    /// Type a character into the focused cell
    pub fn type_digit(&mut self, ch: char) -> Result<Outcome> {
        match self.row.focused() {
            Some(cell) => self.input(InputEvent::Digit { cell, ch }),
            None => Ok(Outcome::Ignored),
        }
    }

    /// Erase the last filled cell
    pub fn backspace(&mut self) -> Result<Outcome> {
        match self.row.filled_len() {
            0 => Ok(Outcome::Ignored),
            filled => self.input(InputEvent::Clear { cell: filled - 1 }),
        }
    }

    fn listener_busy(&self) -> bool {
        self.listener
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|listener| listener.try_borrow_mut().is_err())
    }

    fn dispatch(&mut self) -> Result<Outcome> {
        let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) else {
            warn!("Pin code entered with no completion listener registered");
            return Ok(Outcome::Unhandled);
        };
        let mut host = listener
            .try_borrow_mut()
            .map_err(|_| PinCodeError::ListenerBusy)?;
        let Some(pin) = self.row.pin() else {
            return Ok(Outcome::Ignored);
        };

        let outcome = match dispatch::complete(pin, &mut self.modes, &mut self.info, &mut self.row)
        {
            Completion::NewPin(pin) => {
                host.on_new_pin(self, &pin);
                Outcome::NewPin
            }
            Completion::Verified => {
                host.on_verify_result(self, true);
                Outcome::Verified
            }
            Completion::Exhausted => {
                host.on_verify_result(self, false);
                Outcome::Exhausted
            }
            Completion::Retry { remaining } => Outcome::Retry { remaining },
        };
        Ok(outcome)
    }
}
