//! PinCode Core - four-digit PIN entry state machine
//!
//! This crate holds the part of a PIN entry widget that has behaviour:
//! which cell accepts the next digit, what a full row means in SET_NEW or
//! VERIFY mode, how wrong entries are counted against a retry budget, and
//! which host callback fires. Drawing is left to a renderer that reads
//! [`PinCodeView::cells`] and [`PinCodeView::info_message`].

pub mod cell;
mod dispatch;
pub mod error;
pub mod listener;
pub mod message;
pub mod mode;
pub mod pin;
pub mod row;
pub mod settings;
pub mod view;

pub use cell::{Cell, CellBackground, CellEvent, MASK_GLYPH};
pub use error::{PinCodeError, Result};
pub use listener::PinCodeListener;
pub use message::{InfoMessage, MessageColor};
pub use mode::{Mode, ModeController, DEFAULT_RETRY_BUDGET};
pub use pin::{Pin, DEFAULT_REFERENCE_PIN, PIN_LENGTH};
pub use row::{CellRow, InputEvent, RowTransition};
pub use settings::PinCodeSettings;
pub use view::{Outcome, PinCodeView};
