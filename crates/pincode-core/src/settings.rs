//! Serializable widget settings

use serde::{Deserialize, Serialize};

use crate::mode::{Mode, DEFAULT_RETRY_BUDGET};
use crate::pin::Pin;

/// Initial values for a [`PinCodeView`](crate::PinCodeView)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinCodeSettings {
    /// Starting mode
    pub mode: Mode,

    /// PIN that VERIFY entries are compared against. Never read from or
    /// written to serialized settings.
    #[serde(skip)]
    pub reference_pin: Pin,

    /// Wrong entries allowed before exhaustion
    pub retry_budget: u32,

    /// Whether the info message is shown
    pub info_message_visible: bool,
}

impl Default for PinCodeSettings {
    fn default() -> Self {
        Self {
            mode: Mode::Verify,
            reference_pin: Pin::default(),
            retry_budget: DEFAULT_RETRY_BUDGET,
            info_message_visible: true,
        }
    }
}
