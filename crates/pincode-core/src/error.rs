//! Error types for the PIN entry widget

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PinCodeError>;

/// Contract violations raised synchronously to the host.
///
/// A call that returns one of these leaves the widget untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinCodeError {
    #[error("Reference PIN must be exactly {len} decimal digits", len = crate::PIN_LENGTH)]
    InvalidReferencePin,

    #[error("Retry budget must be at least 1, got {0}")]
    InvalidRetryBudget(u32),

    #[error("Completion listener is already borrowed")]
    ListenerBusy,
}
