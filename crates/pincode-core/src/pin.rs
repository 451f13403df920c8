//! Four-digit PIN value

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::error::{PinCodeError, Result};

/// Number of digits in a PIN
pub const PIN_LENGTH: usize = 4;

/// Reference PIN used until the host supplies one
pub const DEFAULT_REFERENCE_PIN: &str = "0000";

/// A validated four-digit PIN.
///
/// The digits are wiped from memory when the value is dropped and never
/// appear in `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pin(Zeroizing<String>);

impl Pin {
    /// Parse a PIN, requiring exactly four ASCII digits
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != PIN_LENGTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PinCodeError::InvalidReferencePin);
        }
        Ok(Self(Zeroizing::new(s.to_owned())))
    }

    /// Assemble a PIN from the contents of a complete cell row
    pub(crate) fn from_digits(digits: [char; PIN_LENGTH]) -> Self {
        Self(Zeroizing::new(digits.iter().collect()))
    }

    /// The digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A same-length string of asterisks, safe for display
    pub fn masked(&self) -> String {
        "*".repeat(PIN_LENGTH)
    }
}

impl Default for Pin {
    fn default() -> Self {
        Self(Zeroizing::new(DEFAULT_REFERENCE_PIN.to_owned()))
    }
}

impl PartialEq for Pin {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes() == other.0.as_bytes()
    }
}

impl Eq for Pin {}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

impl FromStr for Pin {
    type Err = PinCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pin {
    type Error = PinCodeError;

    fn try_from(s: String) -> Result<Self> {
        let s = Zeroizing::new(s);
        Self::parse(&s)
    }
}

impl From<Pin> for String {
    fn from(pin: Pin) -> Self {
        pin.as_str().to_owned()
    }
}
