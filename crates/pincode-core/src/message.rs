//! Advisory text shown beneath the cells

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::pin::Pin;

/// Foreground color of the info message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageColor {
    #[default]
    Neutral,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoMessage {
    text: String,
    color: MessageColor,
    visible: bool,
}

impl Default for InfoMessage {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: MessageColor::Neutral,
            visible: true,
        }
    }
}

impl InfoMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> MessageColor {
        self.color
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the message. Text and color survive while hidden.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set(&mut self, text: impl Into<String>, color: MessageColor) {
        // Previous text may carry a freshly chosen PIN
        self.text.zeroize();
        self.text = text.into();
        self.color = color;
    }

    pub fn reset(&mut self) {
        self.set(String::new(), MessageColor::Neutral);
    }

    pub(crate) fn show_new_pin(&mut self, pin: &Pin) {
        self.set(
            format!("Your new Pin Code is {}", pin.as_str()),
            MessageColor::Neutral,
        );
    }

    pub(crate) fn show_verified(&mut self) {
        self.set("Pin Code verified", MessageColor::Success);
    }

    pub(crate) fn show_entries_left(&mut self, remaining: u32) {
        self.set(format!("{} entries left", remaining), MessageColor::Warning);
    }
}
