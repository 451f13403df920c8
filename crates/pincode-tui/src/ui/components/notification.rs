//! Toast notification component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::Theme;

/// Notification severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Toast notification shown on the bottom line
#[derive(Clone, Debug)]
pub struct Notification {
    /// Message to display
    pub message: String,
    /// Severity level
    pub level: NotificationLevel,
    /// Remaining ticks until dismissal
    pub ttl: u64,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, level: NotificationLevel, ttl: u64) -> Self {
        Self {
            message: message.into(),
            level,
            ttl,
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 30) // ~3 seconds at 100ms ticks
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, 30)
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 50)
    }

    /// Check if notification should be dismissed
    pub fn is_expired(&self) -> bool {
        self.ttl == 0
    }

    /// Decrement TTL
    pub fn tick(&mut self) {
        self.ttl = self.ttl.saturating_sub(1);
    }

    /// Get icon for level
    pub fn icon(&self) -> &'static str {
        match self.level {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        }
    }

    /// Render the notification on the last line of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if area.height == 0 {
            return;
        }
        let style = match self.level {
            NotificationLevel::Info => theme.info(),
            NotificationLevel::Success => theme.success(),
            NotificationLevel::Error => theme.danger(),
        };

        let line = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let text = format!("{} {}", self.icon(), self.message);
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            line,
        );
    }
}
