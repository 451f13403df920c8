//! Visual theme and color palette

use pincode_core::MessageColor;
use ratatui::style::{Color, Modifier, Style};

/// PIN widget color palette
pub struct Theme {
    // Branding
    pub accent: Color,
    pub background: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(255, 193, 7),    // #FFC107
            background: Color::Rgb(33, 33, 33), // #212121

            success: Color::Rgb(76, 175, 80), // #4CAF50 - Green
            warning: Color::Rgb(244, 67, 54), // #F44336 - Red, as the entries-left text
            danger: Color::Rgb(244, 67, 54),  // #F44336 - Red
            info: Color::Rgb(33, 150, 243),   // #2196F3 - Blue

            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(255, 193, 7),   // #FFC107
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get highlighted text style
    pub fn text_highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Get PIN dot style for a filled box
    pub fn pin_dot(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for an empty box
    pub fn pin_placeholder(&self) -> Style {
        Style::default().fg(self.text_muted).bg(self.background)
    }

    /// Style for the info message beneath the boxes
    pub fn message(&self, color: MessageColor) -> Style {
        match color {
            MessageColor::Neutral => self.text(),
            MessageColor::Success => self.success(),
            MessageColor::Warning => self.warning(),
        }
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            success: Color::LightGreen,
            warning: Color::LightRed,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_styles_follow_color() {
        let theme = Theme::default();
        assert_eq!(theme.message(MessageColor::Neutral).fg, Some(theme.text_primary));
        assert_eq!(theme.message(MessageColor::Success).fg, Some(theme.success));
        assert_eq!(theme.message(MessageColor::Warning).fg, Some(theme.warning));
    }
}
