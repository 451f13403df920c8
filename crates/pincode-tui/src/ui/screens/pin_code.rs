//! PIN entry screen: title, boxes, info message and key hints

use pincode_core::Mode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::ui::components::pin_boxes::{self, render_pin_boxes};
use crate::ui::layout::centered_rect_fixed;

/// Dialog width in columns
const DIALOG_WIDTH: u16 = 48;
/// Dialog height in rows
const DIALOG_HEIGHT: u16 = 14;

/// Draw the PIN entry screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let view = &app.view;

    let width = DIALOG_WIDTH.max(pin_boxes::row_width() + 4);
    let dialog = centered_rect_fixed(width, DIALOG_HEIGHT, area);

    let title = match view.mode() {
        Mode::SetNew => " Set New PIN ",
        Mode::Verify => " Enter PIN ",
    };
    let block = Block::default()
        .title(title)
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),                       // Instructions
            Constraint::Length(pin_boxes::BOX_HEIGHT),   // PIN boxes
            Constraint::Length(1),                       // Spacer
            Constraint::Length(2),                       // Info message
            Constraint::Min(0),                          // Spacer
            Constraint::Length(1),                       // Help
        ])
        .split(inner);

    let instructions = match view.mode() {
        Mode::SetNew => "Choose a 4-digit PIN",
        Mode::Verify => "Enter your 4-digit PIN",
    };
    frame.render_widget(
        Paragraph::new(instructions)
            .style(theme.text_secondary())
            .alignment(Alignment::Center),
        chunks[0],
    );

    render_pin_boxes(frame, chunks[1], view, theme);

    let info = view.info_message();
    if info.is_visible() && !info.text().is_empty() {
        frame.render_widget(
            Paragraph::new(info.text())
                .style(theme.message(info.color()))
                .alignment(Alignment::Center),
            chunks[3],
        );
    }

    let help = "[0-9] Type  [Backspace] Erase  [r] Restart  [Esc] Quit";
    frame.render_widget(
        Paragraph::new(help)
            .style(theme.text_muted())
            .alignment(Alignment::Center),
        chunks[5],
    );
}
