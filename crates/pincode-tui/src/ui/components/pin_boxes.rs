//! Row of four PIN boxes

use pincode_core::{Cell, CellBackground, PinCodeView, PIN_LENGTH};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::layout::centered_rect_fixed;
use crate::ui::Theme;

/// Width of one box including its border
pub const BOX_WIDTH: u16 = 7;
/// Height of one box including its border
pub const BOX_HEIGHT: u16 = 3;
/// Horizontal gap between boxes
pub const BOX_GAP: u16 = 2;

/// Total width taken by the row of boxes
pub const fn row_width() -> u16 {
    PIN_LENGTH as u16 * (BOX_WIDTH + BOX_GAP) - BOX_GAP
}

/// Render the boxes centered in `area`
pub fn render_pin_boxes(frame: &mut Frame, area: Rect, view: &PinCodeView, theme: &Theme) {
    let row = centered_rect_fixed(row_width(), BOX_HEIGHT, area);

    for (i, cell) in view.cells().iter().enumerate() {
        let x = row.x + i as u16 * (BOX_WIDTH + BOX_GAP);
        let rect = Rect::new(x, row.y, BOX_WIDTH, row.height).intersection(area);
        if rect.is_empty() {
            continue;
        }
        frame.render_widget(pin_box(cell, theme), rect);
    }
}

fn pin_box<'a>(cell: &Cell, theme: &Theme) -> Paragraph<'a> {
    let border_style = if cell.has_focus() {
        theme.border_focused()
    } else {
        theme.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let (glyph, style) = match cell.background() {
        CellBackground::Filled => (
            cell.masked().map(String::from).unwrap_or_default(),
            theme.pin_dot(),
        ),
        CellBackground::Empty => (String::new(), theme.pin_placeholder()),
    };

    Paragraph::new(glyph)
        .style(style)
        .alignment(Alignment::Center)
        .block(block)
}
