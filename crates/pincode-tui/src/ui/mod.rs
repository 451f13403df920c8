//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;

use crate::app::App;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    screens::pin_code::draw(frame, area, app);

    if let Some(notification) = app.host.borrow().notification() {
        notification.render(frame, area, &app.theme);
    }
}
