//! Application state and event handling

pub mod config;
mod host;

pub use config::TuiConfig;
pub use host::DemoHost;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use pincode_core::{Mode, PinCodeView};
use ratatui::prelude::*;
use tracing::debug;

use crate::ui::components::notification::Notification;
use crate::ui::{self, Theme};

/// Main application struct
pub struct App {
    /// The PIN entry widget
    pub view: PinCodeView,

    /// Listener registered with the widget
    pub host: Rc<RefCell<DemoHost>>,

    /// Color palette
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter
    pub tick: u64,

    /// Last tick time
    last_tick: Instant,
}

impl App {
    /// Create a new application instance
    pub fn new(config: TuiConfig) -> pincode_core::Result<Self> {
        let mut view = PinCodeView::with_settings(config.pin_code)?;
        let host = Rc::new(RefCell::new(DemoHost::new(config.verify_retry_budget)));
        view.set_completion_listener(&host);

        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };

        Ok(Self {
            view,
            host,
            theme,
            should_quit: false,
            tick: 0,
            last_tick: Instant::now(),
        })
    }

    /// Run the application main loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let tick_rate = Duration::from_millis(100);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            let timeout = tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code)?;
                    }
                }
            }

            if self.last_tick.elapsed() >= tick_rate {
                self.on_tick();
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyCode) -> pincode_core::Result<()> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c) => {
                let outcome = self.view.type_digit(c)?;
                debug!(?outcome, "Key handled");
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.view.backspace()?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Go back to capturing a new PIN
    pub fn restart(&mut self) {
        self.view.reset_pin_code_boxes();
        self.view.reset_info_message();
        self.view.set_mode(Mode::SetNew);
        self.host
            .borrow_mut()
            .notify(Notification::info("Set a new PIN"));
    }

    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.host.borrow_mut().tick();
    }
}
