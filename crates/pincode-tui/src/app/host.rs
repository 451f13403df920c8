//! Demo host: the application side of the completion listener

use pincode_core::{Mode, Pin, PinCodeListener, PinCodeView};
use tracing::{info, warn};

use crate::ui::components::notification::Notification;

/// Host that captures a new PIN, then switches the widget to verify it
pub struct DemoHost {
    /// Budget applied when switching to VERIFY
    verify_retry_budget: u32,
    /// Toast shown on the bottom line
    notification: Option<Notification>,
    /// Result of the last VERIFY report, if any
    last_result: Option<bool>,
}

impl DemoHost {
    pub fn new(verify_retry_budget: u32) -> Self {
        Self {
            verify_retry_budget,
            notification: None,
            last_result: None,
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn last_result(&self) -> Option<bool> {
        self.last_result
    }

    /// Advance toast timers
    pub fn tick(&mut self) {
        if let Some(notification) = &mut self.notification {
            notification.tick();
            if notification.is_expired() {
                self.notification = None;
            }
        }
    }
}

impl PinCodeListener for DemoHost {
    fn on_new_pin(&mut self, view: &mut PinCodeView, pin: &Pin) {
        view.set_mode(Mode::Verify);
        if let Err(e) = view.set_retry_budget(self.verify_retry_budget) {
            warn!("Keeping retry budget {}: {}", view.retry_budget(), e);
        }
        if let Err(e) = view.set_reference_pin(pin.as_str()) {
            warn!("Failed to store new PIN: {}", e);
        }
        view.reset_pin_code_boxes();
        view.reset_info_message();

        info!("New PIN captured, switched to verify mode");
        self.last_result = None;
        self.notify(Notification::info(format!("New pin code is {}", pin.masked())));
    }

    fn on_verify_result(&mut self, _view: &mut PinCodeView, ok: bool) {
        info!(ok, "PIN verification finished");
        self.last_result = Some(ok);
        if ok {
            self.notify(Notification::success("PIN accepted"));
        } else {
            self.notify(Notification::error("Too many wrong entries"));
        }
    }
}
