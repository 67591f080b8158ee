use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::page::Page;
use crate::core::config;

/// Singleton notification element
///
/// Every `show` overwrites the text and style and bumps a generation. The
/// auto-hide timer only hides the element if no newer notification was
/// shown in the meantime, so the last call always gets its full delay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    text: String,
    is_error: bool,
    visible: bool,
    generation: u64,
}

impl Notification {
    /// Overwrites text and style, makes the element visible.
    /// Returns the generation the hide timer must present.
    pub fn show(&mut self, text: impl Into<String>, is_error: bool) -> u64 {
        self.text = text.into();
        self.is_error = is_error;
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hides the element if `generation` is still the latest one.
    pub fn hide_if_current(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// CSS background of the element
    pub fn background(&self) -> &'static str {
        if self.is_error {
            config::notification::ERROR_BACKGROUND
        } else {
            config::notification::DEFAULT_BACKGROUND
        }
    }
}

/// Spawns the auto-hide timer for the notification shown with `generation`.
pub fn schedule_hide(page: Arc<Mutex<Page>>, generation: u64, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let hidden = page.lock().await.notification.hide_if_current(generation);
        if !hidden {
            log::trace!("notification #{} superseded, not hiding", generation);
        }
    })
}
