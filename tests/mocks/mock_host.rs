//! Recording [`WebAppHost`]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use course_miniapp::webapp::{HapticKind, WebAppHost};

#[derive(Default)]
pub struct MockHost {
    user_id: Option<i64>,
    init_data: Option<String>,
    expands: AtomicUsize,
    haptics: Mutex<Vec<HapticKind>>,
}

impl MockHost {
    /// Host opened outside Telegram (no user)
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_user(user_id: i64, init_data: &str) -> Self {
        Self {
            user_id: Some(user_id),
            init_data: Some(init_data.to_string()),
            ..Self::default()
        }
    }

    pub fn expand_count(&self) -> usize {
        self.expands.load(Ordering::SeqCst)
    }

    pub fn haptics(&self) -> Vec<HapticKind> {
        self.haptics.lock().unwrap().clone()
    }
}

impl WebAppHost for MockHost {
    fn expand(&self) {
        self.expands.fetch_add(1, Ordering::SeqCst);
    }

    fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    fn init_data(&self) -> Option<&str> {
        self.init_data.as_deref()
    }

    fn notify(&self, kind: HapticKind) {
        self.haptics.lock().unwrap().push(kind);
    }
}
