//! Telegram WebApp host capability
//!
//! The view controller never touches the host environment directly. It gets
//! a [`WebAppHost`] that exposes viewport expansion, the user identity and
//! haptic feedback.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use serde::Deserialize;
use strum::{AsRefStr, Display};
use url::form_urlencoded;

/// Kinds accepted by `HapticFeedback.notificationOccurred`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum HapticKind {
    Success,
    Error,
    Warning,
}

/// What the embedding environment provides to the Mini App
pub trait WebAppHost: Send + Sync {
    /// Expand the Mini App to full height
    fn expand(&self);

    /// Telegram user id, `None` when opened outside Telegram
    fn user_id(&self) -> Option<i64>;

    /// Raw signed init data, forwarded to the backend when available
    fn init_data(&self) -> Option<&str> {
        None
    }

    /// `HapticFeedback.notificationOccurred(kind)`
    fn notify(&self, kind: HapticKind);

    fn notify_success(&self) {
        self.notify(HapticKind::Success);
    }
}

/// Returns the host user id, or `fallback` when the app runs outside Telegram.
pub fn resolve_user_id(host: &dyn WebAppHost, fallback: i64) -> i64 {
    match host.user_id() {
        Some(id) => id,
        None => {
            log::debug!("Test mode: no Telegram user, using fallback id {}", fallback);
            fallback
        }
    }
}

/// Parsed Telegram `initData` (the `initDataUnsafe` view, no signature check)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitData {
    raw: String,
    user_id: Option<i64>,
}

/// The part of the `user` field the client needs
#[derive(Debug, Deserialize)]
struct InitDataUser {
    id: i64,
}

impl InitData {
    /// Parses the query-string formatted init data.
    ///
    /// A missing `user` parameter is not an error (the user id is simply
    /// absent); a malformed `user` JSON is. When `user` repeats, the first
    /// occurrence wins.
    pub fn parse(raw: &str) -> Result<Self> {
        let user = form_urlencoded::parse(raw.as_bytes())
            .find(|(key, _)| key == "user")
            .map(|(_, value)| serde_json::from_str::<InitDataUser>(&value))
            .transpose()
            .context("init data carries an invalid user object")?;

        Ok(Self {
            raw: raw.to_string(),
            user_id: user.map(|user| user.id),
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }
}

/// Host for non-browser drivers (CLI): identity comes from optional init
/// data, `expand` is a no-op and haptics are logged and counted.
#[derive(Debug, Default)]
pub struct StaticHost {
    init_data: Option<InitData>,
    haptics: AtomicUsize,
}

impl StaticHost {
    pub fn new(init_data: Option<InitData>) -> Self {
        Self {
            init_data,
            haptics: AtomicUsize::new(0),
        }
    }

    /// Number of haptic notifications fired so far
    pub fn haptic_count(&self) -> usize {
        self.haptics.load(Ordering::Relaxed)
    }
}

impl WebAppHost for StaticHost {
    fn expand(&self) {
        log::debug!("expand() requested");
    }

    fn user_id(&self) -> Option<i64> {
        self.init_data.as_ref().and_then(InitData::user_id)
    }

    fn init_data(&self) -> Option<&str> {
        self.init_data.as_ref().map(InitData::raw)
    }

    fn notify(&self, kind: HapticKind) {
        self.haptics.fetch_add(1, Ordering::Relaxed);
        log::debug!("haptic: {}", kind);
    }
}
