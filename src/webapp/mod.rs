//! Mini App view layer: page model, host capability and view controller

pub mod controller;
pub mod host;
pub mod messages;
pub mod notification;
pub mod page;

pub use controller::ViewController;
pub use host::{resolve_user_id, HapticKind, InitData, StaticHost, WebAppHost};
pub use page::{Action, Page, TopicsPane, View};
