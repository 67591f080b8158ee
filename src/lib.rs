//! Course Mini App - Telegram Mini App client for browsing courses and
//! requesting lecture files
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors and logging
//! - `api`: Backend wire types and the HTTP client
//! - `webapp`: Page model, WebApp host capability and the view controller
//! - `cli`: Command line interface of the terminal driver

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod api;
pub mod cli;
pub mod core;
pub mod webapp;

// Re-export commonly used types for convenience
pub use api::{CatalogApi, HttpCatalogApi};
pub use crate::core::{config, AppError, AppResult, ClientConfig};
pub use webapp::{Page, View, ViewController, WebAppHost};
