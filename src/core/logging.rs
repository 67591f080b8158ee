//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - A startup summary of the client configuration

use simplelog::*;
use std::fs::File;

use crate::core::config::ClientConfig;
use crate::core::error::{AppError, AppResult};

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
/// * `verbose` - Log at debug level instead of info
pub fn init_logger(log_file_path: &str, verbose: bool) -> AppResult<()> {
    let log_file = File::create(log_file_path)?;
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    CombinedLogger::init(vec![
        TermLogger::new(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
        WriteLogger::new(level, Config::default(), log_file),
    ])
    .map_err(|e| AppError::Logger(e.to_string()))?;

    Ok(())
}

/// Logs the effective client configuration at startup
///
/// The WebApp token itself is never logged, only whether it is set.
pub fn log_client_configuration(client: &ClientConfig, has_init_data: bool) {
    use secrecy::ExposeSecret;

    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📱 Mini App client configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("API URL: {}", client.api_url);
    log::info!("HTTP timeout: {:?}", client.http_timeout);

    if client.webapp_token.expose_secret().is_empty() {
        log::warn!("⚠️  WEBAPP_TOKEN: not set, file requests will be rejected");
    } else {
        log::info!("✅ WEBAPP_TOKEN: set");
    }

    if has_init_data {
        log::info!("✅ Telegram init data: set");
    } else {
        log::warn!(
            "⚠️  Telegram init data: not set, using fallback user id {}",
            client.fallback_user_id
        );
    }
}
