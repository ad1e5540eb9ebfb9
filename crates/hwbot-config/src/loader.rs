// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./hwbot.toml` > `~/.config/hwbot/hwbot.toml` >
//! `/etc/hwbot/hwbot.toml` with environment variable overrides via the
//! `HWBOT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::HwbotConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/hwbot/hwbot.toml` (system-wide)
/// 3. `~/.config/hwbot/hwbot.toml` (user XDG config)
/// 4. `./hwbot.toml` (local directory)
/// 5. `HWBOT_*` environment variables
pub fn load_config() -> Result<HwbotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HwbotConfig::default()))
        .merge(Toml::file("/etc/hwbot/hwbot.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("hwbot/hwbot.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("hwbot.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<HwbotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HwbotConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HwbotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HwbotConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `HWBOT_TELEGRAM_BOT_TOKEN` must map to
/// `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("HWBOT_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: HWBOT_PRACTICUM_POLL_INTERVAL_SECS -> "practicum_poll_interval_secs"
        let mapped = key
            .as_str()
            .replacen("agent_", "agent.", 1)
            .replacen("practicum_", "practicum.", 1)
            .replacen("telegram_", "telegram.", 1);
        mapped.into()
    })
}
