// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for hwbot.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level hwbot configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values;
/// the three credentials have no defaults and are checked separately at
/// startup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HwbotConfig {
    /// Process identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Practicum homework API settings.
    #[serde(default)]
    pub practicum: PracticumConfig,

    /// Telegram delivery settings.
    #[serde(default)]
    pub telegram: TelegramConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Practicum homework API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PracticumConfig {
    /// Practicum API OAuth token. Required; `None` fails the startup gate.
    #[serde(default)]
    pub token: Option<String>,

    /// Homework-statuses endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Seconds to sleep between polling cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Per-request HTTP timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            token: None,
            endpoint: default_endpoint(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_poll_interval_secs() -> u64 {
    600 // 10 minutes, the interval the review API expects
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Telegram delivery configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token. Required; `None` fails the startup gate.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Destination chat: a numeric chat id or an `@channel` username.
    /// Required; `None` fails the startup gate.
    #[serde(default)]
    pub chat_id: Option<String>,
}
