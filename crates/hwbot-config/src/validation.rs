// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values, plus the
//! startup credential gate.

use crate::diagnostic::ConfigError;
use crate::model::HwbotConfig;

/// The three secrets hwbot needs to run, extracted from a validated config.
///
/// Constructed once at process start via [`check_credentials`]; lives for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Practicum API OAuth token.
    pub practicum_token: String,
    /// Telegram Bot API token.
    pub telegram_bot_token: String,
    /// Destination chat id or `@channel` username.
    pub telegram_chat_id: String,
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast). Credential
/// presence is checked separately by [`check_credentials`].
pub fn validate_config(config: &HwbotConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let endpoint = config.practicum.endpoint.trim();
    if endpoint.is_empty() {
        errors.push(ConfigError::Validation {
            message: "practicum.endpoint must not be empty".to_string(),
        });
    } else if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("practicum.endpoint `{endpoint}` is not an http(s) URL"),
        });
    }

    if config.practicum.poll_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "practicum.poll_interval_secs must be at least 1".to_string(),
        });
    }

    if config.practicum.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "practicum.request_timeout_secs must be at least 1".to_string(),
        });
    }

    let level = config.agent.log_level.as_str();
    if !matches!(level, "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of trace, debug, info, warn, error; got `{level}`"
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The startup credential gate.
///
/// Returns the three secrets, or one [`ConfigError::MissingCredential`] per
/// absent or empty credential (all collected, not fail-fast). While this
/// fails, the polling loop must not start and no HTTP request is issued.
pub fn check_credentials(config: &HwbotConfig) -> Result<Credentials, Vec<ConfigError>> {
    let mut errors = Vec::new();

    let required = |value: &Option<String>, key: &str, env_var: &str, errors: &mut Vec<ConfigError>| {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => Some(v.to_string()),
            _ => {
                errors.push(ConfigError::MissingCredential {
                    key: key.to_string(),
                    env_var: env_var.to_string(),
                });
                None
            }
        }
    };

    let practicum_token = required(
        &config.practicum.token,
        "practicum.token",
        "HWBOT_PRACTICUM_TOKEN",
        &mut errors,
    );
    let telegram_bot_token = required(
        &config.telegram.bot_token,
        "telegram.bot_token",
        "HWBOT_TELEGRAM_BOT_TOKEN",
        &mut errors,
    );
    let telegram_chat_id = required(
        &config.telegram.chat_id,
        "telegram.chat_id",
        "HWBOT_TELEGRAM_CHAT_ID",
        &mut errors,
    );

    match (practicum_token, telegram_bot_token, telegram_chat_id) {
        (Some(practicum_token), Some(telegram_bot_token), Some(telegram_chat_id))
            if errors.is_empty() =>
        {
            Ok(Credentials {
                practicum_token,
                telegram_bot_token,
                telegram_chat_id,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_credentials() -> HwbotConfig {
        let mut config = HwbotConfig::default();
        config.practicum.token = Some("practicum-token".to_string());
        config.telegram.bot_token = Some("123:ABC".to_string());
        config.telegram.chat_id = Some("42".to_string());
        config
    }

    #[test]
    fn default_config_validates() {
        let config = HwbotConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_endpoint_fails_validation() {
        let mut config = HwbotConfig::default();
        config.practicum.endpoint = "".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("endpoint"))));
    }

    #[test]
    fn non_http_endpoint_fails_validation() {
        let mut config = HwbotConfig::default();
        config.practicum.endpoint = "ftp://example.org/statuses".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_interval_fails_validation() {
        let mut config = HwbotConfig::default();
        config.practicum.poll_interval_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("poll_interval_secs"))));
    }

    #[test]
    fn bogus_log_level_fails_validation() {
        let mut config = HwbotConfig::default();
        config.agent.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn credentials_extracted_when_all_present() {
        let creds = check_credentials(&config_with_credentials()).unwrap();
        assert_eq!(creds.practicum_token, "practicum-token");
        assert_eq!(creds.telegram_bot_token, "123:ABC");
        assert_eq!(creds.telegram_chat_id, "42");
    }

    #[test]
    fn missing_credentials_are_all_reported() {
        let errors = check_credentials(&HwbotConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 3, "one error per missing credential");
        let keys: Vec<_> = errors
            .iter()
            .filter_map(|e| match e {
                ConfigError::MissingCredential { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            keys,
            vec!["practicum.token", "telegram.bot_token", "telegram.chat_id"]
        );
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let mut config = config_with_credentials();
        config.telegram.chat_id = Some("   ".to_string());
        let errors = check_credentials(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ConfigError::MissingCredential { key, .. } if key == "telegram.chat_id"
        ));
    }

    #[test]
    fn credential_values_are_trimmed() {
        let mut config = config_with_credentials();
        config.practicum.token = Some("  padded  ".to_string());
        let creds = check_credentials(&config).unwrap();
        assert_eq!(creds.practicum_token, "padded");
    }
}
