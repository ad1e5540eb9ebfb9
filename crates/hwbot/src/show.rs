// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hwbot config` command implementation.
//!
//! Prints the effective merged configuration as TOML so operators can see
//! what the watcher would actually run with. Token values are redacted;
//! the chat destination is not a secret and stays visible.

use hwbot_config::HwbotConfig;

const REDACTED: &str = "<redacted>";

/// Runs the `hwbot config` command.
pub fn run_config(config: &HwbotConfig) {
    let redacted = redact(config);
    match toml::to_string_pretty(&redacted) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => eprintln!("failed to render config: {e}"),
    }
}

/// Returns a copy of the config with token values masked.
fn redact(config: &HwbotConfig) -> HwbotConfig {
    let mut redacted = config.clone();
    if redacted.practicum.token.is_some() {
        redacted.practicum.token = Some(REDACTED.to_string());
    }
    if redacted.telegram.bot_token.is_some() {
        redacted.telegram.bot_token = Some(REDACTED.to_string());
    }
    redacted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_masks_tokens_but_not_chat_id() {
        let mut config = HwbotConfig::default();
        config.practicum.token = Some("y0_secret".to_string());
        config.telegram.bot_token = Some("123:ABC".to_string());
        config.telegram.chat_id = Some("42".to_string());

        let redacted = redact(&config);
        assert_eq!(redacted.practicum.token.as_deref(), Some(REDACTED));
        assert_eq!(redacted.telegram.bot_token.as_deref(), Some(REDACTED));
        assert_eq!(redacted.telegram.chat_id.as_deref(), Some("42"));
    }

    #[test]
    fn redact_leaves_unset_tokens_unset() {
        let redacted = redact(&HwbotConfig::default());
        assert!(redacted.practicum.token.is_none());
        assert!(redacted.telegram.bot_token.is_none());
    }

    #[test]
    fn redacted_config_still_renders_as_toml() {
        let mut config = HwbotConfig::default();
        config.practicum.token = Some("y0_secret".to_string());
        let rendered = toml::to_string_pretty(&redact(&config)).unwrap();
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("y0_secret"));
    }
}
