// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `hwbot watch` command implementation: the polling loop.
//!
//! One cycle is fetch -> validate -> format -> de-duplicated notify. Every
//! recoverable error is caught at this level, reported once per distinct
//! message text, and the loop sleeps its fixed interval regardless of
//! outcome. The loop has no terminal state; it runs until the process is
//! killed.

use std::time::Duration;

use hwbot_config::HwbotConfig;
use hwbot_core::{HwbotError, Notifier};
use hwbot_practicum::{check_response, current_date, parse_status, PracticumClient};
use hwbot_telegram::TelegramNotifier;
use tracing::{debug, error, info, warn};

/// De-duplication state owned by the loop.
///
/// Tracks the last *successfully sent* notification per class. Reset on
/// restart, so a restart may re-send the current status once. A tracker is
/// only updated after the send succeeds; a dropped notification is retried
/// on the next cycle instead of being lost.
#[derive(Debug, Default)]
struct LoopState {
    last_status_message: String,
    last_error_message: String,
}

/// Runs the `hwbot watch` command.
///
/// Checks the credential gate (fatal: no HTTP request is ever issued while
/// a credential is missing), builds the API client and notifier, then
/// polls forever.
pub async fn run_watch(config: HwbotConfig) -> Result<(), HwbotError> {
    let credentials = match hwbot_config::check_credentials(&config) {
        Ok(credentials) => credentials,
        Err(errors) => {
            hwbot_config::render_errors(&errors);
            return Err(HwbotError::Config(
                "required credentials are missing".into(),
            ));
        }
    };

    let client = PracticumClient::new(&credentials.practicum_token, &config.practicum)?;
    let notifier = TelegramNotifier::new(
        &credentials.telegram_bot_token,
        &credentials.telegram_chat_id,
    )?;

    let interval = Duration::from_secs(config.practicum.poll_interval_secs);
    let mut state = LoopState::default();
    let mut from_date = chrono::Utc::now().timestamp();

    info!(
        interval_secs = config.practicum.poll_interval_secs,
        endpoint = %config.practicum.endpoint,
        "entering watch loop"
    );

    loop {
        from_date = run_cycle(&client, &notifier, &mut state, from_date).await;
        tokio::time::sleep(interval).await;
    }
}

/// Executes one polling cycle and returns the `from_date` for the next one.
///
/// The tracked timestamp advances to the response's `current_date` only on
/// a fully successful cycle; any failure (or an absent `current_date`)
/// keeps the previous value so the same window is re-queried.
async fn run_cycle<N: Notifier>(
    client: &PracticumClient,
    notifier: &N,
    state: &mut LoopState,
    from_date: i64,
) -> i64 {
    match fetch_candidate(client, from_date).await {
        Ok((message, next_from_date)) => {
            if message == state.last_status_message {
                debug!("status unchanged, nothing to send");
            } else {
                match notifier.notify(&message).await {
                    Ok(()) => {
                        info!("status change notification sent");
                        state.last_status_message = message;
                    }
                    Err(e) => {
                        error!(error = %e, "status notification not delivered, will retry next cycle");
                    }
                }
            }
            next_from_date
        }
        Err(err) => {
            error!(error = %err, "polling cycle failed");
            let message = format!("Сбой в работе программы: {err}");
            if message == state.last_error_message {
                debug!("error unchanged, not re-notifying");
            } else {
                match notifier.notify(&message).await {
                    Ok(()) => state.last_error_message = message,
                    Err(e) => {
                        warn!(error = %e, "error notification not delivered, will retry next cycle");
                    }
                }
            }
            from_date
        }
    }
}

/// Fetches and processes one poll response into the candidate notification
/// text and the next tracked timestamp.
async fn fetch_candidate(
    client: &PracticumClient,
    from_date: i64,
) -> Result<(String, i64), HwbotError> {
    let response = client.get_homework_statuses(from_date).await?;
    let homework = check_response(&response)?;
    let message = parse_status(homework)?;
    let next_from_date = current_date(&response).unwrap_or(from_date);
    Ok((message, next_from_date))
}
