// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the hwbot homework watcher.

use thiserror::Error;

/// The primary error type used across all hwbot crates.
///
/// Only `Config` is fatal: it stops the process before the polling loop
/// starts. Every other variant is caught at the loop boundary, reported
/// once per distinct message, and the loop continues after its sleep.
#[derive(Debug, Error)]
pub enum HwbotError {
    /// Configuration errors (missing credentials, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure while talking to the homework API.
    #[error("API request failed: {message}")]
    Request {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The homework API answered with a non-success HTTP status.
    #[error("API responded with HTTP status {status}")]
    Response { status: u16 },

    /// The API payload did not have the expected shape.
    #[error("unexpected API payload: {0}")]
    Schema(String),

    /// A notification could not be delivered to the chat.
    #[error("notification delivery failed: {message}")]
    Delivery {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HwbotError {
    /// Returns true for errors the polling loop recovers from by sleeping
    /// and trying again next cycle.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, HwbotError::Config(_))
    }
}
