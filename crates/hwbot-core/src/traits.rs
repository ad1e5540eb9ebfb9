// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier trait for outbound chat delivery.

use async_trait::async_trait;

use crate::error::HwbotError;

/// Delivers plain-text notifications to the single configured chat
/// destination.
///
/// Implementations do not retry; the polling loop decides whether a failed
/// send is attempted again on the next cycle.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to the configured destination.
    async fn notify(&self, text: &str) -> Result<(), HwbotError>;
}
