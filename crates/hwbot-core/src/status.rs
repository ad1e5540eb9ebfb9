// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Review-status domain types and the verdict table.
//!
//! The status codes and verdict strings are fixed by the Practicum API
//! contract and must match it exactly, including the Russian display text.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Review status of a tracked homework submission.
///
/// The string forms (`approved`, `reviewing`, `rejected`) are the exact
/// codes the API uses; anything else is a schema error upstream.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// The reviewer accepted the work.
    Approved,
    /// A reviewer picked the work up for review.
    Reviewing,
    /// The reviewer returned the work with remarks.
    Rejected,
}

impl ReviewStatus {
    /// Returns the fixed human-readable verdict for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            ReviewStatus::Reviewing => "Работа взята на проверку ревьюером.",
            ReviewStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Formats the outbound status-change notification text.
pub fn status_change_message(homework_name: &str, status: ReviewStatus) -> String {
    format!(
        "Изменился статус проверки работы \"{homework_name}\". {}",
        status.verdict()
    )
}
