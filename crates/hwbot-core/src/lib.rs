// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the hwbot homework watcher.
//!
//! Provides the error taxonomy, the review-status domain types with their
//! fixed verdict table, and the [`Notifier`] trait that chat adapters
//! implement.

pub mod error;
pub mod status;
pub mod traits;

// Re-export key items at crate root for ergonomic imports.
pub use error::HwbotError;
pub use status::{status_change_message, ReviewStatus};
pub use traits::Notifier;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_has_all_variants() {
        // Verify all 5 error variants exist and can be constructed.
        let _config = HwbotError::Config("test".into());
        let _request = HwbotError::Request {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _response = HwbotError::Response { status: 502 };
        let _schema = HwbotError::Schema("test".into());
        let _delivery = HwbotError::Delivery {
            message: "test".into(),
            source: None,
        };
    }

    #[test]
    fn only_config_is_fatal() {
        assert!(!HwbotError::Config("x".into()).is_recoverable());
        assert!(HwbotError::Response { status: 500 }.is_recoverable());
        assert!(HwbotError::Schema("x".into()).is_recoverable());
        assert!(HwbotError::Request {
            message: "x".into(),
            source: None
        }
        .is_recoverable());
        assert!(HwbotError::Delivery {
            message: "x".into(),
            source: None
        }
        .is_recoverable());
    }

    #[test]
    fn error_display_includes_http_status() {
        let err = HwbotError::Response { status: 404 };
        assert!(err.to_string().contains("404"));
    }
}
