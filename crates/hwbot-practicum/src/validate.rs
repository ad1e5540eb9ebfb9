// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response-shape validation and status-message extraction.
//!
//! The API payload is checked field by field rather than deserialized into
//! a rigid struct: the loop must distinguish "which part of the shape is
//! wrong" in its error notifications, and unknown extra fields are fine.

use std::str::FromStr;

use hwbot_core::{status_change_message, HwbotError, ReviewStatus};
use serde_json::Value;

/// Validates the poll response shape and returns the newest submission.
///
/// Fails with [`HwbotError::Schema`] if the top level is not an object, or
/// if `homeworks` is missing, not an array, or empty. The API returns
/// submissions newest first, so element 0 is the one tracked.
pub fn check_response(response: &Value) -> Result<&Value, HwbotError> {
    let object = response
        .as_object()
        .ok_or_else(|| HwbotError::Schema("response is not a JSON object".into()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| HwbotError::Schema("response has no `homeworks` key".into()))?
        .as_array()
        .ok_or_else(|| HwbotError::Schema("`homeworks` is not an array".into()))?;

    homeworks
        .first()
        .ok_or_else(|| HwbotError::Schema("`homeworks` list is empty".into()))
}

/// Extracts the `current_date` timestamp the next cycle should poll from.
///
/// Returns `None` when the field is absent or not an integer; the loop
/// then keeps its previous timestamp.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date")?.as_i64()
}

/// Builds the status-change notification text for one submission.
///
/// Fails with [`HwbotError::Schema`] if `homework_name` or `status` is
/// absent or not a string, or if the status code is outside the known set.
/// Pure function, no side effects.
pub fn parse_status(homework: &Value) -> Result<String, HwbotError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| HwbotError::Schema("submission has no `homework_name`".into()))?;

    let code = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| HwbotError::Schema(format!("submission `{name}` has no `status`")))?;

    let status = ReviewStatus::from_str(code).map_err(|_| {
        HwbotError::Schema(format!("submission `{name}` has unknown status `{code}`"))
    })?;

    Ok(status_change_message(name, status))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn check_response_returns_first_submission() {
        let response = json!({
            "homeworks": [
                {"homework_name": "new", "status": "reviewing"},
                {"homework_name": "old", "status": "approved"}
            ],
            "current_date": 1000
        });
        let first = check_response(&response).unwrap();
        assert_eq!(first["homework_name"], "new");
    }

    #[test]
    fn check_response_rejects_non_object() {
        for bad in [json!([1, 2]), json!("text"), json!(42), json!(null)] {
            let err = check_response(&bad).unwrap_err();
            assert!(matches!(err, HwbotError::Schema(_)), "got: {err:?}");
        }
    }

    #[test]
    fn check_response_rejects_missing_homeworks() {
        let err = check_response(&json!({"current_date": 1000})).unwrap_err();
        assert!(err.to_string().contains("homeworks"), "got: {err}");
    }

    #[test]
    fn check_response_rejects_non_array_homeworks() {
        let err = check_response(&json!({"homeworks": "none"})).unwrap_err();
        assert!(matches!(err, HwbotError::Schema(_)), "got: {err:?}");
    }

    #[test]
    fn check_response_rejects_empty_homeworks() {
        let err = check_response(&json!({"homeworks": [], "current_date": 1000})).unwrap_err();
        assert!(err.to_string().contains("empty"), "got: {err}");
    }

    #[test]
    fn current_date_extracts_timestamp() {
        let response = json!({"homeworks": [], "current_date": 1659602400});
        assert_eq!(current_date(&response), Some(1659602400));
    }

    #[test]
    fn current_date_absent_or_wrong_type_is_none() {
        assert_eq!(current_date(&json!({"homeworks": []})), None);
        assert_eq!(
            current_date(&json!({"homeworks": [], "current_date": "soon"})),
            None
        );
    }

    #[test]
    fn parse_status_formats_approved_submission() {
        let homework = json!({"homework_name": "proj1", "status": "approved"});
        assert_eq!(
            parse_status(&homework).unwrap(),
            "Изменился статус проверки работы \"proj1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn parse_status_formats_all_known_codes() {
        for (code, verdict) in [
            ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ] {
            let homework = json!({"homework_name": "hw", "status": code});
            let message = parse_status(&homework).unwrap();
            assert_eq!(
                message,
                format!("Изменился статус проверки работы \"hw\". {verdict}")
            );
        }
    }

    #[test]
    fn parse_status_rejects_missing_name() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert!(err.to_string().contains("homework_name"), "got: {err}");
    }

    #[test]
    fn parse_status_rejects_missing_status() {
        let err = parse_status(&json!({"homework_name": "proj1"})).unwrap_err();
        assert!(matches!(err, HwbotError::Schema(_)), "got: {err:?}");
    }

    #[test]
    fn parse_status_rejects_unknown_code() {
        let homework = json!({"homework_name": "proj1", "status": "pending"});
        let err = parse_status(&homework).unwrap_err();
        assert!(err.to_string().contains("pending"), "got: {err}");
    }

    #[test]
    fn parse_status_rejects_non_string_fields() {
        let err = parse_status(&json!({"homework_name": 7, "status": "approved"})).unwrap_err();
        assert!(matches!(err, HwbotError::Schema(_)), "got: {err:?}");
    }
}
