//! # Feedback
//!
//! User feedback entries: star rating 1..=5 plus contact details. The
//! mobile number must be exactly 10 digits.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{missing, require, FieldSpec};
use crate::api::errors::{ApiError, ApiResult};

pub const COLLECTION: &str = "feedback";

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("star", "int"),
    FieldSpec::required("description", "string"),
    FieldSpec::required("userId", "string"),
    FieldSpec::required("name", "string"),
    FieldSpec::required("mobileNumber", "string"),
];

static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[0-9]{10}$").unwrap());

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateFeedback {
    pub star: Option<i64>,
    pub description: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: Option<String>,
}

impl CreateFeedback {
    /// Validates the payload and builds the document to insert.
    pub fn into_document(self) -> ApiResult<Map<String, Value>> {
        let star = self.star.ok_or_else(|| missing("star"))?;
        if !(1..=5).contains(&star) {
            return Err(ApiError::Validation(
                "star must be an integer between 1 and 5".to_string(),
            ));
        }
        let description = require("description", self.description)?;
        let user_id = require("userId", self.user_id)?;
        let name = require("name", self.name)?;
        let mobile_number = require("mobileNumber", self.mobile_number)?;
        if !MOBILE_RE.is_match(&mobile_number) {
            return Err(ApiError::Validation(
                "mobileNumber must be a 10-digit number".to_string(),
            ));
        }

        let mut doc = Map::new();
        doc.insert("star".to_string(), Value::from(star));
        doc.insert("description".to_string(), Value::String(description));
        doc.insert("userId".to_string(), Value::String(user_id));
        doc.insert("name".to_string(), Value::String(name));
        doc.insert("mobileNumber".to_string(), Value::String(mobile_number));
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CreateFeedback {
        CreateFeedback {
            star: Some(4),
            description: Some("helpful session".to_string()),
            user_id: Some("user-9".to_string()),
            name: Some("Asha".to_string()),
            mobile_number: Some("9876543210".to_string()),
        }
    }

    #[test]
    fn test_valid_feedback_accepted() {
        let doc = full_payload().into_document().unwrap();
        assert_eq!(doc["star"], Value::from(4));
        assert_eq!(doc["mobileNumber"], "9876543210");
    }

    #[test]
    fn test_star_range_enforced() {
        for bad in [0, 6, -1] {
            let mut payload = full_payload();
            payload.star = Some(bad);
            assert!(payload.into_document().is_err(), "star {} accepted", bad);
        }
        for ok in [1, 5] {
            let mut payload = full_payload();
            payload.star = Some(ok);
            assert!(payload.into_document().is_ok());
        }
    }

    #[test]
    fn test_mobile_number_format_enforced() {
        for bad in ["12345", "98765432101", "98765abc10", ""] {
            let mut payload = full_payload();
            payload.mobile_number = Some(bad.to_string());
            assert!(
                payload.into_document().is_err(),
                "mobile '{}' accepted",
                bad
            );
        }
    }

    #[test]
    fn test_required_fields_enforced() {
        for strip in 0..5 {
            let mut payload = full_payload();
            match strip {
                0 => payload.star = None,
                1 => payload.description = None,
                2 => payload.user_id = None,
                3 => payload.name = None,
                _ => payload.mobile_number = None,
            }
            assert!(payload.into_document().is_err());
        }
    }
}
