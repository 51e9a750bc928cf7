//! # Record Schemas
//!
//! One module per record kind. Each defines the kind's collection name, its
//! declarative field list, and pure validation functions that turn inbound
//! payloads into store documents or patches. There are no live schema
//! objects; the declarations are consts and the rules are functions.

pub mod banner;
pub mod dashboard_image;
pub mod expert_image;
pub mod feedback;
pub mod poster;
pub mod template;

use serde::Serialize;

use crate::api::errors::{ApiError, ApiResult};

/// Declarative description of one field, shared by validation messages and
/// the endpoint catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            allowed: None,
        }
    }

    pub const fn optional(name: &'static str, kind: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            allowed: None,
        }
    }

    pub const fn with_allowed(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }
}

/// Requires a present, non-blank string field.
pub(crate) fn require(field: &'static str, value: Option<String>) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

/// Requires a present, non-blank string field and stores it trimmed.
pub(crate) fn require_trimmed(field: &'static str, value: Option<String>) -> ApiResult<String> {
    let v = require(field, value)?;
    Ok(v.trim().to_string())
}

pub(crate) fn missing(field: &'static str) -> ApiError {
    ApiError::Validation(format!("missing required field: {}", field))
}

/// Rejection for an enum field holding a value outside its declared set,
/// naming the field and the allowed literals.
pub(crate) fn invalid_enum(
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> ApiError {
    ApiError::Validation(format!(
        "invalid value '{}' for {}, expected one of: {}",
        value,
        field,
        allowed.join(", ")
    ))
}

/// The shared empty-patch rejection for partial updates.
pub(crate) fn reject_empty_patch(is_empty: bool) -> ApiResult<()> {
    if is_empty {
        Err(ApiError::Validation(
            "No fields provided for update.".to_string(),
        ))
    } else {
        Ok(())
    }
}
