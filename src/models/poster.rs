//! # Admin Posters
//!
//! Two-image posters managed from the admin panel. `type` is a small
//! integer slot (1, 2, or 3).

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{reject_empty_patch, require, FieldSpec};
use crate::api::errors::{ApiError, ApiResult};

pub const COLLECTION: &str = "admin_posters";

/// Allowed poster slots.
pub const ALLOWED_TYPES: &[i64] = &[1, 2, 3];

/// String rendition of the slots for the endpoint catalog.
pub const ALLOWED_TYPE_NAMES: &'static [&'static str] = &["1", "2", "3"];

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("image1url", "string"),
    FieldSpec::required("image2url", "string"),
    FieldSpec::required("type", "int").with_allowed(ALLOWED_TYPE_NAMES),
    FieldSpec::required("name", "string"),
];

fn check_slot(value: i64) -> ApiResult<()> {
    if ALLOWED_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "invalid value '{}' for type, expected one of: 1, 2, 3",
            value
        )))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePoster {
    pub image1url: Option<String>,
    pub image2url: Option<String>,
    #[serde(rename = "type")]
    pub poster_type: Option<i64>,
    pub name: Option<String>,
}

impl CreatePoster {
    /// Validates the payload and builds the document to insert.
    pub fn into_document(self) -> ApiResult<Map<String, Value>> {
        let image1url = require("image1url", self.image1url)?;
        let image2url = require("image2url", self.image2url)?;
        let poster_type = self
            .poster_type
            .ok_or_else(|| super::missing("type"))?;
        check_slot(poster_type)?;
        let name = require("name", self.name)?;

        let mut doc = Map::new();
        doc.insert("image1url".to_string(), Value::String(image1url));
        doc.insert("image2url".to_string(), Value::String(image2url));
        doc.insert("type".to_string(), Value::from(poster_type));
        doc.insert("name".to_string(), Value::String(name));
        Ok(doc)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePoster {
    pub image1url: Option<String>,
    pub image2url: Option<String>,
    #[serde(rename = "type")]
    pub poster_type: Option<i64>,
    pub name: Option<String>,
}

impl UpdatePoster {
    /// Validates the supplied subset and builds the merge patch.
    pub fn into_patch(self) -> ApiResult<Map<String, Value>> {
        let mut patch = Map::new();
        if let Some(image1url) = self.image1url {
            patch.insert("image1url".to_string(), Value::String(image1url));
        }
        if let Some(image2url) = self.image2url {
            patch.insert("image2url".to_string(), Value::String(image2url));
        }
        if let Some(poster_type) = self.poster_type {
            check_slot(poster_type)?;
            patch.insert("type".to_string(), Value::from(poster_type));
        }
        if let Some(name) = self.name {
            patch.insert("name".to_string(), Value::String(name));
        }
        reject_empty_patch(patch.is_empty())?;
        Ok(patch)
    }
}
