//! # Banners
//!
//! Site banners keyed by placement (`home`, `webinar`, `course`). Values
//! are trimmed before validation and storage. Banner lookups validate the
//! path id shape before touching the store.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{invalid_enum, require_trimmed, FieldSpec};
use crate::api::errors::{ApiError, ApiResult};
use crate::store::is_object_id;

pub const COLLECTION: &str = "banners";

/// Banner placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerType {
    Home,
    Webinar,
    Course,
}

impl BannerType {
    pub const ALLOWED: &'static [&'static str] = &["home", "webinar", "course"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(BannerType::Home),
            "webinar" => Some(BannerType::Webinar),
            "course" => Some(BannerType::Course),
            _ => None,
        }
    }
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("type", "string").with_allowed(BannerType::ALLOWED),
    FieldSpec::required("imageurl", "string"),
    FieldSpec::required("name", "string"),
];

/// Rejects ids that do not have the 24-hex object-id shape, before any
/// store access.
pub fn check_banner_id(id: &str) -> ApiResult<()> {
    if is_object_id(id) {
        Ok(())
    } else {
        Err(ApiError::Validation("Invalid banner ID format.".to_string()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateBanner {
    #[serde(rename = "type")]
    pub banner_type: Option<String>,
    pub imageurl: Option<String>,
    pub name: Option<String>,
}

impl CreateBanner {
    /// Validates the payload and builds the document to insert.
    pub fn into_document(self) -> ApiResult<Map<String, Value>> {
        let raw = require_trimmed("type", self.banner_type)?;
        let banner_type = BannerType::parse(&raw)
            .ok_or_else(|| invalid_enum("type", &raw, BannerType::ALLOWED))?;
        let imageurl = require_trimmed("imageurl", self.imageurl)?;
        let name = require_trimmed("name", self.name)?;

        let mut doc = Map::new();
        doc.insert("type".to_string(), json!(banner_type));
        doc.insert("imageurl".to_string(), Value::String(imageurl));
        doc.insert("name".to_string(), Value::String(name));
        Ok(doc)
    }
}
