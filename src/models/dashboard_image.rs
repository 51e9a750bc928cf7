//! # Dashboard Images
//!
//! Images shown on an expert's dashboard. All four fields are required;
//! `type` is one of the declared placement kinds.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{invalid_enum, reject_empty_patch, require, FieldSpec};
use crate::api::errors::ApiResult;

pub const COLLECTION: &str = "dashboard_images";

/// Placement kind for a dashboard image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Blur,
    Marketing,
    Premium,
}

impl ImageType {
    pub const ALLOWED: &'static [&'static str] = &["blur", "marketing", "premium"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "blur" => Some(ImageType::Blur),
            "marketing" => Some(ImageType::Marketing),
            "premium" => Some(ImageType::Premium),
            _ => None,
        }
    }
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("expertId", "string"),
    FieldSpec::required("imageurl", "string"),
    FieldSpec::required("type", "string").with_allowed(ImageType::ALLOWED),
    FieldSpec::required("name", "string"),
];

/// Create payload; every field optional at the wire so validation owns the
/// presence errors.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateDashboardImage {
    #[serde(rename = "expertId")]
    pub expert_id: Option<String>,
    pub imageurl: Option<String>,
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    pub name: Option<String>,
}

impl CreateDashboardImage {
    /// Validates the payload and builds the document to insert.
    pub fn into_document(self) -> ApiResult<Map<String, Value>> {
        let expert_id = require("expertId", self.expert_id)?;
        let imageurl = require("imageurl", self.imageurl)?;
        let raw = require("type", self.image_type)?;
        let image_type = ImageType::parse(&raw)
            .ok_or_else(|| invalid_enum("type", &raw, ImageType::ALLOWED))?;
        let name = require("name", self.name)?;

        let mut doc = Map::new();
        doc.insert("expertId".to_string(), Value::String(expert_id));
        doc.insert("imageurl".to_string(), Value::String(imageurl));
        doc.insert("type".to_string(), json!(image_type));
        doc.insert("name".to_string(), Value::String(name));
        Ok(doc)
    }
}

/// Partial-update payload; only supplied fields are merged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateDashboardImage {
    #[serde(rename = "expertId")]
    pub expert_id: Option<String>,
    pub imageurl: Option<String>,
    #[serde(rename = "type")]
    pub image_type: Option<String>,
    pub name: Option<String>,
}

impl UpdateDashboardImage {
    /// Validates the supplied subset and builds the merge patch.
    pub fn into_patch(self) -> ApiResult<Map<String, Value>> {
        let mut patch = Map::new();
        if let Some(expert_id) = self.expert_id {
            patch.insert("expertId".to_string(), Value::String(expert_id));
        }
        if let Some(imageurl) = self.imageurl {
            patch.insert("imageurl".to_string(), Value::String(imageurl));
        }
        if let Some(raw) = self.image_type {
            let image_type = ImageType::parse(&raw)
                .ok_or_else(|| invalid_enum("type", &raw, ImageType::ALLOWED))?;
            patch.insert("type".to_string(), json!(image_type));
        }
        if let Some(name) = self.name {
            patch.insert("name".to_string(), Value::String(name));
        }
        reject_empty_patch(patch.is_empty())?;
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CreateDashboardImage {
        CreateDashboardImage {
            expert_id: Some("expert-1".to_string()),
            imageurl: Some("http://x/y.png".to_string()),
            image_type: Some("blur".to_string()),
            name: Some("hero".to_string()),
        }
    }

    #[test]
    fn test_valid_create_builds_document() {
        let doc = full_payload().into_document().unwrap();
        assert_eq!(doc["expertId"], "expert-1");
        assert_eq!(doc["type"], "blur");
    }

    #[test]
    fn test_each_required_field_enforced() {
        for strip in 0..4 {
            let mut payload = full_payload();
            match strip {
                0 => payload.expert_id = None,
                1 => payload.imageurl = None,
                2 => payload.image_type = None,
                _ => payload.name = None,
            }
            assert!(payload.into_document().is_err());
        }
    }

    #[test]
    fn test_create_rejects_unknown_type() {
        let mut payload = full_payload();
        payload.image_type = Some("sepia".to_string());
        assert!(payload.into_document().is_err());
    }

    #[test]
    fn test_update_patch_carries_only_supplied_fields() {
        let update = UpdateDashboardImage {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        let patch = update.into_patch().unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch["name"], "renamed");
    }

    #[test]
    fn test_update_rejects_empty_patch() {
        let err = UpdateDashboardImage::default().into_patch().unwrap_err();
        assert_eq!(err.message(), "No fields provided for update.");
    }

    #[test]
    fn test_update_revalidates_enum() {
        let update = UpdateDashboardImage {
            image_type: Some("sepia".to_string()),
            ..Default::default()
        };
        assert!(update.into_patch().is_err());
    }
}
