//! # Expert Images
//!
//! The later revision of expert-facing images: separate web and mobile
//! URLs, a globally unique `imageName`, and an optional subheading flag.
//! Kept as its own record kind, distinct from dashboard images.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{invalid_enum, reject_empty_patch, require, FieldSpec};
use crate::api::errors::ApiResult;

pub const COLLECTION: &str = "expert_images";

/// The one cross-record invariant in the system: `imageName` is unique.
pub const UNIQUE_FIELD: &str = "imageName";

/// Placement kind for an expert image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageProperty {
    Blur,
    Marketing,
    Premium,
}

impl ImageProperty {
    pub const ALLOWED: &'static [&'static str] = &["blur", "marketing", "premium"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "blur" => Some(ImageProperty::Blur),
            "marketing" => Some(ImageProperty::Marketing),
            "premium" => Some(ImageProperty::Premium),
            _ => None,
        }
    }
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("expertId", "string"),
    FieldSpec::required("imageName", "string"),
    FieldSpec::required("webImageUrl", "string"),
    FieldSpec::required("mobileImageUrl", "string"),
    FieldSpec::required("property", "string").with_allowed(ImageProperty::ALLOWED),
    FieldSpec::optional("subheading", "bool"),
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateExpertImage {
    #[serde(rename = "expertId")]
    pub expert_id: Option<String>,
    #[serde(rename = "imageName")]
    pub image_name: Option<String>,
    #[serde(rename = "webImageUrl")]
    pub web_image_url: Option<String>,
    #[serde(rename = "mobileImageUrl")]
    pub mobile_image_url: Option<String>,
    pub property: Option<String>,
    pub subheading: Option<bool>,
}

impl CreateExpertImage {
    /// Validates the payload and builds the document to insert.
    ///
    /// Uniqueness of `imageName` is checked by the caller against the store
    /// (advisory pre-check) and again by the store's unique index.
    pub fn into_document(self) -> ApiResult<Map<String, Value>> {
        let expert_id = require("expertId", self.expert_id)?;
        let image_name = require("imageName", self.image_name)?;
        let web_image_url = require("webImageUrl", self.web_image_url)?;
        let mobile_image_url = require("mobileImageUrl", self.mobile_image_url)?;
        let raw = require("property", self.property)?;
        let property = ImageProperty::parse(&raw)
            .ok_or_else(|| invalid_enum("property", &raw, ImageProperty::ALLOWED))?;

        let mut doc = Map::new();
        doc.insert("expertId".to_string(), Value::String(expert_id));
        doc.insert("imageName".to_string(), Value::String(image_name));
        doc.insert("webImageUrl".to_string(), Value::String(web_image_url));
        doc.insert(
            "mobileImageUrl".to_string(),
            Value::String(mobile_image_url),
        );
        doc.insert("property".to_string(), json!(property));
        // subheading defaults false when not supplied
        doc.insert(
            "subheading".to_string(),
            Value::Bool(self.subheading.unwrap_or(false)),
        );
        Ok(doc)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateExpertImage {
    #[serde(rename = "expertId")]
    pub expert_id: Option<String>,
    #[serde(rename = "imageName")]
    pub image_name: Option<String>,
    #[serde(rename = "webImageUrl")]
    pub web_image_url: Option<String>,
    #[serde(rename = "mobileImageUrl")]
    pub mobile_image_url: Option<String>,
    pub property: Option<String>,
    pub subheading: Option<bool>,
}

impl UpdateExpertImage {
    /// Validates the supplied subset and builds the merge patch.
    pub fn into_patch(self) -> ApiResult<Map<String, Value>> {
        let mut patch = Map::new();
        if let Some(expert_id) = self.expert_id {
            patch.insert("expertId".to_string(), Value::String(expert_id));
        }
        if let Some(image_name) = self.image_name {
            patch.insert("imageName".to_string(), Value::String(image_name));
        }
        if let Some(web_image_url) = self.web_image_url {
            patch.insert("webImageUrl".to_string(), Value::String(web_image_url));
        }
        if let Some(mobile_image_url) = self.mobile_image_url {
            patch.insert(
                "mobileImageUrl".to_string(),
                Value::String(mobile_image_url),
            );
        }
        if let Some(raw) = self.property {
            let property = ImageProperty::parse(&raw)
                .ok_or_else(|| invalid_enum("property", &raw, ImageProperty::ALLOWED))?;
            patch.insert("property".to_string(), json!(property));
        }
        if let Some(subheading) = self.subheading {
            patch.insert("subheading".to_string(), Value::Bool(subheading));
        }
        reject_empty_patch(patch.is_empty())?;
        Ok(patch)
    }

    /// The `imageName` this patch would set, if any; drives the uniqueness
    /// re-check excluding the target record.
    pub fn patched_image_name(patch: &Map<String, Value>) -> Option<&str> {
        patch.get(UNIQUE_FIELD).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> CreateExpertImage {
        CreateExpertImage {
            expert_id: Some("expert-1".to_string()),
            image_name: Some("hero".to_string()),
            web_image_url: Some("http://x/web.png".to_string()),
            mobile_image_url: Some("http://x/mobile.png".to_string()),
            property: Some("premium".to_string()),
            subheading: None,
        }
    }

    #[test]
    fn test_subheading_defaults_false() {
        let doc = full_payload().into_document().unwrap();
        assert_eq!(doc["subheading"], Value::Bool(false));
    }

    #[test]
    fn test_subheading_kept_when_supplied() {
        let mut payload = full_payload();
        payload.subheading = Some(true);
        let doc = payload.into_document().unwrap();
        assert_eq!(doc["subheading"], Value::Bool(true));
    }

    #[test]
    fn test_required_fields_enforced() {
        for strip in 0..5 {
            let mut payload = full_payload();
            match strip {
                0 => payload.expert_id = None,
                1 => payload.image_name = None,
                2 => payload.web_image_url = None,
                3 => payload.mobile_image_url = None,
                _ => payload.property = None,
            }
            assert!(payload.into_document().is_err());
        }
    }

    #[test]
    fn test_property_membership_enforced() {
        let mut payload = full_payload();
        payload.property = Some("vip".to_string());
        assert!(payload.into_document().is_err());
    }

    #[test]
    fn test_patched_image_name_extraction() {
        let update = UpdateExpertImage {
            image_name: Some("renamed".to_string()),
            ..Default::default()
        };
        let patch = update.into_patch().unwrap();
        assert_eq!(UpdateExpertImage::patched_image_name(&patch), Some("renamed"));

        let update = UpdateExpertImage {
            subheading: Some(true),
            ..Default::default()
        };
        let patch = update.into_patch().unwrap();
        assert_eq!(UpdateExpertImage::patched_image_name(&patch), None);
    }
}
