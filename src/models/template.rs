//! # Message Templates
//!
//! Messaging templates grouped by the owner tag `raid`. This kind carries
//! no required-field constraints: creates accept any subset of the declared
//! fields. That laxity is contract, not an omission.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{reject_empty_patch, FieldSpec};
use crate::api::errors::ApiResult;

pub const COLLECTION: &str = "templates";

/// Owner tag used for filtered listings.
pub const OWNER_FIELD: &str = "raid";

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("raid", "string"),
    FieldSpec::optional("templatename", "string"),
    FieldSpec::optional("headingcontent", "string"),
    FieldSpec::optional("footercontent", "string"),
    FieldSpec::optional("type", "string"),
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTemplate {
    pub raid: Option<String>,
    pub templatename: Option<String>,
    pub headingcontent: Option<String>,
    pub footercontent: Option<String>,
    #[serde(rename = "type")]
    pub template_type: Option<String>,
}

impl CreateTemplate {
    /// Builds the document to insert; nothing is required.
    pub fn into_document(self) -> Map<String, Value> {
        fields_of(
            self.raid,
            self.templatename,
            self.headingcontent,
            self.footercontent,
            self.template_type,
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTemplate {
    pub raid: Option<String>,
    pub templatename: Option<String>,
    pub headingcontent: Option<String>,
    pub footercontent: Option<String>,
    #[serde(rename = "type")]
    pub template_type: Option<String>,
}

impl UpdateTemplate {
    /// Builds the merge patch; an empty field set is still rejected.
    pub fn into_patch(self) -> ApiResult<Map<String, Value>> {
        let patch = fields_of(
            self.raid,
            self.templatename,
            self.headingcontent,
            self.footercontent,
            self.template_type,
        );
        reject_empty_patch(patch.is_empty())?;
        Ok(patch)
    }
}

fn fields_of(
    raid: Option<String>,
    templatename: Option<String>,
    headingcontent: Option<String>,
    footercontent: Option<String>,
    template_type: Option<String>,
) -> Map<String, Value> {
    let mut doc = Map::new();
    if let Some(raid) = raid {
        doc.insert("raid".to_string(), Value::String(raid));
    }
    if let Some(templatename) = templatename {
        doc.insert("templatename".to_string(), Value::String(templatename));
    }
    if let Some(headingcontent) = headingcontent {
        doc.insert("headingcontent".to_string(), Value::String(headingcontent));
    }
    if let Some(footercontent) = footercontent {
        doc.insert("footercontent".to_string(), Value::String(footercontent));
    }
    if let Some(template_type) = template_type {
        doc.insert("type".to_string(), Value::String(template_type));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_accepts_empty_payload() {
        let doc = CreateTemplate::default().into_document();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_create_keeps_supplied_subset() {
        let payload = CreateTemplate {
            raid: Some("ra-7".to_string()),
            templatename: Some("welcome".to_string()),
            ..Default::default()
        };
        let doc = payload.into_document();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["raid"], "ra-7");
    }

    #[test]
    fn test_update_still_rejects_empty_patch() {
        let err = UpdateTemplate::default().into_patch().unwrap_err();
        assert_eq!(err.message(), "No fields provided for update.");
    }

    #[test]
    fn test_update_patch_carries_supplied_fields() {
        let update = UpdateTemplate {
            footercontent: Some("regards".to_string()),
            ..Default::default()
        };
        let patch = update.into_patch().unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch["footercontent"], "regards");
    }
}
