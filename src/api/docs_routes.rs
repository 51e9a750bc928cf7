//! API Documentation Route
//!
//! Serves a machine-readable catalog of every endpoint at `/api-docs`,
//! built from the same field declarations the validators use.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{banner, dashboard_image, expert_image, feedback, poster, template};
use crate::models::FieldSpec;

/// One entry in the endpoint catalog.
#[derive(Debug, Clone, Copy, Serialize)]
struct EndpointDoc {
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'static [FieldSpec]>,
}

const ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        method: "POST",
        path: "/api/ra-dashboard/image",
        description: "Create a dashboard image",
        fields: Some(dashboard_image::FIELDS),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/ra-dashboard/images",
        description: "List all dashboard images",
        fields: None,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/ra-dashboard/images/{expertId}",
        description: "List dashboard images for one expert (404 when none)",
        fields: None,
    },
    EndpointDoc {
        method: "PATCH",
        path: "/api/ra-dashboard/image/{id}",
        description: "Partially update a dashboard image",
        fields: Some(dashboard_image::FIELDS),
    },
    EndpointDoc {
        method: "DELETE",
        path: "/api/ra-dashboard/image/{id}",
        description: "Delete a dashboard image",
        fields: None,
    },
    EndpointDoc {
        method: "POST",
        path: "/api/expert/image",
        description: "Create an expert image (imageName is unique)",
        fields: Some(expert_image::FIELDS),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/expert/images",
        description: "List all expert images",
        fields: None,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/expert/images/{expertId}",
        description: "List expert images for one expert (404 when none)",
        fields: None,
    },
    EndpointDoc {
        method: "PATCH",
        path: "/api/expert/image/{id}",
        description: "Partially update an expert image",
        fields: Some(expert_image::FIELDS),
    },
    EndpointDoc {
        method: "DELETE",
        path: "/api/expert/image/{id}",
        description: "Delete an expert image",
        fields: None,
    },
    EndpointDoc {
        method: "POST",
        path: "/api/admin/poster",
        description: "Create an admin poster",
        fields: Some(poster::FIELDS),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/admin/posters",
        description: "List all admin posters",
        fields: None,
    },
    EndpointDoc {
        method: "PATCH",
        path: "/api/admin/poster/{id}",
        description: "Partially update an admin poster",
        fields: Some(poster::FIELDS),
    },
    EndpointDoc {
        method: "DELETE",
        path: "/api/admin/poster/{id}",
        description: "Delete an admin poster",
        fields: None,
    },
    EndpointDoc {
        method: "POST",
        path: "/api/banner",
        description: "Create a banner",
        fields: Some(banner::FIELDS),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/banner",
        description: "List all banners",
        fields: None,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/banner/{id}",
        description: "Fetch one banner (id must be 24-hex)",
        fields: None,
    },
    EndpointDoc {
        method: "DELETE",
        path: "/api/banner/{id}",
        description: "Delete a banner (id must be 24-hex)",
        fields: None,
    },
    EndpointDoc {
        method: "POST",
        path: "/api/feedback",
        description: "Submit feedback",
        fields: Some(feedback::FIELDS),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/feedback",
        description: "List all feedback",
        fields: None,
    },
    EndpointDoc {
        method: "POST",
        path: "/api/template",
        description: "Create a message template",
        fields: Some(template::FIELDS),
    },
    EndpointDoc {
        method: "GET",
        path: "/api/template",
        description: "List all message templates",
        fields: None,
    },
    EndpointDoc {
        method: "GET",
        path: "/api/template/{raid}",
        description: "List message templates for one raid (404 when none)",
        fields: None,
    },
    EndpointDoc {
        method: "PATCH",
        path: "/api/template/{id}",
        description: "Partially update a message template",
        fields: Some(template::FIELDS),
    },
    EndpointDoc {
        method: "DELETE",
        path: "/api/template/{id}",
        description: "Delete a message template",
        fields: None,
    },
];

pub fn docs_routes() -> Router {
    Router::new().route("/api-docs", get(api_docs))
}

async fn api_docs() -> Json<Value> {
    Json(json!({
        "service": "ra-dashboard-api",
        "endpoints": ENDPOINTS,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_mounted_path() {
        // One entry per route/method pair wired in the route modules.
        assert_eq!(ENDPOINTS.len(), 25);
    }

    #[test]
    fn test_catalog_serializes_with_field_constraints() {
        let value = serde_json::to_value(ENDPOINTS).unwrap();
        let banner_create = value
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["method"] == "POST" && e["path"] == "/api/banner")
            .unwrap();
        let fields = banner_create["fields"].as_array().unwrap();
        let type_field = fields.iter().find(|f| f["name"] == "type").unwrap();
        assert_eq!(
            type_field["allowed"],
            serde_json::json!(["home", "webinar", "course"])
        );
    }
}
