//! # HTTP API Module
//!
//! Routes, validation glue, response envelope, and error translation for
//! the CRUD surface. One route module per record kind, all sharing a single
//! document store.

pub mod banner_routes;
pub mod config;
pub mod dashboard_routes;
pub mod docs_routes;
pub mod errors;
pub mod expert_image_routes;
pub mod feedback_routes;
pub mod poster_routes;
pub mod response;
pub mod server;
pub mod template_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorBody};
pub use response::ApiResponse;
pub use server::HttpServer;

use crate::models::{banner, dashboard_image, expert_image, feedback, poster, template};
use crate::store::{CollectionSpec, DocumentStore};

/// State shared across handlers: the document store with every record
/// kind's collection registered.
pub struct AppState {
    pub store: DocumentStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: DocumentStore::new(&[
                CollectionSpec {
                    name: dashboard_image::COLLECTION,
                    unique_field: None,
                },
                CollectionSpec {
                    name: expert_image::COLLECTION,
                    unique_field: Some(expert_image::UNIQUE_FIELD),
                },
                CollectionSpec {
                    name: poster::COLLECTION,
                    unique_field: None,
                },
                CollectionSpec {
                    name: banner::COLLECTION,
                    unique_field: None,
                },
                CollectionSpec {
                    name: feedback::COLLECTION,
                    unique_field: None,
                },
                CollectionSpec {
                    name: template::COLLECTION,
                    unique_field: None,
                },
            ]),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
