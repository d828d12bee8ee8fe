use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ErrorBody {
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Not Found")]
    pub error: String,
    pub message: String,
}

/// Service metadata returned from the root URL.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub paths: Vec<String>,
    pub status: String,
}

impl ServiceInfo {
    pub fn new(paths: Vec<String>) -> Self {
        Self {
            name: "Orders REST API Service".to_string(),
            version: "1.0".to_string(),
            paths,
            status: "success".to_string(),
        }
    }
}
