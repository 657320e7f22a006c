//! Wire types shared by the catalog service and the catalog renderer

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A product as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable, unique product identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Short description shown under the name
    pub description: String,
    /// Relative asset path or absolute URL of the product image
    pub image_url: String,
}

/// JSON body returned alongside non-success responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
