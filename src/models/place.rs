// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines all serialization/deserialization models for API and storage

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::Validate;

/// Name of the collection holding place documents
pub const PLACE_COLLECTION: &str = "place";

pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// A tourist point of interest
/// DOCUMENTATION: Used both as the POST /places body and as the stored
/// document shape. Absent optional fields are not written to storage, so a
/// stored document holds exactly the submitted fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Place name (required)
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Federal state, e.g. "Bavaria"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form category: castle, museum, nature, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Query parameters for GET /places
/// DOCUMENTATION: Every filter is optional; an explicitly empty value is
/// still a filter
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListQuery {
    /// Substring search across name, city, state, category and tags
    pub q: Option<String>,

    pub category: Option<String>,

    pub state: Option<String>,

    pub city: Option<String>,

    /// Maximum number of results (1-500, default 100)
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn effective_limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

/// A listed place with its public identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceItem {
    pub id: String,

    #[serde(flatten)]
    pub place: Place,
}

/// Response body for GET /places
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<PlaceItem>,
    pub count: usize,
}

/// Response body for POST /places
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Response body for POST /places/seed
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeedResponse {
    Seeded {
        seeded: bool,
        count: usize,
        ids: Vec<String>,
    },
    AlreadySeeded {
        seeded: bool,
        message: String,
        count: i64,
    },
}

impl SeedResponse {
    pub fn seeded(ids: Vec<String>) -> Self {
        SeedResponse::Seeded {
            seeded: true,
            count: ids.len(),
            ids,
        }
    }

    pub fn already_seeded(count: i64) -> Self {
        SeedResponse::AlreadySeeded {
            seeded: false,
            message: "Places already exist".to_string(),
            count,
        }
    }
}

/// Static field-type description served by GET /schema
pub fn place_schema() -> Value {
    json!({
        "place": {
            "fields": {
                "name": "string",
                "city": "string?",
                "state": "string?",
                "description": "string?",
                "category": "string?",
                "tags": "string[]?",
                "latitude": "float?",
                "longitude": "float?",
                "website": "string?"
            }
        }
    })
}
