use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A destination country. `code` is the ISO 3166-1 alpha-2 code and acts
/// as the natural key; the ObjectId only matters for visa rule joins, so
/// it never leaves the API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Country {
    #[serde(rename = "_id", skip_serializing, default)]
    pub id: Option<ObjectId>,
    pub code: String,
    pub name: String,
    pub region: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountrySummary {
    pub code: String,
    pub name: String,
}
