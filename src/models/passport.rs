use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored passport strength record, keyed by the issuing country's code.
#[derive(Debug, Deserialize, Serialize)]
pub struct Passport {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub country_code: String,
    pub rank: i32,
    pub mobility_score: i32,
}

/// One row of a passport ranking, whether it came from the external
/// provider or from the static fallback table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassportRanking {
    pub country_code: String,
    pub rank: i32,
    pub mobility_score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
}
