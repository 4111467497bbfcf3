use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Stored visa rule joining a passport to a destination country.
#[derive(Debug, Deserialize, Serialize)]
pub struct VisaRule {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub origin_passport_id: ObjectId,
    pub destination_country_id: ObjectId,
    #[serde(rename = "type")]
    pub visa_type: String,
    pub duration: Option<i32>,
    pub notes: Option<String>,
}

/// Normalized visa facts handed to clients and to the trip planner.
/// `visa_type` is always present; an unresolvable pair gets "unknown".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VisaInfo {
    #[serde(rename = "type")]
    pub visa_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VisaInfo {
    pub fn unknown() -> Self {
        VisaInfo {
            visa_type: "unknown".to_string(),
            duration: None,
            notes: None,
        }
    }

    /// One-line advisory built from whichever fields are known, e.g.
    /// "Visa type: visa-free. Duration: up to 90 days."
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Visa type: {}.", self.visa_type)];
        if let Some(duration) = self.duration {
            parts.push(format!("Duration: up to {} days.", duration));
        }
        if let Some(notes) = &self.notes {
            parts.push(format!("Notes: {}", notes));
        }
        parts.join(" ")
    }
}
