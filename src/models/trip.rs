use serde::{Deserialize, Serialize};

/// Input for the trip planner. `days` falls back to a default when the
/// client omits it or sends zero.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRequest {
    pub from: String,
    pub to: String,
    pub budget: f64,
    pub days: Option<u32>,
}

/// The full itinerary contract. The same shape is required from the
/// generative model, so deserializing it doubles as schema validation:
/// output missing any non-optional field is rejected and the caller
/// falls back to mock data.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub from: String,
    pub destination: String,
    pub total_cost: f64,
    pub currency: String,
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa_warning: Option<String>,
    #[serde(default)]
    pub hotels: Vec<HotelSuggestion>,
    #[serde(default)]
    pub itinerary: Vec<DayPlan>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSuggestion {
    pub name: String,
    pub category: String,
    pub price_per_night: f64,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub activities: Vec<PlannedActivity>,
    #[serde(default)]
    pub meals: Vec<PlannedMeal>,
    pub total_day_cost: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlannedActivity {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub cost: f64,
    pub duration: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlannedMeal {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub restaurant: String,
    pub cost: f64,
}

/// Route optimization result. Distance stays a display string until a
/// real distance model lands.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    pub optimized_order: Vec<String>,
    pub total_distance: String,
    pub estimated_cost: i64,
}

/// Hotel list for a country, from the model or from mock data.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HotelsResponse {
    pub country: String,
    pub hotels: Vec<HotelListing>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListing {
    pub name: String,
    pub rating: f64,
    pub price_per_night: f64,
    pub category: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub image: Option<String>,
}
