use futures::join;

use crate::models::trip::{
    DayPlan, HotelSuggestion, PlannedActivity, PlannedMeal, RouteEstimate, TripPlan, TripRequest,
};
use crate::models::visa::VisaInfo;
use crate::services::country_service::CountryService;
use crate::services::gemini_service::{self, GeminiClient};
use crate::services::passport_service::PassportService;

const DEFAULT_TRIP_DAYS: u32 = 5;

/// A country reference recovered from free-form user input. Either side
/// can be missing: a bare ISO code with no stored record keeps the code
/// but has no name, and an unrecognized name stays a name without a
/// code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedCountry {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// Where the visa facts for a plan came from, in preference order:
/// external provider first, stored rules second.
#[derive(Debug, Clone, PartialEq)]
pub enum VisaSource {
    External(VisaInfo),
    Stored(VisaInfo),
    Unavailable,
}

impl VisaSource {
    pub fn info(&self) -> Option<&VisaInfo> {
        match self {
            VisaSource::External(info) | VisaSource::Stored(info) => Some(info),
            VisaSource::Unavailable => None,
        }
    }
}

/// Maps a visa rule type onto "must arrange a visa before or at travel".
/// Free movement means no; required, banned, electronic and on-arrival
/// visas all mean yes; anything unrecognized stays undecided so callers
/// choose their own default.
pub fn visa_rule_to_bool(visa_type: &str) -> Option<bool> {
    let normalized = visa_type.to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    if normalized.contains("free") {
        return Some(false);
    }
    if normalized.contains("ban") || normalized.contains("required") {
        return Some(true);
    }
    if normalized.contains("evisa") || normalized.contains("e-visa") {
        return Some(true);
    }
    if normalized.contains("arrival") || normalized.contains("voa") {
        return Some(true);
    }
    None
}

fn looks_like_iso_code(input: &str) -> bool {
    input.len() == 2 && input.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Builds structured trip plans. Country resolution and visa rules come
/// from the country and passport services; itinerary content comes from
/// the model when one is configured and from deterministic mock data
/// otherwise.
#[derive(Clone)]
pub struct TripPlanner {
    countries: CountryService,
    passports: PassportService,
    gemini: Option<GeminiClient>,
}

impl TripPlanner {
    pub fn new(
        countries: CountryService,
        passports: PassportService,
        gemini: Option<GeminiClient>,
    ) -> Self {
        Self {
            countries,
            passports,
            gemini,
        }
    }

    /// Full planning pipeline: resolve both endpoints, determine visa
    /// requirements, then generate. Every model-tier failure degrades to
    /// the mock plan; only a database failure while reading stored visa
    /// rules surfaces as an error.
    pub async fn generate_trip_plan(
        &self,
        request: &TripRequest,
    ) -> Result<TripPlan, mongodb::error::Error> {
        let days = match request.days {
            Some(days) if days > 0 => days,
            _ => DEFAULT_TRIP_DAYS,
        };

        let (from, to) = join!(
            self.resolve_country(&request.from),
            self.resolve_country(&request.to),
        );

        let from_name = from.name.clone().unwrap_or_else(|| request.from.clone());
        let to_name = to.name.clone().unwrap_or_else(|| request.to.clone());

        let visa = match (&from.code, &to.code) {
            (Some(from_code), Some(to_code)) => {
                println!("Checking visa requirements: {} -> {}", from_code, to_code);
                self.determine_visa(from_code, to_code).await?
            }
            _ => VisaSource::Unavailable,
        };
        let visa_info = visa.info();

        let gemini = match &self.gemini {
            Some(gemini) => gemini,
            None => {
                println!("No generative model configured, using mock trip plan");
                return Ok(mock_trip_plan(
                    &from_name,
                    &to_name,
                    request.budget,
                    days,
                    visa_info,
                ));
            }
        };

        match self
            .plan_with_model(gemini, &from_name, &to_name, request.budget, days, visa_info)
            .await
        {
            Ok(plan) => Ok(plan),
            Err(err) => {
                eprintln!("Model trip planning failed, using mock plan: {}", err);
                Ok(mock_trip_plan(
                    &from_name,
                    &to_name,
                    request.budget,
                    days,
                    visa_info,
                ))
            }
        }
    }

    /// Accepts an ISO alpha-2 code or a display name. Lookup failures
    /// are tolerated by keeping the raw input as a name, so planning can
    /// continue without visa data.
    pub async fn resolve_country(&self, input: &str) -> ResolvedCountry {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ResolvedCountry::default();
        }

        if looks_like_iso_code(trimmed) {
            let code = trimmed.to_uppercase();
            match self.countries.get_country_by_code(&code).await {
                Ok(Some(country)) => ResolvedCountry {
                    code: Some(country.code),
                    name: Some(country.name),
                },
                Ok(None) => ResolvedCountry {
                    code: Some(code),
                    name: None,
                },
                Err(err) => {
                    eprintln!("Failed to resolve country {:?}: {}", input, err);
                    ResolvedCountry {
                        code: None,
                        name: Some(trimmed.to_string()),
                    }
                }
            }
        } else {
            match self.countries.get_country_by_name(trimmed).await {
                Ok(Some(country)) => ResolvedCountry {
                    code: Some(country.code),
                    name: Some(country.name),
                },
                Ok(None) => ResolvedCountry {
                    code: None,
                    name: Some(trimmed.to_string()),
                },
                Err(err) => {
                    eprintln!("Failed to resolve country {:?}: {}", input, err);
                    ResolvedCountry {
                        code: None,
                        name: Some(trimmed.to_string()),
                    }
                }
            }
        }
    }

    /// External check first, stored rule second. A stored rule only
    /// counts when it actually knows something, so `{type: "unknown"}`
    /// becomes `Unavailable`.
    async fn determine_visa(
        &self,
        from_code: &str,
        to_code: &str,
    ) -> Result<VisaSource, mongodb::error::Error> {
        if let Some(info) = self
            .passports
            .check_visa_requirements(from_code, to_code)
            .await
        {
            return Ok(VisaSource::External(info));
        }

        let rule = self.countries.get_visa_rule(from_code, to_code).await?;
        if rule.visa_type != "unknown" {
            Ok(VisaSource::Stored(rule))
        } else {
            Ok(VisaSource::Unavailable)
        }
    }

    async fn plan_with_model(
        &self,
        gemini: &GeminiClient,
        from: &str,
        to: &str,
        budget: f64,
        days: u32,
        visa_info: Option<&VisaInfo>,
    ) -> Result<TripPlan, Box<dyn std::error::Error>> {
        let prompt = build_trip_prompt(from, to, budget, days, visa_info);
        let text = gemini.generate_json(&prompt).await?;
        let mut plan = parse_trip_plan(&text)?;
        overlay_visa_info(&mut plan, visa_info);
        Ok(plan)
    }

    /// Route optimization is a placeholder until a distance model lands:
    /// a stable order plus flat estimates.
    pub fn optimize_route(&self, destinations: Vec<String>) -> RouteEstimate {
        let mut optimized_order = destinations;
        optimized_order.sort();

        RouteEstimate {
            optimized_order,
            total_distance: "12000 km".to_string(),
            estimated_cost: 3000,
        }
    }
}

fn build_trip_prompt(
    from: &str,
    to: &str,
    budget: f64,
    days: u32,
    visa_info: Option<&VisaInfo>,
) -> String {
    let visa_context = match visa_info {
        Some(info) => serde_json::to_string(info)
            .unwrap_or_else(|_| "Not available (provide general advice)".to_string()),
        None => "Not available (provide general advice)".to_string(),
    };

    format!(
        "You are an expert travel guide AI. Create a detailed, realistic travel itinerary from {from} to {to} \
with a budget of {budget} USD for {days} days.\n\n\
Context:\n\
Real Visa Information: {visa_context}\n\n\
Requirements:\n\
- Use REAL place names (hotels, restaurants, attractions, landmarks)\n\
- Include hotel recommendations with approximate costs\n\
- Name actual tourist attractions and activities in {to}\n\
- Include real restaurants and cuisine experiences\n\
- Provide accurate visa information based on the real visa info above\n\
- Distribute the budget realistically across all {days} days\n\
- Include transportation costs (flights, local transport)\n\n\
Output:\n\
Return ONLY a strict JSON object with these keys (no markdown, no comments):\n\
- from: string\n\
- destination: string\n\
- totalCost: number\n\
- currency: \"USD\"\n\
- days: number\n\
- visaRequired: boolean\n\
- visaWarning: string\n\
- hotels: array of {{ name, category, pricePerNight, location }}\n\
- itinerary: array of {{ day, title, activities: [{{ time, activity, location, cost, duration }}], \
meals: [{{ type, restaurant, cost }}], totalDayCost }}"
    )
}

/// Defensive parse of model output: strip fences and wrapping prose,
/// repair trailing commas, then require the full plan schema.
pub fn parse_trip_plan(text: &str) -> Result<TripPlan, serde_json::Error> {
    let json = gemini_service::strip_trailing_commas(&gemini_service::extract_json_object(text));

    match serde_json::from_str(&json) {
        Ok(plan) => Ok(plan),
        Err(err) => {
            eprintln!("Model returned an unparseable trip plan: {}", err);
            eprintln!("Raw model output: {}", text);
            Err(err)
        }
    }
}

/// Stamps authoritative visa facts onto a parsed plan. Model output only
/// wins where it already said something.
fn overlay_visa_info(plan: &mut TripPlan, visa_info: Option<&VisaInfo>) {
    let info = match visa_info {
        Some(info) => info,
        None => return,
    };

    if plan.visa_required.is_none() {
        if let Some(required) = visa_rule_to_bool(&info.visa_type) {
            plan.visa_required = Some(required);
        }
    }

    let missing_warning = plan
        .visa_warning
        .as_deref()
        .map_or(true, |warning| warning.trim().is_empty());
    if missing_warning {
        plan.visa_warning = Some(info.summary());
    }
}

/// Deterministic itinerary used whenever the model tier is unavailable.
/// Line-item costs are rounded shares of the per-day budget and are
/// display approximations; `total_day_cost` stays the exact floor.
pub fn mock_trip_plan(
    from: &str,
    to: &str,
    budget: f64,
    days: u32,
    visa_info: Option<&VisaInfo>,
) -> TripPlan {
    let cost_per_day = (budget / days as f64).floor();

    let visa_required = visa_info
        .and_then(|info| visa_rule_to_bool(&info.visa_type))
        .unwrap_or(true);

    let visa_warning = match visa_info {
        Some(info) => info.summary(),
        None => "Mock Data: Please check visa requirements with the embassy.".to_string(),
    };

    let itinerary = (1..=days)
        .map(|day| {
            let title = if day == 1 {
                format!("Arrival in {}", to)
            } else if day == days {
                "Departure Day".to_string()
            } else {
                format!("Exploring {}", to)
            };

            let morning = if day == 1 {
                PlannedActivity {
                    time: "9:00 AM".to_string(),
                    activity: "Hotel check-in and orientation".to_string(),
                    location: format!("{} Plaza Hotel", to),
                    cost: (cost_per_day * 0.3).round(),
                    duration: "3 hours".to_string(),
                }
            } else {
                PlannedActivity {
                    time: "9:00 AM".to_string(),
                    activity: "Visit local attractions".to_string(),
                    location: format!("{} City Center", to),
                    cost: (cost_per_day * 0.3).round(),
                    duration: "3 hours".to_string(),
                }
            };

            let afternoon = PlannedActivity {
                time: "2:00 PM".to_string(),
                activity: if day == days {
                    "Departure preparation".to_string()
                } else {
                    "Cultural experience".to_string()
                },
                location: "Various locations".to_string(),
                cost: (cost_per_day * 0.2).round(),
                duration: "4 hours".to_string(),
            };

            DayPlan {
                day,
                title,
                activities: vec![morning, afternoon],
                meals: vec![
                    PlannedMeal {
                        meal_type: "Breakfast".to_string(),
                        restaurant: "Hotel Restaurant".to_string(),
                        cost: (cost_per_day * 0.1).round(),
                    },
                    PlannedMeal {
                        meal_type: "Lunch".to_string(),
                        restaurant: "Local Cuisine Restaurant".to_string(),
                        cost: (cost_per_day * 0.15).round(),
                    },
                    PlannedMeal {
                        meal_type: "Dinner".to_string(),
                        restaurant: "Traditional Restaurant".to_string(),
                        cost: (cost_per_day * 0.2).round(),
                    },
                ],
                total_day_cost: cost_per_day,
            }
        })
        .collect();

    TripPlan {
        from: from.to_string(),
        destination: to.to_string(),
        total_cost: budget,
        currency: "USD".to_string(),
        days,
        visa_required: Some(visa_required),
        visa_warning: Some(visa_warning),
        hotels: vec![HotelSuggestion {
            name: format!("{} Plaza Hotel", to),
            category: "Mid-range".to_string(),
            price_per_night: (cost_per_day * 0.35).round(),
            location: "City Center".to_string(),
        }],
        itinerary,
    }
}
