use futures::{join, TryStreamExt};
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use mongodb::{Client, Collection};
use std::sync::Arc;

use crate::models::country::{Country, CountrySummary};
use crate::models::passport::Passport;
use crate::models::visa::{VisaInfo, VisaRule};

/// Reference data lookups backed by MongoDB: the country catalog and the
/// stored visa rules.
#[derive(Clone)]
pub struct CountryService {
    client: Arc<Client>,
}

impl CountryService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// All countries as (code, name) pairs, sorted by name.
    pub async fn list_countries(&self) -> Result<Vec<CountrySummary>, mongodb::error::Error> {
        let collection: Collection<Country> = self.client.database("Atlas").collection("Countries");

        let mut options = FindOptions::default();
        options.sort = Some(doc! { "name": 1 });

        let cursor = collection.find(doc! {}).with_options(options).await?;
        let countries: Vec<Country> = cursor.try_collect().await?;

        Ok(countries
            .into_iter()
            .map(|country| CountrySummary {
                code: country.code,
                name: country.name,
            })
            .collect())
    }

    /// Exact match on the ISO alpha-2 code, normalized to uppercase.
    pub async fn get_country_by_code(
        &self,
        code: &str,
    ) -> Result<Option<Country>, mongodb::error::Error> {
        let collection: Collection<Country> = self.client.database("Atlas").collection("Countries");
        collection
            .find_one(doc! { "code": code.to_uppercase() })
            .await
    }

    /// Case-insensitive exact match on the display name. The name is
    /// anchored and escaped, so "Japan" matches and "Jap" does not.
    pub async fn get_country_by_name(
        &self,
        name: &str,
    ) -> Result<Option<Country>, mongodb::error::Error> {
        let collection: Collection<Country> = self.client.database("Atlas").collection("Countries");
        let filter = doc! {
            "name": {
                "$regex": format!("^{}$", regex::escape(name)),
                "$options": "i",
            }
        };
        collection.find_one(filter).await
    }

    /// Stored visa rule for a passport/destination pair. Missing
    /// passports, countries or rules all resolve to `{type: "unknown"}`;
    /// only a real database failure is an error.
    pub async fn get_visa_rule(
        &self,
        passport_code: &str,
        country_code: &str,
    ) -> Result<VisaInfo, mongodb::error::Error> {
        let passports: Collection<Passport> = self.client.database("Atlas").collection("Passports");
        let countries: Collection<Country> = self.client.database("Atlas").collection("Countries");

        // find_one returns an action builder, not a future, so each
        // lookup gets its own async block before the join.
        let (passport, country) = join!(
            async {
                passports
                    .find_one(doc! { "country_code": passport_code.to_uppercase() })
                    .await
            },
            async {
                countries
                    .find_one(doc! { "code": country_code.to_uppercase() })
                    .await
            },
        );

        let (origin_id, destination_id) = match (
            passport?.and_then(|p| p.id),
            country?.and_then(|c| c.id),
        ) {
            (Some(origin), Some(destination)) => (origin, destination),
            _ => return Ok(VisaInfo::unknown()),
        };

        let rules: Collection<VisaRule> = self.client.database("Atlas").collection("VisaRules");
        let rule = rules
            .find_one(doc! {
                "origin_passport_id": origin_id,
                "destination_country_id": destination_id,
            })
            .await?;

        Ok(match rule {
            Some(rule) => VisaInfo {
                visa_type: rule.visa_type,
                duration: rule.duration,
                notes: rule.notes,
            },
            None => VisaInfo::unknown(),
        })
    }
}
