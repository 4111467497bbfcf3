use crate::models::passport::PassportRanking;
use crate::models::visa::VisaInfo;
use crate::services::travel_buddy::TravelBuddyProvider;

/// Static ranking table used whenever the external provider is missing
/// or unreachable. (code, rank, mobility score, name.)
const FALLBACK_PASSPORTS: &[(&str, i32, i32, &str)] = &[
    // Asia
    ("JP", 1, 193, "Japan"),
    ("SG", 1, 193, "Singapore"),
    ("KR", 2, 192, "South Korea"),
    ("AE", 15, 178, "United Arab Emirates"),
    ("IL", 22, 159, "Israel"),
    ("TR", 52, 110, "Turkey"),
    ("QA", 55, 100, "Qatar"),
    ("SA", 61, 82, "Saudi Arabia"),
    ("TH", 64, 79, "Thailand"),
    ("CN", 66, 80, "China"),
    ("ID", 71, 71, "Indonesia"),
    ("PH", 74, 66, "Philippines"),
    ("IN", 80, 57, "India"),
    ("VN", 87, 55, "Vietnam"),
    ("PK", 100, 32, "Pakistan"),
    ("BD", 96, 40, "Bangladesh"),
    ("MY", 11, 180, "Malaysia"),
    // Europe
    ("DE", 2, 192, "Germany"),
    ("ES", 3, 191, "Spain"),
    ("IT", 3, 191, "Italy"),
    ("FR", 3, 191, "France"),
    ("GB", 4, 190, "United Kingdom"),
    ("NL", 4, 189, "Netherlands"),
    ("SE", 4, 189, "Sweden"),
    ("DK", 4, 189, "Denmark"),
    ("AT", 4, 189, "Austria"),
    ("PT", 5, 188, "Portugal"),
    ("IE", 5, 188, "Ireland"),
    ("BE", 6, 187, "Belgium"),
    ("NO", 6, 187, "Norway"),
    ("CH", 6, 187, "Switzerland"),
    ("CZ", 6, 187, "Czech Republic"),
    ("FI", 3, 191, "Finland"),
    ("PL", 8, 185, "Poland"),
    ("HU", 8, 185, "Hungary"),
    ("GR", 7, 186, "Greece"),
    ("RO", 13, 177, "Romania"),
    // Americas
    ("US", 7, 187, "United States"),
    ("CA", 7, 186, "Canada"),
    ("CL", 15, 175, "Chile"),
    ("AR", 18, 170, "Argentina"),
    ("BR", 19, 169, "Brazil"),
    ("MX", 23, 160, "Mexico"),
    ("UY", 26, 154, "Uruguay"),
    ("CO", 37, 133, "Colombia"),
    ("VE", 42, 125, "Venezuela"),
    ("PE", 34, 138, "Peru"),
    // Oceania
    ("NZ", 5, 188, "New Zealand"),
    ("AU", 6, 187, "Australia"),
    // Africa
    ("ZA", 51, 106, "South Africa"),
    ("MA", 73, 67, "Morocco"),
    ("TN", 70, 71, "Tunisia"),
    ("GH", 76, 64, "Ghana"),
    ("KE", 67, 76, "Kenya"),
    ("EG", 83, 53, "Egypt"),
    ("ET", 88, 46, "Ethiopia"),
    ("NG", 91, 45, "Nigeria"),
];

/// The fallback table sorted by rank, ties keeping table order.
pub fn fallback_rankings() -> Vec<PassportRanking> {
    let mut rankings: Vec<PassportRanking> = FALLBACK_PASSPORTS
        .iter()
        .map(|&(code, rank, score, name)| PassportRanking {
            country_code: code.to_string(),
            rank,
            mobility_score: score,
            country_name: Some(name.to_string()),
        })
        .collect();

    rankings.sort_by_key(|ranking| ranking.rank);
    rankings
}

/// Passport strength lookups. The external provider is optional: when it
/// is unconfigured or failing, every call degrades to the static table
/// (for rankings) or to "no data" (for visa checks).
#[derive(Clone)]
pub struct PassportService {
    provider: Option<TravelBuddyProvider>,
}

impl PassportService {
    pub fn new(provider: Option<TravelBuddyProvider>) -> Self {
        Self { provider }
    }

    /// Ranked list of passports, strongest first. Never fails.
    pub async fn get_passport_ranking(&self) -> Vec<PassportRanking> {
        if let Some(provider) = &self.provider {
            match provider.rank_passports().await {
                Ok(rankings) => {
                    println!("Fetched passport rankings from TravelBuddy: {}", rankings.len());
                    return rankings;
                }
                Err(err) => {
                    eprintln!("Failed to fetch from TravelBuddy, using fallback data: {}", err);
                }
            }
        }

        println!("Using fallback passport data");
        fallback_rankings()
    }

    /// Single passport by code, case-insensitive, from whichever ranking
    /// source is currently answering.
    pub async fn get_passport_by_code(&self, code: &str) -> Option<PassportRanking> {
        let rankings = self.get_passport_ranking().await;
        rankings
            .into_iter()
            .find(|passport| passport.country_code.eq_ignore_ascii_case(code))
    }

    /// External visa pre-check. `None` covers every failure mode, so
    /// callers treat it as "no external data" and fall back to stored
    /// rules.
    pub async fn check_visa_requirements(
        &self,
        passport_code: &str,
        destination_code: &str,
    ) -> Option<VisaInfo> {
        let provider = self.provider.as_ref()?;

        match provider.check_visa(passport_code, destination_code).await {
            Ok(info) => info,
            Err(err) => {
                eprintln!("Failed to check visa requirements: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_rankings_sorted_by_rank() {
        let rankings = fallback_rankings();
        assert_eq!(rankings.len(), 57);
        assert!(rankings.windows(2).all(|pair| pair[0].rank <= pair[1].rank));
        assert_eq!(rankings[0].rank, 1);
    }

    #[test]
    fn test_fallback_rankings_keep_ties_contiguous() {
        let rankings = fallback_rankings();
        let japan = rankings
            .iter()
            .position(|r| r.country_code == "JP")
            .unwrap();
        let singapore = rankings
            .iter()
            .position(|r| r.country_code == "SG")
            .unwrap();
        assert_eq!(singapore, japan + 1);
    }

    #[test]
    fn test_fallback_covers_known_passports() {
        let rankings = fallback_rankings();
        let morocco = rankings
            .iter()
            .find(|r| r.country_code == "MA")
            .expect("Morocco should be in the fallback table");
        assert_eq!(morocco.rank, 73);
        assert_eq!(morocco.mobility_score, 67);
        assert_eq!(morocco.country_name.as_deref(), Some("Morocco"));
    }
}
