//! Seeds MongoDB with the demo user, the reference passports, the world
//! country catalog, and the starter visa rules. Safe to run repeatedly:
//! every write is an upsert keyed by the natural identifier, so existing
//! documents are left untouched.

use mongodb::bson::{doc, Document};
use mongodb::options::UpdateOptions;
use mongodb::{Client, Collection};

use wanderpass_api::db::mongo::create_mongo_client;
use wanderpass_api::models::country::Country;
use wanderpass_api::models::passport::Passport;

const DEMO_EMAIL: &str = "test@example.com";
const DEMO_PASSWORD: &str = "password123";
const BCRYPT_COST: u32 = 10;

// (code, rank, mobility score)
const PASSPORTS: &[(&str, i32, i32)] = &[
    ("JP", 1, 193),
    ("SG", 1, 193),
    ("DE", 2, 192),
    ("US", 7, 186),
    ("MA", 73, 67),
    ("QA", 55, 100),
];

// (origin passport, destination country, rule type, duration in days)
const VISA_RULES: &[(&str, &str, &str, Option<i32>)] = &[
    ("US", "JP", "visa-free", Some(90)),
    ("US", "FR", "visa-free", Some(90)),
    ("US", "MA", "visa-free", Some(90)),
    ("US", "QA", "visa-free", Some(30)),
    ("MA", "JP", "visa-required", None),
    ("MA", "FR", "visa-required", None),
    ("MA", "QA", "visa-free", Some(30)),
];

const COUNTRIES: &[(&str, &str, &str, &str)] = &[
    // Africa
    ("DZ", "Algeria", "Africa", "North African country with Mediterranean coast."),
    ("AO", "Angola", "Africa", "Southern African country rich in oil."),
    ("BJ", "Benin", "Africa", "West African country with French colonial history."),
    ("BW", "Botswana", "Africa", "Landlocked Southern African nation known for wildlife."),
    ("BF", "Burkina Faso", "Africa", "Landlocked West African country."),
    ("BI", "Burundi", "Africa", "Small East African country in the Great Lakes region."),
    ("CM", "Cameroon", "Africa", "Central African country with diverse geography."),
    ("CV", "Cape Verde", "Africa", "Island nation off the coast of West Africa."),
    ("CF", "Central African Republic", "Africa", "Landlocked country in Central Africa."),
    ("TD", "Chad", "Africa", "Landlocked country in north-central Africa."),
    ("KM", "Comoros", "Africa", "Island nation in the Indian Ocean."),
    ("CG", "Congo", "Africa", "Central African country with Atlantic coast."),
    ("CD", "Democratic Republic of the Congo", "Africa", "Large Central African country."),
    ("DJ", "Djibouti", "Africa", "East African country on the Horn of Africa."),
    ("EG", "Egypt", "Africa", "North African country with ancient civilization."),
    ("GQ", "Equatorial Guinea", "Africa", "Central African country with Spanish colonial history."),
    ("ER", "Eritrea", "Africa", "East African country on the Red Sea."),
    ("SZ", "Eswatini", "Africa", "Landlocked country in Southern Africa."),
    ("ET", "Ethiopia", "Africa", "East African country with ancient history."),
    ("GA", "Gabon", "Africa", "Central African country on the equator."),
    ("GM", "Gambia", "Africa", "Small West African country surrounded by Senegal."),
    ("GH", "Ghana", "Africa", "West African country with rich cultural heritage."),
    ("GN", "Guinea", "Africa", "West African country with French colonial history."),
    ("GW", "Guinea-Bissau", "Africa", "West African country with Portuguese colonial history."),
    ("CI", "Ivory Coast", "Africa", "West African country with French colonial history."),
    ("KE", "Kenya", "Africa", "East African country known for safari tourism."),
    ("LS", "Lesotho", "Africa", "Mountainous landlocked country within South Africa."),
    ("LR", "Liberia", "Africa", "West African country founded by freed American slaves."),
    ("LY", "Libya", "Africa", "North African country with Mediterranean coast."),
    ("MG", "Madagascar", "Africa", "Island nation off the southeast coast of Africa."),
    ("MW", "Malawi", "Africa", "Landlocked country in Southeastern Africa."),
    ("ML", "Mali", "Africa", "Landlocked West African country."),
    ("MR", "Mauritania", "Africa", "Northwest African country with Sahel region."),
    ("MU", "Mauritius", "Africa", "Island nation in the Indian Ocean."),
    ("YT", "Mayotte", "Africa", "French overseas department in the Indian Ocean."),
    ("MA", "Morocco", "Africa", "North African country with Mediterranean and Atlantic coasts."),
    ("MZ", "Mozambique", "Africa", "Southeastern African country with Indian Ocean coast."),
    ("NA", "Namibia", "Africa", "Southwestern African country with Namib Desert."),
    ("NE", "Niger", "Africa", "Landlocked West African country."),
    ("NG", "Nigeria", "Africa", "West African country and most populous in Africa."),
    ("RE", "Réunion", "Africa", "French overseas department in the Indian Ocean."),
    ("RW", "Rwanda", "Africa", "Landlocked East African country in the Great Lakes region."),
    ("SH", "Saint Helena", "Africa", "British Overseas Territory in the South Atlantic Ocean."),
    ("ST", "São Tomé and Príncipe", "Africa", "Island nation in the Gulf of Guinea."),
    ("SN", "Senegal", "Africa", "West African country with French colonial history."),
    ("SC", "Seychelles", "Africa", "Island nation in the Indian Ocean."),
    ("SL", "Sierra Leone", "Africa", "West African country with British colonial history."),
    ("SO", "Somalia", "Africa", "East African country on the Horn of Africa."),
    ("ZA", "South Africa", "Africa", "Southernmost African country with diverse cultures."),
    ("SS", "South Sudan", "Africa", "Youngest country in the world, gained independence in 2011."),
    ("SD", "Sudan", "Africa", "Northeastern African country with Red Sea coast."),
    ("TZ", "Tanzania", "Africa", "East African country with Mount Kilimanjaro."),
    ("TG", "Togo", "Africa", "West African country with French colonial history."),
    ("TN", "Tunisia", "Africa", "North African country with Mediterranean coast."),
    ("UG", "Uganda", "Africa", "East African country in the Great Lakes region."),
    ("EH", "Western Sahara", "Africa", "Disputed territory in North Africa."),
    ("ZM", "Zambia", "Africa", "Landlocked country in Southern Africa."),
    ("ZW", "Zimbabwe", "Africa", "Landlocked country in Southern Africa."),
    // Antarctica
    ("AQ", "Antarctica", "Antarctica", "Continent at the South Pole."),
    // Asia
    ("AF", "Afghanistan", "Asia", "Landlocked country in Central Asia."),
    ("AM", "Armenia", "Asia", "Landlocked country in the South Caucasus region."),
    ("AZ", "Azerbaijan", "Asia", "Transcontinental country in the Caucasus region."),
    ("BH", "Bahrain", "Asia", "Island country in the Persian Gulf."),
    ("BD", "Bangladesh", "Asia", "South Asian country with rich deltaic landscape."),
    ("BT", "Bhutan", "Asia", "Landlocked Himalayan country between India and China."),
    ("BN", "Brunei", "Asia", "Sultanate on the island of Borneo."),
    ("KH", "Cambodia", "Asia", "Southeast Asian country with Angkor Wat."),
    ("CN", "China", "Asia", "East Asian country and most populous in the world."),
    ("CY", "Cyprus", "Asia", "Island country in the Eastern Mediterranean."),
    ("GE", "Georgia", "Asia", "Transcontinental country in the Caucasus region."),
    ("IN", "India", "Asia", "South Asian country and second most populous in the world."),
    ("ID", "Indonesia", "Asia", "Southeast Asian archipelago nation."),
    ("IR", "Iran", "Asia", "Middle Eastern country with Persian culture."),
    ("IQ", "Iraq", "Asia", "Middle Eastern country with ancient Mesopotamian history."),
    ("IL", "Israel", "Asia", "Middle Eastern country with significant religious history."),
    ("JP", "Japan", "Asia", "East Asian island nation."),
    ("JO", "Jordan", "Asia", "Middle Eastern country with ancient ruins."),
    ("KZ", "Kazakhstan", "Asia", "Central Asian country and largest landlocked nation."),
    ("KP", "North Korea", "Asia", "East Asian country separated from South Korea."),
    ("KR", "South Korea", "Asia", "East Asian country with advanced technology."),
    ("KW", "Kuwait", "Asia", "Middle Eastern country with significant oil reserves."),
    ("KG", "Kyrgyzstan", "Asia", "Landlocked Central Asian country with mountainous terrain."),
    ("LA", "Laos", "Asia", "Landlocked Southeast Asian country."),
    ("LB", "Lebanon", "Asia", "Middle Eastern country on the Mediterranean coast."),
    ("MY", "Malaysia", "Asia", "Southeast Asian country with diverse cultures."),
    ("MV", "Maldives", "Asia", "Island nation in the Indian Ocean."),
    ("MN", "Mongolia", "Asia", "Landlocked country between China and Russia."),
    ("MM", "Myanmar", "Asia", "Southeast Asian country with diverse ethnic groups."),
    ("NP", "Nepal", "Asia", "Landlocked Himalayan country between India and China."),
    ("OM", "Oman", "Asia", "Middle Eastern country on the Arabian Peninsula."),
    ("PK", "Pakistan", "Asia", "South Asian country with diverse landscapes."),
    ("PS", "Palestine", "Asia", "Geographical region in Western Asia."),
    ("PH", "Philippines", "Asia", "Southeast Asian archipelago nation."),
    ("QA", "Qatar", "Asia", "Middle Eastern country on the Arabian Peninsula."),
    ("SA", "Saudi Arabia", "Asia", "Middle Eastern country and birthplace of Islam."),
    ("SG", "Singapore", "Asia", "City-state and island country in maritime Southeast Asia."),
    ("LK", "Sri Lanka", "Asia", "Island nation in the Indian Ocean."),
    ("SY", "Syria", "Asia", "Middle Eastern country with ancient civilization."),
    ("TW", "Taiwan", "Asia", "Island in East Asia with complex political status."),
    ("TJ", "Tajikistan", "Asia", "Landlocked Central Asian country with mountainous terrain."),
    ("TH", "Thailand", "Asia", "Southeast Asian country with rich cultural heritage."),
    ("TL", "Timor-Leste", "Asia", "Southeast Asian country on the island of Timor."),
    ("TR", "Turkey", "Asia", "Transcontinental country bridging Europe and Asia."),
    ("TM", "Turkmenistan", "Asia", "Landlocked Central Asian country."),
    ("AE", "United Arab Emirates", "Asia", "Middle Eastern federation of seven emirates."),
    ("UZ", "Uzbekistan", "Asia", "Landlocked Central Asian country along the Silk Road."),
    ("VN", "Vietnam", "Asia", "Southeast Asian country with diverse landscapes."),
    ("YE", "Yemen", "Asia", "Middle Eastern country on the Arabian Peninsula."),
    // Europe
    ("AL", "Albania", "Europe", "Balkan country on the Adriatic Sea."),
    ("AD", "Andorra", "Europe", "Microstate between France and Spain."),
    ("AT", "Austria", "Europe", "Central European country with Alpine landscapes."),
    ("BY", "Belarus", "Europe", "Landlocked Eastern European country."),
    ("BE", "Belgium", "Europe", "Western European country with rich cultural heritage."),
    ("BA", "Bosnia and Herzegovina", "Europe", "Balkan country with diverse ethnic groups."),
    ("BG", "Bulgaria", "Europe", "Balkan country with Black Sea coast."),
    ("HR", "Croatia", "Europe", "Balkan country with Adriatic coastline."),
    ("CY", "Cyprus", "Europe", "Island country in the Eastern Mediterranean."),
    ("CZ", "Czech Republic", "Europe", "Central European country with Bohemian history."),
    ("DK", "Denmark", "Europe", "Scandinavian country with Viking heritage."),
    ("EE", "Estonia", "Europe", "Baltic country with medieval Old Town."),
    ("FO", "Faroe Islands", "Europe", "Danish autonomous territory in the North Atlantic."),
    ("FI", "Finland", "Europe", "Nordic country with thousands of lakes."),
    ("FR", "France", "Europe", "Western European country with rich cultural heritage."),
    ("DE", "Germany", "Europe", "Central European country and economic powerhouse."),
    ("GI", "Gibraltar", "Europe", "British Overseas Territory at the southern tip of the Iberian Peninsula."),
    ("GR", "Greece", "Europe", "Balkan country with ancient civilization."),
    ("GG", "Guernsey", "Europe", "British Crown Dependency in the English Channel."),
    ("VA", "Holy See", "Europe", "City-state within Rome, Italy."),
    ("HU", "Hungary", "Europe", "Landlocked Central European country."),
    ("IS", "Iceland", "Europe", "Nordic island country with geothermal activity."),
    ("IE", "Ireland", "Europe", "Island nation in the North Atlantic."),
    ("IM", "Isle of Man", "Europe", "British Crown Dependency in the Irish Sea."),
    ("IT", "Italy", "Europe", "Southern European country with rich artistic heritage."),
    ("JE", "Jersey", "Europe", "British Crown Dependency in the English Channel."),
    ("LV", "Latvia", "Europe", "Baltic country with Hanseatic history."),
    ("LI", "Liechtenstein", "Europe", "Microstate between Switzerland and Austria."),
    ("LT", "Lithuania", "Europe", "Baltic country with medieval heritage."),
    ("LU", "Luxembourg", "Europe", "Grand Duchy in Western Europe."),
    ("MT", "Malta", "Europe", "Island nation in the Mediterranean Sea."),
    ("MD", "Moldova", "Europe", "Landlocked Eastern European country."),
    ("MC", "Monaco", "Europe", "City-state on the French Riviera."),
    ("ME", "Montenegro", "Europe", "Balkan country with Adriatic coastline."),
    ("NL", "Netherlands", "Europe", "Western European country with tulips and windmills."),
    ("MK", "North Macedonia", "Europe", "Balkan country with ancient history."),
    ("NO", "Norway", "Europe", "Scandinavian country with fjords and Northern Lights."),
    ("PL", "Poland", "Europe", "Central European country with rich history."),
    ("PT", "Portugal", "Europe", "Southwestern European country with maritime heritage."),
    ("RO", "Romania", "Europe", "Balkan country with medieval castles."),
    ("RU", "Russia", "Europe", "Transcontinental country spanning Eastern Europe and Asia."),
    ("SM", "San Marino", "Europe", "Microstate within Italy."),
    ("RS", "Serbia", "Europe", "Balkan country with rich cultural heritage."),
    ("SK", "Slovakia", "Europe", "Landlocked Central European country."),
    ("SI", "Slovenia", "Europe", "Central European country with diverse landscapes."),
    ("ES", "Spain", "Europe", "Southwestern European country with rich cultural heritage."),
    ("SJ", "Svalbard and Jan Mayen", "Europe", "Norwegian archipelago in the Arctic Ocean."),
    ("SE", "Sweden", "Europe", "Scandinavian country with innovative design."),
    ("CH", "Switzerland", "Europe", "Landlocked country with Alpine landscapes."),
    ("UA", "Ukraine", "Europe", "Eastern European country with rich cultural heritage."),
    ("GB", "United Kingdom", "Europe", "Island nation off the northwestern coast of Europe."),
    // North America
    ("AI", "Anguilla", "North America", "British Overseas Territory in the Caribbean."),
    ("AG", "Antigua and Barbuda", "North America", "Caribbean island nation."),
    ("AW", "Aruba", "North America", "Dutch Caribbean island."),
    ("BS", "Bahamas", "North America", "Island nation in the Lucayan Archipelago."),
    ("BB", "Barbados", "North America", "Caribbean island nation in the Lesser Antilles."),
    ("BZ", "Belize", "North America", "Central American country with Caribbean coast."),
    ("BM", "Bermuda", "North America", "British Overseas Territory in the North Atlantic."),
    ("VG", "British Virgin Islands", "North America", "British Overseas Territory in the Caribbean."),
    ("CA", "Canada", "North America", "North American country and second largest in the world."),
    ("KY", "Cayman Islands", "North America", "British Overseas Territory in the Caribbean."),
    ("CR", "Costa Rica", "North America", "Central American country with biodiversity."),
    ("CU", "Cuba", "North America", "Caribbean island nation with communist government."),
    ("CW", "Curaçao", "North America", "Dutch Caribbean island."),
    ("DM", "Dominica", "North America", "Island nation in the Lesser Antilles."),
    ("DO", "Dominican Republic", "North America", "Caribbean country sharing Hispaniola with Haiti."),
    ("SV", "El Salvador", "North America", "Central American country and smallest in the region."),
    ("GL", "Greenland", "North America", "Autonomous territory within Denmark."),
    ("GD", "Grenada", "North America", "Caribbean island nation in the Lesser Antilles."),
    ("GP", "Guadeloupe", "North America", "French overseas department in the Caribbean."),
    ("GT", "Guatemala", "North America", "Central American country with Maya heritage."),
    ("HT", "Haiti", "North America", "Caribbean country sharing Hispaniola with Dominican Republic."),
    ("HN", "Honduras", "North America", "Central American country with Caribbean and Pacific coasts."),
    ("JM", "Jamaica", "North America", "Caribbean island nation with reggae music heritage."),
    ("MQ", "Martinique", "North America", "French overseas department in the Caribbean."),
    ("MX", "Mexico", "North America", "North American country with rich Aztec heritage."),
    ("MS", "Montserrat", "North America", "British Overseas Territory in the Caribbean."),
    ("AN", "Netherlands Antilles", "North America", "Former country in the Caribbean."),
    ("NI", "Nicaragua", "North America", "Central American country with lakes and volcanoes."),
    ("PA", "Panama", "North America", "Central American country with Panama Canal."),
    ("PR", "Puerto Rico", "North America", "Unincorporated territory of the United States."),
    ("BL", "Saint Barthélemy", "North America", "French overseas collectivity in the Caribbean."),
    ("KN", "Saint Kitts and Nevis", "North America", "Caribbean island nation in the Lesser Antilles."),
    ("LC", "Saint Lucia", "North America", "Caribbean island nation in the Lesser Antilles."),
    ("MF", "Saint Martin", "North America", "French overseas collectivity in the Caribbean."),
    ("PM", "Saint Pierre and Miquelon", "North America", "French overseas collectivity off the coast of Canada."),
    ("VC", "Saint Vincent and the Grenadines", "North America", "Caribbean island nation in the Lesser Antilles."),
    ("SX", "Sint Maarten", "North America", "Dutch constituent country in the Caribbean."),
    ("TT", "Trinidad and Tobago", "North America", "Caribbean island nation with Carnival festival."),
    ("TC", "Turks and Caicos Islands", "North America", "British Overseas Territory in the Caribbean."),
    ("US", "United States", "North America", "North American country and third most populous in the world."),
    ("VI", "United States Virgin Islands", "North America", "Unincorporated territory of the United States."),
    // Oceania
    ("AS", "American Samoa", "Oceania", "Unincorporated territory of the United States in the South Pacific."),
    ("AU", "Australia", "Oceania", "Oceanian country and sixth largest in the world."),
    ("CK", "Cook Islands", "Oceania", "Self-governing territory in free association with New Zealand."),
    ("FJ", "Fiji", "Oceania", "Island nation in the South Pacific."),
    ("PF", "French Polynesia", "Oceania", "French overseas collectivity in the South Pacific."),
    ("GU", "Guam", "Oceania", "Unincorporated territory of the United States in the Western Pacific."),
    ("KI", "Kiribati", "Oceania", "Island nation in the Central Pacific."),
    ("MH", "Marshall Islands", "Oceania", "Island nation in the Central Pacific."),
    ("FM", "Micronesia", "Oceania", "Island nation in the Western Pacific."),
    ("NR", "Nauru", "Oceania", "Small island nation in the Central Pacific."),
    ("NC", "New Caledonia", "Oceania", "French overseas collectivity in the Southwest Pacific."),
    ("NZ", "New Zealand", "Oceania", "Island nation in the southwestern Pacific Ocean."),
    ("NU", "Niue", "Oceania", "Self-governing territory in free association with New Zealand."),
    ("NF", "Norfolk Island", "Oceania", "Australian external territory in the Pacific Ocean."),
    ("MP", "Northern Mariana Islands", "Oceania", "Commonwealth of the United States in the Western Pacific."),
    ("PW", "Palau", "Oceania", "Island nation in the Western Pacific."),
    ("PG", "Papua New Guinea", "Oceania", "Island nation in the southwestern Pacific Ocean."),
    ("PN", "Pitcairn", "Oceania", "British Overseas Territory in the South Pacific."),
    ("WS", "Samoa", "Oceania", "Island nation in the South Pacific."),
    ("SB", "Solomon Islands", "Oceania", "Island nation in the South Pacific."),
    ("TK", "Tokelau", "Oceania", "Dependent territory of New Zealand in the South Pacific."),
    ("TO", "Tonga", "Oceania", "Polynesian island nation in the South Pacific."),
    ("TV", "Tuvalu", "Oceania", "Island nation in the Central Pacific."),
    ("UM", "United States Minor Outlying Islands", "Oceania", "Group of insular territories of the United States."),
    ("VU", "Vanuatu", "Oceania", "Island nation in the South Pacific."),
    ("WF", "Wallis and Futuna", "Oceania", "French overseas collectivity in the South Pacific."),
    // South America
    ("AR", "Argentina", "South America", "South American country and second largest in Latin America."),
    ("BO", "Bolivia", "South America", "Landlocked South American country with diverse indigenous cultures."),
    ("BR", "Brazil", "South America", "South American country and largest in Latin America."),
    ("CL", "Chile", "South America", "South American country with long Pacific coast."),
    ("CO", "Colombia", "South America", "Northwestern South American country with Amazon rainforest."),
    ("EC", "Ecuador", "South America", "Northwestern South American country with Galápagos Islands."),
    ("FK", "Falkland Islands", "South America", "British Overseas Territory in the South Atlantic."),
    ("GF", "French Guiana", "South America", "French overseas department in northeastern South America."),
    ("GY", "Guyana", "South America", "Northern South American country with British colonial history."),
    ("PY", "Paraguay", "South America", "Landlocked South American country with Guarani culture."),
    ("PE", "Peru", "South America", "Western South American country with Incan heritage."),
    ("SR", "Suriname", "South America", "Northern South American country with Dutch colonial history."),
    ("UY", "Uruguay", "South America", "South American country with beaches and grasslands."),
    ("VE", "Venezuela", "South America", "Northern South American country with oil reserves."),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = create_mongo_client(&mongo_uri).await;

    println!("Start seeding ...");
    seed_user(&client).await?;
    seed_passports(&client).await?;
    seed_countries(&client).await?;
    seed_visa_rules(&client).await?;
    println!("Seeding finished.");

    Ok(())
}

async fn seed_user(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    let users: Collection<Document> = client.database("Account").collection("Users");

    let password_hash = bcrypt::hash(DEMO_PASSWORD, BCRYPT_COST)?;
    let now = chrono::Utc::now().to_rfc3339();

    users
        .update_one(
            doc! { "email": DEMO_EMAIL },
            doc! { "$setOnInsert": {
                "email": DEMO_EMAIL,
                "password_hash": password_hash,
                "passport_code": "US",
                "created_at": now.clone(),
                "updated_at": now,
            }},
        )
        .with_options(UpdateOptions::builder().upsert(true).build())
        .await?;

    println!("Seeded demo user {}", DEMO_EMAIL);
    Ok(())
}

async fn seed_passports(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    let passports: Collection<Document> = client.database("Atlas").collection("Passports");

    for &(country_code, rank, mobility_score) in PASSPORTS {
        passports
            .update_one(
                doc! { "country_code": country_code },
                doc! { "$setOnInsert": {
                    "country_code": country_code,
                    "rank": rank,
                    "mobility_score": mobility_score,
                }},
            )
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;
    }

    println!("Seeded passports");
    Ok(())
}

async fn seed_countries(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    let countries: Collection<Document> = client.database("Atlas").collection("Countries");

    for &(code, name, region, description) in COUNTRIES {
        countries
            .update_one(
                doc! { "code": code },
                doc! { "$setOnInsert": {
                    "code": code,
                    "name": name,
                    "region": region,
                    "description": description,
                }},
            )
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;
    }

    println!("Seeded all world countries");
    Ok(())
}

async fn seed_visa_rules(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    let passports: Collection<Passport> = client.database("Atlas").collection("Passports");
    let countries: Collection<Country> = client.database("Atlas").collection("Countries");
    let rules: Collection<Document> = client.database("Atlas").collection("VisaRules");

    for &(passport_code, country_code, visa_type, duration) in VISA_RULES {
        let passport = passports
            .find_one(doc! { "country_code": passport_code })
            .await?;
        let country = countries.find_one(doc! { "code": country_code }).await?;

        let (origin_id, destination_id) =
            match (passport.and_then(|p| p.id), country.and_then(|c| c.id)) {
                (Some(origin), Some(destination)) => (origin, destination),
                _ => {
                    eprintln!(
                        "Skipping visa rule {} -> {}: passport or country not seeded",
                        passport_code, country_code
                    );
                    continue;
                }
            };

        let mut rule = doc! {
            "origin_passport_id": origin_id,
            "destination_country_id": destination_id,
            "type": visa_type,
        };
        if let Some(days) = duration {
            rule.insert("duration", days);
        }

        rules
            .update_one(
                doc! {
                    "origin_passport_id": origin_id,
                    "destination_country_id": destination_id,
                },
                doc! { "$setOnInsert": rule },
            )
            .with_options(UpdateOptions::builder().upsert(true).build())
            .await?;
    }

    println!("Seeded visa rules");
    Ok(())
}
