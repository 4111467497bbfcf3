use mongodb::{
    bson::doc,
    options::{ClientOptions, IndexOptions, ServerApi, ServerApiVersion},
    Client, IndexModel,
};
use std::sync::Arc;
use std::time::Duration;

pub async fn create_mongo_client(uri: &str) -> Arc<Client> {
    println!("Connecting to MongoDB: {}", uri);

    // Configure MongoDB client options with more robust settings
    let mut client_options = ClientOptions::parse(uri)
        .await
        .expect("MongoDB URI may be incorrect! Failed to parse.");

    // Set a reasonable timeout for operations
    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    // Set the server API if using MongoDB 5.0+
    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    // Create the client and check if it can connect
    let client =
        Client::with_options(client_options).expect("Failed to create MongoDB client with options");

    // Test the connection to make sure it works
    match client
        .database("Account")
        .run_command(doc! {"ping": 1})
        .await
    {
        Ok(_) => println!("Successfully connected to MongoDB and verified with ping command"),
        Err(e) => {
            eprintln!("WARNING: Connected to MongoDB but ping test failed: {}", e);
            eprintln!("The API may still work, but some functionality might be impaired");
        }
    }

    Arc::new(client)
}

/// Creates the unique indexes the application relies on. Index creation is
/// idempotent, so this runs on every startup; a failure is logged but does
/// not stop the server since reads still work without the indexes.
pub async fn ensure_indexes(client: &Client) {
    let unique = IndexOptions::builder().unique(true).build();

    let users: mongodb::Collection<mongodb::bson::Document> =
        client.database("Account").collection("Users");
    let index = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(unique.clone())
        .build();
    if let Err(e) = users.create_index(index).await {
        eprintln!("WARNING: Failed to create Users.email index: {}", e);
    }

    let passports: mongodb::Collection<mongodb::bson::Document> =
        client.database("Atlas").collection("Passports");
    let index = IndexModel::builder()
        .keys(doc! { "country_code": 1 })
        .options(unique.clone())
        .build();
    if let Err(e) = passports.create_index(index).await {
        eprintln!("WARNING: Failed to create Passports.country_code index: {}", e);
    }

    let countries: mongodb::Collection<mongodb::bson::Document> =
        client.database("Atlas").collection("Countries");
    let index = IndexModel::builder()
        .keys(doc! { "code": 1 })
        .options(unique.clone())
        .build();
    if let Err(e) = countries.create_index(index).await {
        eprintln!("WARNING: Failed to create Countries.code index: {}", e);
    }

    // One stored rule per passport/destination pair.
    let visa_rules: mongodb::Collection<mongodb::bson::Document> =
        client.database("Atlas").collection("VisaRules");
    let index = IndexModel::builder()
        .keys(doc! { "origin_passport_id": 1, "destination_country_id": 1 })
        .options(unique)
        .build();
    if let Err(e) = visa_rules.create_index(index).await {
        eprintln!("WARNING: Failed to create VisaRules compound index: {}", e);
    }
}
