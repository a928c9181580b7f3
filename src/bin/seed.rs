// src/bin/seed.rs
// Seeds a running germany-places service with its sample data and lists the result.
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::process;
use std::time::Duration;

// --- ANSI colours ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

#[derive(Deserialize, Debug)]
struct SeedResponse {
    seeded: bool,
    count: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    ids: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct ListedPlace {
    id: String,
    name: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ListResponse {
    items: Vec<ListedPlace>,
    count: usize,
}

struct Seeder {
    base_url: String,
    client: Client,
}

impl Seeder {
    fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self { base_url, client })
    }

    async fn check_service(&self) -> bool {
        match self.client.get(format!("{}/", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn seed(&self) -> Result<SeedResponse, String> {
        let response = self
            .client
            .post(format!("{}/places/seed", self.base_url))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            response
                .json::<SeedResponse>()
                .await
                .map_err(|e| format!("Failed to parse response JSON: {}", e))
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            Err(format!("HTTP {} - {}", status, body))
        }
    }

    async fn list(&self) -> Result<ListResponse, String> {
        self.client
            .get(format!("{}/places", self.base_url))
            .query(&[("limit", "500")])
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json::<ListResponse>()
            .await
            .map_err(|e| format!("Failed to parse response JSON: {}", e))
    }

    fn print_places(listing: &ListResponse) {
        println!("\n{}📋 Places in database ({}){}", BOLD, listing.count, RESET);
        println!("──────────────────────────────────────────────────────────────────────────────");
        println!("{:<38} {:<32} {:<24}", "Name", "Location", "Id");
        println!("──────────────────────────────────────────────────────────────────────────────");

        for place in &listing.items {
            let location = match (place.city.as_deref(), place.state.as_deref()) {
                (Some(city), Some(state)) if !city.is_empty() => format!("{}, {}", city, state),
                (_, Some(state)) => state.to_string(),
                (Some(city), None) => city.to_string(),
                (None, None) => "-".to_string(),
            };
            let short_id: String = place.id.chars().take(8).collect();
            println!("{:<38} {:<32} {:<24}", place.name, location, short_id);
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let base_url = env::var("PLACES_API_URL").unwrap_or_else(|_| {
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        format!("http://localhost:{}", port)
    });

    let seeder = match Seeder::new(base_url.clone()) {
        Ok(seeder) => seeder,
        Err(e) => {
            println!("{}❌ Could not create HTTP client: {}{}", RED, e, RESET);
            process::exit(1);
        }
    };

    println!("\n{}🔍 Checking service at {}...{}", CYAN, base_url, RESET);
    if !seeder.check_service().await {
        println!("{}❌ Service unavailable.{}", RED, RESET);
        println!("{}Please ensure germany-places is running (cargo run){}", YELLOW, RESET);
        process::exit(1);
    }
    println!("{}✅ Service available{}", GREEN, RESET);

    match seeder.seed().await {
        Ok(resp) if resp.seeded => {
            println!(
                "{}✅ Seeded {} places ({} ids returned){}",
                GREEN,
                resp.count,
                resp.ids.len(),
                RESET
            );
        }
        Ok(resp) => {
            println!(
                "{}⚠️  {} ({} existing){}",
                YELLOW,
                resp.message.unwrap_or_else(|| "Nothing seeded".to_string()),
                resp.count,
                RESET
            );
        }
        Err(err) => {
            println!("{}❌ Seeding failed: {}{}", RED, err, RESET);
            process::exit(1);
        }
    }

    match seeder.list().await {
        Ok(listing) => Seeder::print_places(&listing),
        Err(err) => println!("{}⚠️  Could not list places: {}{}", YELLOW, err, RESET),
    }
}
