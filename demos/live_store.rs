// Live Store Example
//
// Run with: cargo run --example live_store
//
// Prerequisites:
// 1. export CITYVERSE_STORE_URL="https://<project>-default-rtdb.firebaseio.com"
// 2. Optional: export CITYVERSE_STORE_AUTH="<token>"

use cityverse_catalog::{CatalogService, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let base_url = std::env::var("CITYVERSE_STORE_URL")
        .expect("CITYVERSE_STORE_URL not set; point it at your record store");

    let mut config = StoreConfig::new(base_url);
    if let Ok(token) = std::env::var("CITYVERSE_STORE_AUTH") {
        config = config.with_auth(token);
    }

    println!("Connecting to {}", config.base_url);
    let service = CatalogService::connect(config)?;

    service.refresh().await?;

    let countries = service.list_countries().await?;
    println!("{} countries:", countries.len());
    for country in &countries {
        println!("  {} ({} cities)", country.name, country.city_count);
    }

    if let Some(first) = countries.first() {
        println!("\nCities in {}:", first.name);
        for city in service.list_cities(Some(&first.name), None).await? {
            let stats = service.review_stats(&city.id).await?;
            println!(
                "  {} [{} reviews, mean {}]",
                city.name,
                stats.count,
                stats
                    .mean
                    .map(|m| format!("{m:.1}"))
                    .unwrap_or_else(|| "-".into()),
            );
        }
    }

    Ok(())
}
