// Catalog Tour Example
//
// Run with: cargo run --example catalog_tour
//
// Walks the full catalog surface over an in-memory store seeded with a
// small travel journal, so no remote store is needed.

use cityverse_catalog::{
    resolve_main_image, CatalogService, CityUpdate, MemoryRecordStore, NewCity, NewReview,
};
use serde_json::json;

async fn seeded_store() -> MemoryRecordStore {
    let store = MemoryRecordStore::new();

    store
        .seed_record(
            "c-pekin",
            json!({
                "name": "Pekín",
                "country": "China",
                "description": "Muralla, templos y caos bonito.",
                "images": [
                    "https://images.unsplash.com/photo-1547981609-4b6bfe67ca0b",
                    "https://images.unsplash.com/photo-1549692520-acc6669e2f0c"
                ]
            }),
        )
        .await;

    store
        .seed_record(
            "c-shanghai",
            json!({
                "name": "Shanghái",
                "country": "China",
                "description": "Skyline, comida y neón.",
                "image": "https://images.unsplash.com/photo-1549693578-d683be217e58"
            }),
        )
        .await;

    store
        .seed_record(
            "c-madrid",
            json!({
                "name": "Madrid",
                "country": "Spain",
                "description": "Tapeo, planes y callejeo.",
                "mainImage": "https://images.unsplash.com/photo-1549638441-b787d2e11f14",
                "reviews": [
                    {"user": "ana", "comment": "Best tapas of my life", "rating": 5},
                    {"user": "luis", "comment": "Too hot in August", "rating": 3}
                ]
            }),
        )
        .await;

    store
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let service = CatalogService::new(seeded_store().await);

    println!("== Countries ==");
    for country in service.list_countries().await? {
        println!("  {} ({} cities)", country.name, country.city_count);
    }

    println!("\n== Cities in China ==");
    for city in service.list_cities(Some("China"), None).await? {
        let image = resolve_main_image(&city).unwrap_or("<placeholder>");
        println!("  {} - {}", city.name, image);
    }

    println!("\n== Madrid up close ==");
    let madrid = service.get_city("c-madrid").await?;
    let stats = service.review_stats("c-madrid").await?;
    println!("  {} reviews, mean {:?}", stats.count, stats.mean);
    println!("  maps: {}", madrid.maps_search_url());

    println!("\n== Mutations ==");
    let id = service
        .create_city(
            NewCity::new("Cusco", "Peru")?.with_description("Old stones, thin air."),
        )
        .await?;
    println!("  created {id}");

    service
        .update_city(&id, CityUpdate::default().description("Andes base camp."))
        .await?;
    println!("  updated description");

    let reviews = service
        .add_review(&id, NewReview::new("maria", "Unforgettable", 5.0)?)
        .await?;
    println!("  {} review(s), newest first: {}", reviews.len(), reviews[0].user);

    println!("\n== Search ==");
    for city in service.list_cities(None, Some("stones")).await? {
        println!("  hit: {}", city.name);
    }

    Ok(())
}
