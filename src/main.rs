use std::time::Duration;

use async_gmp::config;
use async_gmp::{Context, MapSize, MapsHandler, StaticMap};
use dotenv::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt().with_target(false).compact().init();

    if let Err(e) = config::validate_env_vars() {
        error!("Configuration error: {e}");
        std::process::exit(1);
    }

    let query = std::env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let query = if query.is_empty() {
        "Eiffel Tower".to_string()
    } else {
        query
    };

    let handler = match MapsHandler::from_env() {
        Ok(handler) => handler,
        Err(e) => {
            error!("Failed to create MapsHandler: {e}");
            std::process::exit(1);
        }
    };

    let ctx = Context::with_timeout(Duration::from_secs(10));

    info!("Searching for {query:?}");
    let place = match handler.find_place_by_text(&ctx, &query, &[]).await {
        Ok(place) => place,
        Err(e) => {
            error!("Place search failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Status: {}", place.status.as_api_str());
    for (i, candidate) in place.candidates.iter().enumerate() {
        println!(
            "  {}. {} - {} ({}, {})",
            i + 1,
            candidate.name,
            candidate.formatted_address,
            candidate.geometry.location.lat,
            candidate.geometry.location.lng
        );
    }

    if let Some(candidate) = place.candidates.first() {
        let map = StaticMap {
            center: Some(candidate.formatted_address.clone()),
            zoom: Some(15),
            size: Some(MapSize {
                width: 600,
                height: 400,
            }),
            ..StaticMap::default()
        };
        println!("Static map: {}", handler.get_static_map_url(&map));
    }
}
