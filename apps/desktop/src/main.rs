use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{BreedBrowser, BrowserEvent, HttpBreedSource};
use shared::domain::{LoadingState, SortDirection, SortOption};
use tracing::warn;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the breed API.
    #[arg(long)]
    api_url: Option<String>,
    /// API key sent as the x-api-key header.
    #[arg(long)]
    api_key: Option<String>,
    /// Search term applied after the initial load (debounced, like typing).
    #[arg(long)]
    search: Option<String>,
    /// Sort field: name, height or lifespan.
    #[arg(long)]
    sort: Option<String>,
    /// Sort descending instead of ascending.
    #[arg(long)]
    descending: bool,
    /// Maximum number of rows to print.
    #[arg(long, default_value_t = 25)]
    limit: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }
    if let Some(api_key) = args.api_key {
        settings.api_key = Some(api_key);
    }

    let mut source = HttpBreedSource::new(settings.api_url);
    if let Some(api_key) = settings.api_key {
        source = source.with_api_key(api_key);
    }

    let browser = BreedBrowser::new(Arc::new(source));
    browser.initialize().await?;

    if let Some(term) = &args.search {
        let mut events = browser.subscribe_events();
        browser.search(term).await;
        // The debounced recompute reports completion on the event channel.
        while let Ok(event) = events.recv().await {
            if matches!(event, BrowserEvent::LoadingChanged(LoadingState::Ready)) {
                break;
            }
        }
    }

    if let Some(sort) = &args.sort {
        match SortOption::parse(sort) {
            Some(option) => browser.change_sort_option(option).await,
            None => warn!(option = %sort, "unknown sort option, keeping current order"),
        }
    }
    if args.descending {
        browser
            .change_sort_direction(SortDirection::Descending)
            .await;
    }

    let snapshot = browser.snapshot().await;
    browser.close();

    if snapshot.displayed.is_empty() {
        println!("No breeds matched.");
        return Ok(());
    }

    println!(
        "{:<32} {:>12} {:>16}  {:<16}",
        "NAME", "HEIGHT (in)", "LIFESPAN", "GROUP"
    );
    for breed in snapshot.displayed.iter().take(args.limit) {
        println!(
            "{:<32} {:>12} {:>16}  {:<16}",
            breed.name, breed.height.imperial, breed.life_span, breed.breed_group
        );
    }
    if snapshot.displayed.len() > args.limit {
        println!("... {} more", snapshot.displayed.len() - args.limit);
    }

    Ok(())
}
