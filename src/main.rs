#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
mod buzzfeed;
mod common;

use crate::buzzfeed::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "buzzfeed_rust=info".into()),
        )
        .init();

    let args = &CmdArgs::parse(std::env::args().collect())?;
    let config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    let fetcher = BuzzFetcher::new(&config);
    let query = args.to_query();
    info!(
        "searching feed {:?} between {} and {}",
        query.feed, query.start, query.end
    );

    let results = fetcher.search(&query).await?;
    print!("{}", results_to_text(&results));

    Ok(())
}
