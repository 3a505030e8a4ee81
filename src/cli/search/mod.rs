//! Search command - one-shot search printed as JSON

use clap::Args;

use crate::api::types::SearchExpertsResponse;
use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Topic to search for
    pub topic: String,
}

/// Run a single search against the configured catalog and print the response
/// body that `POST /experts` would return
pub async fn run(args: SearchArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let service = crate::create_search_service(&config).await?;
    let experts = service.search(&args.topic).await?;

    let response = SearchExpertsResponse::new(experts);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
