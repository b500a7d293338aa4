use anyhow::Result;
use clap::Parser;
use purfacted::models::{FactList, PlatformStats, TrustMetrics, Webhook};
use purfacted::{FactSearch, NewWebhook, PurfactedClient, DEFAULT_BASE_URL};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    version,
    about = "Search facts, read trust metrics and platform stats, then register a webhook."
)]
struct Cli {
    /// API key sent as `X-API-Key`.
    #[arg(long, env = "PURFACTED_API_KEY")]
    api_key: String,

    /// API root.
    #[arg(long, env = "PURFACTED_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Fact whose trust metrics are printed.
    #[arg(long, default_value = "some_fact_id")]
    fact_id: String,

    /// Where the demo webhook should deliver events.
    #[arg(long, default_value = "https://your-server.com/webhook")]
    webhook_url: String,

    /// Maximum tracing verbosity to enable: error|warn|info|debug|trace
    #[arg(long, default_value_t = LevelFilter::INFO, value_parser = clap::value_parser!(LevelFilter))]
    level: LevelFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.level);

    let client = PurfactedClient::builder()
        .api_key(&cli.api_key)
        .base_url(&cli.base_url)
        .build()?;
    info!(base_url = %client.base_url(), "Client ready");

    // Steps are independent; a failing one does not stop the others.
    if let Err(e) = search_climate_facts(&client).await {
        error!("API Error: {e}");
    }
    if let Err(e) = show_trust_metrics(&client, &cli.fact_id).await {
        error!("API Error: {e}");
    }
    if let Err(e) = show_platform_stats(&client).await {
        error!("API Error: {e}");
    }
    if let Err(e) = register_webhook(&client, &cli.webhook_url).await {
        error!("API Error: {e}");
    }

    Ok(())
}

async fn search_climate_facts(client: &PurfactedClient) -> purfacted::Result<()> {
    let found: FactList = client
        .search_facts(&FactSearch::new().q("climate").status("PROVEN").limit(10))
        .await?
        .data_as()?;

    println!("Found {} facts about climate", found.facts.len());
    for fact in &found.facts {
        println!(
            "  - {} ({})",
            fact.title.as_deref().unwrap_or("<untitled>"),
            fact.status.as_deref().unwrap_or("?")
        );
    }
    Ok(())
}

async fn show_trust_metrics(client: &PurfactedClient, fact_id: &str) -> purfacted::Result<()> {
    let trust: TrustMetrics = client.get_trust_metrics(fact_id).await?.data_as()?;

    println!("\nTrust Metrics for {fact_id}:");
    println!("  Status: {}", trust.status.as_deref().unwrap_or("?"));
    println!("  Weighted Score: {:?}", trust.votes.weighted_score);
    println!("  Total Votes: {:?}", trust.votes.total);
    println!(
        "  Source Credibility: {:?}",
        trust.sources.average_credibility
    );
    Ok(())
}

async fn show_platform_stats(client: &PurfactedClient) -> purfacted::Result<()> {
    let stats: PlatformStats = client.get_platform_stats().await?.data_as()?;

    println!("\nPlatform Statistics:");
    println!("  Total Facts: {:?}", stats.facts.total);
    println!("  Proven: {}", stats.facts.count("PROVEN"));
    println!("  Total Sources: {:?}", stats.sources.total);
    println!("  Active Users: {:?}", stats.participation.active_users);
    Ok(())
}

async fn register_webhook(client: &PurfactedClient, url: &str) -> purfacted::Result<()> {
    let hook: Webhook = client
        .create_webhook(&NewWebhook::new(url, ["fact.status_changed", "fact.voted"]))
        .await?
        .data_as()?;

    println!("\nWebhook created!");
    println!("  ID: {}", hook.id.as_deref().unwrap_or("?"));
    println!("  Secret: {}", hook.secret.as_deref().unwrap_or("?"));
    println!("  (Save the secret - it won't be shown again!)");
    Ok(())
}

fn init_tracing(level: LevelFilter) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .init();
}
