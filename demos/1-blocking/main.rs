use anyhow::Result;
use clap::Parser;
use purfacted::{blocking, CategoryQuery, PurfactedClientBuilder, WebhookUpdate};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    version,
    about = "Use the blocking client: list categories and pause or resume a webhook."
)]
struct Cli {
    /// Webhook to pause (or resume with `--active`).
    #[arg(long)]
    webhook_id: Option<String>,

    /// Resume deliveries instead of pausing them.
    #[arg(long)]
    active: bool,

    /// Maximum tracing verbosity to enable: error|warn|info|debug|trace
    #[arg(long, default_value_t = LevelFilter::INFO, value_parser = clap::value_parser!(LevelFilter))]
    level: LevelFilter,
}

fn main() -> Result<()> {
    let Cli {
        webhook_id,
        active,
        level,
    } = Cli::parse();
    init_tracing(level);

    // PURFACTED_API_KEY / PURFACTED_BASE_URL
    let client =
        blocking::PurfactedClient::with_client(PurfactedClientBuilder::from_env().build()?)?;
    info!(base_url = %client.async_client().base_url(), "Blocking client ready");

    let categories = client.list_categories(&CategoryQuery::new().limit(10))?;
    println!("Categories: {}", categories.data());

    if let Some(id) = webhook_id {
        let updated = client.update_webhook(&id, &WebhookUpdate::new().is_active(active))?;
        println!("Webhook {id}: {}", updated.data());
    }

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
