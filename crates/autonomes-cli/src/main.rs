use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use autonomes_cli::{config::Config, repl};
use autonomes_client::{DashboardApi, HttpDashboardClient};
use autonomes_dashboard::{PageComposer, PageSettings};

/// Terminal dashboard for chatting with local models and watching system health
#[derive(Parser, Debug)]
#[command(name = "autonomes")]
#[command(version)]
struct Args {
    /// Extra TOML config file, applied over config/default.toml
    #[arg(short, long, env = "AUTONOMES_CONFIG")]
    config: Option<PathBuf>,

    /// API base URL, e.g. http://localhost:3000
    #[arg(long)]
    base_url: Option<String>,

    /// Model selected at startup
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(model) = args.model {
        config.chat.default_model = model;
    }

    init_logging(&config);
    tracing::info!("Config loaded: {}{}", config.api.base_url, config.api.api_prefix);

    let client = HttpDashboardClient::new(config.api.clone())
        .with_context(|| format!("Invalid API base URL: {}", config.api.base_url))?;
    let api: Arc<dyn DashboardApi> = Arc::new(client);

    let page = Arc::new(PageComposer::new(api, PageSettings::from(config.chat)));
    page.mount().await;

    repl::run(page).await
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}
