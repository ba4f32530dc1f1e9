//! Research Portal Client - Entry Point
//!
//! Renders portal pages once (`view`) or interactively (`browse`).

use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_portal::query::FilterPredicate;
use research_portal::{Config, PortalClient, PortalView, Route, browse, formatters};

#[derive(Parser, Debug)]
#[command(name = "research-portal")]
#[command(about = "Browse the COVID-19 research paper portal from the terminal")]
#[command(version)]
struct Cli {
    /// Portal origin serving the /api endpoints
    #[arg(long, env = "PORTAL_API_URL", default_value = research_portal::config::api::BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Show debug-only details such as similarity distances
    #[arg(long, env = "PORTAL_DEBUG")]
    debug: bool,

    /// Reset page size to 10 whenever a filter is toggled
    #[arg(long)]
    reset_size_on_filter: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one page and exit
    View {
        /// Route such as /vaccine, /treatment/remdesivir or /search/masks%20reused
        #[arg(default_value = "/")]
        route: String,

        /// Only peer-reviewed papers
        #[arg(long)]
        peer_reviewed: bool,

        /// Only clinical trial results (treatment pages)
        #[arg(long)]
        clinical_trials: bool,

        /// Press "show more" this many times
        #[arg(long, default_value = "0")]
        more: u32,

        /// Expand summaries, abstracts and treatment details
        #[arg(long)]
        expand: bool,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Browse interactively, reading commands from stdin
    Browse {
        /// Starting route
        #[arg(default_value = "/")]
        route: String,
    },
    /// Check that the portal backend is up
    Health,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Text pages
    #[default]
    Text,
    /// Compact JSON
    Json,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::new(&cli.base_url);
    config.validate()?;
    config.request_timeout = Duration::from_secs(cli.timeout_secs);
    config.debug = cli.debug;
    config.reset_size_on_filter_change = cli.reset_size_on_filter;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        "Starting research portal client"
    );

    let client = PortalClient::new(&config)?;

    match cli.command {
        Command::View { route, peer_reviewed, clinical_trials, more, expand, format } => {
            let mut route = Route::parse(&route)?;
            if peer_reviewed {
                route.filters.push(FilterPredicate::PeerReviewed.route_name().to_string());
            }
            if clinical_trials {
                route.filters.push(FilterPredicate::ClinicalTrials.route_name().to_string());
            }

            let view = PortalView::new(client, route, &config);
            view.load().await;
            for _ in 0..more {
                if !view.snapshot().await.has_more() {
                    break;
                }
                view.show_more().await;
            }
            if expand {
                view.toggle_expanded().await;
                view.toggle_treatment_details().await;
            }

            let state = view.snapshot().await;
            match format {
                OutputFormat::Text => {
                    print!("{}", formatters::format_page(view.route(), &state, config.debug));
                }
                OutputFormat::Json => {
                    let value = formatters::view_json(view.route(), &state);
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }
        Command::Browse { route } => {
            let route = Route::parse(&route)?;
            let stdin = BufReader::new(tokio::io::stdin());
            browse::run_browse(client, &config, route, stdin, tokio::io::stdout()).await?;
        }
        Command::Health => {
            let status = client.health().await?;
            if status.is_healthy {
                println!("Portal at {} is healthy", config.base_url);
            } else {
                anyhow::bail!("Portal at {} reports unhealthy", config.base_url);
            }
        }
    }

    Ok(())
}
