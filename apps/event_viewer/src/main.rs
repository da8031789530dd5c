use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use event_page::{
    config::{load_settings, prepare_api_endpoint},
    render_text, EventPage, HttpApiClient, RecordingNavigator, SharedCollections,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long)]
    api_endpoint: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the page for one event.
    Show {
        #[arg(long)]
        event_id: String,
    },
    Post {
        #[arg(long)]
        event_id: String,
        #[arg(long, default_value = "")]
        content: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let cli = Cli::parse();

    let mut settings = load_settings();
    if let Some(endpoint) = cli.api_endpoint {
        settings.api_endpoint = endpoint;
    }
    settings.api_endpoint = prepare_api_endpoint(&settings.api_endpoint)?;

    let api = HttpApiClient::from_settings(&settings)?;
    info!(api_endpoint = %api.api_endpoint(), "using API");
    let collections = api
        .fetch_collections()
        .await
        .context("failed to load events, posts, organizations and animals")?;
    let context = SharedCollections::new(collections);
    let navigator = RecordingNavigator::default();

    match cli.command {
        Command::Show { event_id } => {
            let page = EventPage::new(
                event_id,
                Arc::new(context),
                Arc::new(navigator),
                Arc::new(api),
            );
            print!("{}", render_text(&page.render().await));
        }
        Command::Post { event_id, content } => {
            let mut page = EventPage::new(
                event_id,
                Arc::new(context.clone()),
                Arc::new(navigator.clone()),
                Arc::new(api.clone()),
            );
            if page.submit(&content).await.is_ok() {
                if let Some(path) = navigator.current_path() {
                    info!(%path, "reloading page");
                }
                context.replace(api.fetch_collections().await?).await;
            }
            print!("{}", render_text(&page.render().await));
        }
    }

    Ok(())
}
