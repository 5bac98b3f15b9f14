use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use articledesk::config::Config;
use articledesk::effects::{EffectRunner, ElementView, HistoryNavigator};
use articledesk::service::{ArtworkSource, PlatformClient};
use articledesk::session::EditorSession;
use articledesk::ui::edit::actions;

#[derive(Debug, Parser)]
#[command(name = "articledesk", about = "Headless driver for the article editor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search artworks by title.
    Search { query: String },
    /// Fetch an artwork and print its denormalized record.
    Artwork { id: String },
    /// Print the default attributes of a new section.
    NewSection {
        #[arg(value_name = "TYPE")]
        section_type: String,
    },
    /// Toggle an article's published state and save it.
    Publish {
        id: String,
        /// SEO focus keyword to store when publishing.
        #[arg(long)]
        seo_keyword: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    articledesk::init_tracing();

    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;

    match cli.command {
        Command::Search { query } => {
            let client = PlatformClient::new(&config.service)?;
            let suggestions = client.search_artworks(&query).await?;
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
        Command::Artwork { id } => {
            let client = PlatformClient::new(&config.service)?;
            let record = client.fetch_artwork(&id).await?;
            println!("{}", serde_json::to_string_pretty(&record.denormalized())?);
        }
        Command::NewSection { section_type } => {
            let outcome = actions::new_section(&section_type)?;
            if let Some(action) = outcome.action {
                println!("{}", serde_json::to_string_pretty(&action)?);
            }
        }
        Command::Publish { id, seo_keyword } => {
            publish(&config, &id, seo_keyword).await?;
        }
    }

    Ok(())
}

async fn publish(config: &Config, id: &str, seo_keyword: Option<String>) -> Result<()> {
    let client = Arc::new(PlatformClient::new(&config.service)?);
    let article = client
        .fetch_article(id)
        .await
        .with_context(|| format!("fetching article {id}"))?;

    let view = Arc::new(ElementView::new(&config.editor));
    if let Some(keyword) = seo_keyword {
        view.set_seo_keyword(keyword);
    }
    let navigator = Arc::new(HistoryNavigator::new());
    let runner = EffectRunner::new(navigator.clone(), view.clone(), client.clone());

    let mut session = EditorSession::new(article, runner);
    let publishing = !session.article().published;
    let outcome = actions::publish_article(session.article(), publishing, view.as_ref());
    session.apply(outcome);
    session.settle().await;

    println!(
        "{} is now {}",
        id,
        if session.article().published {
            "published"
        } else {
            "a draft"
        }
    );
    for url in navigator.history() {
        println!("-> {url}");
    }
    Ok(())
}
