//! SWAPI Catalog Browser
//!
//! Lists and searches catalog categories from the terminal, shows detail views,
//! or serves the browser UI.

use clap::{Parser, Subcommand};
use std::sync::Arc;
use swapi_browser::config::{DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL};
use swapi_browser::{BrowserConfig, Category, ModalStack, Session};

/// Browse the Star Wars API catalog
#[derive(Parser, Debug)]
#[command(name = "swapi_browser")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the catalog API
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Base URL of the image host
    #[arg(long, default_value = DEFAULT_IMAGE_BASE_URL)]
    image_base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a category as cards, optionally filtered by a search query
    List {
        /// characters, planets, vehicles or films
        category: Category,

        /// Only show items whose name or title contains this text
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show the detail view of one item
    Show {
        category: Category,

        /// Numeric id from the item URL
        id: String,
    },
    /// Serve the browser UI and JSON API
    Serve {
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = BrowserConfig {
        api_base_url: args.api_base_url,
        image_base_url: args.image_base_url,
        ..BrowserConfig::default()
    };
    let session = Session::new(config);

    match args.command {
        Command::List { category, query } => {
            session.ensure_loaded(category).await;
            for card in session.filter(category, &query).await {
                println!("{:<32} {}", card.label, card.image_src());
            }
        }
        Command::Show { category, id } => {
            session.ensure_loaded(category).await;
            let Some(item) = session.find_item(category, &id).await else {
                log::error!("No {} with id {}", category, id);
                std::process::exit(1);
            };

            let mut modals = ModalStack::new();
            let view = modals.open_loading(session.config(), category, &item);
            log::debug!("Resolving references of {}", view.title);

            let lines = session.detail_lines(&item).await;
            if let Some(view) = modals.finish_top(lines) {
                println!("{}", view.title);
                for line in &view.lines {
                    println!("  {}", line);
                }
            }
        }
        Command::Serve { port } => {
            if let Err(e) = swapi_browser::web::serve(Arc::new(session), port).await {
                log::error!("Web server error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
