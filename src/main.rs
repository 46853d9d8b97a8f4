mod config;
mod core;
mod error;
mod handlers;
mod impls;

use clap::{Parser, Subcommand};
use log::info;

use crate::config::Settings;
use crate::core::models::common::OrderBy;
use crate::core::models::content::IikaeCreate;
use crate::error::Error;
use crate::impls::gateway::http::HttpGateway;
use crate::impls::selection::file::FileStore;

#[derive(Parser)]
#[command(name = "iikae")]
#[command(about = "いいかえさんかい！ terminal client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the content feed
    Feed {
        /// Feed ordering, latest or ranking
        #[arg(long, default_value = "latest")]
        order_by: OrderBy,
        /// How many pages to load before stopping
        #[arg(long, default_value_t = 1)]
        pages: i64,
    },
    /// Show one content and its paraphrases
    Show { content_id: String },
    /// Vote for a paraphrase of a content
    Vote { content_id: String, paraphrase_id: String },
    /// Submit something hard to say and get it rephrased
    Submit {
        #[arg(long)]
        who: String,
        #[arg(long)]
        what: String,
        #[arg(long)]
        detail: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    std::env::set_var("RUST_LOG", "iikae=info");
    env_logger::init();
    let cli = Cli::parse();
    let settings = Settings::from_env();
    info!("env {} using endpoint {}", settings.env_name, settings.api_endpoint);
    let mut gateway = HttpGateway::new(&settings.api_endpoint);
    let mut store = FileStore::open(&settings.vote_file)?;
    match cli.command {
        Commands::Feed { order_by, pages } => handlers::feed::list(&mut gateway, &mut store, order_by, pages).await,
        Commands::Show { content_id } => handlers::content::detail(&mut gateway, &mut store, &content_id).await,
        Commands::Vote { content_id, paraphrase_id } => handlers::content::vote(&mut gateway, &mut store, &content_id, &paraphrase_id).await,
        Commands::Submit { who, what, detail } => handlers::iikae::submit(&mut gateway, &mut store, IikaeCreate { who, what, detail }).await,
    }
}
