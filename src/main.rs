use std::fs::File;
use std::sync::Arc;

use atlas::cli::Args;
use atlas::core::config::{AtlasConfig, load_config, resolve};
use atlas::report::run_plain;
use atlas::source::{GraphqlCountrySource, Session};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        AtlasConfig::default()
    });
    let config = resolve(&file_config, &args.overrides());

    log::info!(
        "Atlas starting up: endpoint={} page_size={}",
        config.endpoint,
        config.page_size
    );

    let source = GraphqlCountrySource::new(config.endpoint.clone(), config.timeout);
    let session = Arc::new(Session::new(Arc::new(source)));
    let query = args.initial_query(config.page_size);

    if args.plain {
        match run_plain(&session, &query).await {
            Ok(text) => {
                print!("{text}");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    atlas::tui::run(session, query)
}
