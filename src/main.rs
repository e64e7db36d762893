use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use daneo::core::config;
use daneo::core::favorites::{FavoritesStore, FileStorage};
use daneo::core::state::App;
use daneo::core::words;
use daneo::tui;

#[derive(Parser)]
#[command(name = "daneo", about = "Korean vocabulary flashcards in the terminal")]
struct Args {
    /// Path or URL of the words document (overrides config)
    #[arg(short, long)]
    words: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to daneo.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("daneo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("daneo: {e}");
            std::process::exit(2);
        }
    };
    let resolved = config::resolve(&config, args.words.as_deref());

    log::info!("daneo starting up, words source: {}", resolved.words_source);

    // The one-time data fetch. The UI starts only after it resolves, so a
    // failure here still yields an interactive view over the placeholder.
    let (word_list, load_error) = match words::load_words(&resolved.words_source).await {
        Ok(word_list) => (word_list, None),
        Err(e) => {
            log::warn!("Loading words failed: {e}");
            (Vec::new(), Some(e.to_string()))
        }
    };

    let storage = FileStorage::new(resolved.data_dir.clone());
    let favorites = FavoritesStore::open(Box::new(storage));

    let mut app = App::new(word_list, favorites);
    app.load_error = load_error;

    tui::run(app)
}
