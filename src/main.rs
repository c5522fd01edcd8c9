use std::path::{Path, PathBuf};

use clap::Parser;
use gift_quiz::{Game, GameConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Issuer endpoint URL; omit to run offline with bundled data
    #[arg(long)]
    base_url: Option<String>,

    /// JSON file to load the questions from (overrides the endpoint)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// JSON file to load the gift inventory from (overrides the endpoint)
    #[arg(short, long)]
    gifts: Option<PathBuf>,

    /// Diagnostic log file; the terminal itself belongs to the game
    #[arg(long, default_value = "gift-quiz.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let _guard = init_tracing(&args.log_file);

    let config = GameConfig {
        base_url: args.base_url,
        questions_path: args.questions,
        gifts_path: args.gifts,
    };

    println!("Loading game data...");
    let game = match Game::load(config).await {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = game.run().await {
        eprintln!("Error running game: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(path: &Path) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let file = std::fs::File::create(path).ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Some(guard)
}
