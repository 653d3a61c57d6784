//! GuessMe terminal client.
//!
//! Connects to a GuessMe game server and plays one game at a time.
//! Type a yes/no question or a guess and press Enter; `/reset` starts a new
//! game and `/quit` (or Ctrl+C) exits.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin guessme-client
//! cargo run --bin guessme-client -- --server http://127.0.0.1:8000/ --templates ./templates
//! ```

use std::path::PathBuf;

use clap::Parser;

use guessme_client::{
    ClientConfig, ResetPolicy,
    config::{DEFAULT_ENDPOINT, DEFAULT_SERVER},
};
use guessme_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "guessme-client")]
#[command(about = "Terminal client for the GuessMe word guessing game", long_about = None)]
struct Args {
    /// Address of the game server; the endpoint is resolved against it
    #[arg(short = 's', long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Chat endpoint, absolute or relative to the server address
    #[arg(short = 'e', long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Directory holding template-response.hbs and template-history.hbs
    #[arg(short = 't', long)]
    templates: Option<PathBuf>,

    /// What a reset does with the connection it replaces
    #[arg(long, value_enum, default_value_t = ResetPolicy::Abandon)]
    reset_policy: ResetPolicy,

    /// Default log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(&["guessme_client", "guessme_shared"], &args.log_level);

    let config = ClientConfig {
        server: args.server,
        endpoint: args.endpoint,
        templates_dir: args.templates,
        reset_policy: args.reset_policy,
    };

    if let Err(e) = guessme_client::run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
