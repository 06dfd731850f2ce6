//! Moon Robot Control API server

use clap::Parser;
use tracing::info;

use moonbot_core::config::Config;
use moonbot_core::logging::{self, Profile};
use moonbot_core::Result;
use moonbot_server::{app, AppState};
use moonbot_store::errors::io_error;
use moonbot_store::{db, migrations};

#[derive(Debug, Parser)]
#[command(name = "moonbot-server")]
#[command(about = "Moon Robot Control API", long_about = None)]
struct Cli {
    /// SQLite database path (overrides MOONBOT_DB)
    #[arg(long)]
    db: Option<String>,

    /// Bind address (overrides MOONBOT_ADDR)
    #[arg(long)]
    addr: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let mut config = Config::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(addr) = cli.addr {
        config.addr = addr;
    }

    if let Err(e) = run(config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    let mut conn = if config.db_path == ":memory:" {
        db::open_in_memory()?
    } else {
        db::open(&config.db_path)?
    };
    db::configure(&conn)?;
    migrations::apply_migrations(&mut conn)?;

    let state = AppState::new(conn, config.start, config.obstacles);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .map_err(|e| io_error("bind", e))?;
    info!(addr = %config.addr, db = %config.db_path, start = %config.start, "moonbot listening");

    axum::serve(listener, app(state))
        .await
        .map_err(|e| io_error("serve", e))?;

    Ok(())
}
