//! Trainlog CLI - serve the weekly training log over HTTP

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use trainlog::config::{self, TrainlogConfig};
use trainlog::storage::SqliteStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "trainlog")]
#[command(version)]
#[command(about = "Weekly training log - CRUD service over a SQLite training table")]
#[command(long_about = r#"
Trainlog stores weekly training entries and serves them as JSON:
  POST   /trainings         create an entry
  GET    /trainings         list all entries
  GET    /trainings/{id}    fetch one entry
  PUT    /trainings/{id}    overwrite an entry
  DELETE /trainings/{id}    remove an entry

Example usage:
  trainlog init --database ./data/training.db
  trainlog serve --port 8000
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Maximum pooled database connections
        #[arg(long)]
        pool_size: Option<u32>,
    },

    /// Write a config file and create the database schema
    Init {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Port recorded in the config file
        #[arg(short, long)]
        port: Option<u16>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { database, host, port, pool_size } => {
            let overrides = TrainlogConfig {
                database: database.map(|p| p.to_string_lossy().to_string()),
                host: host.map(|h| h.to_string()),
                port,
                pool_size,
            };
            let settings = config::resolve_config(cli.config.as_deref(), overrides)?;
            let database = settings.database_path();
            let host: IpAddr = settings
                .host()
                .parse()
                .with_context(|| format!("invalid host {:?}", settings.host()))?;

            config::ensure_db_dir(&database)?;
            let store = SqliteStore::open_with_pool_size(&database, settings.pool_size())?;
            tracing::info!("Database {:?} ready with {} trainings", database, store.count()?);

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(trainlog::server::start_server(SocketAddr::new(host, settings.port()), store))?;
        }

        Commands::Init { database, port, force } => {
            let overrides = TrainlogConfig {
                database: database.map(|p| p.to_string_lossy().to_string()),
                port,
                ..TrainlogConfig::default()
            };
            let settings = config::resolve_config(cli.config.as_deref(), overrides)?;
            let database = settings.database_path();

            let new_config = TrainlogConfig {
                database: Some(database.to_string_lossy().to_string()),
                port: Some(settings.port()),
                ..settings
            };
            let config_path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&config_path, &new_config, force)?;

            config::ensure_db_dir(&database)?;
            SqliteStore::open(&database)?;

            println!("✅ Wrote {}", config_path.display());
            println!("🗄️  Database: {}", database.display());
        }
    }

    Ok(())
}
