use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use courtdir_core::usecases;
use courtdir_db_sqlite::{self as sqlite, Connections};
use courtdir_webserver as webserver;

use crate::config::{self, Config};

#[derive(Parser)]
#[command(name = "courtdir", version, about = "Directory of pickleball courts by state")]
struct Cli {
    /// Configuration file [default: courtdir.toml]
    #[arg(long, short, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL to the database, overrides the configuration
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve all pages on request
    Serve,
    /// Render all known pages into static files
    Export {
        /// Output directory, overrides the configuration
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Print the paths of all known pages
    Paths,
}

pub fn run() -> Result<()> {
    let Cli {
        config,
        db_url,
        command,
    } = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let connections = connect(&cfg.db)?;
    let webserver_cfg = cfg.webserver_cfg();

    match command {
        Command::Serve => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(webserver::run(connections, webserver_cfg));
        }
        Command::Export { out_dir } => {
            let out_dir = out_dir.unwrap_or(cfg.export.output_dir);
            let summary = webserver::export_site(&connections, &webserver_cfg, &out_dir)?;
            println!("{summary}");
            if summary.failed > 0 {
                bail!("Failed to export {} file(s)", summary.failed);
            }
        }
        Command::Paths => {
            let db = connections.shared()?;
            for path in usecases::enumerate_paths(&db, webserver_cfg.visibility) {
                println!("{path}");
            }
        }
    }
    Ok(())
}

fn connect(db: &config::Db) -> Result<Connections> {
    info!("Connecting to SQLite database '{}'", db.conn_sqlite);
    let connections = Connections::init(&db.conn_sqlite, db.conn_pool_size)?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    Ok(connections)
}
