use std::error::Error;
use std::path::PathBuf;

use bandstand::config::Config;
use bandstand::{build_router, DatabaseState};
use clap::Parser;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tokio::main;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    #[arg(long, short)]
    config: PathBuf,
}

#[main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()?;

    info!("Configuration path: {}", args.config.display());
    let config = Config::load(&args.config).inspect_err(|err| error!("{}", err))?;

    let connection = Database::connect(config.database.as_str())
        .await
        .inspect_err(|err| error!("Error connecting to database: {}", err))?;

    // Tables are created once, before the listener accepts anything.
    Migrator::up(&connection, None)
        .await
        .inspect_err(|err| error!("Error initializing schema: {}", err))?;
    info!("Database schema is up to date");

    let app = build_router(DatabaseState { connection });

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
