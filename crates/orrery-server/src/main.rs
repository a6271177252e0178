//! Orrery CLI
//!
//! Entry point for serving the HTTP API, applying migrations, and
//! seeding sample data.

use clap::{Args, Parser, Subcommand};

use orrery_core::logging::{self, Profile};
use orrery_core::Result;
use orrery_server::config::Config;
use orrery_store::{db, migrations, seed};

#[derive(Debug, Parser)]
#[command(name = "orrery")]
#[command(about = "Orrery - scientists, planets, and missions over HTTP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Apply pending migrations and exit
    Migrate(DbArgs),
    /// Insert sample data into the datastore
    Seed(DbArgs),
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Port to listen on (overrides ORRERY_PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Datastore path (overrides DB_URI)
    #[arg(long)]
    db: Option<String>,

    /// Emit JSON structured logs instead of human-readable output
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Args)]
struct DbArgs {
    /// Datastore path (overrides DB_URI)
    #[arg(long)]
    db: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::Migrate(args) => {
            logging::init(Profile::Development);
            run_migrate(args)
        }
        Commands::Seed(args) => {
            logging::init(Profile::Development);
            run_seed(args)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let profile = if args.json_logs {
        Profile::Production
    } else {
        Profile::Development
    };
    logging::init(profile);

    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(database_url) = args.db {
        config.database_url = database_url;
    }

    orrery_server::start_server(config).await
}

fn open_database(args: DbArgs) -> Result<(rusqlite::Connection, String)> {
    let database_url = match args.db {
        Some(database_url) => database_url,
        None => Config::load()?.database_url,
    };

    let mut conn = db::open(&database_url)?;
    db::configure(&conn)?;
    migrations::apply_migrations(&mut conn)?;

    Ok((conn, database_url))
}

fn run_migrate(args: DbArgs) -> Result<()> {
    let (_conn, database_url) = open_database(args)?;
    println!("Migrations applied to {}", database_url);
    Ok(())
}

fn run_seed(args: DbArgs) -> Result<()> {
    let (conn, database_url) = open_database(args)?;
    seed::seed_sample_data(&conn)?;
    println!("Sample data inserted into {}", database_url);
    Ok(())
}
