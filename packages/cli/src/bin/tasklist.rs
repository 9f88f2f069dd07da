use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process;

use tasklist_cli::Config;
use tasklist_storage::PoolOptions;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Tasklist - a personal task list served over a JSON API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server (default)
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
        /// SQLite database file (overrides DATABASE_PATH)
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Apply or revert the database schema
    #[command(subcommand)]
    Migrate(MigrateCommands),
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Create the tasks table if it does not exist
    Up {
        #[arg(long)]
        database: Option<PathBuf>,
    },
    /// Drop the tasks table and everything in it
    Down {
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    tasklist_cli::init_tracing();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        database: None,
    });

    if let Err(e) = handle_command(command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve { port, database } => {
            let config = Config::from_env()?.with_overrides(port, database)?;

            println!("{}", "🚀 Starting Tasklist server...".green().bold());
            println!(
                "{} http://{}:{}",
                "📡 Server will run on".cyan(),
                config.host,
                config.port
            );
            println!("{} {}", "🗄️  Database:".cyan(), config.database_path.display());
            println!("{} {}", "🔗 CORS origin:".cyan(), config.cors_origin);

            tasklist_cli::run_server(config).await
        }
        Commands::Migrate(MigrateCommands::Up { database }) => {
            let config = Config::from_env()?.with_overrides(None, database)?;
            let pool =
                tasklist_storage::connect(&config.database_path, &PoolOptions::default()).await?;

            tasklist_storage::run_migrations(&pool).await?;
            println!(
                "{} Schema is up to date ({})",
                "✓".green(),
                config.database_path.display()
            );
            Ok(())
        }
        Commands::Migrate(MigrateCommands::Down { database }) => {
            let config = Config::from_env()?.with_overrides(None, database)?;
            let pool =
                tasklist_storage::connect(&config.database_path, &PoolOptions::default()).await?;

            tasklist_storage::revert_migrations(&pool).await?;
            println!(
                "{} Dropped tasks table ({})",
                "⚠️".yellow(),
                config.database_path.display()
            );
            Ok(())
        }
    }
}
