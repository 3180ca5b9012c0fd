use clap::{Parser, Subcommand};
use env_logger::Env;
use std::process::ExitCode;
use std::time::Duration;

use iss_tracker::ephemeris::EphemerisClient;
use iss_tracker::web::{self, Config, ConfigError};

#[derive(Parser)]
#[command(name = "iss-tracker")]
#[command(about = "ISS trajectory tracking API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Path to a YAML configuration file
        #[arg(long)]
        config: Option<String>,
    },
    /// Fetch the upstream feed once and print a summary
    Fetch {
        /// Path to a YAML configuration file
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Fetch { config } => fetch(config.as_deref()).await,
    }
}

fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => Config::from_file(p),
        None => Ok(Config::default()),
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = web::run_server(config).await {
        eprintln!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn fetch(config_path: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match EphemerisClient::new(
        config.upstream.url.clone(),
        Duration::from_secs(config.upstream.timeout_s),
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error building client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match client.fetch().await {
        Ok(document) => {
            let vectors = document.state_vectors();
            println!(
                "Fetched {} state vectors from {}",
                vectors.len(),
                client.url()
            );
            println!("  object:      {}", document.metadata().object_name);
            println!("  originator:  {}", document.header().originator);
            if let (Some(first), Some(last)) = (vectors.first(), vectors.last()) {
                println!("  first epoch: {}", first.epoch);
                println!("  last epoch:  {}", last.epoch);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fetch error: {}", e);
            ExitCode::FAILURE
        }
    }
}
