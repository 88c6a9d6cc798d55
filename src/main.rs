mod api;
mod cli;
mod commands;
mod config;
mod credentials;
mod error;
mod models;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Auth { api_key } => {
            if let Err(e) = commands::auth::run(api_key) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        Commands::Upload {
            file,
            api_key,
            repo_id,
            server,
        } => {
            let result = commands::upload::run(
                file,
                api_key.as_deref(),
                repo_id.as_deref(),
                server.as_deref(),
            )
            .await;

            if let Err(e) = result {
                eprintln!("{e}");
                for hint in e.hints() {
                    println!("   {hint}");
                }
                std::process::exit(1);
            }
        }
    }
}
