use std::path::PathBuf;

use clap::{Parser, Subcommand};

const UPLOAD_HELP: &str = "\
EXAMPLES:
  $ aiready upload report.json --api-key ar_...
  $ aiready upload .aiready/latest.json
  $ AIREADY_API_KEY=ar_... aiready upload report.json

ENVIRONMENT VARIABLES:
  AIREADY_API_KEY    Your platform API key
  AIREADY_SERVER     Custom platform URL (default: https://dev.platform.getaiready.dev)
";

#[derive(Parser)]
#[command(name = "aiready")]
#[command(about = "Upload AI-readiness analysis reports to the platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a platform API key in the system keychain
    Auth {
        /// Platform API key (ar_...)
        #[arg(long)]
        api_key: String,
    },

    /// Upload an analysis report to the platform
    #[command(after_help = UPLOAD_HELP)]
    Upload {
        /// Path to the report JSON file
        file: PathBuf,

        /// Platform API key (defaults to AIREADY_API_KEY, then the keychain)
        #[arg(long)]
        api_key: Option<String>,

        /// Repository id to file the report under. Overrides the id
        /// embedded in the report itself
        #[arg(long)]
        repo_id: Option<String>,

        /// Platform base URL (defaults to AIREADY_SERVER)
        #[arg(long)]
        server: Option<String>,
    },
}
