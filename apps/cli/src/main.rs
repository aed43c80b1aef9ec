mod commands;
mod env;
mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

use hypr_script::ExportFormat;

#[derive(Parser)]
#[command(
    name = "scriptkit",
    about = "Extract, clean, analyze and write spoken video scripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the spoken script behind a share link or share text
    Extract {
        input: String,
        #[arg(long)]
        max_retries: Option<usize>,
    },
    /// Normalize and score a local transcript
    Clean { file: PathBuf },
    /// Fingerprint the style of a reference script
    Analyze { file: PathBuf },
    /// Write a new script in the style of a reference
    Generate {
        #[arg(long)]
        reference: PathBuf,
        /// Product facts as inline JSON or a JSON file
        #[arg(long, conflicts_with = "brief", required_unless_present = "brief")]
        product: Option<String>,
        /// Free-text product brief
        #[arg(long)]
        brief: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render a script as an export document
    Export {
        file: PathBuf,
        #[arg(long, default_value = "txt")]
        format: ExportFormat,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Rewrite a script through the workflow
    Rewrite {
        file: PathBuf,
        #[arg(long)]
        video_url: Option<String>,
        #[arg(long, env = "COZE_REWRITE_WORKFLOW_ID")]
        workflow_id: Option<String>,
        #[arg(long)]
        max_retries: Option<usize>,
    },
    /// Find the media address in a saved share page
    Resolve { file: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract { input, max_retries } => {
            commands::extract::run(&input, max_retries).await
        }
        Command::Clean { file } => commands::clean::run(&file),
        Command::Analyze { file } => commands::analyze::run(&file),
        Command::Generate {
            reference,
            product,
            brief,
            seed,
        } => commands::generate::run(&reference, product.as_deref(), brief.as_deref(), seed),
        Command::Export {
            file,
            format,
            output,
        } => commands::export::run(&file, format, output.as_deref()),
        Command::Rewrite {
            file,
            video_url,
            workflow_id,
            max_retries,
        } => {
            commands::rewrite::run(&file, video_url, workflow_id, max_retries).await
        }
        Command::Resolve { file } => commands::resolve::run(&file),
    }
}
