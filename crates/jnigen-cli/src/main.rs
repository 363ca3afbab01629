//! jnigen CLI - JNI type handler generator
//!
//! Commands:
//! - `jnigen generate` - Generate JNI conversion functions from a model document
//! - `jnigen check` - Validate that a model document loads

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "jnigen")]
#[command(author, version, about = "JNI type handler generator for wire-format API messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JNI conversion functions from a model document
    Generate {
        /// Path to the model document (overrides the manifest)
        #[arg(short = 'i', long)]
        model: Option<String>,

        /// Output path for the generated fragment blob (`-` for stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to jnigen.toml (default: ./jnigen.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Validate that a model document loads
    Check {
        /// Path to the model document (overrides the manifest)
        #[arg(short = 'i', long)]
        model: Option<String>,

        /// Path to jnigen.toml (default: ./jnigen.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            model,
            output,
            manifest,
        } => {
            generate::run(model, output, manifest)?;
        }
        Commands::Check { model, manifest } => {
            generate::check(model, manifest)?;
        }
    }

    Ok(())
}
