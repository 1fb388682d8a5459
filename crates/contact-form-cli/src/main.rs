mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_form_core::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-form")]
#[command(version, about = "Contact page tooling", long_about = None)]
struct Cli {
    /// Path to contact-form.toml
    #[arg(short, long, global = true, default_value = "contact-form.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the static contact page
    Render {
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a value against a field's rules
    Check {
        /// Field name: name, email, subject or message
        field: String,

        /// Value to check
        value: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Render { output } => {
            commands::render::execute(&config, output.as_deref())?;
        }
        Commands::Check { field, value } => {
            if !commands::check::execute(&config, &field, &value)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
