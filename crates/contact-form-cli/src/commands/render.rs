use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use contact_form_core::{markup, Config};

pub fn execute(config: &Config, output: Option<&Path>) -> Result<()> {
    let page = markup::contact_page(config).into_string();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
            fs::write(path, &page)
                .with_context(|| format!("Failed to write page: {:?}", path))?;
            tracing::info!(path = %path.display(), bytes = page.len(), "page rendered");
            eprintln!("{} {}", "✓ Rendered".green(), path.display());
        }
        None => {
            io::stdout()
                .write_all(page.as_bytes())
                .context("Failed to write page to stdout")?;
        }
    }

    Ok(())
}
