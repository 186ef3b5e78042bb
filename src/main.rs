use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use pdf_triage::prelude::*;

#[derive(Parser)]
#[command(name = "pdf_triage")]
#[command(about = "Analyze PDF files", long_about = None)]
struct Cli {
    /// Directory containing the PDF files to analyze
    #[arg(long)]
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // lopdf's warnings are routed into this buffer for the whole run
    let capture = LogCapture::install().context("Failed to set up log capture")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    analyze_directory(&cli.path, &capture, &mut out)
        .with_context(|| format!("Failed to analyze {}", cli.path.display()))?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}
