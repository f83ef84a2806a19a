//! imedit — command-line front end for the pixel transforms.
//!
//! Loads an image, applies one edit (or a JSON list of them) and writes the
//! result. Codec work goes through `imedit-io`, pixels through `imedit-core`.

mod cli;
mod config;
mod session;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use imedit_core::{Operation, aspect_fit, get_dimensions};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::session::EditSession;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env();
    init_tracing(&config, cli.verbose);

    match &cli.command {
        Commands::Fit {
            container_width,
            container_height,
            input,
        } => run_fit(*container_width, *container_height, input),
        Commands::Pipeline { ops, files } => {
            let ops = read_pipeline(ops)?;
            run_edit(&files.input, &files.output, &ops)
        }
        command => {
            let op = command
                .operation(config.thumbnail_width)
                .context("command has no operation")?;
            let files = command.files().context("command has no input/output")?;
            run_edit(&files.input, &files.output, &[op])
        }
    }
}

fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_edit(input: &Path, output: &Path, ops: &[Operation]) -> Result<()> {
    let original = imedit_io::load_image(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let mut session = EditSession::new(original);

    for op in ops {
        session
            .apply(op)
            .with_context(|| format!("{} failed", op.label()))?;
    }

    let (orig_w, orig_h) = get_dimensions(session.original());
    let edited = session.into_edited();
    tracing::debug!(
        "{orig_w}x{orig_h} -> {}x{} after {} operation(s)",
        edited.width(),
        edited.height(),
        ops.len()
    );

    imedit_io::save_image(&edited, output)
        .with_context(|| format!("failed to save {}", output.display()))?;
    Ok(())
}

fn read_pipeline(path: &Path) -> Result<Vec<Operation>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let ops: Vec<Operation> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid operation list", path.display()))?;
    if ops.is_empty() {
        tracing::warn!("{} contains no operations, output will match input", path.display());
    }
    Ok(ops)
}

fn run_fit(container_w: u32, container_h: u32, input: &Path) -> Result<()> {
    let image = imedit_io::load_image(input)
        .with_context(|| format!("failed to open {}", input.display()))?;
    let (image_w, image_h) = get_dimensions(&image);
    let (w, h) = aspect_fit(container_w, container_h, image_w, image_h)?;
    println!("{w}x{h}");
    Ok(())
}
