//! Placegen - placeholder face and person images for the face-swap pipeline.

mod adapters;
mod cli;
mod config;
mod error;
mod layout;
mod oplog;
mod output;
mod params;
mod placeholder;
mod ports;
mod render;

use std::path::Path;
use std::process;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::PlaceholderError;
use crate::oplog::OpLog;
use crate::output::AssetWriter;
use crate::params::{format_extension, validate_format, validate_quality};
use crate::placeholder::{generate_recorded, Kind};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: &Cli) -> Result<(), PlaceholderError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(PlaceholderError::Config)?;
    debug!(path = %config_path.display(), "loaded config");

    // CLI flags win over the config file
    let dir = cli.output_dir.clone().unwrap_or(config.output.dir);
    let format = cli.format.clone().unwrap_or(config.output.format);
    let quality = cli.quality.unwrap_or(config.output.jpeg_quality);
    validate_format(&format).map_err(PlaceholderError::InvalidArgument)?;
    validate_quality(quality).map_err(PlaceholderError::InvalidArgument)?;

    let writer = AssetWriter::new(quality);
    let mut op_log = cli.record_ops.as_ref().map(OpLog::new);
    let kinds = cli.kinds();
    let accessories = cli.accessories();
    let mut failed = 0;

    for kind in &kinds {
        eprintln!("Creating {kind} placeholder...");
        let layout = kind.layout();
        let canvas = match op_log.as_mut() {
            Some(log) => {
                let (canvas, ops) = generate_recorded(layout);
                log.record(layout, ops);
                canvas
            }
            None => kind.generate(),
        };

        let path = dir.join(format!("{}.{}", kind.file_stem(), format_extension(&format)));
        match writer.write(&canvas, &path) {
            Ok(path) => eprintln!("Created: {}", path.display()),
            Err(e) => {
                error!(kind = %kind, "{e}");
                failed += 1;
            }
        }
    }

    // Accessories keep their alpha, so they are PNG whatever --format says
    for accessory in &accessories {
        eprintln!("Creating {accessory} accessory...");
        let path = dir.join(format!("{}.png", accessory.file_stem()));
        match writer.write_swatch(&accessory.generate(), &path) {
            Ok(path) => eprintln!("Created: {}", path.display()),
            Err(e) => {
                error!(accessory = %accessory, "{e}");
                failed += 1;
            }
        }
    }

    if let Some(log) = op_log {
        let path = log.finish().map_err(|e| PlaceholderError::OpsLog(e.to_string()))?;
        eprintln!("Draw ops saved: {}", path.display());
    }

    if failed > 0 {
        return Err(PlaceholderError::Incomplete { failed, total: kinds.len() + accessories.len() });
    }

    print_usage_tips(&dir, format_extension(&format), &kinds);
    Ok(())
}

fn print_usage_tips(dir: &Path, ext: &str, kinds: &[Kind]) {
    println!("Placeholder images created.");
    println!();
    println!("Usage:");
    for kind in kinds {
        let path = dir.join(format!("{}.{ext}", kind.file_stem()));
        match kind {
            Kind::Face => println!("  - Face swap: replace '{}' with a face photo", path.display()),
            Kind::Person => {
                println!("  - Full body: replace '{}' with a full-body photo", path.display());
            }
        }
    }
    println!();
    println!("Tips:");
    println!("  - Use high-quality images (at least 512x512 for faces)");
    println!("  - Face images should be frontal-facing and well-lit");
    println!("  - Full body images should show the entire person");
    println!("  - JPG or PNG formats are supported");
}
