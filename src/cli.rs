//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use crate::placeholder::{Accessory, Kind};

/// Generate the default face and full-body placeholder images.
#[derive(Parser, Debug)]
#[command(name = "placegen", version, about)]
pub struct Cli {
    /// Output directory [default: assets].
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output format: jpeg, png, webp [default: jpeg].
    #[arg(short, long)]
    pub format: Option<String>,

    /// JPEG quality, 1-100 [default: 95].
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Generate only this placeholder.
    #[arg(long, value_enum)]
    pub only: Option<Kind>,

    /// Also write the RGBA accessory overlays (glasses, hat) as PNG.
    #[arg(long)]
    pub accessories: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write every draw call to this YAML file.
    #[arg(long)]
    pub record_ops: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The placeholder kinds selected on the command line.
    #[must_use]
    pub fn kinds(&self) -> Vec<Kind> {
        match self.only {
            Some(kind) => vec![kind],
            None => Kind::ALL.to_vec(),
        }
    }

    /// The accessory overlays selected on the command line.
    #[must_use]
    pub fn accessories(&self) -> Vec<Accessory> {
        if self.accessories {
            Accessory::ALL.to_vec()
        } else {
            Vec::new()
        }
    }
}
