//! Records draw calls per asset and writes them as a YAML log.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::adapters::recording::DrawOp;
use crate::layout::Layout;

/// Draw calls made while rendering one asset.
#[derive(Debug, Serialize)]
pub struct AssetOps {
    /// Layout name.
    pub name: &'static str,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Calls in the order they were made.
    pub ops: Vec<DrawOp>,
}

#[derive(Serialize)]
struct OpLogFile<'a> {
    recorded_at: DateTime<Utc>,
    assets: &'a [AssetOps],
}

/// Collects per-asset draw calls and writes them to one YAML file.
#[derive(Debug)]
pub struct OpLog {
    path: PathBuf,
    assets: Vec<AssetOps>,
}

impl OpLog {
    /// Create a log that will write to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), assets: Vec::new() }
    }

    /// Add the calls made while rendering `layout`.
    pub fn record(&mut self, layout: &Layout, ops: Vec<DrawOp>) {
        self.assets.push(AssetOps {
            name: layout.name,
            width: layout.width,
            height: layout.height,
            ops,
        });
    }

    /// Write the log to disk, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be serialized or written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let file = OpLogFile { recorded_at: Utc::now(), assets: &self.assets };
        let yaml = serde_yaml::to_string(&file).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
