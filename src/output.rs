//! Asset persistence: directory creation and image encoding, for RGB
//! placeholders and RGBA accessory swatches.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::{debug, info};

use crate::adapters::raster::Canvas;
use crate::error::{PersistCause, PlaceholderError};
use crate::placeholder::Swatch;

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encodings an asset can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lossy JPEG.
    Jpeg,
    /// Lossless PNG.
    Png,
    /// Lossless WebP.
    WebP,
}

impl Encoding {
    /// Pick the encoding from the file extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`PersistCause::UnsupportedFormat`] for a missing or unknown
    /// extension.
    pub fn from_path(path: &Path) -> Result<Self, PersistCause> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::WebP),
            _ => Err(PersistCause::UnsupportedFormat(ext)),
        }
    }
}

/// Writes canvases to disk, creating output directories as needed.
///
/// Existing files at the destination are overwritten. Writes are not atomic.
#[derive(Debug, Clone, Copy)]
pub struct AssetWriter {
    jpeg_quality: u8,
}

impl Default for AssetWriter {
    fn default() -> Self {
        Self { jpeg_quality: DEFAULT_JPEG_QUALITY }
    }
}

impl AssetWriter {
    /// Create a writer that encodes JPEG at `jpeg_quality` (1-100).
    #[must_use]
    pub fn new(jpeg_quality: u8) -> Self {
        Self { jpeg_quality: jpeg_quality.clamp(1, 100) }
    }

    /// Encode `canvas` to `path`, choosing the encoding by extension.
    ///
    /// The parent directory is created if missing; an existing directory is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceholderError::Persist`] carrying `path` if the extension
    /// is unsupported, the directory cannot be created, or the file cannot be
    /// encoded or written.
    pub fn write(&self, canvas: &Canvas, path: &Path) -> Result<PathBuf, PlaceholderError> {
        let (width, height) = canvas.dimensions();
        self.persist(canvas.as_raw(), width, height, ExtendedColorType::Rgb8, path)
    }

    /// Encode an RGBA `swatch` to `path`, keeping its alpha channel.
    ///
    /// Only PNG and WebP can carry alpha; a JPEG destination is refused
    /// before anything touches the disk.
    ///
    /// # Errors
    ///
    /// As [`AssetWriter::write`], plus [`PersistCause::NoAlpha`] for JPEG.
    pub fn write_swatch(&self, swatch: &Swatch, path: &Path) -> Result<PathBuf, PlaceholderError> {
        let (width, height) = swatch.dimensions();
        self.persist(swatch.as_raw(), width, height, ExtendedColorType::Rgba8, path)
    }

    fn persist(
        &self,
        raw: &[u8],
        width: u32,
        height: u32,
        color: ExtendedColorType,
        path: &Path,
    ) -> Result<PathBuf, PlaceholderError> {
        self.try_write(raw, width, height, color, path)
            .map(|()| path.to_path_buf())
            .map_err(|source| PlaceholderError::Persist { path: path.to_path_buf(), source })
    }

    fn try_write(
        &self,
        raw: &[u8],
        width: u32,
        height: u32,
        color: ExtendedColorType,
        path: &Path,
    ) -> Result<(), PersistCause> {
        let encoding = Encoding::from_path(path)?;
        if encoding == Encoding::Jpeg && color == ExtendedColorType::Rgba8 {
            return Err(PersistCause::NoAlpha("jpeg"));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(PersistCause::CreateDir)?;
        }

        let file = File::create(path).map_err(PersistCause::Write)?;
        let mut out = BufWriter::new(file);
        debug!(path = %path.display(), ?encoding, ?color, width, height, "encoding asset");

        match encoding {
            Encoding::Jpeg => JpegEncoder::new_with_quality(&mut out, self.jpeg_quality)
                .write_image(raw, width, height, color)?,
            Encoding::Png => PngEncoder::new(&mut out).write_image(raw, width, height, color)?,
            Encoding::WebP => {
                WebPEncoder::new_lossless(&mut out).write_image(raw, width, height, color)?;
            }
        }

        out.flush().map_err(PersistCause::Write)?;
        info!(path = %path.display(), "wrote asset");
        Ok(())
    }
}
