//! Overlay accessories for the face filter: flat, half-transparent swatches.
//!
//! Unlike the face and person layouts these carry an alpha channel, so they
//! are plain RGBA fills rather than painted layouts. They are always written
//! as PNG.

use std::fmt;

use image::{Rgba, RgbaImage};

/// Canvas type for accessories.
pub type Swatch = RgbaImage;

/// Alpha shared by every accessory (about 50% opaque).
pub const ACCESSORY_ALPHA: u8 = 128;

/// Accessory overlays the face filter loads with their alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessory {
    /// Yellow band laid across the eyes.
    Glasses,
    /// Magenta block placed above the head.
    Hat,
}

impl Accessory {
    /// Every accessory, in the order the CLI writes them.
    pub const ALL: [Accessory; 2] = [Accessory::Glasses, Accessory::Hat];

    /// Width and height in pixels.
    #[must_use]
    pub fn size(self) -> (u32, u32) {
        match self {
            Accessory::Glasses => (100, 50),
            Accessory::Hat => (120, 60),
        }
    }

    /// Fill color, RGBA.
    #[must_use]
    pub fn color(self) -> Rgba<u8> {
        match self {
            Accessory::Glasses => Rgba([255, 255, 0, ACCESSORY_ALPHA]),
            Accessory::Hat => Rgba([255, 0, 255, ACCESSORY_ALPHA]),
        }
    }

    /// File name, without extension, the face filter looks for.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Accessory::Glasses => "glasses",
            Accessory::Hat => "funny_hat",
        }
    }

    /// Render the swatch.
    #[must_use]
    pub fn generate(self) -> Swatch {
        let (width, height) = self.size();
        RgbaImage::from_pixel(width, height, self.color())
    }
}

impl fmt::Display for Accessory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessory::Glasses => f.write_str("glasses"),
            Accessory::Hat => f.write_str("hat"),
        }
    }
}
