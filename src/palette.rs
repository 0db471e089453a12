use std::{collections::HashMap, error::Error, fmt::Display, io::Read};

use image::RgbaImage;
use log::debug;

use crate::{Block, Sprites};

pub type Rgba = [u8; 4];

const MISSING: Rgba = [255, 0, 255, 255];

/// Flat colour sprites from a JSON map of cache key, or bare block name, to
/// RGBA.
///
/// ```json
/// { "minecraft:stone": [125, 125, 125, 255], "minecraft:wool|color=red": [161, 39, 34, 255] }
/// ```
pub struct ColourPalette {
    pub colours: HashMap<String, Rgba>,
}

impl ColourPalette {
    pub fn new(colours: HashMap<String, Rgba>) -> Self {
        Self { colours }
    }

    pub fn from_reader(json: impl Read) -> std::result::Result<Self, PaletteError> {
        let colours: HashMap<String, Rgba> =
            serde_json::from_reader(json).map_err(PaletteError::new)?;
        Ok(Self::new(colours))
    }

    pub fn pick(&self, block: &Block, key: &str) -> Rgba {
        if block.is_air() {
            return [0, 0, 0, 0];
        }

        let name = key.split('|').next().unwrap_or(key);
        let col = self.colours.get(key).or_else(|| self.colours.get(name));

        match col {
            Some(c) => *c,
            None => {
                debug!("could not draw {}", key);
                MISSING
            }
        }
    }
}

impl Sprites for ColourPalette {
    fn sprite(&self, block: &Block, key: &str, size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, image::Rgba(self.pick(block, key)))
    }
}

#[derive(Debug)]
pub struct PaletteError(String);

impl PaletteError {
    fn new(err: impl Error) -> PaletteError {
        Self(err.to_string())
    }
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for PaletteError {}
