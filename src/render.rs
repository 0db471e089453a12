use std::collections::HashMap;

use image::RgbaImage;

use crate::{Block, DecodedSchematic, Direction, DirectionSet};

/// Produces the image a block is drawn with, given the block and its cache
/// key. Blocks with equal keys must get equal sprites.
pub trait Sprites {
    fn sprite(&self, block: &Block, key: &str, size: u32) -> RgbaImage;
}

/// Sprites by cache key, for a single zoom level.
#[derive(Default)]
pub struct SpriteCache {
    zoom: u32,
    sprites: HashMap<String, RgbaImage>,
}

impl SpriteCache {
    pub fn new(zoom: u32) -> Self {
        Self {
            zoom,
            sprites: HashMap::new(),
        }
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Change the zoom level. Cached sprites are the wrong size afterwards so
    /// they are dropped.
    pub fn set_zoom(&mut self, zoom: u32) {
        if zoom != self.zoom {
            self.sprites.clear();
            self.zoom = zoom;
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn get_or_insert_with(
        &mut self,
        key: &str,
        f: impl FnOnce(u32) -> RgbaImage,
    ) -> &RgbaImage {
        let zoom = self.zoom;
        self.sprites
            .entry(key.to_string())
            .or_insert_with(|| f(zoom))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per block.
    pub zoom: u32,
    /// How many layers below an air block to look for something to draw.
    pub see_through: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            zoom: 16,
            see_through: 0,
        }
    }
}

/// Draws horizontal slices of a schematic as seen from above, north at the
/// top.
pub struct TopDownRenderer<'a, S: Sprites> {
    sprites: &'a S,
    cache: SpriteCache,
    options: RenderOptions,
}

impl<'a, S: Sprites> TopDownRenderer<'a, S> {
    pub fn new(sprites: &'a S, options: RenderOptions) -> Self {
        Self {
            sprites,
            cache: SpriteCache::new(options.zoom),
            options,
        }
    }

    pub fn set_zoom(&mut self, zoom: u32) {
        self.options.zoom = zoom;
        self.cache.set_zoom(zoom);
    }

    pub fn cache(&self) -> &SpriteCache {
        &self.cache
    }

    pub fn render_layer(&mut self, schematic: &DecodedSchematic, y: usize) -> RgbaImage {
        let (width, _, length) = schematic.size();
        let RenderOptions { zoom, see_through } = self.options;
        let mut img = RgbaImage::new(width as u32 * zoom, length as u32 * zoom);

        for z in 0..length {
            for x in 0..width {
                let (block, by) = match visible_block(schematic, x, y, z, see_through) {
                    Some(found) => found,
                    None => continue,
                };

                let connections = schematic.connections(x, by, z);
                let key = block.cache_key_with(&connections);
                let sprites = self.sprites;
                let sprite = self
                    .cache
                    .get_or_insert_with(&key, |size| sprites.sprite(block, &key, size));

                let masked;
                let sprite = if block.is_connectable() {
                    masked = connection_mask(sprite, &connections);
                    &masked
                } else {
                    sprite
                };

                blit(&mut img, sprite, x as u32 * zoom, z as u32 * zoom);
            }
        }

        img
    }
}

/// The first non-air block at or below `y`, within `depth` layers.
fn visible_block(
    schematic: &DecodedSchematic,
    x: usize,
    y: usize,
    z: usize,
    depth: usize,
) -> Option<(&Block, usize)> {
    (y.saturating_sub(depth)..=y)
        .rev()
        .filter_map(|by| schematic.block(x, by, z).map(|b| (b, by)))
        .find(|(b, _)| !b.is_air())
}

/// Cut a sprite down to a centre post plus an arm toward each connection.
fn connection_mask(sprite: &RgbaImage, connections: &DirectionSet) -> RgbaImage {
    let size = sprite.width();
    let (lo, hi) = (size * 3 / 8, size - size * 3 / 8);

    let mut out = RgbaImage::new(size, sprite.height());
    for (px, py, pixel) in sprite.enumerate_pixels() {
        let in_x = px >= lo && px < hi;
        let in_z = py >= lo && py < hi;

        let keep = (in_x && in_z)
            || (in_x && py < lo && connections.contains(Direction::North))
            || (in_x && py >= hi && connections.contains(Direction::South))
            || (in_z && px < lo && connections.contains(Direction::West))
            || (in_z && px >= hi && connections.contains(Direction::East));

        if keep {
            out.put_pixel(px, py, *pixel);
        }
    }
    out
}

fn blit(img: &mut RgbaImage, sprite: &RgbaImage, x: u32, y: u32) {
    for (px, py, pixel) in sprite.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        if x + px < img.width() && y + py < img.height() {
            img.put_pixel(x + px, y + py, *pixel);
        }
    }
}
