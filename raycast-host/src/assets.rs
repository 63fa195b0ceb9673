//! Texture/sprite asset loading: a PNG from `asset_dir` via the `image`
//! crate if present, otherwise a procedurally generated placeholder.
//! Mirrors the teacher's `textures.rs` load-or-fall-back-to-a-pattern
//! atlas, but the placeholder is generated once at startup rather than
//! computed per-texel at sample time.

use raycast_core::consts::CHROMA_KEY;
use raycast_core::{SpriteDict, Texture, TextureDict};
use std::path::Path;

use crate::config::HostError;

const TEX_SIZE: usize = 32;

/// Distinct base colours for the seven wall texture slots and three demo
/// sprites, so a bundled-default run is visually legible without any PNGs
/// on disk.
const WALL_PALETTE: [((u8, u8, u8), (u8, u8, u8)); 7] = [
    ((180, 60, 60), (120, 30, 30)),
    ((60, 120, 180), (30, 70, 120)),
    ((90, 160, 90), (50, 100, 50)),
    ((200, 180, 80), (140, 120, 40)),
    ((160, 90, 160), (100, 50, 100)),
    ((90, 90, 90), (50, 50, 50)),
    ((220, 140, 60), (160, 90, 30)),
];

const SPRITE_PALETTE: [(u8, u8, u8); 3] = [(220, 60, 200), (80, 200, 220), (220, 200, 60)];

/// Owns the decoded (or generated) RGB8 pixel buffers that `texture_dict`
/// and `sprite_dict` hand out borrowed `Texture` views over.
pub struct AssetStore {
    wall_buffers: Vec<Vec<u8>>,
    sprite_buffers: Vec<Vec<u8>>,
}

impl AssetStore {
    pub fn load(asset_dir: Option<&Path>) -> Self {
        let mut wall_buffers = Vec::with_capacity(WALL_PALETTE.len());
        for (index, (c1, c2)) in WALL_PALETTE.iter().enumerate() {
            let cell_value = index + 1;
            let buffer = asset_dir
                .and_then(|dir| {
                    let path = dir.join(format!("wall{cell_value}.png"));
                    load_png(&path)
                        .map_err(|err| log::warn!("{err}, using a procedural wall texture"))
                        .ok()
                })
                .unwrap_or_else(|| checkerboard(*c1, *c2));
            wall_buffers.push(buffer);
        }

        let mut sprite_buffers = Vec::with_capacity(SPRITE_PALETTE.len());
        for (index, fg) in SPRITE_PALETTE.iter().enumerate() {
            let buffer = asset_dir
                .and_then(|dir| {
                    let path = dir.join(format!("sprite{index}.png"));
                    load_png(&path)
                        .map_err(|err| log::warn!("{err}, using a procedural sprite"))
                        .ok()
                })
                .unwrap_or_else(|| sprite_disc(*fg));
            sprite_buffers.push(buffer);
        }

        Self {
            wall_buffers,
            sprite_buffers,
        }
    }

    /// Builds a fresh `TextureDict` borrowing this store's buffers. Cheap
    /// enough to call once at startup; the dict only holds references.
    pub fn texture_dict(&self) -> TextureDict<'_> {
        let mut dict = TextureDict::new();
        for (index, buffer) in self.wall_buffers.iter().enumerate() {
            let cell_value = (index + 1) as u8;
            dict.set(cell_value, Texture::new(buffer, TEX_SIZE, TEX_SIZE, TEX_SIZE * 3, 3));
        }
        dict
    }

    pub fn sprite_dict(&self) -> SpriteDict<'_> {
        let mut dict = SpriteDict::new();
        for (id, buffer) in self.sprite_buffers.iter().enumerate() {
            dict.set(id, Texture::new(buffer, TEX_SIZE, TEX_SIZE, TEX_SIZE * 3, 3));
        }
        dict
    }
}

fn load_png(path: &Path) -> Result<Vec<u8>, HostError> {
    let image = image::open(path).map_err(|source| HostError::TextureDecode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgb8().into_raw())
}

fn checkerboard(c1: (u8, u8, u8), c2: (u8, u8, u8)) -> Vec<u8> {
    let tile = (TEX_SIZE / 8).max(1);
    let mut buf = vec![0u8; TEX_SIZE * TEX_SIZE * 3];
    for y in 0..TEX_SIZE {
        for x in 0..TEX_SIZE {
            let even = ((x / tile) + (y / tile)) % 2 == 0;
            let color = if even { c1 } else { c2 };
            let offset = (y * TEX_SIZE + x) * 3;
            buf[offset] = color.0;
            buf[offset + 1] = color.1;
            buf[offset + 2] = color.2;
        }
    }
    buf
}

/// A disc of `fg` ringed by the chroma-key colour, so the sprite
/// renderer's transparency path has something to demonstrate without a
/// real asset on disk.
fn sprite_disc(fg: (u8, u8, u8)) -> Vec<u8> {
    let center = TEX_SIZE as f32 / 2.0;
    let radius = center * 0.8;
    let mut buf = vec![0u8; TEX_SIZE * TEX_SIZE * 3];
    for y in 0..TEX_SIZE {
        for x in 0..TEX_SIZE {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let color = if (dx * dx + dy * dy).sqrt() <= radius { fg } else { CHROMA_KEY };
            let offset = (y * TEX_SIZE + x) * 3;
            buf[offset] = color.0;
            buf[offset + 1] = color.1;
            buf[offset + 2] = color.2;
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn procedural_fallback_populates_every_wall_slot() {
        let store = AssetStore::load(None);
        let dict = store.texture_dict();
        for cell_value in 1u8..=7 {
            assert!(dict.get(cell_value).is_some());
        }
    }

    #[test]
    fn sprite_disc_contains_the_chroma_key_at_its_corner() {
        let buf = sprite_disc((10, 20, 30));
        // Corner texel is outside the disc radius, so it must be chroma-keyed.
        assert_eq!((buf[0], buf[1], buf[2]), CHROMA_KEY);
    }
}
