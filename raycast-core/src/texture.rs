use crate::consts::{MAX_SPRITES, MAX_TEXTURES};

// read-only reference to an externally-decoded RGB(A) pixel buffer; the
// core never owns texture storage, callers must keep it alive
#[derive(Debug, Clone, Copy)]
pub struct Texture<'a> {
    pixels: &'a [u8],
    width: usize,
    height: usize,
    row_stride: usize,
    bytes_per_pixel: usize,
}

impl<'a> Texture<'a> {
    pub fn new(
        pixels: &'a [u8],
        width: usize,
        height: usize,
        row_stride: usize,
        bytes_per_pixel: usize,
    ) -> Self {
        debug_assert!(pixels.len() >= row_stride * height, "texture buffer too small");
        Self {
            pixels,
            width,
            height,
            row_stride,
            bytes_per_pixel,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texel_rgb(&self, tx: usize, ty: usize) -> (u8, u8, u8) {
        let offset = ty * self.row_stride + tx * self.bytes_per_pixel;
        (
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        )
    }
}

// fixed-capacity mapping from wall cell value [1, MAX_TEXTURES) to texture;
// index 0 is reserved, empty cells never sample a texture
#[derive(Default)]
pub struct TextureDict<'a> {
    slots: [Option<Texture<'a>>; MAX_TEXTURES],
}

impl<'a> TextureDict<'a> {
    pub fn new() -> Self {
        Self { slots: [None; MAX_TEXTURES] }
    }

    pub fn set(&mut self, cell_value: u8, texture: Texture<'a>) {
        debug_assert!((1..MAX_TEXTURES as u8).contains(&cell_value), "cell value out of range");
        self.slots[cell_value as usize] = Some(texture);
    }

    // None for the reserved slot 0 or an unpopulated entry, rather than
    // indexing the backing array directly
    pub fn get(&self, cell_value: u8) -> Option<&Texture<'a>> {
        self.slots.get(cell_value as usize)?.as_ref()
    }
}

#[derive(Default)]
pub struct SpriteDict<'a> {
    slots: [Option<Texture<'a>>; MAX_SPRITES],
}

impl<'a> SpriteDict<'a> {
    pub fn new() -> Self {
        Self { slots: [None; MAX_SPRITES] }
    }

    pub fn set(&mut self, sprite_id: usize, texture: Texture<'a>) {
        debug_assert!(sprite_id < MAX_SPRITES, "sprite id out of range");
        self.slots[sprite_id] = Some(texture);
    }

    pub fn get(&self, sprite_id: usize) -> Option<&Texture<'a>> {
        self.slots.get(sprite_id)?.as_ref()
    }
}

// Thin compatibility façade for host code that wants a "call a function, get
// a texture table" shape rather than spelling out `TextureDict::new()`/
// `SpriteDict::new()` itself. render() and cast_ray() never reach for a
// process-wide table -- they take a borrowed Scene instead -- so these just
// hand back a fresh, empty, fixed-capacity dict for the caller to populate.
pub fn texture_dict<'a>() -> TextureDict<'a> {
    TextureDict::new()
}

pub fn sprite_dict<'a>() -> SpriteDict<'a> {
    SpriteDict::new()
}
