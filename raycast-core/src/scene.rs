use crate::grid::GridWorld;
use crate::texture::{SpriteDict, TextureDict};
use crate::vector::Vector;

#[derive(Debug, Clone, Copy)]
pub struct SpriteInstance {
    pub position: Vector,
    pub sprite_id: usize,
}

// everything Engine::render needs besides the player pose, all borrowed
pub struct Scene<'a, G: GridWorld + ?Sized> {
    pub grid: &'a G,
    pub textures: &'a TextureDict<'a>,
    pub sprite_textures: &'a SpriteDict<'a>,
    pub sprites: &'a [SpriteInstance],
}
