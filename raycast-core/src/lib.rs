pub mod collision;
pub mod column;
pub mod consts;
pub mod error;
pub mod framebuffer;
pub mod grid;
pub mod input;
pub mod pose;
pub mod raycast;
pub mod render;
pub mod scene;
pub mod texture;
pub mod vector;

pub use error::RaycastError;
pub use grid::{Grid, GridWorld};
pub use input::InputSnapshot;
pub use pose::Pose;
pub use raycast::RayHit;
pub use scene::{Scene, SpriteInstance};
pub use texture::{sprite_dict, texture_dict, SpriteDict, Texture, TextureDict};
pub use vector::Vector;

use framebuffer::{DepthBuffer, Framebuffer};

// Owns framebuffer, depth buffer and pose. Textures/sprites are not owned
// here -- passed in fresh each render via Scene.
pub struct Engine {
    framebuffer: Framebuffer,
    depth: DepthBuffer,
    pose: Pose,
}

impl Engine {
    pub fn new(width: usize, height: usize, pose: Pose) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            depth: DepthBuffer::new(width),
            pose,
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn update<G: GridWorld + ?Sized>(
        &mut self,
        dt_seconds: f32,
        input: InputSnapshot<'_>,
        grid: &G,
    ) {
        pose::update(dt_seconds, input, &mut self.pose, grid);
    }

    // wall strips first, then sprites depth-tested against them
    pub fn render<G: GridWorld + ?Sized>(&mut self, scene: &Scene<'_, G>) {
        render::render_walls(
            &mut self.framebuffer,
            &mut self.depth,
            scene.grid,
            scene.textures,
            &self.pose,
        );
        for sprite in scene.sprites {
            if let Some(texture) = scene.sprite_textures.get(sprite.sprite_id) {
                render::render_sprite(
                    &mut self.framebuffer,
                    &self.depth,
                    texture,
                    &self.pose,
                    sprite.position,
                );
            }
        }
    }
}
