pub const WIDTH: usize = 240;
pub const HEIGHT: usize = 320;
pub const BPP: usize = 4;

pub const FOV_DEG: f32 = 60.0;

pub const WALK_SPEED: f32 = 1.25;
pub const TURN_SPEED_DEG: f32 = 45.0;

// below this magnitude a dot product counts as "parallel to the plane"
pub const EPSILON: f32 = 1e-5;

pub const PLANE_OFFSET: f32 = 0.05;

pub const FAR_PLANE: f32 = 100.0;

// tuned for the 240x320 portrait framebuffer
pub const WALL_HEIGHT_FACTOR: f32 = 2.2;

pub const MAX_TEXTURES: usize = 8;
pub const MAX_SPRITES: usize = 8;

pub const CHROMA_KEY: (u8, u8, u8) = (0xFF, 0x00, 0xFF);

// 0 is empty, [1, MAX_TEXTURES - 1] are walls
pub const MAX_CELL_VALUE: u8 = 7;
