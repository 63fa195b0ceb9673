use crate::collision::slide;
use crate::consts::{TURN_SPEED_DEG, WALK_SPEED};
use crate::grid::GridWorld;
use crate::input::{InputSnapshot, SCANCODE_A, SCANCODE_D, SCANCODE_S, SCANCODE_W};
use crate::vector::{normalize, rotate, Vector};

// direction kept unit-length at the boundary of every public operation
// (tolerance [0.99, 1.01] on |direction|^2 before any rotation).
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub position: Vector,
    pub direction: Vector,
}

impl Pose {
    pub fn new(position: Vector, direction: Vector) -> Self {
        Self { position, direction }
    }
}

// Per-axis displacement read off a frame's input, independent of which
// scancodes produced it. A host that wants A/D to strafe instead of turn
// builds its own Controls and calls apply() directly, without touching
// collision or render code.
pub struct Controls {
    pub forward: f32,
    pub strafe: f32,
    pub turn: f32,
}

impl Controls {
    // W/S -> forward, A/D -> turn, the literal mapping update() uses.
    pub fn from_snapshot(input: InputSnapshot<'_>) -> Self {
        Self {
            forward: input.is_held(SCANCODE_W) as i32 as f32 - input.is_held(SCANCODE_S) as i32 as f32,
            strafe: 0.0,
            turn: input.is_held(SCANCODE_D) as i32 as f32 - input.is_held(SCANCODE_A) as i32 as f32,
        }
    }

    pub fn apply<G: GridWorld + ?Sized>(&self, dt_seconds: f32, pose: &mut Pose, grid: &G) {
        if self.forward != 0.0 || self.strafe != 0.0 {
            let tangent = pose.direction.tangent();
            let displacement =
                (pose.direction * self.forward + tangent * self.strafe) * (WALK_SPEED * dt_seconds);
            pose.position = slide(grid, pose.position, displacement);
        }

        // re-normalize before rotating to contain drift from repeated small-angle rotations
        pose.direction = normalize(pose.direction);
        if self.turn != 0.0 {
            let angle = TURN_SPEED_DEG.to_radians() * self.turn * dt_seconds;
            pose.direction = rotate(pose.direction, angle);
        }
    }
}

pub fn update<G: GridWorld + ?Sized>(
    dt_seconds: f32,
    input: InputSnapshot<'_>,
    pose: &mut Pose,
    grid: &G,
) {
    Controls::from_snapshot(input).apply(dt_seconds, pose, grid);
}
