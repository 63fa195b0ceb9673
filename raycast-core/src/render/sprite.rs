use crate::column::draw_column;
use crate::consts::FOV_DEG;
use crate::framebuffer::{DepthBuffer, Framebuffer};
use crate::pose::Pose;
use crate::texture::Texture;
use crate::vector::Vector;

// projects a unit-width billboard at sprite_position into screen space and
// composites it against depth, the buffer render_walls already filled in.
// must run after the wall pass.
pub fn render_sprite(
    framebuffer: &mut Framebuffer,
    depth: &DepthBuffer,
    texture: &Texture<'_>,
    pose: &Pose,
    sprite_position: Vector,
) {
    let width = framebuffer.width();
    let height = framebuffer.height();

    let offset = sprite_position - pose.position;
    let tangent = pose.direction.tangent();
    let dist = offset.dot(pose.direction);
    let east = offset.dot(tangent);

    if dist < 0.1 {
        return;
    }

    let fov_rad = FOV_DEG.to_radians();
    let scale = (width as f32 / 2.0) / (fov_rad / 2.0).tan();

    let x_right = width as f32 / 2.0 + scale * (east + 0.5) / dist;
    let x_left = width as f32 / 2.0 + scale * (east - 0.5) / dist;
    if x_right <= x_left {
        return;
    }
    let tu = 1.0 / (x_right - x_left);

    let projected_height = (height as f32 / 2.0) / dist;
    let y_hi = (height as f32 / 2.0 - projected_height / 2.0) as isize;
    let y_lo = (height as f32 / 2.0 + projected_height / 2.0) as isize;
    if y_lo <= y_hi {
        return;
    }

    // u advances on every iteration, including depth-culled columns, except
    // the x < 0 clip, which is skipped without advancing it. preserved
    // verbatim rather than "fixed" to advance uniformly.
    let mut u = 0.0f32;
    let mut x = x_left as isize;
    let x_end = x_right as isize;
    while x < x_end {
        if x >= width as isize {
            break;
        }
        if x < 0 {
            x += 1;
            continue;
        }
        if dist <= depth.as_slice()[x as usize] {
            draw_column(
                framebuffer,
                texture,
                x as usize,
                y_hi,
                y_lo,
                u.clamp(0.0, 1.0),
                true,
            );
        }
        u += tu;
        x += 1;
    }
}
