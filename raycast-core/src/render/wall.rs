use crate::column::draw_column;
use crate::consts::{FAR_PLANE, FOV_DEG, WALL_HEIGHT_FACTOR};
use crate::framebuffer::{DepthBuffer, Framebuffer};
use crate::grid::GridWorld;
use crate::pose::Pose;
use crate::raycast::cast_ray;
use crate::texture::TextureDict;
use crate::vector::rotate;

// casts one ray per framebuffer column, fisheye-corrects its distance, and
// draws the resulting wall strip. must run before render_sprite, which reads
// the depth buffer this leaves behind.
pub fn render_walls<G: GridWorld + ?Sized>(
    framebuffer: &mut Framebuffer,
    depth: &mut DepthBuffer,
    grid: &G,
    textures: &TextureDict<'_>,
    pose: &Pose,
) {
    framebuffer.fill_background();
    depth.reset();

    let width = framebuffer.width();
    let height = framebuffer.height();
    let fov_rad = FOV_DEG.to_radians();
    let wall_height_scale = WALL_HEIGHT_FACTOR * (height as f32 / 2.0);

    for column in 0..width {
        let alpha = -fov_rad / 2.0 + column as f32 * (fov_rad / width as f32);
        let ray_dir = rotate(pose.direction, alpha);
        let far_point = pose.position + ray_dir * FAR_PLANE;

        let Some(hit) = cast_ray(grid, pose.position, far_point) else {
            depth.as_mut_slice()[column] = f32::INFINITY;
            continue;
        };

        // perpendicular, not euclidean, distance: projecting onto the
        // unscaled forward direction keeps straight walls straight instead
        // of bowing with fisheye distortion
        let offset = hit.point - pose.position;
        let perp_dist = offset.dot(pose.direction);
        depth.as_mut_slice()[column] = perp_dist;

        let wall_height = wall_height_scale / perp_dist;
        if wall_height > 50.0 * wall_height_scale {
            continue;
        }

        let y_hi = (height as f32 / 2.0 - wall_height / 2.0) as isize;
        let y_lo = (height as f32 / 2.0 + wall_height / 2.0) as isize;
        if y_lo <= y_hi {
            continue;
        }

        // east-facing normal means the wall runs north/south, so the north
        // coordinate is the one that varies along the face, and vice versa
        let u = if hit.normal.e != 0.0 {
            hit.point.n - hit.point.n.floor()
        } else {
            hit.point.e - hit.point.e.floor()
        };

        if let Some(texture) = textures.get(hit.cell_value) {
            draw_column(framebuffer, texture, column, y_hi, y_lo, u, false);
        }
    }
}
