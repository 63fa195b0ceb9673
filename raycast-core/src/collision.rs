use crate::consts::PLANE_OFFSET;
use crate::grid::GridWorld;
use crate::raycast::cast_ray;
use crate::vector::{ray_plane_intersect, Vector};

// Resolves against a plane offset PLANE_OFFSET inward from the hit wall
// rather than the hit point itself, so oblique displacement keeps its
// tangential component instead of stopping dead. Only one raycast per call;
// a collision introduced by the slide itself is not re-checked, so corner
// wedging is possible.
//
// The no-hit case is read off cast_ray's None, not off travel -- the DDA
// also reports travel = 1.0 internally on a miss, but that value never
// reaches here.
pub fn slide<G: GridWorld + ?Sized>(grid: &G, position: Vector, displacement: Vector) -> Vector {
    if displacement.n == 0.0 && displacement.e == 0.0 {
        return position;
    }

    let end = position + displacement;
    let Some(hit) = cast_ray(grid, position, end) else {
        return end;
    };

    let plane_d = -hit.normal.dot(hit.point) - PLANE_OFFSET;
    match ray_plane_intersect(hit.normal, plane_d, position, displacement) {
        Some(f) => position + displacement * f,
        None => position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn bordered_room(size: usize) -> Grid {
        let mut cells = vec![0u8; size * size];
        for x in 0..size {
            for y in 0..size {
                if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
                    cells[y * size + x] = 1;
                }
            }
        }
        Grid::new(size, size, cells)
    }

    #[test]
    fn zero_displacement_is_a_no_op() {
        let grid = bordered_room(4);
        let p = Vector::new(2.0, 2.0);
        assert_eq!(slide(&grid, p, Vector::ZERO), p);
    }

    #[test]
    fn unobstructed_motion_moves_freely() {
        let grid = bordered_room(4);
        let p = Vector::new(2.0, 2.0);
        let d = Vector::new(0.1, 0.0);
        let result = slide(&grid, p, d);
        assert!((result.n - 2.1).abs() < 1e-5);
        assert!((result.e - 2.0).abs() < 1e-5);
    }

    #[test]
    fn head_on_motion_stops_short_of_the_wall() {
        let grid = bordered_room(4);
        // wall's south face sits at n = 3.0
        let p = Vector::new(2.9, 2.0);
        let d = Vector::new(1.0, 0.0);
        let result = slide(&grid, p, d);
        assert!(result.n <= 3.0 - PLANE_OFFSET + 1e-4);
        assert!(result.n > 2.9);
    }

    #[test]
    fn oblique_motion_keeps_tangential_component() {
        let grid = bordered_room(6);
        let p = Vector::new(4.5, 2.5);
        let d = Vector::new(0.8, 0.3);
        let result = slide(&grid, p, d);
        assert!(result.e > 2.5, "tangential motion should continue");
        assert!(result.n <= 5.0 - PLANE_OFFSET + 1e-4);
    }

    #[test]
    fn no_wall_penetration_after_repeated_updates() {
        let grid = bordered_room(4);
        let mut p = Vector::new(2.0, 2.0);
        for _ in 0..50 {
            p = slide(&grid, p, Vector::new(0.5, 0.0));
        }
        assert!(p.n <= 3.0 - PLANE_OFFSET + 1e-4);
    }
}
