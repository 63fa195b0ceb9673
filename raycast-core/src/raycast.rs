use crate::grid::GridWorld;
use crate::vector::Vector;

// None means the ray reached `end` without hitting anything -- the no-hit
// case is encoded in the Option, not in travel (the underlying DDA also
// sets travel to 1.0 on a miss, but callers should never branch on that).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub cell_value: u8,
    pub cell: (usize, usize),
    pub point: Vector,
    pub normal: Vector,
    pub travel: f32,
}

fn signum(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// casts a ray from start to end (world units, one cell = 1 unit) over grid
// and returns the first wall cell hit, if any.
//
// rays that exit the grid continue rather than terminating there -- they may
// re-enter bounds further along and still hit a wall. a ray parallel to an
// axis produces an infinite tMax on that axis (a nonzero numerator over a
// signed zero delta); that axis's branch is then never selected because the
// other axis's tMax is always smaller.
pub fn cast_ray<G: GridWorld + ?Sized>(grid: &G, start: Vector, end: Vector) -> Option<RayHit> {
    let dx = end.e - start.e;
    let dy = end.n - start.n;
    debug_assert!(dx != 0.0 || dy != 0.0, "cast_ray called with a zero-length ray");

    let step_x = signum(dx);
    let step_y = signum(dy);
    let t_delta_x = step_x / dx;
    let t_delta_y = step_y / dy;

    let first_boundary_x = if dx >= 0.0 { start.e.ceil() } else { start.e.floor() };
    let first_boundary_y = if dy >= 0.0 { start.n.ceil() } else { start.n.floor() };
    let df_x = first_boundary_x - start.e;
    let df_y = first_boundary_y - start.n;
    let mut t_max_x = (if df_x != 0.0 { df_x } else { step_x }) / dx;
    let mut t_max_y = (if df_y != 0.0 { df_y } else { step_y }) / dy;

    let mut x = start.e.floor() as isize;
    let mut y = start.n.floor() as isize;

    loop {
        let dist = t_max_x.min(t_max_y);
        if dist > 1.0 {
            return None;
        }

        let (step_nx, step_ny);
        if t_max_x < t_max_y {
            t_max_x += t_delta_x;
            x += step_x as isize;
            step_nx = step_x;
            step_ny = 0.0;
        } else {
            t_max_y += t_delta_y;
            y += step_y as isize;
            step_nx = 0.0;
            step_ny = step_y;
        }

        if !grid.in_bounds(x, y) {
            continue;
        }

        let cell_value = grid.cell(x as usize, y as usize);
        debug_assert!(cell_value <= crate::consts::MAX_CELL_VALUE, "corrupt grid cell");
        if cell_value > 0 {
            let point = Vector::new(start.n + dy * dist, start.e + dx * dist);
            let normal = Vector::new(-step_ny, -step_nx);
            return Some(RayHit {
                cell_value,
                cell: (x as usize, y as usize),
                point,
                normal,
                travel: dist,
            });
        }
    }
}
