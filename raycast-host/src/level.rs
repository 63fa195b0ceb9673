//! Maze-text level loading: parses the plain-text map format the teacher's
//! `maze.rs` used, but produces a `raycast_core::Grid` (cell bytes `[0, 7]`)
//! and a spawn `Pose` instead of a `Vec<Vec<char>>` walked by a bespoke
//! collision check — collision now lives in `raycast-core`.

use raycast_core::{Grid, GridWorld, Pose, SpriteInstance, Vector};
use std::path::Path;

use crate::config::HostError;

pub struct Level {
    pub grid: Grid,
    pub spawn: Pose,
    pub sprites: Vec<SpriteInstance>,
}

/// Bundled fallback level, used when `RAYCAST_CONFIG` is unset or unreadable.
/// `#` and other non-space glyphs are walls (digits `1`-`7` pick a specific
/// wall texture slot), `P` marks the spawn point, `R` marks a sprite.
const DEFAULT_MAZE: &str = "\
#################
#...............#
#...222.....333.#
#...2.......3...#
#...2..R....3...#
#.......P.......#
#...4.......5...#
#...444.....555.#
#...............#
#################
";

pub fn load(path: Option<&Path>) -> Result<Level, HostError> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p).map_err(|source| HostError::LevelIo {
            path: p.to_path_buf(),
            source,
        })?,
        None => DEFAULT_MAZE.to_string(),
    };
    parse(&text)
}

fn cell_value(ch: char) -> u8 {
    match ch {
        ' ' | 'R' | 'P' => 0,
        '1'..='7' => ch as u8 - b'0',
        _ => 1,
    }
}

fn parse(text: &str) -> Result<Level, HostError> {
    let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    let height = rows.len();
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

    let mut cells = vec![0u8; width * height];
    let mut spawn_pos = Vector::new(1.5, 1.5);
    let spawn_dir = Vector::new(0.0, 1.0);
    let mut sprites = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, ch) in row.chars().enumerate() {
            cells[row_idx * width + col_idx] = cell_value(ch);

            // File rows run north-to-south (top of the text is the north
            // edge), matching `Grid`'s south-row-last buffer convention.
            let n = (height - 1 - row_idx) as f32 + 0.5;
            let e = col_idx as f32 + 0.5;
            match ch {
                'P' => spawn_pos = Vector::new(n, e),
                'R' => sprites.push(SpriteInstance {
                    position: Vector::new(n, e),
                    sprite_id: 0,
                }),
                _ => {}
            }
        }
    }

    let grid = Grid::try_new(width, height, cells)?;
    Ok(Level {
        grid,
        spawn: Pose::new(spawn_pos, spawn_dir),
        sprites,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_maze_parses_and_places_a_spawn() {
        let level = load(None).expect("bundled default must always parse");
        assert!(level.grid.width() > 0);
        assert!(level.grid.height() > 0);
        assert_eq!(level.sprites.len(), 1);
    }

    #[test]
    fn unreadable_path_surfaces_as_a_host_error() {
        let err = load(Some(Path::new("/nonexistent/does-not-exist.txt"))).unwrap_err();
        assert!(matches!(err, HostError::LevelIo { .. }));
    }
}
