use crate::consts::MAX_CELL_VALUE;
use crate::error::RaycastError;

// cell(x, y) uses engine coordinates (y = 0 at the south edge); implementors
// are free to store the data however they like internally
pub trait GridWorld {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    // 0 is empty, [1, 7] is an opaque wall indexing into the texture
    // dictionary. Out-of-range values are a precondition violation upstream
    // (see Grid::new), not re-validated here.
    fn cell(&self, x: usize, y: usize) -> u8;

    fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }
}

// row-major W x H byte buffer, south row first (engine y = 0 maps to the
// last row of the buffer)
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    // panics (debug_assert) on a size mismatch or an out-of-range cell value;
    // a corrupt world is unrecoverable here, not a reportable error
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height, "grid buffer size mismatch");
        debug_assert!(
            cells.iter().all(|&c| c <= MAX_CELL_VALUE),
            "grid contains a cell value outside [0, {MAX_CELL_VALUE}]"
        );
        Self {
            width,
            height,
            cells,
        }
    }

    // fallible counterpart for the host's asset-loading boundary, where a
    // corrupt map file is a reportable error
    pub fn try_new(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, RaycastError> {
        if cells.len() != width * height {
            return Err(RaycastError::GridSizeMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        if let Some(&bad) = cells.iter().find(|&&c| c > MAX_CELL_VALUE) {
            return Err(RaycastError::InvalidCellValue(bad));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            debug_assert_eq!(row.len(), width, "ragged grid row");
            cells.extend_from_slice(row);
        }
        Self::new(width, height, cells)
    }
}

impl GridWorld for Grid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell(&self, x: usize, y: usize) -> u8 {
        let row = self.height - 1 - y;
        self.cells[row * self.width + x]
    }
}
