// update/render never return a Result: invalid cell values are precondition
// violations, parallel rays degrade to "no intersection", and off-screen or
// behind-camera geometry is culled silently. This type is for the host-facing
// asset loading boundary, where disk I/O can genuinely fail.
#[derive(Debug, thiserror::Error)]
pub enum RaycastError {
    #[error("cell value {0} is outside the valid range [0, 7]")]
    InvalidCellValue(u8),

    #[error("grid buffer length {actual} does not match width*height {expected}")]
    GridSizeMismatch { expected: usize, actual: usize },
}
