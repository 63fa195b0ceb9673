//! Host-side configuration and the fallible asset-loading error type.
//!
//! `raycast-core` has no config file and no error returns (see its ERROR
//! HANDLING DESIGN doc comment); this crate's disk I/O is the real external
//! boundary, so it gets a `thiserror` enum and an environment-variable knob
//! instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to read level file {path}: {source}")]
    LevelIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed level grid: {0}")]
    LevelGrid(#[from] raycast_core::RaycastError),

    #[error("failed to decode texture {path}: {source}")]
    TextureDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Host configuration, read once at startup. There is no config file format;
/// `RAYCAST_CONFIG` is the only knob, naming a maze text file to load in
/// place of the bundled default.
pub struct HostConfig {
    pub level_path: Option<PathBuf>,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self {
            level_path: std::env::var_os("RAYCAST_CONFIG").map(PathBuf::from),
        }
    }
}
