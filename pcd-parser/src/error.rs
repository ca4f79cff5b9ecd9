use std::path::PathBuf;

use pcd_core::pointcloud::point::Axis;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: las::Error,
    },
    #[error("failed to read point record {index}: {source}")]
    Point {
        index: u64,
        #[source]
        source: las::Error,
    },
    #[error("malformed header in {path}: {axis} max {max} is below min {min}")]
    InvertedBounds {
        path: PathBuf,
        axis: Axis,
        min: f64,
        max: f64,
    },
    #[error("unsupported file extension in {0}, expected .las or .laz")]
    UnsupportedExtension(PathBuf),
}
