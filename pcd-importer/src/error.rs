use pcd_geometry::GeometryError;
use pcd_parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file format error: {0}")]
    FileFormat(#[from] ParseError),
    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] GeometryError),
    #[error("invalid import configuration: {0}")]
    InvalidConfig(String),
}
