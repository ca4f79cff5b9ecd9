use thiserror::Error;

/// Broken internal contracts between the buffer builder and the coordinate
/// writer. These abort an import; they are never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("coordinate array holds {coordinates} values but the buffer has {vertices} vertices")]
    LengthMismatch { vertices: usize, coordinates: usize },
    #[error("generation {generation} requested during composition but only {available} exist")]
    UndefinedGeneration { generation: u32, available: usize },
    #[error("generation {generation} has no members")]
    EmptyGeneration { generation: u32 },
}
