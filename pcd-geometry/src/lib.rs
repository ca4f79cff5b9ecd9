pub mod buffer;
pub mod doubling;
pub mod error;
pub mod ply;
pub mod writer;

pub use buffer::{GeometryBuffer, Vertex};
pub use doubling::BinaryDoublingBuilder;
pub use error::GeometryError;
pub use writer::write_coordinates;
