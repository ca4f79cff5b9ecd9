pub mod error;
pub mod reader;

#[cfg(test)]
pub(crate) mod test_util;

pub use error::ParseError;
pub use reader::{get_extension, open_point_reader, Extension, PointIterator, PointReader};
