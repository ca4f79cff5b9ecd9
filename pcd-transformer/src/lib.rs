pub mod builder;
pub mod normalize;
pub mod runner;
pub mod transform;

pub use builder::TransformBuilder;
pub use normalize::{CentroidNormalizer, FlattenedCoordinates};
pub use runner::Transformer;
