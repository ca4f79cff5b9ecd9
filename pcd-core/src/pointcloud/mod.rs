pub mod classification;
pub mod decimation;
pub mod point;
