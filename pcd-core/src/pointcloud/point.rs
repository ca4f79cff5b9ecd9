use std::fmt;

use serde::{Deserialize, Serialize};

// One LAS point record, reduced to what the importer consumes.
// Coordinates are already scaled and offset by the LAS header transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub classification: u8,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64, classification: u8) -> Self {
        Self {
            x,
            y,
            z,
            classification,
        }
    }

    pub fn xyz(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

// Extents as stored in the file header, not recomputed from the points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingVolume {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingVolume {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// Returns the first axis whose extent is inverted or not a number.
    pub fn invalid_axis(&self) -> Option<Axis> {
        AXES.iter().zip(self.min.iter().zip(self.max.iter())).find_map(
            |(axis, (min, max))| {
                // NaN fails the comparison as well
                if min <= max {
                    None
                } else {
                    Some(*axis)
                }
            },
        )
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_axis().is_none()
    }

    /// Per-axis center of the volume, `(max + min) / 2`.
    pub fn midpoint(&self) -> [f64; 3] {
        [
            (self.max[0] + self.min[0]) / 2.0,
            (self.max[1] + self.min[1]) / 2.0,
            (self.max[2] + self.min[2]) / 2.0,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    // Total point count announced by the header, before any filtering.
    pub point_count: u64,
    pub bounding_volume: BoundingVolume,
    pub scale: [f64; 3],
    pub offset: [f64; 3],
}

#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    pub points: Vec<Point>,
    pub metadata: Metadata,
}

impl PointCloud {
    pub fn new(points: Vec<Point>, metadata: Metadata) -> Self {
        Self { points, metadata }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn classifications(&self) -> impl Iterator<Item = u8> + '_ {
        self.points.iter().map(|point| point.classification)
    }
}
