use pcd_core::pointcloud::point::{BoundingVolume, Point};

/// Interleaved `x, y, z` components, one triple per point, in point order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedCoordinates {
    values: Vec<f64>,
}

impl FlattenedCoordinates {
    pub fn point_count(&self) -> usize {
        self.values.len() / 3
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn point(&self, index: usize) -> Option<[f64; 3]> {
        let start = index.checked_mul(3)?;
        self.values
            .get(start..start + 3)
            .map(|c| [c[0], c[1], c[2]])
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

/// Translates points so that the center of the file's bounding volume maps
/// to the origin. The center comes from the header, not from the points
/// being normalized, so separate imports from one file share an origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentroidNormalizer {
    midpoint: [f64; 3],
}

impl CentroidNormalizer {
    pub fn new(bounding_volume: &BoundingVolume) -> Self {
        Self {
            midpoint: bounding_volume.midpoint(),
        }
    }

    pub fn midpoint(&self) -> [f64; 3] {
        self.midpoint
    }

    pub fn normalize(&self, point: &Point) -> [f64; 3] {
        [
            point.x - self.midpoint[0],
            point.y - self.midpoint[1],
            point.z - self.midpoint[2],
        ]
    }

    pub fn denormalize(&self, coords: [f64; 3]) -> [f64; 3] {
        [
            coords[0] + self.midpoint[0],
            coords[1] + self.midpoint[1],
            coords[2] + self.midpoint[2],
        ]
    }

    pub fn flatten(&self, points: &[Point]) -> FlattenedCoordinates {
        let mut values = Vec::with_capacity(points.len() * 3);
        for point in points {
            values.extend_from_slice(&self.normalize(point));
        }
        FlattenedCoordinates { values }
    }
}
