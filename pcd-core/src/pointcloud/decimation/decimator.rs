use crate::pointcloud::point::Point;

pub trait PointCloudDecimator {
    fn decimate(&self, points: &[Point]) -> Vec<Point>;
}

/// Keeps `resolution_percent` percent of the points, spread evenly over the
/// scan order. At least one point survives when the input is non-empty.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionDecimator {
    pub resolution_percent: u8,
}

impl ResolutionDecimator {
    pub fn new(resolution_percent: u8) -> Self {
        Self {
            resolution_percent: resolution_percent.clamp(1, 100),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.resolution_percent >= 100
    }

    /// Number of points kept out of `n`.
    pub fn target_count(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (n * self.resolution_percent as usize / 100).max(1)
    }

    fn keeps(&self, index: usize) -> bool {
        let percent = self.resolution_percent as usize;
        (index + 1) * percent / 100 > index * percent / 100
    }
}

impl PointCloudDecimator for ResolutionDecimator {
    fn decimate(&self, points: &[Point]) -> Vec<Point> {
        if self.is_identity() {
            return points.to_vec();
        }

        let mut decimated: Vec<Point> = points
            .iter()
            .enumerate()
            .filter(|(i, _)| self.keeps(*i))
            .map(|(_, p)| *p)
            .collect();

        if decimated.is_empty() {
            if let Some(first) = points.first() {
                decimated.push(*first);
            }
        }

        decimated
    }
}
