use pcd_core::pointcloud::{
    classification::Classification,
    point::{Point, PointCloud},
};

use super::Transform;

/// Which points of a scan carry the requested classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationMask {
    mask: Vec<bool>,
    count: usize,
}

impl ClassificationMask {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.mask
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, selected)| selected.then_some(i))
    }

    /// Matching points in scan order. `points` must be the stream the mask was built from.
    pub fn select(&self, points: &[Point]) -> Vec<Point> {
        debug_assert_eq!(points.len(), self.mask.len());
        let mut selected = Vec::with_capacity(self.count);
        selected.extend(
            points
                .iter()
                .zip(self.mask.iter())
                .filter(|(_, keep)| **keep)
                .map(|(p, _)| *p),
        );
        selected
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ClassificationFilter {
    pub classification: Classification,
}

impl ClassificationFilter {
    pub const NAME: &'static str = "classification";

    pub fn new(classification: Classification) -> Self {
        Self { classification }
    }

    pub fn mask<I>(&self, codes: I) -> ClassificationMask
    where
        I: IntoIterator<Item = u8>,
    {
        let mut count = 0;
        let mask = codes
            .into_iter()
            .map(|code| {
                let selected = self.classification.matches(code);
                count += selected as usize;
                selected
            })
            .collect();
        ClassificationMask { mask, count }
    }

    pub fn filter(&self, points: &[Point]) -> Vec<Point> {
        self.mask(points.iter().map(|p| p.classification))
            .select(points)
    }
}

impl Transform for ClassificationFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self, point_cloud: PointCloud) -> PointCloud {
        let points = self.filter(&point_cloud.points);
        log::debug!(
            "classification {}: kept {} of {} points",
            self.classification,
            points.len(),
            point_cloud.points.len()
        );
        PointCloud {
            points,
            metadata: point_cloud.metadata,
        }
    }
}
