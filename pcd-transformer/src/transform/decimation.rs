use pcd_core::pointcloud::{
    decimation::decimator::{PointCloudDecimator, ResolutionDecimator},
    point::PointCloud,
};

use super::Transform;

pub struct DecimationTransform {
    decimator: ResolutionDecimator,
}

impl DecimationTransform {
    pub const NAME: &'static str = "decimation";

    pub fn new(resolution_percent: u8) -> Self {
        Self {
            decimator: ResolutionDecimator::new(resolution_percent),
        }
    }
}

impl Transform for DecimationTransform {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self, point_cloud: PointCloud) -> PointCloud {
        if self.decimator.is_identity() {
            return point_cloud;
        }
        let points = self.decimator.decimate(&point_cloud.points);
        log::debug!(
            "resolution {}%: kept {} of {} points",
            self.decimator.resolution_percent,
            points.len(),
            point_cloud.points.len()
        );
        PointCloud {
            points,
            metadata: point_cloud.metadata,
        }
    }
}
