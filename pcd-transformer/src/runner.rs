use pcd_core::pointcloud::point::PointCloud;

use crate::{transform::Transform, TransformBuilder};

pub trait Transformer {
    fn execute(&self, point_cloud: PointCloud) -> PointCloud;

    /// Runs the pipeline, handing each stage's name and output to `observe`.
    fn execute_observed(
        &self,
        point_cloud: PointCloud,
        observe: &mut dyn FnMut(&'static str, &PointCloud),
    ) -> PointCloud;
}

pub struct PointCloudTransformer {
    transform: Box<dyn Transform>,
}

impl PointCloudTransformer {
    pub fn new(transform: Box<dyn Transform>) -> Self {
        Self { transform }
    }

    pub fn from_builder(builder: &dyn TransformBuilder) -> Self {
        Self::new(builder.build())
    }
}

impl Transformer for PointCloudTransformer {
    fn execute(&self, point_cloud: PointCloud) -> PointCloud {
        self.transform.transform(point_cloud)
    }

    fn execute_observed(
        &self,
        point_cloud: PointCloud,
        observe: &mut dyn FnMut(&'static str, &PointCloud),
    ) -> PointCloud {
        self.transform.transform_observed(point_cloud, observe)
    }
}
