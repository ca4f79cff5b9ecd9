use pcd_core::pointcloud::classification::Classification;

use crate::transform::{
    classification::ClassificationFilter, decimation::DecimationTransform, CompositeTransform,
    Transform,
};

pub trait TransformBuilder {
    fn build(&self) -> Box<dyn Transform>;
}

/// Classification filter followed by resolution decimation.
pub struct ImportTransformBuilder {
    pub classification: Classification,
    pub resolution_percent: u8,
}

impl ImportTransformBuilder {
    pub fn new(classification: Classification, resolution_percent: u8) -> Self {
        Self {
            classification,
            resolution_percent,
        }
    }
}

impl TransformBuilder for ImportTransformBuilder {
    fn build(&self) -> Box<dyn Transform> {
        let filter = Box::new(ClassificationFilter::new(self.classification));
        let decimation = Box::new(DecimationTransform::new(self.resolution_percent));

        Box::new(CompositeTransform::new(vec![filter, decimation]))
    }
}
