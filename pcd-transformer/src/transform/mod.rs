use pcd_core::pointcloud::point::PointCloud;

pub mod classification;
pub mod decimation;

pub trait Transform {
    fn name(&self) -> &'static str;

    fn transform(&self, point_cloud: PointCloud) -> PointCloud;

    /// Like [`Transform::transform`], calling `observe` with the stage name and
    /// its output once every stage has run.
    fn transform_observed(
        &self,
        point_cloud: PointCloud,
        observe: &mut dyn FnMut(&'static str, &PointCloud),
    ) -> PointCloud {
        let point_cloud = self.transform(point_cloud);
        observe(self.name(), &point_cloud);
        point_cloud
    }
}

pub struct CompositeTransform {
    transforms: Vec<Box<dyn Transform>>,
}

impl CompositeTransform {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self { transforms }
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Transform for CompositeTransform {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn transform(&self, point_cloud: PointCloud) -> PointCloud {
        self.transforms
            .iter()
            .fold(point_cloud, |pc, transform| transform.transform(pc))
    }

    // reports each inner stage rather than the composite as a whole
    fn transform_observed(
        &self,
        point_cloud: PointCloud,
        observe: &mut dyn FnMut(&'static str, &PointCloud),
    ) -> PointCloud {
        self.transforms.iter().fold(point_cloud, |pc, transform| {
            transform.transform_observed(pc, observe)
        })
    }
}
