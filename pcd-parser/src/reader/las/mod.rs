use std::path::{Path, PathBuf};

use las::Reader;
use pcd_core::pointcloud::point::{BoundingVolume, Metadata, Point};

use super::PointReader;
use crate::ParseError;

pub struct LasPointReader {
    pub path: PathBuf,
    reader: Reader,
    metadata: Metadata,
    points_read: u64,
}

impl LasPointReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref().to_path_buf();
        let start = std::time::Instant::now();
        let reader = Reader::from_path(&path).map_err(|source| ParseError::Open {
            path: path.clone(),
            source,
        })?;
        log::debug!("Open LAS time: {:?}", start.elapsed());

        let metadata = Self::read_metadata(reader.header());
        let bounding_volume = &metadata.bounding_volume;
        if let Some(axis) = bounding_volume.invalid_axis() {
            return Err(ParseError::InvertedBounds {
                path,
                axis,
                min: bounding_volume.min[axis.index()],
                max: bounding_volume.max[axis.index()],
            });
        }

        log::debug!(
            "{:?}: {} points, bounds {:?}",
            path,
            metadata.point_count,
            metadata.bounding_volume
        );

        Ok(Self {
            path,
            reader,
            metadata,
            points_read: 0,
        })
    }

    fn read_metadata(header: &las::Header) -> Metadata {
        let bounds = header.bounds();
        let transforms = header.transforms();

        Metadata {
            point_count: header.number_of_points(),
            bounding_volume: BoundingVolume::new(
                [bounds.min.x, bounds.min.y, bounds.min.z],
                [bounds.max.x, bounds.max.y, bounds.max.z],
            ),
            scale: [
                transforms.x.scale,
                transforms.y.scale,
                transforms.z.scale,
            ],
            offset: [
                transforms.x.offset,
                transforms.y.offset,
                transforms.z.offset,
            ],
        }
    }

    fn convert_las_point(las_point: las::Point) -> Point {
        Point {
            x: las_point.x,
            y: las_point.y,
            z: las_point.z,
            classification: u8::from(las_point.classification),
        }
    }

    pub fn points_read(&self) -> u64 {
        self.points_read
    }
}

impl PointReader for LasPointReader {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn next_point(&mut self) -> Result<Option<Point>, ParseError> {
        match self.reader.points().next() {
            Some(Ok(las_point)) => {
                self.points_read += 1;
                Ok(Some(Self::convert_las_point(las_point)))
            }
            Some(Err(source)) => Err(ParseError::Point {
                index: self.points_read,
                source,
            }),
            None => Ok(None),
        }
    }
}
