use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use pcd_core::pointcloud::{classification::Classification, point::PointCloud};
use pcd_geometry::{write_coordinates, BinaryDoublingBuilder, GeometryBuffer};
use pcd_parser::{open_point_reader, PointIterator};
use pcd_transformer::{
    builder::ImportTransformBuilder,
    runner::{PointCloudTransformer, Transformer as _},
    transform::classification::ClassificationFilter,
    CentroidNormalizer,
};
use serde::Serialize;

use crate::{
    progress::{ProgressReporter, ProgressScope},
    scene::{ObjectId, SceneContext},
    ImportConfig, ImportError,
};

pub const OBJECT_NAME: &str = "LidarObject";

// Upper bound on points read between two progress updates.
const MAX_CHUNK_SIZE: usize = 1_000_000;
const MAX_PREALLOCATED: usize = 64 * MAX_CHUNK_SIZE;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportStats {
    pub path: PathBuf,
    pub classification: Classification,
    pub resolution_percent: u8,
    pub file_point_count: u64,
    /// Points matching the classification, before resolution decimation.
    pub filtered_count: usize,
    pub imported_count: usize,
    pub midpoint: [f64; 3],
    pub elapsed: Duration,
}

/// Result of reading a file without touching any scene.
#[derive(Debug)]
pub enum LoadOutcome {
    Geometry {
        buffer: GeometryBuffer,
        stats: ImportStats,
    },
    /// No point carries the requested classification.
    Empty(ImportStats),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportedGeometry {
    pub object: ObjectId,
    pub stats: ImportStats,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    Imported(ImportedGeometry),
    /// Nothing matched. No buffer is returned, so the single seed vertex of an
    /// unwritten buffer can never be mistaken for an imported point.
    Empty(ImportStats),
}

impl ImportOutcome {
    pub fn stats(&self) -> &ImportStats {
        match self {
            ImportOutcome::Imported(geometry) => &geometry.stats,
            ImportOutcome::Empty(stats) => stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ImportOutcome::Empty(_))
    }
}

pub struct Importer {
    config: ImportConfig,
}

impl Importer {
    pub fn new(config: ImportConfig) -> Result<Self, ImportError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Reads, filters and centers the points of the configured file and
    /// builds a vertex buffer holding exactly one vertex per kept point.
    pub fn load(&self, progress: &mut dyn ProgressReporter) -> Result<LoadOutcome, ImportError> {
        let start = Instant::now();
        let path = self.config.path();

        let reader = open_point_reader(path)?;
        let metadata = reader.metadata().clone();
        let mut scope = ProgressScope::begin(progress, metadata.point_count);

        let chunk_size = ((metadata.point_count / 10) as usize).clamp(1, MAX_CHUNK_SIZE);
        let mut points = Vec::with_capacity((metadata.point_count as usize).min(MAX_PREALLOCATED));
        // the iterator owns the reader, so the file is closed once it is exhausted
        for chunk in PointIterator::new(reader, chunk_size) {
            points.extend(chunk?);
            scope.update(points.len() as u64);
        }
        let cloud = PointCloud::new(points, metadata);
        log::debug!("read {} points in {:?}", cloud.len(), start.elapsed());

        let file_point_count = cloud.metadata.point_count;
        let normalizer = CentroidNormalizer::new(&cloud.metadata.bounding_volume);

        let builder = ImportTransformBuilder::new(
            self.config.classification(),
            self.config.resolution_percent(),
        );
        let mut filtered_count = 0;
        let filtered = PointCloudTransformer::from_builder(&builder).execute_observed(
            cloud,
            &mut |stage, point_cloud| {
                if stage == ClassificationFilter::NAME {
                    filtered_count = point_cloud.len();
                }
                log::debug!("stage {stage}: {} points", point_cloud.len());
                scope.stage_done();
            },
        );
        log::info!(
            "{filtered_count} of {file_point_count} points classified as {}",
            self.config.classification()
        );

        let mut stats = ImportStats {
            path: path.to_path_buf(),
            classification: self.config.classification(),
            resolution_percent: self.config.resolution_percent(),
            file_point_count,
            filtered_count,
            imported_count: filtered.len(),
            midpoint: normalizer.midpoint(),
            elapsed: Duration::ZERO,
        };

        if filtered.is_empty() {
            log::warn!(
                "{:?} has no points classified as {}",
                path,
                self.config.classification()
            );
            stats.elapsed = start.elapsed();
            return Ok(LoadOutcome::Empty(stats));
        }

        let coords = normalizer.flatten(&filtered.points);
        drop(filtered);

        let mut buffer = BinaryDoublingBuilder::new(coords.point_count()).build()?;
        scope.stage_done();
        write_coordinates(&mut buffer, coords.as_slice())?;
        scope.stage_done();

        stats.elapsed = start.elapsed();
        Ok(LoadOutcome::Geometry { buffer, stats })
    }

    /// Loads the file and links the result into `scene` as the active object.
    /// The scene is only cleared once the file has been read successfully.
    pub fn import(
        &self,
        scene: &mut dyn SceneContext,
        progress: &mut dyn ProgressReporter,
    ) -> Result<ImportOutcome, ImportError> {
        let loaded = self.load(progress)?;

        if self.config.clear_scene() {
            scene.clear();
        }

        let outcome = match loaded {
            LoadOutcome::Empty(stats) => ImportOutcome::Empty(stats),
            LoadOutcome::Geometry { buffer, stats } => {
                let object = scene.create_geometry(OBJECT_NAME, buffer);
                scene.set_active(object);
                ImportOutcome::Imported(ImportedGeometry { object, stats })
            }
        };

        let stats = outcome.stats();
        log::info!("{} vertices in file", stats.file_point_count);
        log::info!("{} vertices matched the classification", stats.filtered_count);
        log::info!("{} vertices imported", stats.imported_count);
        log::info!(
            "Total time to process (seconds): {:.3}",
            stats.elapsed.as_secs_f64()
        );
        log::info!("File: {:?}", stats.path);
        log::info!(
            "Percentage of points imported: {}",
            stats.resolution_percent
        );

        Ok(outcome)
    }
}
