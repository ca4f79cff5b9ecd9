pub mod config;
pub mod error;
pub mod importer;
pub mod progress;
pub mod scene;

pub use config::ImportConfig;
pub use error::ImportError;
pub use importer::{ImportOutcome, ImportStats, ImportedGeometry, Importer, LoadOutcome};
pub use progress::{NoProgress, ProgressReporter, ProgressScope};
pub use scene::{MemoryScene, ObjectId, SceneContext, SceneObject};
