pub mod closures;
pub mod engine;
pub mod exercises;
pub mod fibonacci;
pub mod frequency;
pub mod report;
pub mod sequence_ops;

pub use crate::domain::model::{DrillReport, ExerciseReport, OutputFormat};
pub use crate::domain::ports::{Exercise, Storage};
pub use crate::utils::error::Result;
