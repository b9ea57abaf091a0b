use crate::domain::model::ExerciseReport;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// A runnable demonstration bound to its inputs.
pub trait Exercise {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Configured inputs, reported alongside the output (or the error).
    fn input(&self) -> serde_json::Value;
    fn run(&self) -> Result<ExerciseReport>;
}
