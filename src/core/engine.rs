use crate::domain::model::{DrillReport, ExerciseReport};
use crate::domain::ports::Exercise;
use crate::utils::error::Result;
use serde_json::json;

pub struct DrillEngine {
    title: String,
    exercises: Vec<Box<dyn Exercise>>,
    keep_going: bool,
}

impl DrillEngine {
    pub fn new(title: impl Into<String>, exercises: Vec<Box<dyn Exercise>>) -> Self {
        Self {
            title: title.into(),
            exercises,
            keep_going: false,
        }
    }

    /// When set, a failing exercise is recorded in the report and the run continues.
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn run(&self) -> Result<DrillReport> {
        tracing::info!("Running {} exercise(s)", self.exercises.len());
        let mut report = DrillReport::new(self.title.clone());

        for exercise in &self.exercises {
            tracing::debug!("Starting exercise '{}'", exercise.name());

            match exercise.run() {
                Ok(result) => {
                    tracing::info!("✅ {} -> {}", exercise.name(), result.output);
                    report.exercises.push(result);
                }
                Err(e) if self.keep_going => {
                    tracing::warn!("⚠️ {} failed: {} (continuing)", exercise.name(), e);
                    report.exercises.push(ExerciseReport {
                        name: exercise.name().to_string(),
                        description: exercise.description().to_string(),
                        input: exercise.input(),
                        output: json!({ "error": e.to_string() }),
                    });
                }
                Err(e) => {
                    tracing::error!("❌ {} failed: {}", exercise.name(), e);
                    return Err(e);
                }
            }
        }

        let failed = report.failures().count();
        if failed > 0 {
            tracing::warn!("{} of {} exercise(s) failed", failed, report.exercises.len());
        }

        Ok(report)
    }
}
