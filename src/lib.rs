pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{storage::LocalStorage, toml_config::DrillConfig};

pub use crate::core::{
    closures::{create_adder, create_counter, create_remover},
    engine::DrillEngine,
    exercises::build_exercises,
    fibonacci::Fibonacci,
    frequency::{most_common_letter, LetterTally},
    report::ReportWriter,
};
pub use crate::utils::error::{DrillError, Result};
