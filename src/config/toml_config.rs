use crate::core::exercises::MAX_COUNTER_CALLS;
use crate::domain::model::OutputFormat;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest Fibonacci run that fits in `u64` for the default seed.
pub const MAX_FIBONACCI_COUNT: usize = 91;

/// Inputs for every exercise. Each section, and each key inside it, may be
/// left out of the TOML file; missing values fall back to the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    pub report: ReportConfig,
    pub adder: AdderConfig,
    pub counter: CounterConfig,
    pub remover: RemoverConfig,
    pub fibonacci: FibonacciConfig,
    pub filter: FilterConfig,
    pub map: MapConfig,
    pub reduce: ReduceConfig,
    pub frequency: FrequencyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub output_path: String,
    pub file_stem: String,
    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Functional programming drills".to_string(),
            output_path: "./output".to_string(),
            file_stem: "drills".to_string(),
            format: OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdderConfig {
    pub base: i64,
    pub inputs: Vec<i64>,
}

impl Default for AdderConfig {
    fn default() -> Self {
        Self {
            base: 15,
            inputs: vec![75, 2, 3],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub calls: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { calls: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoverCase {
    pub index: usize,
    pub values: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoverConfig {
    pub cases: Vec<RemoverCase>,
}

impl Default for RemoverConfig {
    fn default() -> Self {
        Self {
            cases: vec![
                RemoverCase {
                    index: 2,
                    values: ["hi", "hello", "foo", "bar"]
                        .into_iter()
                        .map(serde_json::Value::from)
                        .collect(),
                },
                RemoverCase {
                    index: 7,
                    values: (1..=9).map(serde_json::Value::from).collect(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FibonacciConfig {
    pub count: usize,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self { count: 10 }
    }
}

const SAMPLE_NUMBERS: [i64; 9] = [84, 2, -9, 42, 10, -10, 17, 54, 3];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub values: Vec<i64>,
    pub threshold: i64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            values: SAMPLE_NUMBERS.to_vec(),
            threshold: crate::core::sequence_ops::DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub values: Vec<i64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            values: SAMPLE_NUMBERS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReduceConfig {
    pub values: Vec<i64>,
    pub initial: i64,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            values: vec![3, 5, -1, 6, 12],
            initial: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    pub words: Vec<String>,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            words: ["hello", "how are you", "not bad", "foo", "bar", "summary"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl DrillConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of `VAR`; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrillError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("report.output_path", &self.report.output_path)?;
        validate_non_empty_string("report.file_stem", &self.report.file_stem)?;
        validate_range("counter.calls", self.counter.calls, 1, MAX_COUNTER_CALLS)?;
        validate_range(
            "fibonacci.count",
            self.fibonacci.count,
            1,
            MAX_FIBONACCI_COUNT,
        )?;
        Ok(())
    }
}

impl Validate for DrillConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
