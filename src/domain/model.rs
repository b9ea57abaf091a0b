use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inputs and outputs of one exercise run, kept as JSON so every exercise
/// can report values of its own shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseReport {
    pub name: String,
    pub description: String,
    pub input: serde_json::Value,
    pub output: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub exercises: Vec<ExerciseReport>,
}

impl DrillReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            exercises: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ExerciseReport> {
        self.exercises.iter().find(|e| e.name == name)
    }

    /// Exercises whose output records an error instead of a result.
    pub fn failures(&self) -> impl Iterator<Item = &ExerciseReport> {
        self.exercises
            .iter()
            .filter(|e| e.output.get("error").is_some())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl OutputFormat {
    pub const ALL: [&'static str; 3] = ["json", "csv", "text"];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "text",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!(
                "unsupported format '{}', expected one of: {}",
                other,
                OutputFormat::ALL.join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Text.extension(), "txt");
    }

    #[test]
    fn test_report_failures() {
        let mut report = DrillReport::new("test");
        report.exercises.push(ExerciseReport {
            name: "adder".to_string(),
            description: String::new(),
            input: json!({}),
            output: json!([90]),
        });
        report.exercises.push(ExerciseReport {
            name: "remover".to_string(),
            description: String::new(),
            input: json!({}),
            output: json!({"error": "Index 9 is out of range"}),
        });

        let failed: Vec<&str> = report.failures().map(|e| e.name.as_str()).collect();
        assert_eq!(failed, vec!["remover"]);
        assert!(report.get("adder").is_some());
        assert!(report.get("missing").is_none());
    }
}
