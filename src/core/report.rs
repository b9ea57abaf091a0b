use crate::config::toml_config::ReportConfig;
use crate::domain::model::{DrillReport, OutputFormat};
use crate::domain::ports::Storage;
use crate::utils::error::{DrillError, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    description: &'a str,
    input: String,
    output: String,
}

pub struct ReportWriter<S: Storage> {
    storage: S,
    output_path: String,
    file_stem: String,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S, config: &ReportConfig) -> Self {
        Self {
            storage,
            output_path: config.output_path.clone(),
            file_stem: config.file_stem.clone(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn file_name(&self, format: OutputFormat) -> String {
        format!("{}.{}", self.file_stem, format.extension())
    }

    /// Renders `report` and stores it as `<file_stem>.<ext>`; returns the full path.
    pub fn save(&self, report: &DrillReport, format: OutputFormat) -> Result<String> {
        let data = render(report, format)?;
        let file_name = self.file_name(format);

        tracing::debug!("Saving {} report ({} bytes)", format, data.len());
        self.storage.write_file(&file_name, &data)?;

        Ok(format!("{}/{}", self.output_path, file_name))
    }
}

pub fn render(report: &DrillReport, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_vec_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Text => Ok(render_text(report).into_bytes()),
    }
}

/// One row per exercise; input and output cells hold compact JSON.
fn render_csv(report: &DrillReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for exercise in &report.exercises {
        writer.serialize(CsvRow {
            name: &exercise.name,
            description: &exercise.description,
            input: exercise.input.to_string(),
            output: exercise.output.to_string(),
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| DrillError::IoError(e.into_error()))
}

pub fn render_text(report: &DrillReport) -> String {
    let mut out = format!(
        "{}\ngenerated at {}\n",
        report.title,
        report.generated_at.to_rfc3339()
    );

    for exercise in &report.exercises {
        out.push_str(&format!(
            "\n[{}] {}\n  input:  {}\n  output: {}\n",
            exercise.name, exercise.description, exercise.input, exercise.output
        ));
    }
    out
}
