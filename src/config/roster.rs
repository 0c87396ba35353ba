use crate::core::{ConfigProvider, RecordService, Worker};
use crate::utils::error::{HrError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_FORMATS: [&str; 3] = ["txt", "csv", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub report: ReportConfig,
    #[serde(default)]
    pub workers: Vec<WorkerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filename: Option<String>,
    pub currency_display: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerEntry {
    pub code: i32,
    pub name: String,
    pub role: String,
    pub salary: f64,
    #[serde(default)]
    pub dependents: Vec<String>,
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HrError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HrError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are kept verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HrError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Registers every worker in file order. Stops at the first failure.
    pub fn seed(&self, service: &mut RecordService) -> Result<usize> {
        for entry in &self.workers {
            service.register(
                Worker::new(entry.code, &entry.name, &entry.role, entry.salary),
                &entry.dependents,
            )?;
            tracing::debug!(
                "Registered worker {} ({}) with {} dependent(s)",
                entry.code,
                entry.name,
                service.count_dependents(entry.code)
            );
        }
        Ok(self.workers.len())
    }
}

impl ConfigProvider for RosterConfig {
    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.report.output_formats
    }

    fn report_filename(&self) -> &str {
        self.report.filename.as_deref().unwrap_or("bonus_mensal")
    }

    fn currency_display(&self) -> bool {
        self.report.currency_display.unwrap_or(true)
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("report.output_path", &self.report.output_path)?;
        validation::validate_formats(
            "report.output_formats",
            &self.report.output_formats,
            &SUPPORTED_FORMATS,
        )?;
        if let Some(filename) = &self.report.filename {
            validation::validate_non_empty_string("report.filename", filename)?;
        }

        for (idx, worker) in self.workers.iter().enumerate() {
            validation::validate_non_empty_string(&format!("workers[{}].name", idx), &worker.name)?;
            validation::validate_non_empty_string(&format!("workers[{}].role", idx), &worker.role)?;
        }
        validation::validate_unique_codes("workers", self.workers.iter().map(|w| w.code))
    }
}
