use crate::app::presenter;
use crate::core::report::write_lines;
use crate::core::{BonusReport, ConfigProvider, ReportSink, Storage};
use crate::utils::error::{HrError, Result};
use async_trait::async_trait;

/// Writes the report once per configured format under the storage root.
pub struct FileReportSink<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FileReportSink<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn text_lines(&self, report: &BonusReport) -> Vec<String> {
        if self.config.currency_display() {
            presenter::display_lines(report)
        } else {
            report.lines()
        }
    }
}

#[async_trait]
impl<S: Storage, C: ConfigProvider> ReportSink for FileReportSink<S, C> {
    async fn publish(&self, report: &BonusReport) -> Result<Vec<String>> {
        let base = self.config.report_filename();
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let path = format!("{}.{}", base, format);
            match format.as_str() {
                "txt" => write_lines(&self.storage, &path, &self.text_lines(report)).await?,
                "csv" => {
                    let data = report.to_csv()?;
                    self.storage.write_file(&path, data.as_bytes()).await?;
                }
                "json" => {
                    let data = report.to_json()?;
                    self.storage.write_file(&path, data.as_bytes()).await?;
                }
                other => {
                    return Err(HrError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            }
            tracing::info!("Report written: {} ({} worker(s))", path, report.entries().len());
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RecordService, Worker};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_text(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                HrError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        formats: Vec<String>,
        currency: bool,
    }

    impl ConfigProvider for TestConfig {
        fn output_path(&self) -> &str {
            "."
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn report_filename(&self) -> &str {
            "bonus"
        }

        fn currency_display(&self) -> bool {
            self.currency
        }
    }

    fn report() -> BonusReport {
        let mut service = RecordService::new();
        service
            .register(Worker::new(1, "bruno", "Dev", 1000.0), ["X", "Y"])
            .unwrap();
        service
            .register(Worker::new(2, "Ana", "Dev", 2000.0), Vec::<&str>::new())
            .unwrap();
        service.bonus_report()
    }

    #[tokio::test]
    async fn test_publish_all_formats() {
        let storage = MockStorage::default();
        let sink = FileReportSink::new(
            storage.clone(),
            TestConfig {
                formats: vec!["txt".into(), "csv".into(), "json".into()],
                currency: false,
            },
        );

        let written = sink.publish(&report()).await.unwrap();
        assert_eq!(written, vec!["bonus.txt", "bonus.csv", "bonus.json"]);

        let txt = storage.get_text("bonus.txt").await.unwrap();
        assert_eq!(
            txt,
            "Relatório de Bônus Mensal\n-------------------------\n\
             Nome: Ana; Dependentes: 0; Bonus: 0.00\n\
             Nome: bruno; Dependentes: 2; Bonus: 40.00\n"
        );

        let csv = storage.get_text("bonus.csv").await.unwrap();
        assert!(csv.contains("1,bruno,2,40.00"));

        let json = storage.get_text("bonus.json").await.unwrap();
        assert!(json.contains("\"generated_at\""));
    }

    #[tokio::test]
    async fn test_publish_text_with_currency() {
        let storage = MockStorage::default();
        let sink = FileReportSink::new(
            storage.clone(),
            TestConfig {
                formats: vec!["txt".into()],
                currency: true,
            },
        );

        sink.publish(&report()).await.unwrap();

        let txt = storage.get_text("bonus.txt").await.unwrap();
        assert!(txt.contains("Nome: bruno; Dependentes: 2; Bonus: R$ 40,00\n"));
        assert!(storage.read_file("bonus.csv").await.is_err());
    }
}
