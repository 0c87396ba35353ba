use crate::core::report::BonusReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn report_filename(&self) -> &str;
    fn currency_display(&self) -> bool;
}

/// Destination for a finished bonus report. Returns the locations written.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn publish(&self, report: &BonusReport) -> Result<Vec<String>>;
}
