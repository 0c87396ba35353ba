use crate::core::report::BonusReport;
use crate::core::service::RecordService;
use crate::domain::model::Worker;
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable handle to a [`RecordService`] shared between tasks.
///
/// Every mutation holds the write lock for its whole duration, so readers never
/// see a worker removed while its dependents are still present.
#[derive(Debug, Clone, Default)]
pub struct SharedRecordService {
    inner: Arc<RwLock<RecordService>>,
}

impl SharedRecordService {
    pub fn new(service: RecordService) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }

    pub async fn register(&self, worker: Worker, dependent_names: Vec<String>) -> Result<()> {
        self.inner.write().await.register(worker, dependent_names)
    }

    pub async fn remove_worker(&self, code: i32) -> Result<Worker> {
        self.inner.write().await.remove_worker(code)
    }

    pub async fn set_salary(&self, code: i32, new_salary: f64) -> Result<()> {
        self.inner.write().await.set_salary(code, new_salary)
    }

    pub async fn count_dependents(&self, code: i32) -> usize {
        self.inner.read().await.count_dependents(code)
    }

    pub async fn bonus_report(&self) -> BonusReport {
        self.inner.read().await.bonus_report()
    }

    /// Owned copy of every worker.
    pub async fn workers(&self) -> Vec<Worker> {
        self.inner.read().await.list_workers().cloned().collect()
    }
}
