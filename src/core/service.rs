use crate::core::report::BonusReport;
use crate::domain::model::{BonusEntry, Dependent, Worker};
use crate::utils::error::{HrError, Result};
use std::collections::HashMap;

/// Share of the salary paid per dependent.
pub const BONUS_RATE_PER_DEPENDENT: f64 = 0.02;

/// `salary * 0.02 * dependent_count`, or exactly `0.0` when there are no dependents.
///
/// Salary is not validated; a negative salary yields a negative bonus.
pub fn compute_bonus(salary: f64, dependent_count: i64) -> f64 {
    if dependent_count <= 0 {
        return 0.0;
    }
    salary * BONUS_RATE_PER_DEPENDENT * dependent_count as f64
}

/// Authoritative store for workers and their dependents.
///
/// Mutations take `&mut self`, so the worker map and the dependent list are
/// always updated together. Wrap it in [`crate::core::shared::SharedRecordService`]
/// for access from several tasks.
#[derive(Debug, Default, Clone)]
pub struct RecordService {
    workers: HashMap<i32, Worker>,
    dependents: Vec<Dependent>,
}

impl RecordService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `worker` and one dependent per non-blank name, in input order.
    ///
    /// Names are trimmed; names that trim to empty are skipped without error.
    pub fn register<I, N>(&mut self, worker: Worker, dependent_names: I) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let code = worker.code();
        if self.workers.contains_key(&code) {
            return Err(HrError::DuplicateWorker { code });
        }
        self.workers.insert(code, worker);

        self.dependents.extend(
            dependent_names
                .into_iter()
                .filter_map(|name| {
                    let trimmed = name.as_ref().trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                })
                .map(|name| Dependent::new(code, name)),
        );
        Ok(())
    }

    /// Zero for unknown codes.
    pub fn count_dependents(&self, code: i32) -> usize {
        self.dependents
            .iter()
            .filter(|d| d.owner_code() == code)
            .count()
    }

    pub fn compute_bonus(salary: f64, dependent_count: i64) -> f64 {
        compute_bonus(salary, dependent_count)
    }

    /// Structured report, ordered by case-insensitive name then by code.
    pub fn bonus_report(&self) -> BonusReport {
        let mut workers: Vec<&Worker> = self.workers.values().collect();
        workers.sort_by_cached_key(|w| (w.name.to_lowercase(), w.code()));

        let entries = workers
            .into_iter()
            .map(|w| {
                let dependents = self.count_dependents(w.code());
                BonusEntry {
                    code: w.code(),
                    name: w.name.clone(),
                    dependents,
                    bonus: compute_bonus(w.salary, dependents as i64),
                }
            })
            .collect();

        BonusReport::new(entries)
    }

    /// Header, separator, then `Nome: ..; Dependentes: ..; Bonus: ..` per worker.
    pub fn list_bonus_report(&self) -> Vec<String> {
        self.bonus_report().lines()
    }

    /// Removes the worker and every dependent it owns.
    pub fn remove_worker(&mut self, code: i32) -> Result<Worker> {
        let removed = self
            .workers
            .remove(&code)
            .ok_or(HrError::UnknownWorker { code })?;
        self.dependents.retain(|d| d.owner_code() != code);
        Ok(removed)
    }

    pub fn set_salary(&mut self, code: i32, new_salary: f64) -> Result<()> {
        let worker = self
            .workers
            .get_mut(&code)
            .ok_or(HrError::UnknownWorker { code })?;
        worker.salary = new_salary;
        Ok(())
    }

    /// Read-only view of every worker, in no particular order.
    pub fn list_workers(&self) -> impl ExactSizeIterator<Item = &Worker> + '_ {
        self.workers.values()
    }

    pub fn worker(&self, code: i32) -> Option<&Worker> {
        self.workers.get(&code)
    }

    /// Dependents of `code` in registration order.
    pub fn dependents_of(&self, code: i32) -> Vec<&Dependent> {
        self.dependents
            .iter()
            .filter(|d| d.owner_code() == code)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}
