use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An employee record. `code` is the identity key and never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    code: i32,
    pub name: String,
    pub role: String,
    pub salary: f64,
}

impl Worker {
    pub fn new(code: i32, name: impl Into<String>, role: impl Into<String>, salary: f64) -> Self {
        Self {
            code,
            name: name.into(),
            role: role.into(),
            salary,
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl PartialEq for Worker {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Worker {}

impl Hash for Worker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

/// A dependent of a worker. The owner is referenced by code only; the
/// record service owns every `Worker`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependent {
    owner_code: i32,
    name: String,
}

impl Dependent {
    pub(crate) fn new(owner_code: i32, name: impl Into<String>) -> Self {
        Self {
            owner_code,
            name: name.into(),
        }
    }

    pub fn owner_code(&self) -> i32 {
        self.owner_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One row of the monthly bonus report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusEntry {
    pub code: i32,
    pub name: String,
    pub dependents: usize,
    pub bonus: f64,
}
