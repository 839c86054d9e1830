//! Resolved-collection container and loaders for the CLI collaborator.
//!
//! Callers normally hand the clearance module collections they fetched
//! themselves; this module is for tools that read a exported snapshot from
//! disk instead.

mod parser;

pub use parser::records_from_csv;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clearance::domain::{
    Clearance, Department, Employee, ParseStatusError, SwtdRecord, Term,
};
use crate::clearance::status::{term_status, TermStatus};

/// Fully resolved collections handed over by the fetch layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub records: Vec<SwtdRecord>,
    #[serde(default)]
    pub clearances: Vec<Clearance>,
}

impl Dataset {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let dataset = serde_json::from_reader(reader)?;
        Ok(dataset)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_json_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            employees = dataset.employees.len(),
            records = dataset.records.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn term(&self, id: i64) -> Option<&Term> {
        self.terms.iter().find(|term| term.id == id)
    }

    pub fn department(&self, id: i64) -> Option<&Department> {
        self.departments.iter().find(|dept| dept.id == id)
    }

    pub fn employee(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn records_for(&self, author_id: i64) -> Vec<&SwtdRecord> {
        self.records
            .iter()
            .filter(|record| record.author_id == author_id)
            .collect()
    }

    pub fn clearances_for(&self, employee_id: i64) -> Vec<&Clearance> {
        self.clearances
            .iter()
            .filter(|clearance| clearance.employee_id == employee_id)
            .collect()
    }

    /// Id-based standing lookup. Unknown ids read as the zero standing —
    /// zero points, not cleared — rather than an error.
    pub fn term_status(&self, employee_id: i64, term_id: i64) -> TermStatus {
        match (self.employee(employee_id), self.term(term_id)) {
            (Some(employee), Some(term)) => {
                term_status(employee, term, &self.records, &self.clearances)
            }
            _ => TermStatus::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Status(#[from] ParseStatusError),
}
