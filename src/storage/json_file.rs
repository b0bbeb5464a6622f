use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::vacancy::{Vacancy, VacancyRecord};
use crate::storage::VacancyStorage;

/// Flat-file store: a pretty-printed JSON array with one eight-field record
/// per posting, readable and diffable by hand.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Open the store, creating an empty `[]` file when none exists yet.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let storage = Self { path: path.into() };
        if !storage.path.exists() {
            storage.write_records(&[])?;
        }
        Ok(storage)
    }

    /// A missing or malformed file reads as an empty store.
    fn read_records(&self) -> Vec<VacancyRecord> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&contents).unwrap_or_default()
    }

    fn write_records(&self, records: &[VacancyRecord]) -> Result<(), AppError> {
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

// Stored postings are identified by the (title, employer, url) triple, not
// by url alone.
fn same_posting(a: &VacancyRecord, b: &VacancyRecord) -> bool {
    a.title == b.title && a.employer == b.employer && a.url == b.url
}

impl VacancyStorage for JsonStorage {
    fn add(&self, vacancy: &Vacancy) -> Result<(), AppError> {
        let mut records = self.read_records();
        let record = vacancy.to_record();

        if records.iter().any(|existing| same_posting(existing, &record)) {
            return Ok(());
        }
        records.push(record);
        self.write_records(&records)
    }

    fn query(&self, criteria: &HashMap<String, String>) -> Result<Vec<Vacancy>, AppError> {
        let mut vacancies = Vec::new();
        for record in self.read_records() {
            vacancies.push(Vacancy::from_record(record)?);
        }

        if criteria.is_empty() {
            return Ok(vacancies);
        }

        Ok(vacancies
            .into_iter()
            .filter(|vacancy| {
                criteria.iter().all(|(field, needle)| {
                    vacancy
                        .field_text(field)
                        .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase()))
                })
            })
            .collect())
    }

    fn remove(&self, vacancy: &Vacancy) -> Result<(), AppError> {
        let record = vacancy.to_record();
        let records: Vec<VacancyRecord> = self
            .read_records()
            .into_iter()
            .filter(|existing| !same_posting(existing, &record))
            .collect();
        self.write_records(&records)
    }

    fn clear(&self) -> Result<(), AppError> {
        self.write_records(&[])
    }
}
