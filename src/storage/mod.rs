// Storage module.
// Defines the trait and the JSON flat-file store behind it.

use std::collections::HashMap;

use crate::error::AppError;
use crate::models::vacancy::Vacancy;

pub mod json_file;

pub use json_file::JsonStorage;

/// Trait that all vacancy stores must implement.
pub trait VacancyStorage {
    /// Persist a vacancy. Adding a posting whose (title, employer, url)
    /// triple is already stored is a no-op.
    fn add(&self, vacancy: &Vacancy) -> Result<(), AppError>;

    /// Fetch stored vacancies matching every criteria entry, field name to
    /// case-insensitive substring. Empty criteria returns everything.
    fn query(&self, criteria: &HashMap<String, String>) -> Result<Vec<Vacancy>, AppError>;

    /// Remove the stored posting with this vacancy's (title, employer, url).
    #[allow(dead_code)]
    fn remove(&self, vacancy: &Vacancy) -> Result<(), AppError>;

    /// Drop every stored vacancy.
    fn clear(&self) -> Result<(), AppError>;
}
