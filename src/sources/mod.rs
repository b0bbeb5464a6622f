// Vacancy source module.
// Defines the trait and the hh.ru implementation behind the search flow.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;

pub mod headhunter;

pub use headhunter::HeadHunter;

/// Trait that all vacancy sources must implement.
/// A source fetches raw records from a remote job board; turning them into
/// `Vacancy` values is the mapping half next to each implementation.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Human-readable source name, used in diagnostics.
    fn name(&self) -> &str;

    /// Fetch raw vacancy records matching the search query.
    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<Value>, AppError>;
}
