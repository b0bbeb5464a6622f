use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AppError;
use crate::models::vacancy::{NewVacancy, Vacancy};
use crate::sources::VacancySource;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru/vacancies";
/// Area id hh.ru uses for the whole of Russia.
pub const AREA_RUSSIA: u32 = 113;

const USER_AGENT: &str = "HH-User-Agent";
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HeadHunter {
    client: reqwest::Client,
    base_url: String,
    area: u32,
}

impl HeadHunter {
    pub fn new(base_url: impl Into<String>, area: u32) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            area,
        })
    }

    /// Probe the API root before searching. hh.ru answers a plain GET on
    /// the vacancies endpoint, so anything but success means unreachable.
    async fn connect(&self) -> bool {
        let response = self
            .client
            .get(&self.base_url)
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;
        matches!(response, Ok(r) if r.status().is_success())
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn name(&self) -> &str {
        "hh.ru"
    }

    async fn search(&self, query: &str, per_page: u32) -> Result<Vec<Value>, AppError> {
        if !self.connect().await {
            return Err(AppError::Connection(format!(
                "failed to reach {}",
                self.base_url
            )));
        }

        let data: Value = self
            .client
            .get(&self.base_url)
            .query(&[
                ("text", query.to_string()),
                ("area", self.area.to_string()),
                ("per_page", per_page.to_string()),
                ("page", "0".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let items = data
            .get("items")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        Ok(items)
    }
}

/// Map one raw hh.ru search record into a validated vacancy.
///
/// The record is semi-structured: `salary` may be null, snippet fields may
/// be null, the employer block may be missing. Every fallback is empty, and
/// the salary bounds go through the usual clamping in `Vacancy::new`.
pub fn parse_record(raw: &Value) -> Result<Vacancy, AppError> {
    let salary = raw.get("salary");
    let snippet = raw.get("snippet");

    Vacancy::new(NewVacancy {
        title: text(raw.get("name")),
        url: text(raw.get("alternate_url")),
        salary_from: salary.and_then(|s| s.get("from")).and_then(|v| v.as_f64()),
        salary_to: salary.and_then(|s| s.get("to")).and_then(|v| v.as_f64()),
        currency: text(salary.and_then(|s| s.get("currency"))),
        description: text(snippet.and_then(|s| s.get("responsibility"))),
        requirements: text(snippet.and_then(|s| s.get("requirement"))),
        employer: text(raw.get("employer").and_then(|e| e.get("name"))),
    })
}

/// Map a whole batch of raw records, skipping the ones that fail
/// validation. One bad record never aborts the batch.
pub fn parse_records(raw: &[Value]) -> Vec<Vacancy> {
    let mut vacancies = Vec::new();
    for record in raw {
        match parse_record(record) {
            Ok(vacancy) => vacancies.push(vacancy),
            Err(e) => {
                tracing::warn!("Skipping vacancy record: {e}");
            }
        }
    }
    vacancies
}

fn text(value: Option<&Value>) -> String {
    value.and_then(|v| v.as_str()).unwrap_or("").to_string()
}
