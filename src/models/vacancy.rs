use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Unvalidated input for building a [`Vacancy`]. Salary bounds stay raw
/// floats here: the hh.ru API reports them as JSON numbers that may be
/// null, fractional or negative.
#[derive(Debug, Default, Clone)]
pub struct NewVacancy {
    pub title: String,
    pub url: String,
    pub salary_from: Option<f64>,
    pub salary_to: Option<f64>,
    pub currency: String,
    pub description: String,
    pub requirements: String,
    pub employer: String,
}

/// Persisted form of a vacancy: exactly the eight fields, integer salary
/// bounds. This is what the storage file contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub title: String,
    pub url: String,
    pub salary_from: i64,
    pub salary_to: i64,
    pub currency: String,
    pub description: String,
    pub requirements: String,
    pub employer: String,
}

/// A normalized job posting. Immutable after construction: [`Vacancy::new`]
/// is the only way in, and it enforces the title and url invariants and
/// clamps salary bounds to non-negative integers.
#[derive(Debug, Clone, PartialEq)]
pub struct Vacancy {
    title: String,
    url: String,
    salary_from: i64,
    salary_to: i64,
    currency: String,
    description: String,
    requirements: String,
    employer: String,
}

impl Vacancy {
    pub fn new(input: NewVacancy) -> Result<Self, AppError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation(
                "vacancy title must not be empty".to_string(),
            ));
        }
        if !input.url.starts_with("http://") && !input.url.starts_with("https://") {
            return Err(AppError::Validation(format!(
                "vacancy url must start with http:// or https://, got '{}'",
                input.url
            )));
        }

        Ok(Self {
            title,
            url: input.url,
            salary_from: normalize_salary(input.salary_from),
            salary_to: normalize_salary(input.salary_to),
            currency: input.currency,
            description: input.description,
            requirements: input.requirements,
            employer: input.employer,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    #[allow(dead_code)]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[allow(dead_code)]
    pub fn salary_from(&self) -> i64 {
        self.salary_from
    }

    #[allow(dead_code)]
    pub fn salary_to(&self) -> i64 {
        self.salary_to
    }

    #[allow(dead_code)]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn requirements(&self) -> &str {
        &self.requirements
    }

    #[allow(dead_code)]
    pub fn employer(&self) -> &str {
        &self.employer
    }

    /// Average of the salary bounds. A single bound stands on its own, no
    /// bounds at all mean 0.0.
    pub fn avg_salary(&self) -> f64 {
        match (self.salary_from, self.salary_to) {
            (0, 0) => 0.0,
            (from, 0) => from as f64,
            (0, to) => to as f64,
            (from, to) => (from + to) as f64 / 2.0,
        }
    }

    /// Ranking comparator. Vacancies order purely by average salary, so two
    /// postings with the same average are Equal here even when every other
    /// field differs.
    pub fn by_avg_salary(a: &Vacancy, b: &Vacancy) -> Ordering {
        a.avg_salary().total_cmp(&b.avg_salary())
    }

    /// String form of a named field, for criteria matching. Unknown field
    /// names yield None.
    pub(crate) fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "title" => Some(self.title.clone()),
            "url" => Some(self.url.clone()),
            "salary_from" => Some(self.salary_from.to_string()),
            "salary_to" => Some(self.salary_to.to_string()),
            "currency" => Some(self.currency.clone()),
            "description" => Some(self.description.clone()),
            "requirements" => Some(self.requirements.clone()),
            "employer" => Some(self.employer.clone()),
            _ => None,
        }
    }

    pub fn to_record(&self) -> VacancyRecord {
        VacancyRecord {
            title: self.title.clone(),
            url: self.url.clone(),
            salary_from: self.salary_from,
            salary_to: self.salary_to,
            currency: self.currency.clone(),
            description: self.description.clone(),
            requirements: self.requirements.clone(),
            employer: self.employer.clone(),
        }
    }

    /// Rebuild a vacancy from its persisted record. Goes back through
    /// [`Vacancy::new`], so a hand-edited store with a blank title or a
    /// bogus url surfaces a validation error instead of a broken value.
    pub fn from_record(record: VacancyRecord) -> Result<Self, AppError> {
        Self::new(NewVacancy {
            title: record.title,
            url: record.url,
            salary_from: Some(record.salary_from as f64),
            salary_to: Some(record.salary_to as f64),
            currency: record.currency,
            description: record.description,
            requirements: record.requirements,
            employer: record.employer,
        })
    }
}

/// Absent, negative or non-finite salary input clamps to 0; valid values
/// truncate to whole units.
fn normalize_salary(value: Option<f64>) -> i64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v as i64,
        _ => 0,
    }
}

impl fmt::Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let salary = if self.salary_from == 0 && self.salary_to == 0 {
            "Зарплата не указана".to_string()
        } else {
            let mut parts = Vec::new();
            if self.salary_from != 0 {
                parts.push(format!("от {}", self.salary_from));
            }
            if self.salary_to != 0 {
                parts.push(format!("до {}", self.salary_to));
            }
            format!("{} {}", parts.join(" "), self.currency)
        };

        writeln!(f, "Вакансия: {}", self.title)?;
        writeln!(f, "Компания: {}", self.employer)?;
        writeln!(f, "Зарплата: {salary}")?;
        writeln!(f, "Ссылка: {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, url: &str) -> NewVacancy {
        NewVacancy {
            title: title.to_string(),
            url: url.to_string(),
            ..NewVacancy::default()
        }
    }

    fn with_salary(from: Option<f64>, to: Option<f64>) -> Vacancy {
        Vacancy::new(NewVacancy {
            salary_from: from,
            salary_to: to,
            ..draft("Rust разработчик", "https://hh.ru/vacancy/1")
        })
        .unwrap()
    }

    #[test]
    fn construction_trims_title() {
        let vacancy =
            Vacancy::new(draft("  Python разработчик  ", "https://hh.ru/vacancy/1")).unwrap();
        assert_eq!(vacancy.title(), "Python разработчик");
    }

    #[test]
    fn construction_rejects_blank_title() {
        assert!(Vacancy::new(draft("", "https://hh.ru/vacancy/1")).is_err());
        assert!(Vacancy::new(draft("   ", "https://hh.ru/vacancy/1")).is_err());
    }

    #[test]
    fn construction_rejects_non_http_url() {
        assert!(Vacancy::new(draft("Developer", "")).is_err());
        assert!(Vacancy::new(draft("Developer", "hh.ru/vacancy/1")).is_err());
        assert!(Vacancy::new(draft("Developer", "ftp://hh.ru/vacancy/1")).is_err());
    }

    #[test]
    fn both_http_schemes_are_accepted() {
        assert!(Vacancy::new(draft("Developer", "http://hh.ru/vacancy/1")).is_ok());
        assert!(Vacancy::new(draft("Developer", "https://hh.ru/vacancy/1")).is_ok());
    }

    #[test]
    fn missing_and_negative_salaries_normalize_to_zero() {
        let vacancy = with_salary(None, Some(-5000.0));
        assert_eq!(vacancy.salary_from(), 0);
        assert_eq!(vacancy.salary_to(), 0);
    }

    #[test]
    fn fractional_salaries_truncate() {
        let vacancy = with_salary(Some(100000.9), None);
        assert_eq!(vacancy.salary_from(), 100000);
    }

    #[test]
    fn avg_is_mean_of_both_bounds() {
        assert_eq!(
            with_salary(Some(100000.0), Some(150000.0)).avg_salary(),
            125000.0
        );
    }

    #[test]
    fn avg_falls_back_to_the_single_bound() {
        assert_eq!(with_salary(Some(80000.0), None).avg_salary(), 80000.0);
        assert_eq!(with_salary(None, Some(90000.0)).avg_salary(), 90000.0);
    }

    #[test]
    fn avg_is_zero_without_bounds() {
        assert_eq!(with_salary(None, None).avg_salary(), 0.0);
    }

    #[test]
    fn equal_averages_compare_equal_across_different_postings() {
        let a = Vacancy::new(NewVacancy {
            salary_from: Some(100000.0),
            salary_to: Some(150000.0),
            employer: "Tech Company".to_string(),
            ..draft("Backend разработчик", "https://hh.ru/vacancy/1")
        })
        .unwrap();
        let b = Vacancy::new(NewVacancy {
            salary_from: Some(125000.0),
            ..draft("Frontend разработчик", "https://hh.ru/vacancy/2")
        })
        .unwrap();
        assert_eq!(Vacancy::by_avg_salary(&a, &b), Ordering::Equal);
    }

    #[test]
    fn comparator_orders_by_average() {
        let low = with_salary(Some(50000.0), None);
        let high = with_salary(None, Some(200000.0));
        assert_eq!(Vacancy::by_avg_salary(&low, &high), Ordering::Less);
        assert_eq!(Vacancy::by_avg_salary(&high, &low), Ordering::Greater);
    }

    #[test]
    fn record_round_trip_is_lossless() {
        let vacancy = Vacancy::new(NewVacancy {
            title: "Python разработчик".to_string(),
            url: "https://hh.ru/vacancy/123".to_string(),
            salary_from: Some(100000.0),
            salary_to: Some(150000.0),
            currency: "RUR".to_string(),
            description: "Разработка backend на Python".to_string(),
            requirements: "Опыт работы 3+ года, Django, Flask".to_string(),
            employer: "Tech Company".to_string(),
        })
        .unwrap();

        let restored = Vacancy::from_record(vacancy.to_record()).unwrap();
        assert_eq!(restored, vacancy);
    }

    #[test]
    fn tampered_record_with_blank_title_is_rejected() {
        let mut record = with_salary(None, None).to_record();
        record.title = "  ".to_string();
        assert!(Vacancy::from_record(record).is_err());
    }

    #[test]
    fn field_text_covers_every_field_and_nothing_else() {
        let vacancy = with_salary(Some(100000.0), None);
        assert_eq!(vacancy.field_text("title").unwrap(), "Rust разработчик");
        assert_eq!(vacancy.field_text("salary_from").unwrap(), "100000");
        assert!(vacancy.field_text("location").is_none());
    }

    #[test]
    fn display_shows_both_salary_bounds() {
        let vacancy = Vacancy::new(NewVacancy {
            salary_from: Some(100000.0),
            salary_to: Some(150000.0),
            currency: "RUR".to_string(),
            employer: "Tech Company".to_string(),
            ..draft("Python разработчик", "https://hh.ru/vacancy/123")
        })
        .unwrap();

        let shown = vacancy.to_string();
        assert!(shown.contains("Вакансия: Python разработчик"));
        assert!(shown.contains("Компания: Tech Company"));
        assert!(shown.contains("Зарплата: от 100000 до 150000 RUR"));
        assert!(shown.contains("Ссылка: https://hh.ru/vacancy/123"));
    }

    #[test]
    fn display_omits_the_absent_bound() {
        let vacancy = Vacancy::new(NewVacancy {
            salary_from: Some(100000.0),
            currency: "RUR".to_string(),
            ..draft("Developer", "https://hh.ru/vacancy/1")
        })
        .unwrap();
        assert!(vacancy.to_string().contains("Зарплата: от 100000 RUR"));
    }

    #[test]
    fn display_reports_missing_salary() {
        assert!(
            with_salary(None, None)
                .to_string()
                .contains("Зарплата: Зарплата не указана")
        );
    }
}
