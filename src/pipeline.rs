//! Transformation stages over vacancy collections.
//!
//! Every stage is a pure function: it borrows its input, returns a fresh
//! vector and never touches the network or the storage file.

use crate::models::vacancy::Vacancy;

/// Keep vacancies mentioning at least one of the words anywhere in their
/// title, description or requirements, case-insensitively. An empty word
/// list keeps the input as is.
pub fn filter_by_keywords(vacancies: &[Vacancy], words: &[String]) -> Vec<Vacancy> {
    if words.is_empty() {
        return vacancies.to_vec();
    }

    vacancies
        .iter()
        .filter(|vacancy| {
            let haystack = format!(
                "{} {} {}",
                vacancy.title(),
                vacancy.description(),
                vacancy.requirements()
            )
            .to_lowercase();
            words.iter().any(|word| haystack.contains(&word.to_lowercase()))
        })
        .cloned()
        .collect()
}

/// Keep vacancies whose average salary falls inside the requested range.
/// The range is `"N-M"` or a bare `"N"` (no upper bound). An empty or
/// malformed range keeps the input as is — the filter fails open.
pub fn filter_by_salary_range(vacancies: &[Vacancy], range: &str) -> Vec<Vacancy> {
    let Some((low, high)) = parse_salary_range(range) else {
        return vacancies.to_vec();
    };

    vacancies
        .iter()
        .filter(|vacancy| {
            let avg = vacancy.avg_salary();
            low <= avg && avg <= high
        })
        .cloned()
        .collect()
}

// None means "no usable range", which callers treat as no filtering.
fn parse_salary_range(range: &str) -> Option<(f64, f64)> {
    let range = range.trim();
    if range.is_empty() {
        return None;
    }

    if let Some((low, high)) = range.split_once('-') {
        let low = low.trim().parse::<i64>().ok()?;
        let high = high.trim().parse::<i64>().ok()?;
        Some((low as f64, high as f64))
    } else {
        let low = range.parse::<i64>().ok()?;
        Some((low as f64, f64::INFINITY))
    }
}

/// Sort by average salary, highest first. The sort is stable: postings with
/// equal averages keep their relative order.
pub fn sort_by_salary(vacancies: &[Vacancy]) -> Vec<Vacancy> {
    let mut sorted = vacancies.to_vec();
    sorted.sort_by(|a, b| Vacancy::by_avg_salary(b, a));
    sorted
}

/// First `n` vacancies, or the whole input when it is shorter.
pub fn top_n(vacancies: &[Vacancy], n: usize) -> Vec<Vacancy> {
    vacancies.iter().take(n).cloned().collect()
}

/// Render a numbered block per vacancy, or the not-found sentinel for an
/// empty input. Returns the text; printing is the caller's business.
pub fn render(vacancies: &[Vacancy]) -> String {
    if vacancies.is_empty() {
        return "Вакансии не найдены.".to_string();
    }

    let rule = "=".repeat(50);
    let mut out = String::new();
    for (i, vacancy) in vacancies.iter().enumerate() {
        out.push_str(&format!("\n{rule}\nвакансия #{}\n{rule}\n{vacancy}", i + 1));
    }
    out
}
