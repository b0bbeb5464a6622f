//! The interactive console session.
//!
//! One linear flow: prompt for search parameters, fetch and persist the
//! results, run them through the pipeline, then offer a small menu over the
//! saved store.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::error::AppError;
use crate::pipeline;
use crate::sources::{VacancySource, headhunter};
use crate::storage::VacancyStorage;

/// Run the session. Errors anywhere inside it are reported to the user in
/// one place instead of crashing the process.
pub async fn run(source: &dyn VacancySource, storage: &dyn VacancyStorage) {
    println!("Добро пожаловать в программу для поиска вакансий!");
    println!("{}", "=".repeat(50));

    if let Err(e) = session(source, storage).await {
        println!("Произошла ошибка: {e}");
    }
}

async fn session(
    source: &dyn VacancySource,
    storage: &dyn VacancyStorage,
) -> Result<(), AppError> {
    let query = prompt("Введите поисковый запрос (например: Python разработчик): ")?;
    let per_page: u32 = prompt("Введите количество вакансий для загрузки (по умолчанию 100): ")?
        .parse()
        .unwrap_or(100);
    let top_count = prompt("Введите количество вакансий для вывода в топ N: ")?
        .parse::<i64>()
        .unwrap_or(10)
        .max(0) as usize;
    let filter_words: Vec<String> =
        prompt("Введите ключевые слова для фильтрации вакансий (через пробел): ")?
            .split_whitespace()
            .map(str::to_string)
            .collect();
    let salary_range = prompt("Введите диапазон зарплат (например: 100000-150000): ")?;

    println!("\nЗагружаю вакансии...");
    let raw = source.search(&query, per_page).await?;
    tracing::debug!("{} returned {} raw records", source.name(), raw.len());
    let vacancies = headhunter::parse_records(&raw);

    for vacancy in &vacancies {
        storage.add(vacancy)?;
    }
    println!("Загружено {} вакансий", vacancies.len());

    let filtered = pipeline::filter_by_keywords(&vacancies, &filter_words);
    let ranged = pipeline::filter_by_salary_range(&filtered, &salary_range);
    let sorted = pipeline::sort_by_salary(&ranged);
    let top = pipeline::top_n(&sorted, top_count);

    println!("\nНайдено {} вакансий из запрошенных {top_count}:", top.len());
    println!("{}", pipeline::render(&top));

    menu(storage)
}

fn menu(storage: &dyn VacancyStorage) -> Result<(), AppError> {
    loop {
        println!("\nДополнительные возможности:");
        println!("1. Поиск по сохраненным вакансиям");
        println!("2. Очистить базу вакансий");
        println!("3. Выйти");

        let choice = prompt("Выберите действие (1-3): ")?;
        match choice.as_str() {
            "1" => {
                let needle =
                    prompt("Введите ключевое слово для поиска в сохраненных вакансиях: ")?;
                if needle.is_empty() {
                    continue;
                }
                let criteria = HashMap::from([("title".to_string(), needle.to_lowercase())]);
                let found = storage.query(&criteria)?;
                println!("\nНайдено {} вакансий:", found.len());
                println!("{}", pipeline::render(&found));
            }
            "2" => {
                let confirm =
                    prompt("Вы уверены, что хотите очистить базу вакансий? (да/нет): ")?;
                if confirm.to_lowercase() == "да" {
                    storage.clear()?;
                    println!("База вакансий очищена.");
                }
            }
            "3" => {
                println!("До свидания!");
                return Ok(());
            }
            _ => println!("Неверный выбор. Попробуйте снова."),
        }
    }
}

fn prompt(message: &str) -> Result<String, AppError> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(line.trim().to_string())
}
