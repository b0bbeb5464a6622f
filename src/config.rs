use std::path::PathBuf;

use clap::Parser;

use crate::sources::headhunter;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobscout", about = "Personal hh.ru vacancy search")]
pub struct Config {
    /// Path of the JSON file vacancies are saved to
    #[arg(long, env = "JOBSCOUT_STORAGE", default_value = "vacancies.json")]
    pub storage_path: PathBuf,

    /// hh.ru vacancy search endpoint
    #[arg(long, env = "HH_BASE_URL", default_value = headhunter::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// hh.ru area id to search in (113 = Russia)
    #[arg(long, env = "HH_AREA", default_value_t = headhunter::AREA_RUSSIA)]
    pub area: u32,
}
