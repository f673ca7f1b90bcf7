use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::error::{ClientError, Result};

// Настройки клиента выбора мест, собираются из переменных окружения
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub site: SiteConfig,
    pub page: PageConfig,
}

// Окружение и фильтр логов
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки сайта, к которому обращаемся за лайками
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    pub csrf_token: Option<String>,
    pub request_timeout_seconds: u64,
}

impl SiteConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

// Откуда читать отрендеренную страницу выбора мест
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub seat_page_path: String,
}

pub const DEFAULT_LOG_FILTER: &str = "cinema_seats=debug";

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Self {
        Self::try_from_env().expect("Invalid configuration")
    }

    pub fn try_from_env() -> Result<Self> {
        let request_timeout_seconds = var_or("REQUEST_TIMEOUT_SECONDS", "10")
            .parse()
            .map_err(|_| ClientError::Config("REQUEST_TIMEOUT_SECONDS must be a valid number".to_string()))?;

        Ok(Config {
            app: AppConfig {
                environment: var_or("ENVIRONMENT", "development"),
                rust_log: var_or("RUST_LOG", DEFAULT_LOG_FILTER),
            },
            site: SiteConfig {
                base_url: var_or("SITE_BASE_URL", "http://127.0.0.1:5001")
                    .trim_end_matches('/')
                    .to_string(),
                csrf_token: env::var("CSRF_TOKEN").ok().filter(|t| !t.is_empty()),
                request_timeout_seconds,
            },
            page: PageConfig {
                seat_page_path: var_or("SEAT_PAGE_PATH", "seat_page.json"),
            },
        })
    }
}
