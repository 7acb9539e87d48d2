use std::{env, path::PathBuf};
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Settings read from the environment once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// public base url advertised in the openapi document
    pub host: String,
    pub database_url: Option<String>,
    /// directory holding the prebuilt frontend bundle
    pub static_dir: PathBuf,
    pub api_key: Option<String>,
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|err| {
                warn!(value = %raw, error = %err, "Invalid PORT, using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var("HOST").unwrap_or_else(|_| format!("http://localhost:{}", port));

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| {
            info!("STATIC_DIR not set, using default: {DEFAULT_STATIC_DIR}");
            DEFAULT_STATIC_DIR.to_string()
        });

        Self {
            port,
            host,
            database_url: non_empty_var("DATABASE_URL"),
            static_dir: PathBuf::from(static_dir),
            api_key: non_empty_var("API_KEY"),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Checked once; the frontend routes are either mounted for the whole
    /// process lifetime or not at all.
    pub fn has_frontend(&self) -> bool {
        self.static_dir.is_dir()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
impl Config {
    pub fn for_tests(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: DEFAULT_PORT,
            host: format!("http://localhost:{}", DEFAULT_PORT),
            database_url: None,
            static_dir: static_dir.into(),
            api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}
