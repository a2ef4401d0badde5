// src/config/mod.rs
// All values load from the environment (.env supported); defaults are
// documented here and nowhere else.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct EcholineConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Database
    pub database_url: String,
    pub sqlite_max_connections: u32,

    // ── Generation service
    pub openai_base_url: String,
    pub model: String,
    pub temperature: f32,

    // ── Prompt assembly
    pub context_messages: usize,
    pub example_messages: usize,
    pub history_fetch_cap: i64,

    // ── Style analysis
    pub phrase_words: usize,
    pub phrase_top_k: usize,

    // ── Logging
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean = val.split('#').next().unwrap_or("").trim();
            match clean.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl EcholineConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            host: env_var_or("ECHOLINE_HOST", "0.0.0.0".to_string()),
            port: env_var_or("ECHOLINE_PORT", 3001),
            database_url: env_var_or("DATABASE_URL", "sqlite:./echoline.db?mode=rwc".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
            openai_base_url: env_var_or(
                "OPENAI_BASE_URL",
                "https://api.openai.com/v1".to_string(),
            ),
            model: env_var_or("ECHOLINE_MODEL", "gpt-4o-mini".to_string()),
            temperature: env_var_or("ECHOLINE_TEMPERATURE", 0.8),
            context_messages: env_var_or("ECHOLINE_CONTEXT_MESSAGES", 30),
            example_messages: env_var_or("ECHOLINE_EXAMPLE_MESSAGES", 50),
            history_fetch_cap: env_var_or("ECHOLINE_HISTORY_FETCH_CAP", 1000),
            phrase_words: env_var_or("ECHOLINE_PHRASE_WORDS", 3),
            phrase_top_k: env_var_or("ECHOLINE_PHRASE_TOP_K", 5),
            log_level: env_var_or("ECHOLINE_LOG_LEVEL", "info".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<EcholineConfig> = Lazy::new(EcholineConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = EcholineConfig::from_env();
        assert!(config.port > 0);
        assert!(config.context_messages > 0);
        assert!(config.example_messages > 0);
        assert_eq!(config.phrase_words, 3);
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = EcholineConfig::from_env();
        assert!(config.bind_address().contains(':'));
    }
}
