use anyhow::Result;
use std::env;

/// Process-wide settings, resolved once at startup and immutable afterwards.
///
/// Every field has a documented default; only malformed values (an
/// unparseable bool or number) abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub description: String,
    pub version: String,

    pub cors_origins: Vec<String>,
    pub cors_allow_credentials: bool,
    pub cors_allow_methods: Vec<String>,
    pub cors_allow_headers: Vec<String>,

    pub secret_key: String,
    /// Route prefix reserved for reverse-proxy mounting; not applied to the
    /// router itself.
    pub prefix: String,

    pub openai_key: String,
    /// Alternate base URL for the chat-completion API. Empty means the
    /// official endpoint.
    pub openai_proxy: String,
    pub openai_model: String,
    pub openai_timeout_secs: u64,

    pub debug: bool,
    /// Numeric log level: 10 debug, 20 info, 30 warn, 40+ error.
    pub log_level: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            title: env::var("TITLE").unwrap_or_else(|_| "Smart Reader GPT".to_string()),
            description: env::var("DESCRIPTION")
                .unwrap_or_else(|_| "A file reader based on GPT".to_string()),
            version: env::var("VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            cors_origins: csv_list(env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string())),
            cors_allow_credentials: env::var("CORS_ALLOW_CREDENTIALS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()?,
            cors_allow_methods: csv_list(
                env::var("CORS_ALLOW_METHODS").unwrap_or_else(|_| "*".to_string()),
            ),
            cors_allow_headers: csv_list(
                env::var("CORS_ALLOW_HEADERS").unwrap_or_else(|_| "*".to_string()),
            ),
            secret_key: env::var("SECRET_KEY").unwrap_or_default(),
            prefix: env::var("PREFIX").unwrap_or_else(|_| "/api".to_string()),
            openai_key: env::var("OPENAI_KEY").unwrap_or_default(),
            openai_proxy: env::var("OPENAI_PROXY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            openai_timeout_secs: env::var("OPENAI_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            debug: env::var("DEBUGGER")
                .unwrap_or_else(|_| "false".to_string())
                .parse()?,
            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "20".to_string())
                .parse()?,
        })
    }

    /// Maps the numeric log level onto a tracing level. The debug flag wins
    /// over the numeric level.
    pub fn tracing_level(&self) -> tracing::Level {
        if self.debug {
            return tracing::Level::DEBUG;
        }
        match self.log_level {
            0..=10 => tracing::Level::DEBUG,
            11..=20 => tracing::Level::INFO,
            21..=30 => tracing::Level::WARN,
            _ => tracing::Level::ERROR,
        }
    }
}

fn csv_list(raw: String) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            title: "Smart Reader GPT".to_string(),
            description: "A file reader based on GPT".to_string(),
            version: "0.1.0".to_string(),
            cors_origins: vec!["*".to_string()],
            cors_allow_credentials: true,
            cors_allow_methods: vec!["*".to_string()],
            cors_allow_headers: vec!["*".to_string()],
            secret_key: String::new(),
            prefix: "/api".to_string(),
            openai_key: String::new(),
            openai_proxy: String::new(),
            openai_model: "gpt-3.5-turbo".to_string(),
            openai_timeout_secs: 30,
            debug: false,
            log_level: 20,
        }
    }

    #[test]
    fn test_numeric_log_level_mapping() {
        let mut config = base_config();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);

        config.log_level = 10;
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);

        config.log_level = 30;
        assert_eq!(config.tracing_level(), tracing::Level::WARN);

        config.log_level = 50;
        assert_eq!(config.tracing_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_debug_flag_overrides_log_level() {
        let mut config = base_config();
        config.debug = true;
        config.log_level = 40;
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_csv_list_trims_entries() {
        let list = csv_list("http://a.example, http://b.example".to_string());
        assert_eq!(list, vec!["http://a.example", "http://b.example"]);
    }
}
