use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{QuestionWeights, WeightsError};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub cache: CacheSettings,
    #[serde(default)]
    pub embedding: EmbeddingSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub redis_url: String,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingSettings {
    /// "local" or "remote"
    #[serde(default = "default_embedding_provider")]
    pub provider: String,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_embedding_model")]
    pub model: String,
    #[serde(default = "default_embedding_timeout")]
    pub timeout_secs: u64,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: default_embedding_provider(),
            endpoint: None,
            api_key: None,
            model: default_embedding_model(),
            timeout_secs: default_embedding_timeout(),
        }
    }
}

fn default_embedding_provider() -> String { "local".to_string() }
fn default_embedding_model() -> String { "all-MiniLM-L6-v2".to_string() }
fn default_embedding_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
    /// Number of stored answer sets ranked per request
    pub candidate_pool: Option<usize>,
    pub min_score: Option<f64>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: Some(20),
            max_limit: Some(100),
            candidate_pool: Some(500),
            min_score: Some(0.0),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Raw question weights; normalized before use
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_social_energy_weight")]
    pub social_energy: f64,
    #[serde(default = "default_adventure_weight")]
    pub adventure: f64,
    #[serde(default = "default_decision_making_weight")]
    pub decision_making: f64,
    #[serde(default = "default_core_values_weight")]
    pub core_values: f64,
    #[serde(default = "default_pressure_weight")]
    pub pressure: f64,
    #[serde(default = "default_work_environment_weight")]
    pub work_environment: f64,
    #[serde(default = "default_pride_weight")]
    pub pride: f64,
    #[serde(default = "default_superpower_weight")]
    pub superpower: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            social_energy: default_social_energy_weight(),
            adventure: default_adventure_weight(),
            decision_making: default_decision_making_weight(),
            core_values: default_core_values_weight(),
            pressure: default_pressure_weight(),
            work_environment: default_work_environment_weight(),
            pride: default_pride_weight(),
            superpower: default_superpower_weight(),
        }
    }
}

impl WeightsConfig {
    /// Raw weights in answer-vector order
    pub fn as_raw(&self) -> [f64; 8] {
        [
            self.social_energy,
            self.adventure,
            self.decision_making,
            self.core_values,
            self.pressure,
            self.work_environment,
            self.pride,
            self.superpower,
        ]
    }

    pub fn to_question_weights(&self) -> Result<QuestionWeights, WeightsError> {
        QuestionWeights::from_raw(self.as_raw())
    }
}

fn default_social_energy_weight() -> f64 { 0.20 }
fn default_adventure_weight() -> f64 { 0.10 }
fn default_decision_making_weight() -> f64 { 0.15 }
fn default_core_values_weight() -> f64 { 0.30 }
fn default_pressure_weight() -> f64 { 0.25 }
fn default_work_environment_weight() -> f64 { 0.15 }
fn default_pride_weight() -> f64 { 0.15 }
fn default_superpower_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with QUIZMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., QUIZMATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("QUIZMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply well-known environment variables that do not follow the prefix scheme
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    apply_url_overrides(settings, |name| std::env::var(name).ok())
}

fn apply_url_overrides<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    if let Some(database_url) = lookup("DATABASE_URL") {
        builder = builder.set_override("database.url", database_url)?;
    }
    if let Some(redis_url) = lookup("REDIS_URL") {
        builder = builder.set_override("cache.redis_url", redis_url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::NORMALIZED_WEIGHTS;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.as_raw(), [0.20, 0.10, 0.15, 0.30, 0.25, 0.15, 0.15, 0.10]);

        let normalized = weights.to_question_weights().unwrap();
        for (a, b) in normalized.as_array().iter().zip(NORMALIZED_WEIGHTS.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = WeightsConfig {
            pride: -1.0,
            ..WeightsConfig::default()
        };
        assert!(weights.to_question_weights().is_err());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    fn write_config(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("quizmatch-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = write_config(
            r#"
[database]
url = "postgres://localhost/test"

[cache]
redis_url = "redis://localhost:6379"

[scoring.weights]
core_values = 0.5
"#,
        );

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.embedding.provider, "local");
        assert_eq!(settings.matching.candidate_pool, Some(500));
        assert_eq!(settings.scoring.weights.core_values, 0.5);
        assert_eq!(settings.scoring.weights.pressure, 0.25);
    }

    #[test]
    fn test_url_overrides() {
        let file = Config::builder()
            .set_default("database.url", "postgres://file/db")
            .unwrap()
            .set_default("cache.redis_url", "redis://file:6379")
            .unwrap()
            .build()
            .unwrap();

        let overridden = apply_url_overrides(file.clone(), |name| match name {
            "DATABASE_URL" => Some("postgres://env/db".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(overridden.get_string("database.url").unwrap(), "postgres://env/db");
        assert_eq!(overridden.get_string("cache.redis_url").unwrap(), "redis://file:6379");

        let untouched = apply_url_overrides(file, |_| None).unwrap();
        assert_eq!(untouched.get_string("database.url").unwrap(), "postgres://file/db");
    }

    #[test]
    fn test_load_from_applies_redis_url() {
        let path = write_config(
            r#"
[database]
url = "postgres://localhost/test"

[cache]
redis_url = "redis://from-file:6379"
"#,
        );

        std::env::set_var("REDIS_URL", "redis://from-env:6379");
        let settings = Settings::load_from(&path);
        std::env::remove_var("REDIS_URL");
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.unwrap().cache.redis_url, "redis://from-env:6379");
    }
}
