//! Runtime configuration from environment variables (and `.env`).

use std::error::Error;
use std::str::FromStr;

pub const ENV_SEED: &str = "SUBNET_QUIZ_SEED";
pub const ENV_LOG_CONFIG: &str = "SUBNET_QUIZ_LOG_CONFIG";
pub const ENV_OUTPUT: &str = "SUBNET_QUIZ_OUTPUT";

/// How responses are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<OutputFormat, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for reproducible questions.
    pub seed: Option<u64>,
    /// log4rs configuration file.
    pub log_config: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: None,
            log_config: "log4rs.yml".to_string(),
            output: OutputFormat::Terminal,
        }
    }
}

impl Config {
    /// Read the process environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or blank keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(seed) = get(ENV_SEED) {
            let seed = seed
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("Invalid {ENV_SEED}={seed}: {e}"))?;
            config.seed = Some(seed);
        }
        if let Some(path) = get(ENV_LOG_CONFIG) {
            config.log_config = path.trim().to_string();
        }
        if let Some(output) = get(ENV_OUTPUT) {
            config.output = output
                .parse()
                .map_err(|e| format!("Invalid {ENV_OUTPUT}: {e}"))?;
        }

        Ok(config)
    }
}
