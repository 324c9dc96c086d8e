use thiserror::Error;

/// Environment variable carrying the bearer key of the teaching-design workflow.
pub const WORKFLOW_1_KEY_VAR: &str = "WORKFLOW_1_KEY";
/// Environment variable carrying the bearer key of the general workflow.
pub const WORKFLOW_2_KEY_VAR: &str = "WORKFLOW_2_KEY";
/// Environment variable carrying the Dify API base URL (e.g. `https://api.dify.ai/v1`).
pub const DIFY_BASE_URL_VAR: &str = "DIFY_BASE_URL";

/// Configuration failures detected before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Probe configuration loaded from the process environment.
///
/// All three variables are mandatory; an unset or blank variable fails
/// initialization so the probe never fires a request with a broken credential
/// or an empty base URL.
#[derive(Debug, Clone)]
pub struct Config {
    pub workflow_1_key: String,
    pub workflow_2_key: String,
    pub base_url: String,
}

impl Config {
    /// Read the configuration from environment variables.
    ///
    /// Call after `util::init_tracing()` so values sourced from a `.env` file
    /// are already in the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            workflow_1_key: require_var(WORKFLOW_1_KEY_VAR)?,
            workflow_2_key: require_var(WORKFLOW_2_KEY_VAR)?,
            base_url: require_var(DIFY_BASE_URL_VAR)?,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Mask a workflow key for display: first 8 characters followed by `...`.
///
/// Keys shorter than 8 characters are shown in full (still suffixed), which
/// only happens with obviously fake credentials.
pub fn mask_key(key: &str) -> String {
    let head: String = key.chars().take(8).collect();
    format!("{head}...")
}
