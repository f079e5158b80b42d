use anyhow::{Context, Result};

const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_PIPELINE_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_SECTION_MODEL: &str = "meta-llama/llama-4-maverick-17b-128e-instruct";
const DEFAULT_ATS_MODEL: &str = "llama3-8b-8192";

/// Application configuration loaded from environment variables.
///
/// `GROQ_API_KEY` is optional: without it the server still starts and every
/// model call fails with a missing-credential error.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_base_url: String,
    pub pipeline_model: String,
    pub section_model: String,
    pub ats_model: String,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_base_url: env_or("GROQ_BASE_URL", DEFAULT_GROQ_BASE_URL),
            pipeline_model: env_or("PIPELINE_MODEL", DEFAULT_PIPELINE_MODEL),
            section_model: env_or("SECTION_MODEL", DEFAULT_SECTION_MODEL),
            ats_model: env_or("ATS_MODEL", DEFAULT_ATS_MODEL),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", "120")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// Returns the variable's value, treating unset and blank as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Config with defaults and a dummy key, for handler tests.
    pub fn for_tests() -> Self {
        Config {
            groq_api_key: Some("test-key".to_string()),
            groq_base_url: DEFAULT_GROQ_BASE_URL.to_string(),
            pipeline_model: DEFAULT_PIPELINE_MODEL.to_string(),
            section_model: DEFAULT_SECTION_MODEL.to_string(),
            ats_model: DEFAULT_ATS_MODEL.to_string(),
            llm_timeout_secs: 120,
            max_upload_bytes: 1024 * 1024,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_env_var_is_treated_as_absent() {
        std::env::set_var("RESUME_API_TEST_BLANK", "   ");
        assert_eq!(optional_env("RESUME_API_TEST_BLANK"), None);
        assert_eq!(env_or("RESUME_API_TEST_BLANK", "fallback"), "fallback");
    }

    #[test]
    fn test_env_value_is_trimmed() {
        std::env::set_var("RESUME_API_TEST_PADDED", "  gsk_abc  ");
        assert_eq!(
            optional_env("RESUME_API_TEST_PADDED").as_deref(),
            Some("gsk_abc")
        );
    }

    #[test]
    fn test_unset_env_var_falls_back_to_default() {
        assert_eq!(
            env_or("RESUME_API_TEST_DEFINITELY_UNSET", DEFAULT_ATS_MODEL),
            "llama3-8b-8192"
        );
    }
}
