use std::env;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_OUTPUT_TOKENS: usize = 500;
pub const DEFAULT_CONTEXT_TOKENS: usize = 16_385;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: usize,
    pub context_tokens: usize,
    pub bind_addr: String,
    pub max_upload_bytes: usize,
    pub extract_metadata: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            openai_api_key: non_empty("OPENAI_API_KEY")
                .ok_or_else(|| "OPENAI_API_KEY: environment variable not found".to_string())?,
            openai_org_id: non_empty("OPENAI_ORG_ID"),
            openai_model: non_empty("OPENAI_MODEL"),
            openai_base_url: non_empty("OPENAI_BASE_URL"),
            temperature: parse_or("OPENAI_TEMPERATURE", &lookup, DEFAULT_TEMPERATURE)?,
            max_output_tokens: parse_or("OPENAI_MAX_TOKENS", &lookup, DEFAULT_MAX_OUTPUT_TOKENS)?,
            context_tokens: parse_or("OPENAI_CONTEXT_TOKENS", &lookup, DEFAULT_CONTEXT_TOKENS)?,
            bind_addr: non_empty("SIMPLIFY_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            max_upload_bytes: parse_or(
                "SIMPLIFY_MAX_UPLOAD_BYTES",
                &lookup,
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
            extract_metadata: parse_or("SIMPLIFY_METADATA", &lookup, true)?,
        })
    }

    #[must_use]
    pub fn model_name(&self) -> String {
        self.openai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        self.openai_base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| format!("{}: {}", key, e)),
        _ => Ok(default),
    }
}
