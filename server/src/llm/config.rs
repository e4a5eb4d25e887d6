//! LLM configuration parsed from environment variables.

use super::types::{LlmError, SamplingParams};

pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeouts: LlmTimeouts,
    pub sampling: SamplingParams,
}

impl LlmConfig {
    /// Build typed LLM config from environment variables.
    ///
    /// Required:
    /// - the variable named by `LLM_API_KEY_ENV` (default `GROQ_API_KEY`)
    ///
    /// Optional:
    /// - `LLM_MODEL`: default `llama-3.3-70b-versatile`
    /// - `LLM_BASE_URL`: OpenAI-compatible base URL, default Groq
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 120
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    /// - `LLM_TEMPERATURE`, `LLM_MAX_TOKENS`, `LLM_TOP_P`: sampling overrides
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] when the key variable is unset or
    /// blank, and [`LlmError::ConfigParse`] for malformed sampling values.
    pub fn from_env() -> Result<Self, LlmError> {
        let key_var = std::env::var("LLM_API_KEY_ENV").unwrap_or_else(|_| DEFAULT_API_KEY_ENV.to_string());
        let api_key = std::env::var(&key_var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey { var: key_var.clone() })?;

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = LlmTimeouts {
            request_secs: env_parse_u64("LLM_REQUEST_TIMEOUT_SECS", DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LLM_CONNECT_TIMEOUT_SECS", DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };
        let sampling = parse_sampling(
            std::env::var("LLM_TEMPERATURE").ok().as_deref(),
            std::env::var("LLM_MAX_TOKENS").ok().as_deref(),
            std::env::var("LLM_TOP_P").ok().as_deref(),
        )?;

        Ok(Self { api_key, model, base_url, timeouts, sampling })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_sampling(
    temperature: Option<&str>,
    max_tokens: Option<&str>,
    top_p: Option<&str>,
) -> Result<SamplingParams, LlmError> {
    let defaults = SamplingParams::default();
    let temperature = match temperature {
        Some(raw) => parse_unit_range("LLM_TEMPERATURE", raw, 2.0)?,
        None => defaults.temperature,
    };
    let top_p = match top_p {
        Some(raw) => parse_unit_range("LLM_TOP_P", raw, 1.0)?,
        None => defaults.top_p,
    };
    let max_tokens = match max_tokens {
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(LlmError::ConfigParse(format!("invalid LLM_MAX_TOKENS: {raw}"))),
        },
        None => defaults.max_tokens,
    };
    Ok(SamplingParams { temperature, max_tokens, top_p })
}

fn parse_unit_range(key: &str, raw: &str, max: f32) -> Result<f32, LlmError> {
    match raw.trim().parse::<f32>() {
        Ok(v) if (0.0..=max).contains(&v) => Ok(v),
        _ => Err(LlmError::ConfigParse(format!("invalid {key}: {raw} (expected 0..={max})"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
