//! Environment-driven configuration.
//!
//! A missing remote credential is not an error — it switches the engine
//! permanently into keyword-fallback mode for the process lifetime.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::engine::ArbitrationPolicy;
use crate::error::ConfigError;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_STATIC_DIR: &str = "./static";
const DEFAULT_PORT: u16 = 8000;

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote capability credential. `None` → lexical-only mode.
    pub api_key: Option<SecretString>,
    /// Model identifier for the remote classifier.
    pub model: String,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Optional confidence bar (0-100) enabling the threshold arbitration
    /// variant. `None` → strict authoritative-or-fallback.
    pub min_remote_confidence: Option<f64>,
    /// Directory holding the demo UI.
    pub static_dir: PathBuf,
    /// HTTP listen port.
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("MAILSIFT_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);

        let model =
            std::env::var("MAILSIFT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            std::env::var("MAILSIFT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let min_remote_confidence = match std::env::var("MAILSIFT_MIN_REMOTE_CONFIDENCE") {
            Ok(raw) => Some(parse_confidence_bar(&raw)?),
            Err(_) => None,
        };

        let static_dir = std::env::var("MAILSIFT_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            min_remote_confidence,
            static_dir,
            port,
        })
    }

    /// Arbitration policy derived from the optional confidence bar.
    pub fn arbitration_policy(&self) -> ArbitrationPolicy {
        match self.min_remote_confidence {
            Some(bar) => ArbitrationPolicy::MinConfidence(bar),
            None => ArbitrationPolicy::Authoritative,
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: "PORT".to_string(),
        message: format!("expected a port number, got '{raw}'"),
    })
}

fn parse_confidence_bar(raw: &str) -> Result<f64, ConfigError> {
    let bar: f64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: "MAILSIFT_MIN_REMOTE_CONFIDENCE".to_string(),
        message: format!("expected a number, got '{raw}'"),
    })?;
    if !(0.0..=100.0).contains(&bar) {
        return Err(ConfigError::InvalidValue {
            key: "MAILSIFT_MIN_REMOTE_CONFIDENCE".to_string(),
            message: format!("must be within 0-100, got {bar}"),
        });
    }
    Ok(bar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_parses_or_rejects() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 3000 ").unwrap(), 3000);
        assert!(parse_port("not-a-port").is_err());
        assert!(parse_port("99999").is_err());
    }

    #[test]
    fn confidence_bar_bounds_enforced() {
        assert_eq!(parse_confidence_bar("70").unwrap(), 70.0);
        assert_eq!(parse_confidence_bar("0").unwrap(), 0.0);
        assert_eq!(parse_confidence_bar("100").unwrap(), 100.0);
        assert!(parse_confidence_bar("101").is_err());
        assert!(parse_confidence_bar("-5").is_err());
        assert!(parse_confidence_bar("abc").is_err());
    }

    #[test]
    fn policy_follows_confidence_bar() {
        let config = Config {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            min_remote_confidence: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            port: DEFAULT_PORT,
        };
        assert_eq!(config.arbitration_policy(), ArbitrationPolicy::Authoritative);

        let config = Config {
            min_remote_confidence: Some(70.0),
            ..config
        };
        assert_eq!(
            config.arbitration_policy(),
            ArbitrationPolicy::MinConfidence(70.0)
        );
    }
}
