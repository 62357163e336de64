use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_SITE_URL: &str = "http://localhost:8888";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Settings read from the environment (and `.env`, if present). Command line flags take
/// precedence over these.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the site whose form handler receives contact submissions
    pub site_url: String,
    pub output_dir: PathBuf,
    pub http_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            site_url: std::env::var("PORTFOLIO_SITE_URL")
                .unwrap_or_else(|_| DEFAULT_SITE_URL.to_string()),
            output_dir: std::env::var("PORTFOLIO_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            http_timeout: parse_timeout(std::env::var("PORTFOLIO_HTTP_TIMEOUT_SECS").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_timeout(raw: Option<String>) -> Result<Duration> {
    let secs = match raw {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .context("PORTFOLIO_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_and_parses() {
        assert_eq!(parse_timeout(None).unwrap(), Duration::from_secs(30));
        assert_eq!(
            parse_timeout(Some(" 5 ".into())).unwrap(),
            Duration::from_secs(5)
        );
        assert!(parse_timeout(Some("soon".into())).is_err());
    }
}
