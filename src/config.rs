use std::env;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use dotenvy::dotenv;

/// Env var consulted when --api-key is not passed.
pub const API_KEY_ENV: &str = "HASDATA_API_KEY";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Desktop,
    Mobile,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
        }
    }
}

/// One rank-check run, fully described. Every knob the SERP request takes is
/// a flag named after the API parameter it feeds, so a run is reproducible
/// from its command line alone.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rankcheck",
    about = "Check where a domain ranks in Google organic results for a keyword"
)]
pub struct Config {
    /// Location to run the search from, as the API expects it
    #[arg(long, default_value = "Austin,Texas,United States")]
    pub location: String,

    /// Keyword to search for
    #[arg(long, short, default_value = "Coffee")]
    pub query: String,

    /// Duplicate-results filter (0 = off, 1 = on)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub filter: u8,

    /// Google domain to query
    #[arg(long, default_value = "google.com")]
    pub domain: String,

    /// Country code for the search (gl parameter)
    #[arg(long, default_value = "us")]
    pub gl: String,

    /// Interface language (hl parameter)
    #[arg(long, default_value = "en")]
    pub hl: String,

    /// Device to emulate
    #[arg(long, value_enum, default_value = "desktop")]
    pub device_type: DeviceType,

    /// Domain whose ranking is being tracked, matched as a substring of each
    /// result link
    #[arg(long, default_value = "wikipedia.org")]
    pub searched_domain: String,

    /// HasData API key; falls back to the HASDATA_API_KEY env var
    #[arg(long)]
    pub api_key: Option<String>,

    /// CSV file matching rows are appended to
    #[arg(long, default_value = "rank_checker.csv")]
    pub output: PathBuf,
}

impl Config {
    /// Parse the command line, filling the API key from the environment
    /// (including a .env file) when the flag is absent.
    pub fn load() -> Result<Config> {
        dotenv().ok();
        Self::finish(Config::parse())
    }

    fn finish(mut config: Config) -> Result<Config> {
        if config.api_key.is_none() {
            config.api_key = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        }
        if config.api_key.is_none() {
            bail!("missing API key: pass --api-key or set {API_KEY_ENV}");
        }
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_run() {
        let config = Config::parse_from(["rankcheck", "--api-key", "k"]);
        assert_eq!(config.location, "Austin,Texas,United States");
        assert_eq!(config.query, "Coffee");
        assert_eq!(config.filter, 1);
        assert_eq!(config.domain, "google.com");
        assert_eq!(config.gl, "us");
        assert_eq!(config.hl, "en");
        assert_eq!(config.device_type, DeviceType::Desktop);
        assert_eq!(config.searched_domain, "wikipedia.org");
        assert_eq!(config.output, PathBuf::from("rank_checker.csv"));
    }

    #[test]
    fn filter_only_accepts_zero_or_one() {
        assert!(Config::try_parse_from(["rankcheck", "--filter", "2"]).is_err());
        assert!(Config::try_parse_from(["rankcheck", "--filter", "0"]).is_ok());
    }

    #[test]
    fn api_key_flag_satisfies_finish() {
        let config = Config::parse_from(["rankcheck", "--api-key", "secret"]);
        let config = Config::finish(config).unwrap();
        assert_eq!(config.api_key(), "secret");
    }
}
