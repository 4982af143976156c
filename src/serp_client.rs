use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

use crate::config::Config;

const API_ENDPOINT: &str = "https://api.hasdata.com/scrape/google";
const API_KEY_HEADER: &str = "x-api-key";

/// Thin client for the HasData Google-SERP endpoint: one GET per run, API
/// key in a header, body returned as raw text for the parse stage.
pub struct SerpClient {
    client: reqwest::Client,
    api_key: String,
}

impl SerpClient {
    pub fn new(api_key: impl Into<String>) -> Result<SerpClient> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;
        Ok(SerpClient {
            client,
            api_key: api_key.into(),
        })
    }

    /// The full request URL for a run. `parse_with_params` percent-encodes
    /// each value individually, so commas and spaces in the location or
    /// keyword cannot corrupt the query string.
    pub fn request_url(config: &Config) -> Result<Url> {
        let url = Url::parse_with_params(API_ENDPOINT, Self::query_pairs(config))
            .context("failed to build request URL")?;
        Ok(url)
    }

    fn query_pairs(config: &Config) -> [(&'static str, String); 7] {
        [
            ("location", config.location.clone()),
            ("q", config.query.clone()),
            ("filter", config.filter.to_string()),
            ("domain", config.domain.clone()),
            ("gl", config.gl.clone()),
            ("hl", config.hl.clone()),
            ("deviceType", config.device_type.as_str().to_string()),
        ]
    }

    /// Fetch the SERP snapshot and return the raw body. A non-2xx status is
    /// logged but not an error here; the decode stage surfaces whatever the
    /// API sent back instead of results.
    pub async fn fetch(&self, config: &Config) -> Result<String> {
        let url = Self::request_url(config)?;
        tracing::debug!(url = %url, "requesting SERP snapshot");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .context("SERP API request failed")?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "SERP API returned non-success status");
        }

        let body = response
            .text()
            .await
            .context("failed to read SERP API response body")?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Config {
        let mut argv = vec!["rankcheck"];
        argv.extend_from_slice(args);
        Config::parse_from(argv)
    }

    #[test]
    fn request_url_carries_all_seven_params() {
        let url = SerpClient::request_url(&config(&[])).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let expected: Vec<(String, String)> = vec![
            ("location".into(), "Austin,Texas,United States".into()),
            ("q".into(), "Coffee".into()),
            ("filter".into(), "1".into()),
            ("domain".into(), "google.com".into()),
            ("gl".into(), "us".into()),
            ("hl".into(), "en".into()),
            ("deviceType".into(), "desktop".into()),
        ];
        assert_eq!(pairs, expected);
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let url = SerpClient::request_url(&config(&[
            "--query",
            "coffee & tea",
            "--location",
            "São Paulo,Brazil",
        ]))
        .unwrap();
        let query = url.query().unwrap();

        assert!(!query.contains("coffee & tea"));
        assert!(query.contains("coffee"));
        // Decoding restores the originals.
        let decoded: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(decoded.contains(&("q".to_string(), "coffee & tea".to_string())));
        assert!(decoded.contains(&("location".to_string(), "São Paulo,Brazil".to_string())));
    }

    #[test]
    fn device_type_flag_reaches_the_query_string() {
        let url = SerpClient::request_url(&config(&["--device-type", "mobile"])).unwrap();
        assert!(url.query().unwrap().contains("deviceType=mobile"));
    }
}
