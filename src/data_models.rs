use serde::{Deserialize, Serialize};

/// One non-paid search result as the SERP API reports it. `link` stays
/// optional because entries without one are skipped, not treated as a decode
/// failure; the remaining text fields default to empty strings.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrganicResult {
    pub position: u32,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub displayed_link: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub snippet: String,
}

/// Request-level metadata the API returns alongside the results.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetadata {
    #[serde(default)]
    pub google_url: String,
    #[serde(default)]
    pub google_html_file: String,
}

/// Typed shape of the API response body.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SerpResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    #[serde(default)]
    pub request_metadata: RequestMetadata,
}

/// One persisted CSV row: where the tracked domain ranked for a keyword at
/// capture time. Field declaration order fixes the CSV column order, and the
/// camelCase renames are the header names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankRecord {
    pub position: u32,
    /// The tracked domain, not the result's own host.
    pub domain: String,
    pub keyword: String,
    pub link: String,
    pub title: String,
    pub displayed_link: String,
    pub source: String,
    pub snippet: String,
    pub google_url: String,
    pub google_html_file: String,
    /// Capture wall-clock time, "YYYY-MM-DD HH:MM:SS".
    pub date: String,
}

impl RankRecord {
    /// CSV header names, in column order.
    pub const FIELDS: [&'static str; 11] = [
        "position",
        "domain",
        "keyword",
        "link",
        "title",
        "displayedLink",
        "source",
        "snippet",
        "googleUrl",
        "googleHtmlFile",
        "date",
    ];
}
