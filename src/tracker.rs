use chrono::{DateTime, Local};
use serde_json::Value;

use crate::config::Config;
use crate::data_models::{RankRecord, SerpResponse};
use crate::error::RankError;

/// Timestamp format stamped on every captured row.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Decode the raw body into the typed response. The body must be a
/// non-empty JSON object conforming to the expected shape; anything else is
/// one and the same decode failure.
pub fn parse_response(body: &str) -> Result<SerpResponse, RankError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "response body is not valid JSON");
        RankError::Decode
    })?;

    match value.as_object() {
        Some(map) if !map.is_empty() => {}
        _ => return Err(RankError::Decode),
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "response JSON does not match the expected shape");
        RankError::Decode
    })
}

/// Keep the organic results whose link contains the tracked domain and
/// project them into persistable rows, preserving the API's ordering. A
/// response with no organic results at all is an error; a response where
/// nothing matched is an empty, valid outcome.
pub fn match_records(
    response: &SerpResponse,
    config: &Config,
    captured_at: DateTime<Local>,
) -> Result<Vec<RankRecord>, RankError> {
    if response.organic_results.is_empty() {
        return Err(RankError::NoResults);
    }

    let date = captured_at.format(DATE_FORMAT).to_string();
    let meta = &response.request_metadata;

    let records = response
        .organic_results
        .iter()
        .filter_map(|item| {
            let link = item.link.as_deref()?;
            if !link.contains(&config.searched_domain) {
                return None;
            }
            Some(RankRecord {
                position: item.position,
                domain: config.searched_domain.clone(),
                keyword: config.query.clone(),
                link: link.to_string(),
                title: item.title.clone(),
                displayed_link: item.displayed_link.clone(),
                source: item.source.clone(),
                snippet: item.snippet.clone(),
                google_url: meta.google_url.clone(),
                google_html_file: meta.google_html_file.clone(),
                date: date.clone(),
            })
        })
        .collect();

    Ok(records)
}
