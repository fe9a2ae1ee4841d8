//! HTTP client for the api-sports.io football API.

use std::time::Duration;

use url::Url;

use crate::{
    query::{Query, StandingsQuery},
    types::StandingsEnvelope,
    Error,
};

/// Upper bound on a single request, connect through body read.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";

/// API key and host sent as `x-rapidapi-*` headers on every request.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub api_key: String,
    pub api_host: String,
}

/// HTTP client for the standings endpoint.
///
/// Holds one `reqwest::Client` with a 10-second timeout. Requests are never
/// retried; the caller decides what a failure means for its batch.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://v3.football.api-sports.io`.
    base_api_url: String,
    credentials: Credentials,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Result<Self, Error> {
        Self::with_timeout(base_url, credentials, REQUEST_TIMEOUT)
    }

    /// Creates a client with a non-default timeout. Tests use this to exercise
    /// the timeout path without waiting ten seconds.
    pub fn with_timeout(
        base_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Unexpected(e.to_string())
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Unexpected(format!("invalid url: {}", e))
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches standings and returns the body's `response` field untouched.
    pub async fn get_standings(&self, query: &StandingsQuery) -> Result<serde_json::Value, Error> {
        let url = self.get_url("/standings", query)?;
        tracing::info!("Fetching standings for league_id {}", query.league);

        let resp = self
            .http
            .get(url)
            .header("x-rapidapi-key", &self.credentials.api_key)
            .header("x-rapidapi-host", &self.credentials.api_host)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                let err = Error::from(e);
                tracing::error!(
                    "Request for league_id {} failed ({}): {}",
                    query.league,
                    err.kind(),
                    err
                );
                err
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let err = Error::from(e);
            tracing::error!(
                "Failed to read response body for league_id {}: {}",
                query.league,
                err
            );
            err
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!(
                "HTTP error for league_id {}: status {}: {}",
                query.league,
                status,
                snippet
            );
            return Err(Error::Http {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let envelope = serde_json::from_str::<StandingsEnvelope>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse standings for league_id {}: {} | body: {}",
                query.league,
                e,
                truncate_body(&body)
            );
            Error::Unexpected(e.to_string())
        })?;

        if envelope.response.is_null() {
            tracing::error!("Standings body for league_id {} has a null response", query.league);
            return Err(Error::Unexpected("response field is null".to_string()));
        }

        tracing::info!("Standings fetched for league_id {}", query.league);
        Ok(envelope.response)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_body_untouched() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn truncate_respects_char_boundary() {
        let body = format!("{}{}", "a".repeat(1999), "é".repeat(10));
        let out = truncate_body(&body);
        assert!(out.starts_with(&"a".repeat(1999)));
        assert!(out.ends_with("...[truncated]"));
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = Client::with_base_url(
            "http://localhost:1234/",
            Credentials {
                api_key: "k".into(),
                api_host: "h".into(),
            },
        )
        .unwrap();
        let url = client
            .get_url("/standings", &StandingsQuery::new(39, 2023))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1234/standings?season=2023&league=39"
        );
    }
}
