//! Quote service
//!
//! Serves an inspirational quote from a remote endpoint when possible. A
//! single request is made, bounded by the configured timeout; on any failure a
//! built-in quote is served instead. There is no retry.

use std::time::Duration;

use chrono::Utc;
use reqwest::header::ACCEPT;

use crate::config::Settings;
use crate::error::{JournalError, JournalResult};
use crate::models::{Quote, QuoteSource};

/// Built-in quotes used when the endpoint is unavailable
pub const OFFLINE_QUOTES: [(&str, &str); 5] = [
    (
        "The journey of a thousand miles begins with one step.",
        "Lao Tzu",
    ),
    (
        "Life is what happens to you while you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
    ),
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
];

/// Service for fetching quotes
pub struct QuoteService {
    endpoint: String,
    timeout: Duration,
    offline: bool,
}

impl QuoteService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, offline: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            offline,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.quote_endpoint.clone(),
            Duration::from_secs(settings.quote_timeout_secs),
            settings.offline_quotes,
        )
    }

    /// Get a quote, falling back to a built-in one on any failure
    pub async fn next_quote(&self) -> (Quote, QuoteSource) {
        if self.offline {
            return (offline_quote(), QuoteSource::Offline);
        }

        match fetch_random_quote(&self.endpoint, self.timeout).await {
            Ok(quote) => (quote, QuoteSource::Remote),
            Err(e) => {
                tracing::info!(error = %e, "quote endpoint unavailable, using offline quote");
                (offline_quote(), QuoteSource::Offline)
            }
        }
    }

    /// Blocking wrapper around [`QuoteService::next_quote`]
    pub fn next_quote_blocking(&self) -> JournalResult<(Quote, QuoteSource)> {
        if self.offline {
            return Ok((offline_quote(), QuoteSource::Offline));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| JournalError::Fetch(format!("Failed to start runtime: {}", e)))?;

        Ok(runtime.block_on(self.next_quote()))
    }
}

/// Fetch one quote from the endpoint
pub async fn fetch_random_quote(endpoint: &str, timeout: Duration) -> JournalResult<Quote> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| JournalError::Fetch(e.to_string()))?;

    let response = client
        .get(endpoint)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| JournalError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(JournalError::Fetch(format!("HTTP {}", status)));
    }

    response
        .json::<Quote>()
        .await
        .map_err(|e| JournalError::Fetch(e.to_string()))
}

/// Pick one of the built-in quotes
pub fn offline_quote() -> Quote {
    let index = Utc::now().timestamp_subsec_nanos() as usize % OFFLINE_QUOTES.len();
    let (content, author) = OFFLINE_QUOTES[index];
    Quote::new(content, author)
}
