use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::common::prelude::*;

use super::config::AppConfig;
use super::data_types::{
    parse_timestamp, BuzzRecord, CommentsResponse, FeedResponse, SearchQuery, SearchResults,
};
use super::error::BuzzError;

/// Endpoint segment serving named feed pages
const FEEDS_ENDPOINT: &str = "feeds";
/// Endpoint segment serving per-buzz comment counts
const COMMENTS_ENDPOINT: &str = "comments";

pub struct BuzzFetcher {
    pub config: AppConfig,
    api_base_url: String,
}

impl BuzzFetcher {
    #[must_use]
    /// Create a new fetcher with the given configuration
    pub fn new(config: &AppConfig) -> BuzzFetcher {
        Self {
            config: config.clone(),
            api_base_url: config.get_api_base_url(),
        }
    }

    #[allow(dead_code)]
    fn with_base_url(&mut self, base_url: String) -> &mut Self {
        self.api_base_url = base_url;
        self
    }

    /// Fetch JSON from an API endpoint and decode it. The body is read as
    /// text before decoding so transport failures and malformed bodies
    /// surface as distinct errors. One GET per call, no retries.
    async fn pull_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
    ) -> Result<T, BuzzError> {
        if query.is_empty() {
            return Err(BuzzError::InvalidArgument(format!(
                "empty query for endpoint {endpoint:?}"
            )));
        }

        let url = format!("{}/{}/{}", self.api_base_url, endpoint, query);
        debug!("GET {url}");
        let body = reqwest::get(&url).await?.text().await?;

        Ok(serde_json::from_str::<T>(&body)?)
    }

    /// Pull a feed page and drop the repeats the API is known to serve
    async fn pull_feed(&self, feed: &str) -> Result<Vec<BuzzRecord>, BuzzError> {
        let response: FeedResponse = self.pull_json(FEEDS_ENDPOINT, feed).await?;

        Ok(deduplicate(&response.buzzes))
    }

    /// Buzzes published within `[start, end]`, inclusive on both ends.
    /// Timestamps use the `YYYY-MM-DD HH:MM:SS` format; a reversed range
    /// yields an empty set. A record whose own `published_date` is
    /// malformed fails the whole call rather than being skipped. Output
    /// keeps the deduplicated feed order.
    pub async fn in_timeframe(
        &self,
        feed: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<BuzzRecord>, BuzzError> {
        let start_at = parse_timestamp(start)?;
        let end_at = parse_timestamp(end)?;

        let buzzes = self.pull_feed(feed).await?;

        let mut matches = Vec::new();
        for buzz in buzzes {
            let published_at = buzz.published_at()?;
            if start_at <= published_at && published_at <= end_at {
                matches.push(buzz);
            }
        }

        Ok(matches)
    }

    /// Buzzes whose title or description contains any of the keywords,
    /// case-insensitively on both fields. No keywords, no matches.
    pub async fn matching_keywords(
        &self,
        feed: &str,
        keywords: &[String],
    ) -> Result<Vec<BuzzRecord>, BuzzError> {
        let filters = Filters::compile(keywords);
        let buzzes = self.pull_feed(feed).await?;

        let mut matches = Vec::new();
        for buzz in buzzes {
            if keep_buzz(&filters, &buzz) {
                matches.push(buzz);
            }
        }

        Ok(matches)
    }

    /// Buzzes from the timeframe whose comment count is at least
    /// `threshold`. One comments request is issued per candidate, strictly
    /// in order; with a threshold of zero the timeframe set passes through
    /// unchanged since counts are non-negative.
    pub async fn above_comment_threshold(
        &self,
        feed: &str,
        start: &str,
        end: &str,
        threshold: i64,
    ) -> Result<Vec<BuzzRecord>, BuzzError> {
        if threshold < 0 {
            return Err(BuzzError::InvalidArgument(String::from(
                "threshold must be a non-negative integer",
            )));
        }

        let candidates = self.in_timeframe(feed, start, end).await?;

        let mut matches = Vec::new();
        for buzz in candidates {
            let comments: CommentsResponse = self
                .pull_json(COMMENTS_ENDPOINT, &buzz.id.to_string())
                .await?;
            if comments.total_count >= threshold {
                matches.push(buzz);
            }
        }

        Ok(matches)
    }

    /// Run all three filters with shared inputs and return their result
    /// sets together
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, BuzzError> {
        let in_timeframe = self
            .in_timeframe(&query.feed, &query.start, &query.end)
            .await?;
        let keyword_matches = self
            .matching_keywords(&query.feed, &query.keywords)
            .await?;
        let above_threshold = self
            .above_comment_threshold(&query.feed, &query.start, &query.end, query.threshold)
            .await?;

        Ok(SearchResults {
            in_timeframe,
            keyword_matches,
            above_threshold,
        })
    }
}

/// Keep a buzz if any filter hits its title or description. A buzz is
/// appended at most once however many keywords match.
fn keep_buzz(filters: &[Regex], buzz: &BuzzRecord) -> bool {
    for filter in filters {
        if filter.is_match(&buzz.title) || filter.is_match(&buzz.description) {
            return true;
        }
    }
    false
}
