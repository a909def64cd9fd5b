use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::BuzzError;

/// Wall-clock timestamp format used by the feeds API and by query inputs
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a timestamp string in the fixed API format
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, BuzzError> {
    Ok(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?)
}

/// One content entry served by the feeds endpoint. Records are only ever
/// decoded and passed through; fields the client does not interpret are
/// kept verbatim so equality covers the record as served.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BuzzRecord {
    pub id: i64,
    pub published_date: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BuzzRecord {
    /// Publication time parsed from `published_date`
    pub fn published_at(&self) -> Result<NaiveDateTime, BuzzError> {
        parse_timestamp(&self.published_date)
    }
}

/// Envelope served by `feeds/<name>`. The API is known to repeat records.
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    pub buzzes: Vec<BuzzRecord>,
}

/// Envelope served by `comments/<id>` for a single buzz
#[derive(Debug, Deserialize)]
pub struct CommentsResponse {
    #[serde(deserialize_with = "int_or_string")]
    pub total_count: i64,
}

/// The comments endpoint serves `total_count` as either a number or a
/// numeric string
fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(count) => Ok(count),
        Raw::Str(count) => count.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Shared inputs for one combined search across the three filters
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub feed: String,
    pub start: String,
    pub end: String,
    pub keywords: Vec<String>,
    pub threshold: i64,
}

/// The three result sets of one combined search
#[derive(Debug)]
pub struct SearchResults {
    pub in_timeframe: Vec<BuzzRecord>,
    pub keyword_matches: Vec<BuzzRecord>,
    pub above_threshold: Vec<BuzzRecord>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let parsed = parse_timestamp("2020-01-01 00:00:00").unwrap();
        assert_eq!(parsed.format(TIMESTAMP_FORMAT).to_string(), "2020-01-01 00:00:00");

        assert!(matches!(
            parse_timestamp("2020-01-01").unwrap_err(),
            BuzzError::Format(_)
        ));
        assert!(matches!(
            parse_timestamp("01/01/2020 00:00:00").unwrap_err(),
            BuzzError::Format(_)
        ));
    }

    #[test]
    fn test_total_count_from_number_or_string() {
        let from_number: CommentsResponse = serde_json::from_str(r#"{"total_count": 42}"#).unwrap();
        assert_eq!(from_number.total_count, 42);

        let from_string: CommentsResponse =
            serde_json::from_str(r#"{"total_count": "42"}"#).unwrap();
        assert_eq!(from_string.total_count, 42);

        assert!(serde_json::from_str::<CommentsResponse>(r#"{"total_count": "many"}"#).is_err());
    }

    #[test]
    fn test_unknown_record_fields_are_retained() {
        let body = r#"{
            "id": 7,
            "published_date": "2020-01-01 00:00:00",
            "title": "Cats",
            "description": "cute",
            "uri": "/cats/7"
        }"#;
        let record: BuzzRecord = serde_json::from_str(body).unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.extra.get("uri").unwrap(), "/cats/7");

        let mut other = record.clone();
        assert_eq!(record, other);
        other
            .extra
            .insert("uri".to_string(), serde_json::json!("/cats/8"));
        assert_ne!(record, other, "Equality must cover unrecognized fields");
    }
}
