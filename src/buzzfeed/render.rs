use super::data_types::{BuzzRecord, SearchResults};

/// Convert one combined search into a plain text report
#[must_use]
pub fn results_to_text(results: &SearchResults) -> String {
    let mut body = String::new();
    push_section(&mut body, "Published in timeframe", &results.in_timeframe);
    push_section(&mut body, "Matching keywords", &results.keyword_matches);
    push_section(
        &mut body,
        "At or above comment threshold",
        &results.above_threshold,
    );
    body.push_str(format!("Generated: {}\n", formatted_now()).as_str());
    body
}

fn push_section(body: &mut String, heading: &str, buzzes: &[BuzzRecord]) {
    body.push_str(&format!("{heading} ({count}):\n", count = buzzes.len()));
    for buzz in buzzes {
        body.push_str(&format!(
            "* [{id}] {title} ({published})\n",
            id = buzz.id,
            title = buzz.title,
            published = buzz.published_date
        ));
    }
    body.push('\n');
}

fn formatted_now() -> String {
    chrono::Local::now().to_rfc2822()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_results_to_text() {
        let results = SearchResults {
            in_timeframe: vec![BuzzRecord {
                id: 1,
                published_date: "2020-01-01 00:00:00".to_string(),
                title: "Cats".to_string(),
                description: "cute".to_string(),
                extra: serde_json::Map::new(),
            }],
            keyword_matches: vec![],
            above_threshold: vec![],
        };

        let text = results_to_text(&results);
        assert!(text.contains("Published in timeframe (1):"));
        assert!(text.contains("* [1] Cats (2020-01-01 00:00:00)"));
        assert!(text.contains("Matching keywords (0):"));
        assert!(text.contains("At or above comment threshold (0):"));
        assert!(text.contains("Generated: "));
    }
}
