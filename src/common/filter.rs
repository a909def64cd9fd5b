use regex::{Regex, RegexBuilder};

pub struct Filters {}

impl Filters {
    /// Compile keywords into case-insensitive matchers. Each keyword is
    /// escaped first, so a match means literal substring containment.
    #[must_use]
    pub fn compile(keywords: &[String]) -> Vec<Regex> {
        let mut filters: Vec<Regex> = Vec::new();
        for keyword in keywords {
            match RegexBuilder::new(&regex::escape(keyword))
                .case_insensitive(true)
                .build()
            {
                Ok(re) => filters.push(re),
                Err(e) => tracing::warn!("skipping unusable keyword {keyword:?}: {e}"),
            }
        }
        filters
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_compile_matches_case_insensitively() {
        let filters = Filters::compile(&[String::from("cat")]);
        assert_eq!(filters.len(), 1);
        assert!(filters[0].is_match("Cats"));
        assert!(filters[0].is_match("CATALOG"));
        assert!(!filters[0].is_match("dogs"));
    }

    #[test]
    fn test_compile_escapes_pattern_syntax() {
        // A keyword is a literal, not a pattern
        let filters = Filters::compile(&[String::from("c.t")]);
        assert!(filters[0].is_match("the c.t said"));
        assert!(!filters[0].is_match("cat"));
    }

    #[test]
    fn test_compile_empty_list() {
        assert!(Filters::compile(&[]).is_empty());
    }
}
