// ABOUTME: Feed data types - parsed entries, normalized headlines, per-source
// ABOUTME: failure records, and the aggregate result serialized to clients.

use serde::Serialize;

use crate::error::FetchError;

/// Number of summary characters kept before the ellipsis marker.
pub const SUMMARY_CHARS: usize = 200;

const DEFAULT_TITLE: &str = "No title";
const DEFAULT_PUBLISHED: &str = "Unknown date";

/// One entry as read from a feed document, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
    pub summary: Option<String>,
}

/// Entries of a feed document, in document order.
///
/// A document that cannot be parsed is represented by an empty entry list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    pub entries: Vec<ParsedEntry>,
}

/// A normalized feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
}

impl Headline {
    /// Apply field defaults and truncate the summary.
    pub fn from_entry(entry: ParsedEntry) -> Self {
        Self {
            title: entry.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            link: entry.link.unwrap_or_default(),
            published: entry
                .published
                .unwrap_or_else(|| DEFAULT_PUBLISHED.to_string()),
            summary: truncate_summary(entry.summary.as_deref().unwrap_or_default()),
        }
    }
}

/// Keep the first [`SUMMARY_CHARS`] characters and always append `...`,
/// even when nothing was cut.
pub fn truncate_summary(summary: &str) -> String {
    let mut truncated: String = summary.chars().take(SUMMARY_CHARS).collect();
    truncated.push_str("...");
    truncated
}

/// A headline tagged with the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcedHeadline {
    pub source: String,
    #[serde(flatten)]
    pub headline: Headline,
}

/// Stands in for a source's headlines when its fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub source: String,
    pub error: String,
}

impl FetchFailure {
    pub fn new(source: impl Into<String>, err: &FetchError) -> Self {
        Self {
            source: source.into(),
            error: format!("Failed to fetch: {}", err),
        }
    }
}

/// One element of a category result: a headline or a failed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CategoryItem {
    Headline(SourcedHeadline),
    Failure(FetchFailure),
}

impl CategoryItem {
    pub fn source(&self) -> &str {
        match self {
            CategoryItem::Headline(h) => &h.source,
            CategoryItem::Failure(f) => &f.source,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CategoryItem::Failure(_))
    }
}

/// Flatten per-source outcomes into one list, in source order, then cut it
/// to `limit` items overall.
///
/// A source contributes either all of its headlines or exactly one failure.
pub fn aggregate<I>(outcomes: I, limit: usize) -> Vec<CategoryItem>
where
    I: IntoIterator<Item = (String, Result<Vec<Headline>, FetchError>)>,
{
    let mut items: Vec<CategoryItem> = outcomes
        .into_iter()
        .flat_map(|(source, outcome)| match outcome {
            Ok(headlines) => headlines
                .into_iter()
                .map(|headline| {
                    CategoryItem::Headline(SourcedHeadline {
                        source: source.clone(),
                        headline,
                    })
                })
                .collect::<Vec<_>>(),
            Err(err) => vec![CategoryItem::Failure(FetchFailure::new(source, &err))],
        })
        .collect();
    items.truncate(limit);
    items
}

/// The JSON document returned by both tools.
///
/// `category` is set only for category queries and `source` only for
/// single-source queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlinesResult<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub headlines: Vec<T>,
}

impl HeadlinesResult<CategoryItem> {
    pub fn for_category(category: impl Into<String>, headlines: Vec<CategoryItem>) -> Self {
        Self {
            category: Some(category.into()),
            source: None,
            headlines,
        }
    }
}

impl HeadlinesResult<Headline> {
    pub fn for_source(source: impl Into<String>, headlines: Vec<Headline>) -> Self {
        Self {
            category: None,
            source: Some(source.into()),
            headlines,
        }
    }
}

impl<T: Serialize> HeadlinesResult<T> {
    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline(title: &str) -> Headline {
        Headline::from_entry(ParsedEntry {
            title: Some(title.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_defaults_applied() {
        let h = Headline::from_entry(ParsedEntry::default());
        assert_eq!(h.title, "No title");
        assert_eq!(h.link, "");
        assert_eq!(h.published, "Unknown date");
        assert_eq!(h.summary, "...");
    }

    #[test]
    fn test_short_summary_still_gets_ellipsis() {
        assert_eq!(truncate_summary("Short."), "Short....");
    }

    #[test]
    fn test_long_summary_truncated() {
        let long = "x".repeat(500);
        let out = truncate_summary(&long);
        assert_eq!(out.chars().count(), 203);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_summary_counts_characters_not_bytes() {
        let long = "é".repeat(250);
        let out = truncate_summary(&long);
        assert_eq!(out.chars().count(), 203);
        assert!(out.starts_with(&"é".repeat(200)));
    }

    #[test]
    fn test_sourced_headline_key_order() {
        let item = CategoryItem::Headline(SourcedHeadline {
            source: "bbc".into(),
            headline: headline("A"),
        });
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"source":"bbc","title":"A","link":"","published":"Unknown date","summary":"..."}"#
        );
    }

    #[test]
    fn test_failure_serialization() {
        let item = CategoryItem::Failure(FetchFailure {
            source: "wsj".into(),
            error: "Failed to fetch: boom".into(),
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"source": "wsj", "error": "Failed to fetch: boom"})
        );
    }

    #[test]
    fn test_aggregate_interleaves_failures_in_source_order() {
        let items = aggregate(
            vec![
                ("a".to_string(), Ok(vec![headline("a1"), headline("a2")])),
                ("b".to_string(), Err(FetchError::Client("down".into()))),
                ("c".to_string(), Ok(vec![headline("c1")])),
            ],
            10,
        );
        let sources: Vec<_> = items.iter().map(|i| i.source()).collect();
        assert_eq!(sources, vec!["a", "a", "b", "c"]);
        assert!(items[2].is_failure());
        assert_eq!(
            items.iter().filter(|i| i.source() == "b").count(),
            1,
            "a failed source contributes exactly one record"
        );
    }

    #[test]
    fn test_aggregate_outer_truncation_drops_later_sources() {
        let items = aggregate(
            vec![
                ("a".to_string(), Ok(vec![headline("a1"), headline("a2")])),
                ("b".to_string(), Ok(vec![headline("b1"), headline("b2")])),
            ],
            2,
        );
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.source() == "a"));
    }

    #[test]
    fn test_aggregate_zero_limit() {
        let items = aggregate(
            vec![("a".to_string(), Err(FetchError::Client("down".into())))],
            0,
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_result_shapes() {
        let by_category = HeadlinesResult::for_category("sports", vec![]);
        let value = serde_json::to_value(&by_category).unwrap();
        assert_eq!(value, serde_json::json!({"category": "sports", "headlines": []}));

        let by_source = HeadlinesResult::for_source("bbc", vec![headline("x")]);
        let value = serde_json::to_value(&by_source).unwrap();
        assert_eq!(value["source"], "bbc");
        assert!(value.get("category").is_none());
        assert!(value["headlines"][0].get("source").is_none());
    }

    #[test]
    fn test_to_json_uses_two_space_indent() {
        let result = HeadlinesResult::for_category("general", vec![]);
        let json = result.to_json().unwrap();
        assert_eq!(json, "{\n  \"category\": \"general\",\n  \"headlines\": []\n}");
    }
}
