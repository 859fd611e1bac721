// ABOUTME: Feed Directory - the immutable table of news sources grouped by
// ABOUTME: category, with lookups by category and by bare source name.

/// One named feed in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    pub name: String,
    pub category: String,
    pub url: String,
}

impl FeedSource {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            url: url.into(),
        }
    }
}

const BUILTIN_SOURCES: &[(&str, &str, &str)] = &[
    ("technology", "techcrunch", "https://techcrunch.com/feed/"),
    ("technology", "theverge", "https://www.theverge.com/rss/index.xml"),
    ("technology", "wired", "https://www.wired.com/feed/rss"),
    ("general", "bbc", "https://feeds.bbci.co.uk/news/rss.xml"),
    ("general", "reuters", "https://www.reutersagency.com/feed/"),
    (
        "business",
        "bloomberg",
        "https://www.bloomberg.com/feed/podcast/bloomberg-markets.xml",
    ),
    ("business", "wsj", "https://feeds.a.dj.com/rss/RSSMarketsMain.xml"),
    ("sports", "espn", "https://www.espn.com/espn/rss/news"),
];

/// Read-only mapping of category -> source name -> feed URL.
///
/// Sources keep their table order, which is also the order in which a
/// category's feeds are fetched.
#[derive(Debug, Clone)]
pub struct FeedDirectory {
    sources: Vec<FeedSource>,
}

impl FeedDirectory {
    /// Build a directory from an explicit list of sources.
    pub fn new(sources: Vec<FeedSource>) -> Self {
        Self { sources }
    }

    /// The built-in directory of news feeds.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_SOURCES
                .iter()
                .map(|(category, name, url)| FeedSource::new(*name, *category, *url))
                .collect(),
        )
    }

    /// All sources in a category. Unknown categories yield an empty list.
    pub fn lookup_category(&self, category: &str) -> Vec<&FeedSource> {
        self.sources
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Find a source by name across all categories. First match wins.
    pub fn lookup_source(&self, name: &str) -> Option<&FeedSource> {
        self.sources.iter().find(|s| s.name == name)
    }

    /// Category names in table order, without duplicates.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for source in &self.sources {
            if !categories.contains(&source.category.as_str()) {
                categories.push(&source.category);
            }
        }
        categories
    }

    /// Source names in table order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name.as_str()).collect()
    }
}
