// ABOUTME: Feed document parsing on top of feed-rs (RSS, Atom, JSON Feed).
// ABOUTME: Malformed documents degrade to an empty entry list instead of failing.

use feed_rs::model::{Entry, Link};
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use super::types::{ParsedEntry, ParsedFeed};

/// Parse a syndication document. Never fails: anything feed-rs rejects
/// comes back as a feed with no entries.
///
/// `published` is the date text exactly as the document wrote it. feed-rs
/// drops dates it cannot parse and normalizes the rest to UTC, so the raw
/// text is read in a separate pass and only entries it cannot line up with
/// fall back to feed-rs's timestamp.
pub fn parse_feed(raw: &[u8]) -> ParsedFeed {
    let feed = match feed_rs::parser::parse(raw) {
        Ok(feed) => feed,
        Err(err) => {
            debug!(error = %err, bytes = raw.len(), "feed document did not parse; treating as empty");
            return ParsedFeed::default();
        }
    };

    let raw_dates = raw_publication_dates(raw).filter(|dates| dates.len() == feed.entries.len());
    let entries = feed
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let raw_date = raw_dates.as_ref().and_then(|dates| dates[index].clone());
            entry_from_model(entry, raw_date)
        })
        .collect();

    ParsedFeed { entries }
}

fn entry_from_model(entry: &Entry, raw_published: Option<String>) -> ParsedEntry {
    let title = entry.title.as_ref().map(|text| text.content.clone());
    let link = article_link(&entry.links).map(|link| link.href.clone());
    let published = raw_published.or_else(|| entry.published.map(|ts| ts.to_rfc2822()));
    // Atom entries without a summary fall back to their content body.
    let summary = entry
        .summary
        .as_ref()
        .map(|text| text.content.clone())
        .or_else(|| entry.content.as_ref().and_then(|c| c.body.clone()));

    ParsedEntry {
        title,
        link,
        published,
        summary,
    }
}

/// The entry's human-facing URL: the first `alternate` (or untyped) link,
/// else whatever link comes first.
fn article_link(links: &[Link]) -> Option<&Link> {
    links
        .iter()
        .find(|link| link.rel.as_deref().is_none_or(|rel| rel == "alternate"))
        .or_else(|| links.first())
}

fn is_entry_element(name: &[u8]) -> bool {
    name == b"item" || name == b"entry"
}

fn is_date_element(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(b"pubDate") || name == b"published" || name == b"issued"
}

/// Raw publication date text of every `<item>`/`<entry>`, in document order.
///
/// Returns `None` when the document is not XML the reader can walk.
fn raw_publication_dates(raw: &[u8]) -> Option<Vec<Option<String>>> {
    let mut reader = Reader::from_reader(raw);
    let mut buf = Vec::new();
    let mut dates: Vec<Option<String>> = Vec::new();
    let mut in_entry = false;
    let mut capture: Option<String> = None;

    loop {
        let event = match reader.read_event_into(&mut buf) {
            Ok(event) => event,
            Err(err) => {
                debug!(error = %err, "raw date pass stopped; using parsed dates");
                return None;
            }
        };
        match event {
            Event::Start(e) => {
                let name = e.local_name();
                if is_entry_element(name.as_ref()) {
                    in_entry = true;
                    dates.push(None);
                } else if in_entry
                    && is_date_element(name.as_ref())
                    && matches!(dates.last(), Some(None))
                {
                    capture = Some(String::new());
                }
            }
            Event::Empty(e) => {
                if is_entry_element(e.local_name().as_ref()) {
                    dates.push(None);
                }
            }
            Event::Text(text) => {
                if let Some(value) = capture.as_mut() {
                    value.push_str(&text.unescape().ok()?);
                }
            }
            Event::CData(data) => {
                if let Some(value) = capture.as_mut() {
                    value.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(e) => {
                let name = e.local_name();
                if is_entry_element(name.as_ref()) {
                    in_entry = false;
                    capture = None;
                } else if is_date_element(name.as_ref()) {
                    let value = capture.take().unwrap_or_default();
                    let value = value.trim();
                    if let Some(slot) = dates.last_mut().filter(|_| !value.is_empty()) {
                        *slot = Some(value.to_string());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Some(dates)
}
