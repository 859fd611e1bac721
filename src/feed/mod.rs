// ABOUTME: Feed module - fetching, parsing, and normalizing syndication feeds.
// ABOUTME: Produces headlines or per-source failures for the tools to aggregate.

mod fetcher;
mod parser;
mod types;

pub use fetcher::{HeadlineFetcher, HttpHeadlineFetcher};
pub use parser::parse_feed;
pub use types::*;
