//! Classification of request paths into resource descriptors.
//!
//! Paths are split on `/` keeping empty segments, so `/categories/1/news`
//! has four segments (`""`, `"categories"`, `"1"`, `"news"`) and a trailing
//! slash adds an empty fifth one. The path is percent-decoded before it is
//! split. Identifier parse failures are carried in the descriptor; handlers
//! decide the resulting status.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use thiserror::Error;
use tracing::debug;

/// A path segment that should have been an integer id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id segment {0:?}")]
pub struct InvalidId(pub String);

pub type ParsedId = Result<i32, InvalidId>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePath {
    /// `/`
    Root,
    /// `/categories`
    Categories,
    /// `/categories/{cid}/news`
    NewsCollection { category_id: ParsedId },
    /// `/categories/{cid}/news/{nid}`
    NewsItem { category_id: ParsedId, news_id: ParsedId },
    Invalid,
}

const CATEGORIES: &str = "categories";
const NEWS: &str = "news";

impl ResourcePath {
    pub fn parse(path: &str) -> Self {
        let path = decode(path);
        let segments: Vec<&str> = path.split('/').collect();
        debug!(path = %path, segments = segments.len(), "classify path");

        match segments.as_slice() {
            ["", ""] => ResourcePath::Root,
            ["", CATEGORIES] => ResourcePath::Categories,
            ["", CATEGORIES, cid, NEWS] => ResourcePath::NewsCollection { category_id: parse_id(cid) },
            ["", CATEGORIES, cid, NEWS, nid] => ResourcePath::NewsItem {
                category_id: parse_id(cid),
                news_id: parse_id(nid),
            },
            _ => ResourcePath::Invalid,
        }
    }

    /// Category id of a category-scoped path, taken from the third segment
    /// whatever follows it (`/categories/1`, `/categories/1/news`, `/categories/1/x/y`).
    pub fn scoped_category_id(path: &str) -> ParsedId {
        match decode(path).split('/').collect::<Vec<_>>().as_slice() {
            ["", CATEGORIES, cid, ..] => parse_id(cid),
            _ => Err(InvalidId(String::new())),
        }
    }
}

// Invalid UTF-8 escapes become U+FFFD and then fail as ids.
fn decode(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

fn parse_id(segment: &str) -> ParsedId {
    segment.parse::<i32>().map_err(|_| InvalidId(segment.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad(s: &str) -> ParsedId { Err(InvalidId(s.to_string())) }

    #[test]
    fn classifies_fixed_paths() {
        assert_eq!(ResourcePath::parse("/"), ResourcePath::Root);
        assert_eq!(ResourcePath::parse("/categories"), ResourcePath::Categories);
    }

    #[test]
    fn classifies_news_collection() {
        assert_eq!(
            ResourcePath::parse("/categories/12/news"),
            ResourcePath::NewsCollection { category_id: Ok(12) }
        );
        assert_eq!(
            ResourcePath::parse("/categories/abc/news"),
            ResourcePath::NewsCollection { category_id: bad("abc") }
        );
    }

    #[test]
    fn classifies_news_item() {
        assert_eq!(
            ResourcePath::parse("/categories/1/news/2"),
            ResourcePath::NewsItem { category_id: Ok(1), news_id: Ok(2) }
        );
        assert_eq!(
            ResourcePath::parse("/categories/1/news/x"),
            ResourcePath::NewsItem { category_id: Ok(1), news_id: bad("x") }
        );
        // trailing slash leaves an empty news id
        assert_eq!(
            ResourcePath::parse("/categories/1/news/"),
            ResourcePath::NewsItem { category_id: Ok(1), news_id: bad("") }
        );
    }

    #[test]
    fn everything_else_is_invalid() {
        for path in [
            "/categories/",
            "/categories/1",
            "/categories/1/bogus",
            "/categories/1/bogus/2",
            "/categories/1/news/2/extra",
            "/other",
            "",
        ] {
            assert_eq!(ResourcePath::parse(path), ResourcePath::Invalid, "{path}");
        }
    }

    #[test]
    fn ids_overflowing_i32_are_invalid() {
        assert_eq!(
            ResourcePath::parse("/categories/99999999999/news"),
            ResourcePath::NewsCollection { category_id: bad("99999999999") }
        );
    }

    #[test]
    fn escaped_segments_are_decoded() {
        assert_eq!(
            ResourcePath::parse("/categories/%31/news/%32"),
            ResourcePath::NewsItem { category_id: Ok(1), news_id: Ok(2) }
        );
        assert_eq!(ResourcePath::parse("/%63ategories"), ResourcePath::Categories);
        assert_eq!(ResourcePath::scoped_category_id("/categories/%34%32"), Ok(42));
        assert_eq!(
            ResourcePath::parse("/categories/%FF/news"),
            ResourcePath::NewsCollection { category_id: bad("\u{FFFD}") }
        );
    }

    #[test]
    fn invalid_id_reports_the_segment() {
        assert_eq!(InvalidId("x1".into()).to_string(), "invalid id segment \"x1\"");
    }

    #[test]
    fn scoped_category_ignores_trailing_shape() {
        assert_eq!(ResourcePath::scoped_category_id("/categories/1"), Ok(1));
        assert_eq!(ResourcePath::scoped_category_id("/categories/1/anything/else"), Ok(1));
        assert_eq!(ResourcePath::scoped_category_id("/categories/"), bad(""));
        assert_eq!(ResourcePath::scoped_category_id("/categories/x/news"), bad("x"));
        assert!(ResourcePath::scoped_category_id("/categories").is_err());
    }
}
