//! Listing filter: optional search term, category and sort order.

use std::fmt;
use std::str::FromStr;

/// Sort order for link listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl SortOrder {
    /// Parses a `sortBy` value; anything unrecognised falls back to [`SortOrder::Newest`].
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Title => "title",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "title" => Ok(SortOrder::Title),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criteria for listing a user's links.
///
/// `search` matches case-insensitively against title, description, url and
/// category. `category` is an exact, case-sensitive match. Empty strings are
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl LinkFilter {
    pub fn new(search: Option<String>, category: Option<String>, sort: SortOrder) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            category: category.filter(|c| !c.is_empty()),
            sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_known_values() {
        assert_eq!(SortOrder::parse_or_default(Some("newest")), SortOrder::Newest);
        assert_eq!(SortOrder::parse_or_default(Some("oldest")), SortOrder::Oldest);
        assert_eq!(SortOrder::parse_or_default(Some("title")), SortOrder::Title);
    }

    #[test]
    fn test_sort_order_falls_back_to_newest() {
        assert_eq!(SortOrder::parse_or_default(None), SortOrder::Newest);
        assert_eq!(SortOrder::parse_or_default(Some("")), SortOrder::Newest);
        assert_eq!(SortOrder::parse_or_default(Some("Title")), SortOrder::Newest);
        assert_eq!(SortOrder::parse_or_default(Some("random")), SortOrder::Newest);
    }

    #[test]
    fn test_filter_drops_empty_strings() {
        let filter = LinkFilter::new(Some(String::new()), Some(String::new()), SortOrder::Title);
        assert!(filter.search.is_none());
        assert!(filter.category.is_none());
        assert_eq!(filter.sort, SortOrder::Title);
    }
}
