//! Dynamic SQL for the link listing query.
//!
//! The listing combines an optional search term, an optional category and a
//! sort order. Every user-supplied value goes through `push_bind`, so the only
//! text spliced into the statement is the fixed SQL below.

use sqlx::{Postgres, QueryBuilder};

use crate::domain::entities::{LinkFilter, SortOrder};

pub(crate) const LINK_COLUMNS: &str =
    "id, user_id, url, title, description, category, created_at, updated_at";

/// Builds `SELECT ... FROM links` scoped to `user_id` and narrowed by `filter`.
pub fn build_list_query(user_id: i64, filter: &LinkFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!(
        "SELECT {LINK_COLUMNS} FROM links WHERE user_id = "
    ));
    qb.push_bind(user_id);

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", escape_like(search));

        qb.push(" AND (");
        let mut columns = qb.separated(" OR ");
        for column in ["title", "description", "url", "category"] {
            columns
                .push(format!("{column} ILIKE "))
                .push_bind_unseparated(pattern.clone());
        }
        qb.push(")");
    }

    if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        qb.push(" AND category = ").push_bind(category.to_string());
    }

    qb.push(order_by(filter.sort));
    qb
}

/// Ties are broken by id so equal timestamps or titles still list stably.
fn order_by(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Newest => " ORDER BY created_at DESC, id DESC",
        SortOrder::Oldest => " ORDER BY created_at ASC, id ASC",
        SortOrder::Title => " ORDER BY title ASC, id ASC",
    }
}

/// Escapes `LIKE` metacharacters so the search term matches literally.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(search: Option<&str>, category: Option<&str>, sort: SortOrder) -> LinkFilter {
        LinkFilter::new(
            search.map(str::to_string),
            category.map(str::to_string),
            sort,
        )
    }

    #[test]
    fn test_no_filters_defaults_to_newest() {
        let qb = build_list_query(1, &LinkFilter::default());
        assert_eq!(
            qb.sql(),
            "SELECT id, user_id, url, title, description, category, created_at, updated_at \
             FROM links WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
    }

    #[test]
    fn test_search_matches_all_four_columns() {
        let qb = build_list_query(1, &filter(Some("example"), None, SortOrder::Newest));
        let sql = qb.sql();

        assert!(sql.contains(
            "AND (title ILIKE $2 OR description ILIKE $3 OR url ILIKE $4 OR category ILIKE $5)"
        ));
        assert!(!sql.contains("category = "));
    }

    #[test]
    fn test_search_and_category_are_combined() {
        let qb = build_list_query(1, &filter(Some("rust"), Some("dev"), SortOrder::Oldest));
        let sql = qb.sql();

        assert!(sql.contains("OR category ILIKE $5) AND category = $6"));
        assert!(sql.ends_with("ORDER BY created_at ASC, id ASC"));
    }

    #[test]
    fn test_category_only() {
        let qb = build_list_query(9, &filter(None, Some("news"), SortOrder::Title));
        let sql = qb.sql();

        assert!(sql.contains("WHERE user_id = $1 AND category = $2"));
        assert!(!sql.contains("ILIKE"));
        assert!(sql.ends_with("ORDER BY title ASC, id ASC"));
    }

    #[test]
    fn test_empty_strings_are_ignored() {
        let raw = LinkFilter {
            search: Some(String::new()),
            category: Some(String::new()),
            sort: SortOrder::Newest,
        };
        let qb = build_list_query(1, &raw);
        let sql = qb.sql();

        assert!(!sql.contains("ILIKE"));
        assert!(!sql.contains("category ="));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
