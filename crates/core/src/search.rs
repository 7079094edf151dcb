//! Catalog search helpers.
//!
//! A query string is tokenized into whitespace-separated terms and matched
//! conjunctively: a car matches only if every term appears as a
//! case-insensitive substring of at least one searchable field. Individual
//! terms may match different fields, so "ford седан" finds a record whose
//! brand contains "ford" and whose body style contains "седан".
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the repository layer and any future tooling.

// ---------------------------------------------------------------------------
// Searchable fields
// ---------------------------------------------------------------------------

/// Columns of the `cars` table that free-text search matches against.
///
/// `drive`, `car_class` and `weak_points` are deliberately excluded.
pub const SEARCH_FIELDS: &[&str] = &[
    "brand",
    "model",
    "generation",
    "body",
    "engines",
    "country",
    "years",
];

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Split a raw query into lowercased search tokens.
///
/// - Splits on Unicode whitespace; empty tokens are discarded.
/// - Tokens are not deduplicated and no characters are stripped, so a
///   punctuation-only token remains a literal substring to match.
/// - Returns `None` when the input is empty or whitespace-only, which means
///   "no filter": the caller must return the full unfiltered listing.
///
/// # Examples
///
/// ```
/// use carkat_core::search::search_tokens;
/// assert_eq!(search_tokens("Ford  Седан"), Some(vec!["ford".into(), "седан".into()]));
/// assert_eq!(search_tokens("   "), None);
/// ```
pub fn search_tokens(query: &str) -> Option<Vec<String>> {
    let tokens: Vec<String> = query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();

    if tokens.is_empty() { None } else { Some(tokens) }
}

// ---------------------------------------------------------------------------
// SQL construction
// ---------------------------------------------------------------------------

/// Escape a token for use inside an `ILIKE` pattern and wrap it in `%`.
///
/// `\`, `%` and `_` are LIKE metacharacters; escaping them keeps every token
/// a literal substring match.
pub fn like_pattern(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len() + 2);
    escaped.push('%');
    for c in token.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Build the AND-of-ORs `WHERE` fragment for a tokenized query.
///
/// For each token one disjunctive clause is emitted over [`SEARCH_FIELDS`],
/// all clauses joined with `AND`. Placeholders are numbered starting at
/// `first_bind`; the caller binds one [`like_pattern`] per token in order.
///
/// # Examples
///
/// ```
/// use carkat_core::search::build_filter_sql;
/// let sql = build_filter_sql(1, 1);
/// assert!(sql.starts_with("(brand ILIKE $1 OR model ILIKE $1"));
/// ```
pub fn build_filter_sql(token_count: usize, first_bind: usize) -> String {
    (0..token_count)
        .map(|i| {
            let n = first_bind + i;
            let ors = SEARCH_FIELDS
                .iter()
                .map(|field| format!("{field} ILIKE ${n}"))
                .collect::<Vec<_>>()
                .join(" OR ");
            format!("({ors})")
        })
        .collect::<Vec<_>>()
        .join(" AND ")
}

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Catalog sort order. Unrecognized request values fall back to [`SortKey::Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first (`created_at DESC`). The default.
    #[default]
    Date,
    /// Ascending by brand, then model.
    Name,
    /// Ascending by `price_min`, rows without a price last.
    PriceAsc,
    /// Descending by `price_min`, rows without a price last.
    PriceDesc,
}

impl SortKey {
    /// Parse a request parameter. Anything unrecognized (including `None`)
    /// yields the default date ordering.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("name") => SortKey::Name,
            Some("price_asc") => SortKey::PriceAsc,
            Some("price_desc") => SortKey::PriceDesc,
            _ => SortKey::Date,
        }
    }

    /// The `ORDER BY` clause body for this sort key.
    ///
    /// Null placement for the price sorts is pinned to nulls-last rather
    /// than inheriting the engine default (PostgreSQL would otherwise put
    /// nulls first on `DESC`).
    pub fn order_clause(self) -> &'static str {
        match self {
            SortKey::Name => "brand ASC, model ASC",
            SortKey::PriceAsc => "price_min ASC NULLS LAST",
            SortKey::PriceDesc => "price_min DESC NULLS LAST",
            SortKey::Date => "created_at DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- search_tokens -------------------------------------------------------

    #[test]
    fn tokens_lowercased_and_split() {
        assert_eq!(
            search_tokens("Ford Escort"),
            Some(vec!["ford".to_string(), "escort".to_string()])
        );
    }

    #[test]
    fn tokens_empty_returns_none() {
        assert_eq!(search_tokens(""), None);
    }

    #[test]
    fn tokens_whitespace_only_returns_none() {
        assert_eq!(search_tokens(" \t  \n "), None);
    }

    #[test]
    fn tokens_collapse_repeated_whitespace() {
        assert_eq!(
            search_tokens("  ford   седан  "),
            Some(vec!["ford".to_string(), "седан".to_string()])
        );
    }

    #[test]
    fn tokens_preserve_punctuation() {
        assert_eq!(
            search_tokens("1.3-1.8 бензин"),
            Some(vec!["1.3-1.8".to_string(), "бензин".to_string()])
        );
    }

    #[test]
    fn tokens_not_deduplicated() {
        assert_eq!(
            search_tokens("ford ford"),
            Some(vec!["ford".to_string(), "ford".to_string()])
        );
    }

    #[test]
    fn tokens_lowercase_cyrillic() {
        assert_eq!(search_tokens("СЕДАН"), Some(vec!["седан".to_string()]));
    }

    // -- like_pattern --------------------------------------------------------

    #[test]
    fn pattern_wraps_in_percent() {
        assert_eq!(like_pattern("ford"), "%ford%");
    }

    #[test]
    fn pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
    }

    // -- build_filter_sql ----------------------------------------------------

    #[test]
    fn filter_single_token_covers_all_fields() {
        let sql = build_filter_sql(1, 1);
        for field in SEARCH_FIELDS {
            assert!(sql.contains(&format!("{field} ILIKE $1")), "missing {field}");
        }
        assert!(!sql.contains("AND"));
    }

    #[test]
    fn filter_joins_tokens_with_and() {
        let sql = build_filter_sql(2, 1);
        assert_eq!(sql.matches(" AND ").count(), 1);
        assert!(sql.contains("ILIKE $1"));
        assert!(sql.contains("ILIKE $2"));
    }

    #[test]
    fn filter_respects_first_bind_offset() {
        let sql = build_filter_sql(2, 3);
        assert!(sql.contains("ILIKE $3"));
        assert!(sql.contains("ILIKE $4"));
        assert!(!sql.contains("ILIKE $1"));
    }

    #[test]
    fn filter_excludes_unsearched_fields() {
        let sql = build_filter_sql(1, 1);
        assert!(!sql.contains("drive"));
        assert!(!sql.contains("car_class"));
        assert!(!sql.contains("weak_points"));
    }

    // -- SortKey -------------------------------------------------------------

    #[test]
    fn sort_parse_known_keys() {
        assert_eq!(SortKey::parse(Some("name")), SortKey::Name);
        assert_eq!(SortKey::parse(Some("price_asc")), SortKey::PriceAsc);
        assert_eq!(SortKey::parse(Some("price_desc")), SortKey::PriceDesc);
        assert_eq!(SortKey::parse(Some("date")), SortKey::Date);
    }

    #[test]
    fn sort_parse_falls_back_to_date() {
        assert_eq!(SortKey::parse(None), SortKey::Date);
        assert_eq!(SortKey::parse(Some("")), SortKey::Date);
        assert_eq!(SortKey::parse(Some("rating")), SortKey::Date);
    }

    #[test]
    fn price_sorts_pin_nulls_last() {
        assert!(SortKey::PriceAsc.order_clause().ends_with("NULLS LAST"));
        assert!(SortKey::PriceDesc.order_clause().ends_with("NULLS LAST"));
    }
}
