//! Translation of raw list/get parameters into MongoDB query specs.

use mongodb::bson::{Document, doc};

use crate::models::ListParams;

/// Page size used when the parameter is absent or unparseable
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Page number used when the parameter is absent or unparseable
pub const DEFAULT_PAGE: u64 = 1;

/// Filter/sort/pagination specification for a list read.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    /// Currently matches all documents; extension point for predicates
    pub filter: Document,
    pub limit: i64,
    pub skip: u64,
    /// `None` leaves the database default order
    pub sort: Option<Document>,
}

/// Build the list query from raw string parameters.
///
/// `pageSize` defaults to 10 and `page` to 1; non-numeric input falls back
/// to the default rather than erroring. `skip = (page - 1) * pageSize`.
/// A sort spec is produced only when `sort` names a field; `order == "asc"`
/// sorts ascending, anything else descending.
pub fn build_list_query(params: &ListParams) -> ListQuery {
    let page_size = parse_or(params.page_size.as_deref(), DEFAULT_PAGE_SIZE);
    let page = parse_or(params.page.as_deref(), DEFAULT_PAGE);

    let sort = params.sort.as_ref().map(|field| {
        let direction = if params.order.as_deref() == Some("asc") {
            1
        } else {
            -1
        };
        doc! { field: direction }
    });

    ListQuery {
        filter: doc! {},
        // Parameters are client-controlled; saturate instead of overflowing
        limit: i64::try_from(page_size).unwrap_or(i64::MAX),
        skip: page.saturating_sub(1).saturating_mul(page_size),
        sort,
    }
}

/// Build the single-id lookup filter.
pub fn build_get_query(id: &str) -> Document {
    doc! { "id": id }
}

fn parse_or(value: Option<&str>, default: u64) -> u64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        page: Option<&str>,
        page_size: Option<&str>,
        sort: Option<&str>,
        order: Option<&str>,
    ) -> ListParams {
        ListParams {
            page: page.map(String::from),
            page_size: page_size.map(String::from),
            sort: sort.map(String::from),
            order: order.map(String::from),
        }
    }

    #[test]
    fn test_defaults_when_absent() {
        let query = build_list_query(&ListParams::default());
        assert_eq!(query.limit, 10);
        assert_eq!(query.skip, 0);
        assert_eq!(query.sort, None);
        assert_eq!(query.filter, doc! {});
    }

    #[test]
    fn test_pagination_formula() {
        let query = build_list_query(&params(Some("3"), Some("25"), None, None));
        assert_eq!(query.limit, 25);
        assert_eq!(query.skip, 50);
    }

    #[test]
    fn test_non_numeric_falls_back_to_defaults() {
        let query = build_list_query(&params(Some("abc"), Some(""), None, None));
        assert_eq!(query.limit, 10);
        assert_eq!(query.skip, 0);
    }

    #[test]
    fn test_extreme_parameters_saturate() {
        // page * pageSize exceeds u64
        let query = build_list_query(&params(Some("4294967297"), Some("4294967296"), None, None));
        assert_eq!(query.skip, u64::MAX);
        assert_eq!(query.limit, 4294967296);

        // pageSize exceeds i64
        let query = build_list_query(&params(
            Some("2"),
            Some("18446744073709551615"),
            None,
            None,
        ));
        assert_eq!(query.limit, i64::MAX);
        assert_eq!(query.skip, u64::MAX);
    }

    #[test]
    fn test_sort_ascending() {
        let query = build_list_query(&params(None, None, Some("name"), Some("asc")));
        assert_eq!(query.sort, Some(doc! { "name": 1 }));
    }

    #[test]
    fn test_sort_defaults_to_descending() {
        let query = build_list_query(&params(None, None, Some("name"), None));
        assert_eq!(query.sort, Some(doc! { "name": -1 }));

        let query = build_list_query(&params(None, None, Some("name"), Some("desc")));
        assert_eq!(query.sort, Some(doc! { "name": -1 }));
    }

    #[test]
    fn test_get_query_filters_by_id() {
        assert_eq!(build_get_query("abc-123"), doc! { "id": "abc-123" });
    }
}
