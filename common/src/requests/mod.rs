//! Query parameters accepted by `GET /api/submissions`.
//!
//! The raw query keeps every parameter as an optional string, the way it
//! arrives from the client. `ListSubmissionsQuery::resolve` turns it into
//! `ListParams`, applying the lenient parsing rules: a leading integer is
//! used if present, zero or garbage falls back to the default, and anything
//! below one is raised to one.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSubmissionsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl ListSubmissionsQuery {
    pub fn resolve(&self) -> ListParams {
        ListParams {
            page: lenient_positive(self.page.as_deref(), DEFAULT_PAGE),
            limit: lenient_positive(self.limit.as_deref(), DEFAULT_LIMIT),
            // Only `createdAt` is sortable; any other value resolves to it.
            sort_by: SortField::CreatedAt,
            sort_order: match self.sort_order.as_deref() {
                Some("asc") => SortOrder::Asc,
                _ => SortOrder::Desc,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Resolved pagination and sort for a submission listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// 1-based page number.
    pub page: usize,
    pub limit: usize,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort_by: SortField::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

impl ListParams {
    /// Index of the first item of the requested page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` items; an empty listing still has one page.
    pub fn total_pages(&self, total: usize) -> usize {
        if total == 0 { 1 } else { total.div_ceil(self.limit) }
    }

    /// Query string understood by `GET /api/submissions`.
    pub fn to_query_string(&self) -> String {
        format!(
            "page={}&limit={}&sortBy=createdAt&sortOrder={}",
            self.page,
            self.limit,
            self.sort_order.as_str()
        )
    }
}

fn lenient_positive(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(leading_integer) {
        None | Some(0) => default,
        Some(n) if n < 1 => 1,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

/// Parses an optional sign followed by the leading run of ASCII digits.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>, order: Option<&str>) -> ListSubmissionsQuery {
        ListSubmissionsQuery {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
            sort_by: Some("anything".into()),
            sort_order: order.map(str::to_string),
        }
    }

    #[test]
    fn defaults_when_missing() {
        assert_eq!(ListSubmissionsQuery::default().resolve(), ListParams::default());
    }

    #[test]
    fn lenient_integer_parsing() {
        assert_eq!(query(Some("3"), Some("5"), None).resolve().page, 3);
        assert_eq!(query(Some("2abc"), None, None).resolve().page, 2);
        assert_eq!(query(Some("abc"), None, None).resolve().page, 1);
        assert_eq!(query(Some("0"), Some("0"), None).resolve().limit, 10);
        assert_eq!(query(Some("-4"), None, None).resolve().page, 1);
        assert_eq!(query(None, Some("-4"), None).resolve().limit, 1);
        assert_eq!(query(None, Some(" 25"), None).resolve().limit, 25);
    }

    #[test]
    fn sort_order_defaults_to_desc_and_sort_by_is_always_created_at() {
        let params = query(None, None, Some("ASC")).resolve();
        assert_eq!(params.sort_order, SortOrder::Desc);
        assert_eq!(params.sort_by, SortField::CreatedAt);
        assert_eq!(query(None, None, Some("asc")).resolve().sort_order, SortOrder::Asc);
    }

    #[test]
    fn page_math() {
        let params = ListParams {
            page: 3,
            limit: 4,
            ..ListParams::default()
        };
        assert_eq!(params.offset(), 8);
        assert_eq!(params.total_pages(0), 1);
        assert_eq!(params.total_pages(8), 2);
        assert_eq!(params.total_pages(9), 3);
        assert_eq!(
            params.to_query_string(),
            "page=3&limit=4&sortBy=createdAt&sortOrder=desc"
        );
    }
}
