use serde::{Deserialize, Serialize};

use crate::domain::ApplicationId;

/// Number of records requested per page.
pub const PAGE_SIZE: u32 = 5;

/// Response header carrying pagination links.
pub const LINK_HEADER: &str = "Link";

/// Token inside the `Link` header announcing another page.
pub const NEXT_PAGE_MARKER: &str = "rel=\"next\"";

/// One loan application as served by `GET /api/applications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub loan_amount: f64,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub date_created: String,
    pub expiry_date: String,
}

/// Query string of a page request: `?_page=<page>&_limit=<limit>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "_page")]
    pub page: u32,
    #[serde(rename = "_limit")]
    pub limit: u32,
}

impl PageQuery {
    pub fn new(page: u32) -> Self {
        Self {
            page,
            limit: PAGE_SIZE,
        }
    }
}

/// Whether a `Link` header value announces a next page.
///
/// This is a plain substring check, not a Link grammar parser; backends
/// are only expected to include `rel="next"` somewhere in the value.
pub fn has_next_page(link_header: Option<&str>) -> bool {
    link_header.is_some_and(|value| value.contains(NEXT_PAGE_MARKER))
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
