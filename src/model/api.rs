use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The response for admin actions and errors alike: a flag plus a
/// human-readable message.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

const DEFAULT_PER_PAGE: u64 = 25;
const MAX_PER_PAGE: u64 = 100;

/// Standard pagination query parameters for list endpoints.
#[derive(Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Rows per page, defaults to 25, capped at 100
    pub per_page: Option<u64>,
}

impl PageQuery {
    /// 0-based page index for the database paginator.
    pub fn page_index(&self) -> u64 {
        self.page.unwrap_or(1).max(1) - 1
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::PageQuery;

    /// Expect defaults when no parameters are given
    #[test]
    fn test_page_query_defaults() {
        let query = PageQuery {
            page: None,
            per_page: None,
        };

        assert_eq!(query.page_index(), 0);
        assert_eq!(query.per_page(), 25);
    }

    /// Expect page 0 to be treated as page 1 and per_page capped at 100
    #[test]
    fn test_page_query_bounds() {
        let query = PageQuery {
            page: Some(0),
            per_page: Some(500),
        };

        assert_eq!(query.page_index(), 0);
        assert_eq!(query.per_page(), 100);
    }
}
