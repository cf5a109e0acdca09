//! Pagination extractor
//!
//! Extracts page-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 20;
/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number, at least 1
    pub page: i64,
    /// Maximum number of items to return (clamped to 1-100)
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            page: params.page.unwrap_or(1).max(1),
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_clamping() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(0),
            limit: Some(500),
        });
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, MAX_LIMIT);

        let pagination = Pagination::from(PaginationParams {
            page: Some(3),
            limit: Some(0),
        });
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.limit, 1);
    }
}
