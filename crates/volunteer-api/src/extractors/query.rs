//! Query string extractor

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// `Query<T>` whose rejection is an `INVALID_QUERY_PARAMETER` error body
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::invalid_query(rejection.body_text()))?;
        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Filter {
        status: Option<String>,
    }

    async fn extract(uri: &str) -> Result<QueryParams<Filter>, ApiError> {
        let (mut parts, ()) = Request::get(uri).body(()).unwrap().into_parts();
        QueryParams::<Filter>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_parses_known_fields() {
        let QueryParams(filter) = extract("/reports?status=Missed").await.unwrap();
        assert_eq!(filter.status.as_deref(), Some("Missed"));
    }

    #[tokio::test]
    async fn test_duplicate_field_is_invalid_query() {
        let err = extract("/reports?status=Missed&status=Attended")
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUERY_PARAMETER");
    }
}
