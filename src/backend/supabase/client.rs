/**
 * Supabase REST Client
 *
 * This module implements the HTTP client for the managed data backend.
 * It covers exactly the surface the handlers need:
 *
 * - table-scoped `select` / `insert` / `update` / `delete` with equality
 *   filters and optional ordering,
 * - exact row counts via the `Content-Range` header,
 * - named atomic procedures via `POST /rest/v1/rpc/{name}`.
 *
 * # Authentication
 *
 * All requests carry the service-role key as both the `apikey` header and a
 * bearer token. The key never appears in logs.
 *
 * # Error Mapping
 *
 * Non-2xx responses become `SupabaseError::Api` with the response body as
 * the message. Unique-constraint violations (409 / PostgreSQL code 23505)
 * are classified so callers can treat duplicate inserts as idempotent
 * no-ops where the surface demands it.
 */

use reqwest::{header::CONTENT_RANGE, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors from the managed data backend
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Network-level failure talking to the backend
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("backend returned {status}: {message}")]
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Response body, as returned by the backend
        message: String,
    },

    /// The backend answered 2xx but the body was not the expected shape
    #[error("unexpected backend response: {0}")]
    Decode(String),
}

impl SupabaseError {
    /// Build an API error (used by tests and the response path)
    pub fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is a unique-constraint violation on insert
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Api { status, message } => {
                *status == StatusCode::CONFLICT || message.contains("23505")
            }
            _ => false,
        }
    }
}

/// Client for the Supabase table API and RPCs
///
/// Cheap to clone; the underlying `reqwest::Client` is a connection pool.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseClient {
    /// Create a client for the given project URL and service-role key
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            service_key: service_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", self.service_key.as_str())
            .bearer_auth(&self.service_key)
    }

    fn apply_filters(builder: RequestBuilder, filters: &[(&str, &str)]) -> RequestBuilder {
        let pairs: Vec<(String, String)> = filters
            .iter()
            .map(|(column, value)| (column.to_string(), format!("eq.{value}")))
            .collect();
        builder.query(&pairs)
    }

    /// Select rows matching the equality filters
    ///
    /// `order` is a PostgREST ordering term such as `created_at.asc`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, &str)],
        order: Option<&str>,
    ) -> Result<Vec<T>, SupabaseError> {
        let mut builder = self
            .request(Method::GET, &self.table_url(table))
            .query(&[("select", columns)]);
        builder = Self::apply_filters(builder, filters);
        if let Some(order) = order {
            builder = builder.query(&[("order", order)]);
        }

        let response = builder.send().await?;
        let response = Self::check_status(response).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Insert a single row
    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), SupabaseError> {
        let response = self
            .request(Method::POST, &self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Update rows matching the equality filters, returning the updated rows
    pub async fn update(
        &self,
        table: &str,
        patch: &serde_json::Value,
        filters: &[(&str, &str)],
    ) -> Result<Vec<serde_json::Value>, SupabaseError> {
        let builder = self
            .request(Method::PATCH, &self.table_url(table))
            .header("Prefer", "return=representation")
            .json(patch);
        let response = Self::apply_filters(builder, filters).send().await?;
        let response = Self::check_status(response).await?;
        response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Delete rows matching the equality filters
    pub async fn delete(
        &self,
        table: &str,
        filters: &[(&str, &str)],
    ) -> Result<(), SupabaseError> {
        let builder = self.request(Method::DELETE, &self.table_url(table));
        let response = Self::apply_filters(builder, filters).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Exact count of rows matching the equality filters
    ///
    /// Uses `Prefer: count=exact` with a zero-width range and reads the
    /// total from the `Content-Range` header, so no row data crosses the
    /// wire.
    pub async fn count(
        &self,
        table: &str,
        filters: &[(&str, &str)],
    ) -> Result<i64, SupabaseError> {
        let builder = self
            .request(Method::GET, &self.table_url(table))
            .query(&[("select", "*")])
            .header("Prefer", "count=exact")
            .header("Range", "0-0");
        let response = Self::apply_filters(builder, filters).send().await?;
        let response = Self::check_status(response).await?;

        let content_range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| SupabaseError::Decode("missing Content-Range header".to_string()))?;

        // Content-Range is "<range>/<total>", e.g. "0-0/42" or "*/0".
        content_range
            .rsplit('/')
            .next()
            .and_then(|total| total.parse::<i64>().ok())
            .ok_or_else(|| {
                SupabaseError::Decode(format!("unparseable Content-Range: {content_range}"))
            })
    }

    /// Call a named atomic server-side procedure
    pub async fn rpc<T: DeserializeOwned>(
        &self,
        name: &str,
        params: &serde_json::Value,
    ) -> Result<T, SupabaseError> {
        let url = format!("{}/rest/v1/rpc/{}", self.base_url, name);
        let response = self
            .request(Method::POST, &url)
            .json(params)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SupabaseError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(SupabaseError::api(status, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_by_status() {
        let error = SupabaseError::api(StatusCode::CONFLICT, "duplicate key value");
        assert!(error.is_unique_violation());
    }

    #[test]
    fn test_unique_violation_by_code() {
        let error = SupabaseError::api(
            StatusCode::BAD_REQUEST,
            r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
        );
        assert!(error.is_unique_violation());
    }

    #[test]
    fn test_other_api_error_is_not_unique_violation() {
        let error = SupabaseError::api(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(!error.is_unique_violation());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = SupabaseClient::new("https://example.supabase.co/", "key");
        assert_eq!(
            client.table_url("rooms"),
            "https://example.supabase.co/rest/v1/rooms"
        );
    }
}
