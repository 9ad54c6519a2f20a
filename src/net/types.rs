//! Wire types shared by the record controller and its hosts.

use serde::Deserialize;

use crate::error::GridError;

/// A flat record row as the grid host sees it: field values plus `id`.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// List-endpoint item shape: primary key plus a nested attribute bag.
#[derive(Debug, Deserialize)]
pub struct RecordItem {
    pub pk: serde_json::Value,
    pub fields: Row,
}

/// Parse a list response body into flat rows.
///
/// Each `{pk, fields}` item becomes `{...fields, id: pk}`; item order is
/// preserved. Pure so the transform is testable without a backend.
///
/// # Errors
///
/// Returns [`GridError::Decode`] when the body is not a JSON array of
/// `{pk, fields}` items.
pub fn parse_rows(body: &str) -> Result<Vec<Row>, GridError> {
    let items: Vec<RecordItem> = serde_json::from_str(body).map_err(|e| GridError::Decode(e.to_string()))?;
    Ok(items
        .into_iter()
        .map(|item| {
            let mut row = item.fields;
            row.insert("id".to_owned(), item.pk);
            row
        })
        .collect())
}

// =============================================================================
// RECORD CONTROLLER TRAIT
// =============================================================================

/// The grid host's sole interface to the backend. Enables mocking in tests.
///
/// Every operation settles: a transport failure, non-success status or
/// undecodable body is an `Err`, never a call left pending.
#[async_trait::async_trait]
pub trait RecordController: Send + Sync {
    /// Fetch rows matching `filter` (one query parameter per filter entry).
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the request fails, the backend answers
    /// with a non-success status, or the body cannot be parsed.
    async fn load_data(&self, filter: &Row) -> Result<Vec<Row>, GridError>;

    /// Create a record. The backend's response is returned unvalidated.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the request fails or the backend answers
    /// with a non-success status.
    async fn insert_item(&self, item: &Row) -> Result<serde_json::Value, GridError>;

    /// Update the record identified by `item.id`. Response unvalidated.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the request fails or the backend answers
    /// with a non-success status.
    async fn update_item(&self, item: &Row) -> Result<serde_json::Value, GridError>;

    /// Delete the record identified by `item.id`. No response body expected.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the request fails or the backend answers
    /// with a non-success status.
    async fn delete_item(&self, item: &Row) -> Result<(), GridError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
