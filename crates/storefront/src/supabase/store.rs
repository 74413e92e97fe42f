//! The storage seam shared by every service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{Query, SupabaseError, Table};

/// Table-scoped reads and inserts against the hosted store.
///
/// Rows travel as JSON so the trait stays object-safe; [`fetch_rows`] turns
/// them into typed records.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Run a read query and return the raw rows in store order.
    async fn select(&self, query: &Query) -> Result<Vec<Value>, SupabaseError>;

    /// Insert one record into `table`.
    async fn insert(&self, table: Table, record: Value) -> Result<(), SupabaseError>;
}

/// Run `query` and decode every row into `T`.
///
/// A row that does not decode is logged and skipped, so one malformed record
/// cannot blank a whole catalog page.
///
/// # Errors
///
/// Returns an error if the query itself fails.
pub async fn fetch_rows<T: DeserializeOwned>(
    store: &dyn DataStore,
    query: &Query,
) -> Result<Vec<T>, SupabaseError> {
    let rows = store.select(query).await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<T>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(table = %query.table(), error = %e, "Skipping undecodable row");
                None
            }
        })
        .collect())
}

/// Run a zero-or-one query and decode the row if present.
///
/// # Errors
///
/// Returns an error if the query itself fails.
pub async fn fetch_optional<T: DeserializeOwned>(
    store: &dyn DataStore,
    query: &Query,
) -> Result<Option<T>, SupabaseError> {
    let query = query.clone().maybe_single();
    Ok(fetch_rows(store, &query).await?.into_iter().next())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::supabase::MemoryStore;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    #[tokio::test]
    async fn test_fetch_rows_skips_bad_rows() {
        let store = MemoryStore::new().with_rows(
            Table::Categories,
            vec![json!({"name": "Dairy"}), json!({"title": "broken"}), json!({"name": "Honey"})],
        );

        let rows: Vec<Row> = fetch_rows(&store, &Query::select(Table::Categories))
            .await
            .unwrap();

        assert_eq!(
            rows,
            vec![
                Row {
                    name: "Dairy".to_string()
                },
                Row {
                    name: "Honey".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_optional_empty() {
        let store = MemoryStore::new();
        let row: Option<Row> = fetch_optional(&store, &Query::select(Table::Products))
            .await
            .unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn test_fetch_propagates_store_failure() {
        let store = MemoryStore::new();
        store.set_failing(true);
        let result: Result<Vec<Row>, _> = fetch_rows(&store, &Query::select(Table::Products)).await;
        assert!(matches!(result, Err(SupabaseError::Unavailable(_))));
    }
}
