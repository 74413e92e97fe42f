//! In-memory `DataStore` used as the test double.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use super::{DataStore, Query, SupabaseError, Table};

/// JSON rows per table, queried with the same semantics as the hosted API.
///
/// Ordering follows `PostgreSQL` defaults: nulls sort last ascending and
/// first descending. Sorting is stable, so rows with equal keys keep their
/// insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<Table, Vec<Value>>>,
    failing: AtomicBool,
    selects: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `table` with `rows`, replacing anything already there.
    #[must_use]
    pub fn with_rows(self, table: Table, rows: Vec<Value>) -> Self {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(table, rows);
        self
    }

    /// Make every subsequent call fail with [`SupabaseError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, AtomicOrdering::SeqCst);
    }

    /// Rows currently stored in `table`.
    #[must_use]
    pub fn rows(&self, table: Table) -> Vec<Value> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&table)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of `select` calls served so far.
    #[must_use]
    pub fn select_count(&self) -> usize {
        self.selects.load(AtomicOrdering::SeqCst)
    }

    fn check_available(&self) -> Result<(), SupabaseError> {
        if self.failing.load(AtomicOrdering::SeqCst) {
            return Err(SupabaseError::Unavailable(
                "memory store set to fail".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn select(&self, query: &Query) -> Result<Vec<Value>, SupabaseError> {
        self.selects.fetch_add(1, AtomicOrdering::SeqCst);
        self.check_available()?;

        let mut rows: Vec<Value> = self
            .rows(query.table())
            .into_iter()
            .filter(|row| {
                query.filters().iter().all(|filter| {
                    row.get(filter.column)
                        .is_some_and(|cell| filter.value.matches(cell))
                })
            })
            .collect();

        if let Some(order) = query.order() {
            rows.sort_by(|a, b| {
                let ordering = compare_cells(
                    a.get(order.column).unwrap_or(&Value::Null),
                    b.get(order.column).unwrap_or(&Value::Null),
                );
                if order.ascending {
                    ordering
                } else {
                    ordering.reverse()
                }
            });
        }

        if let Some(limit) = query.row_limit() {
            rows.truncate(limit);
        }

        Ok(rows)
    }

    async fn insert(&self, table: Table, record: Value) -> Result<(), SupabaseError> {
        self.check_available()?;
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(table)
            .or_default()
            .push(record);
        Ok(())
    }
}

/// Compare two cells; null is greater than everything else.
fn compare_cells(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
