//! Table-scoped read queries.
//!
//! Only what the catalog needs: equality filters, one ordering column and
//! an optional row limit. [`Query::to_params`] renders the PostgREST form.

use pure_angan_core::{CategoryId, ProductId, Slug};
use serde_json::Value;

use super::Table;

/// A value compared with `eq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
    Integer(i64),
}

impl FilterValue {
    /// Render for a PostgREST `column=eq.<value>` parameter.
    #[must_use]
    pub fn to_param(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Bool(flag) => flag.to_string(),
            Self::Integer(number) => number.to_string(),
        }
    }

    /// Whether a JSON cell holds this value.
    #[must_use]
    pub fn matches(&self, cell: &Value) -> bool {
        match (self, cell) {
            (Self::Text(text), Value::String(cell)) => text == cell,
            (Self::Bool(flag), Value::Bool(cell)) => flag == cell,
            (Self::Integer(number), Value::Number(cell)) => cell.as_i64() == Some(*number),
            _ => false,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&Slug> for FilterValue {
    fn from(value: &Slug) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

impl From<CategoryId> for FilterValue {
    fn from(value: CategoryId) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<ProductId> for FilterValue {
    fn from(value: ProductId) -> Self {
        Self::Text(value.to_string())
    }
}

/// `column = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: FilterValue,
}

/// Single-column ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

/// A read query against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: Table,
    filters: Vec<Filter>,
    order: Option<Order>,
    limit: Option<usize>,
}

impl Query {
    /// Select every column of every row in `table`.
    #[must_use]
    pub const fn select(table: Table) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &'static str, value: impl Into<FilterValue>) -> Self {
        self.filters.push(Filter {
            column,
            value: value.into(),
        });
        self
    }

    /// Order by `column`, smallest first.
    #[must_use]
    pub const fn order_asc(mut self, column: &'static str) -> Self {
        self.order = Some(Order {
            column,
            ascending: true,
        });
        self
    }

    /// Order by `column`, largest first.
    #[must_use]
    pub const fn order_desc(mut self, column: &'static str) -> Self {
        self.order = Some(Order {
            column,
            ascending: false,
        });
        self
    }

    /// Return at most `limit` rows.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Zero-or-one row variant.
    #[must_use]
    pub const fn maybe_single(self) -> Self {
        self.limit(1)
    }

    #[must_use]
    pub const fn table(&self) -> Table {
        self.table
    }

    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    #[must_use]
    pub const fn order(&self) -> Option<Order> {
        self.order
    }

    #[must_use]
    pub const fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    /// PostgREST query parameters, in a stable order.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];

        for filter in &self.filters {
            params.push((
                filter.column.to_string(),
                format!("eq.{}", filter.value.to_param()),
            ));
        }

        if let Some(order) = self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{}.{direction}", order.column)));
        }

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        params
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(query: &Query) -> Vec<(String, String)> {
        query.to_params()
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_plain_select() {
        let query = Query::select(Table::Categories);
        assert_eq!(pairs(&query), vec![pair("select", "*")]);
    }

    #[test]
    fn test_featured_reviews_params() {
        let query = Query::select(Table::Reviews)
            .eq("is_featured", true)
            .order_desc("review_date");
        assert_eq!(
            pairs(&query),
            vec![
                pair("select", "*"),
                pair("is_featured", "eq.true"),
                pair("order", "review_date.desc"),
            ]
        );
    }

    #[test]
    fn test_slug_lookup_params() {
        let slug = Slug::parse("vermicompost").unwrap();
        let query = Query::select(Table::Products).eq("slug", &slug).maybe_single();
        assert_eq!(
            pairs(&query),
            vec![
                pair("select", "*"),
                pair("slug", "eq.vermicompost"),
                pair("limit", "1"),
            ]
        );
    }

    #[test]
    fn test_later_order_replaces_earlier() {
        let query = Query::select(Table::Products)
            .order_desc("created_at")
            .order_asc("display_order");
        assert_eq!(
            query.order(),
            Some(Order {
                column: "display_order",
                ascending: true
            })
        );
    }

    #[test]
    fn test_filter_value_matches() {
        assert!(FilterValue::from(true).matches(&json!(true)));
        assert!(!FilterValue::from(true).matches(&json!("true")));
        assert!(FilterValue::from("ghee").matches(&json!("ghee")));
        assert!(FilterValue::from(3_i64).matches(&json!(3)));
        assert!(!FilterValue::from("ghee").matches(&json!(null)));
    }
}
