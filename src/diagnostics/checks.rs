//! Check descriptors
//!
//! Each diagnostic read is described by a [`QueryCheck`]: a table, the
//! columns worth showing, and optional ordering, limit, and membership
//! filter. The default set covers the tables the tracker app actually
//! writes to.

use crate::store::{Direction, TableQuery};

/// One read query to run against the store
#[derive(Debug, Clone)]
pub struct QueryCheck {
    /// Human label shown in the report
    pub label: String,
    pub table: String,
    /// Projection; empty means all columns
    pub columns: Vec<String>,
    pub order: Option<OrderBy>,
    pub limit: Option<usize>,
    pub filter: Option<MembershipFilter>,
}

/// Ordering clause for a check
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

/// Membership filter for a check (`column` must be one of `values`)
#[derive(Debug, Clone)]
pub struct MembershipFilter {
    pub column: String,
    pub values: Vec<String>,
}

impl QueryCheck {
    /// Create a new check against a table
    pub fn new(label: &str, table: &str) -> Self {
        Self {
            label: label.to_string(),
            table: table.to_string(),
            columns: Vec::new(),
            order: None,
            limit: None,
            filter: None,
        }
    }

    /// Set the projected columns
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Order the result by a column
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some(OrderBy {
            column: column.to_string(),
            direction,
        });
        self
    }

    /// Cap the number of rows fetched
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Keep only rows whose column value is in the given set
    pub fn filter_in(mut self, column: &str, values: &[&str]) -> Self {
        self.filter = Some(MembershipFilter {
            column: column.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        });
        self
    }

    /// Translate this descriptor onto a store query builder
    pub(crate) fn apply<'a>(&self, mut query: TableQuery<'a>) -> TableQuery<'a> {
        if !self.columns.is_empty() {
            let columns: Vec<&str> = self.columns.iter().map(String::as_str).collect();
            query = query.select(&columns);
        }
        if let Some(order) = &self.order {
            query = query.order(&order.column, order.direction);
        }
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }
        if let Some(filter) = &self.filter {
            query = query.filter_in(&filter.column, &filter.values);
        }
        query
    }
}

/// The standard check set for the tracker's backend
pub fn default_checks() -> Vec<QueryCheck> {
    vec![
        QueryCheck::new("recent workouts", "workouts")
            .columns(&["id", "name", "performed_at", "user_id"])
            .order("performed_at", Direction::Descending)
            .limit(10),
        QueryCheck::new("exercise catalog", "exercises")
            .columns(&["id", "name", "muscle_group"])
            .order("name", Direction::Ascending)
            .filter_in("muscle_group", &["chest", "back", "legs", "shoulders"]),
        QueryCheck::new("profiles", "profiles")
            .columns(&["id", "username", "created_at"])
            .limit(5),
    ]
}
