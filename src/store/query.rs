//! Table query builder
//!
//! Builds the store's query-string dialect: `select` for projections,
//! `order=column.direction`, `limit`, and `column=in.(a,b)` membership
//! filters. The builder is consumed by [`TableQuery::fetch`].

use reqwest::Client;
use serde::Deserialize;

use super::client::Row;
use super::StoreError;

/// Sort direction for `order`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// A pending read against one table
pub struct TableQuery<'a> {
    client: &'a Client,
    url: String,
    select: Option<String>,
    order: Option<String>,
    limit: Option<usize>,
    filters: Vec<(String, String)>,
}

impl<'a> TableQuery<'a> {
    pub(super) fn new(client: &'a Client, url: String) -> Self {
        Self {
            client,
            url,
            select: None,
            order: None,
            limit: None,
            filters: Vec::new(),
        }
    }

    /// Project the result onto a subset of columns
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.select = Some(columns.join(","));
        self
    }

    /// Order by a column
    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some(format!("{}.{}", column, direction.as_str()));
        self
    }

    /// Cap the number of returned rows
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Keep only rows whose column value is one of `values`
    pub fn filter_in<S: AsRef<str>>(mut self, column: &str, values: &[S]) -> Self {
        let set = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.filters
            .push((column.to_string(), format!("in.({})", set)));
        self
    }

    /// Query-string parameters this read will send
    fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(select) = &self.select {
            params.push(("select".to_string(), select.clone()));
        }
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        for (column, expr) in &self.filters {
            params.push((column.clone(), expr.clone()));
        }
        params
    }

    /// Execute the read
    ///
    /// A 2xx answer decodes to rows; anything else decodes the store's
    /// error body into [`StoreError::Api`].
    pub async fn fetch(self) -> Result<Vec<Row>, StoreError> {
        let response = self
            .client
            .get(&self.url)
            .query(&self.params())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StoreError::Timeout
                } else if e.is_connect() {
                    StoreError::Unavailable
                } else {
                    StoreError::Http(e)
                }
            })?;

        if response.status().is_success() {
            let rows: Vec<Row> = response.json().await?;
            Ok(rows)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            Err(StoreError::Api { status, message })
        }
    }
}

/// Error body shape the store returns on failed reads
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(client: &Client) -> TableQuery<'_> {
        TableQuery::new(client, "https://project.example.co/rest/v1/workouts".into())
    }

    #[test]
    fn test_bare_query_has_no_params() {
        let client = Client::new();
        assert!(query(&client).params().is_empty());
    }

    #[test]
    fn test_full_query_params() {
        let client = Client::new();
        let q = query(&client)
            .select(&["id", "name", "performed_at"])
            .order("performed_at", Direction::Descending)
            .limit(10)
            .filter_in("muscle_group", &["chest", "back"]);

        assert_eq!(
            q.params(),
            vec![
                ("select".to_string(), "id,name,performed_at".to_string()),
                ("order".to_string(), "performed_at.desc".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("muscle_group".to_string(), "in.(chest,back)".to_string()),
            ]
        );
    }

    #[test]
    fn test_order_ascending() {
        let client = Client::new();
        let q = query(&client).order("name", Direction::Ascending);
        assert_eq!(
            q.params(),
            vec![("order".to_string(), "name.asc".to_string())]
        );
    }

    #[test]
    fn test_error_body_decodes() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"relation does not exist","code":"42P01"}"#)
                .unwrap();
        assert_eq!(body.message, "relation does not exist");
    }
}
