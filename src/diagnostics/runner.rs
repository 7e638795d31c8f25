//! Diagnostics runner
//!
//! Drives a check list against the store and renders a report. Missing
//! credentials degrade the run to skipped checks; a failing check is
//! recorded and the run keeps going. Nothing here retries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::checks::{default_checks, QueryCheck};
use crate::config::Config;
use crate::genai::{generation_capable, CatalogClient, CatalogError};
use crate::store::{Row, StoreClient};

/// Runs read checks against the hosted store
pub struct DiagnosticsRunner {
    store: Option<StoreClient>,
    checks: Vec<QueryCheck>,
    row_preview: usize,
}

impl DiagnosticsRunner {
    /// Build a runner from an explicit configuration object
    ///
    /// An unconfigured or unusable store is not fatal: the runner is
    /// created anyway and every check reports as skipped.
    pub fn new(config: &Config) -> Self {
        let store = if config.store.is_configured() {
            match StoreClient::new(&config.store) {
                Ok(client) => Some(client),
                Err(e) => {
                    tracing::warn!("Store client unavailable: {}", e);
                    None
                }
            }
        } else {
            tracing::warn!("Store credentials not configured; store checks will be skipped");
            None
        };

        Self {
            store,
            checks: default_checks(),
            row_preview: config.diagnostics.row_preview,
        }
    }

    /// Replace the default check list
    pub fn with_checks(mut self, checks: Vec<QueryCheck>) -> Self {
        self.checks = checks;
        self
    }

    /// Run every check in sequence
    ///
    /// Per-check errors never abort the run; the outcome list always has
    /// one entry per check, in order.
    pub async fn run(&self) -> StoreReport {
        let mut outcomes = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            let status = match &self.store {
                None => CheckStatus::Skipped {
                    reason: "store credentials not configured".to_string(),
                },
                Some(client) => {
                    let query = check.apply(client.table(&check.table));
                    match query.fetch().await {
                        Ok(rows) => {
                            tracing::info!(
                                table = %check.table,
                                rows = rows.len(),
                                "Store check passed"
                            );
                            CheckStatus::Passed { rows }
                        }
                        Err(e) => {
                            tracing::error!(table = %check.table, error = %e, "Store check failed");
                            CheckStatus::Failed {
                                error: e.to_string(),
                            }
                        }
                    }
                }
            };

            outcomes.push(CheckOutcome {
                label: check.label.clone(),
                table: check.table.clone(),
                columns: check.columns.clone(),
                status,
            });
        }

        StoreReport {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            row_preview: self.row_preview,
            outcomes,
        }
    }
}

/// Outcome of a single check
#[derive(Debug)]
pub struct CheckOutcome {
    pub label: String,
    pub table: String,
    pub columns: Vec<String>,
    pub status: CheckStatus,
}

/// Result state of a check
#[derive(Debug)]
pub enum CheckStatus {
    Passed { rows: Vec<Row> },
    Failed { error: String },
    Skipped { reason: String },
}

/// Collected results of one diagnostics run
#[derive(Debug)]
pub struct StoreReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub row_preview: usize,
    pub outcomes: Vec<CheckOutcome>,
}

impl StoreReport {
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Passed { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Skipped { .. }))
    }

    fn count(&self, pred: impl Fn(&CheckStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    /// Render the report for the console stream
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "> Store diagnostics (run {}, {})\n",
            self.run_id,
            self.started_at.format("%Y-%m-%dT%H:%M:%SZ")
        ));

        for outcome in &self.outcomes {
            match &outcome.status {
                CheckStatus::Passed { rows } => {
                    out.push_str(&format!(
                        "  {} ({}): {} rows\n",
                        outcome.label,
                        outcome.table,
                        rows.len()
                    ));
                    for row in rows.iter().take(self.row_preview) {
                        out.push_str(&format!(
                            "    {}\n",
                            project_row(row, &outcome.columns)
                        ));
                    }
                    if rows.len() > self.row_preview {
                        out.push_str(&format!(
                            "    ... {} more\n",
                            rows.len() - self.row_preview
                        ));
                    }
                }
                CheckStatus::Failed { error } => {
                    out.push_str(&format!(
                        "  {} ({}): FAILED: {}\n",
                        outcome.label, outcome.table, error
                    ));
                }
                CheckStatus::Skipped { reason } => {
                    out.push_str(&format!(
                        "  {} ({}): skipped ({})\n",
                        outcome.label, outcome.table, reason
                    ));
                }
            }
        }

        out.push_str(&format!(
            "> {} passed, {} failed, {} skipped\n",
            self.passed(),
            self.failed(),
            self.skipped()
        ));
        out
    }
}

/// Projected field-subset view of one row
fn project_row(row: &Row, columns: &[String]) -> String {
    if columns.is_empty() {
        return serde_json::Value::Object(row.clone()).to_string();
    }

    columns
        .iter()
        .map(|column| {
            let value = row
                .get(column)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "null".to_string());
            format!("{}={}", column, value)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// List the catalog models usable for content generation
///
/// Returns short identifiers (catalog prefix stripped). A top-level error
/// object from the catalog surfaces as [`CatalogError::Api`] and stops
/// this probe; it never touches the store checks.
pub async fn run_model_probe(config: &Config) -> Result<Vec<String>, CatalogError> {
    let client = CatalogClient::new(&config.genai)?;
    let models = client.list_models().await?;

    let names: Vec<String> = generation_capable(&models)
        .iter()
        .map(|m| m.short_name().to_string())
        .collect();

    tracing::info!(
        total = models.len(),
        capable = names.len(),
        "Model catalog probe complete"
    );
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, serde_json::Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn report(outcomes: Vec<CheckOutcome>) -> StoreReport {
        StoreReport {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            row_preview: 5,
            outcomes,
        }
    }

    #[test]
    fn test_project_row_subset() {
        let row = row(&[
            ("id", json!(42)),
            ("name", json!("Push Day")),
            ("secret", json!("hidden")),
        ]);

        let projected = project_row(&row, &["id".to_string(), "name".to_string()]);
        assert_eq!(projected, r#"id=42 name="Push Day""#);
        assert!(!projected.contains("secret"));
    }

    #[test]
    fn test_project_row_missing_column() {
        let row = row(&[("id", json!(1))]);
        let projected = project_row(&row, &["id".to_string(), "gone".to_string()]);
        assert_eq!(projected, "id=1 gone=null");
    }

    #[test]
    fn test_report_counts_and_renders_mixed_outcomes() {
        // Check A errored, check B still ran and passed
        let outcomes = vec![
            CheckOutcome {
                label: "recent workouts".to_string(),
                table: "workouts".to_string(),
                columns: vec!["id".to_string()],
                status: CheckStatus::Failed {
                    error: "store error 404: relation does not exist".to_string(),
                },
            },
            CheckOutcome {
                label: "exercise catalog".to_string(),
                table: "exercises".to_string(),
                columns: vec!["id".to_string(), "name".to_string()],
                status: CheckStatus::Passed {
                    rows: vec![row(&[("id", json!(1)), ("name", json!("Squat"))])],
                },
            },
        ];

        let report = report(outcomes);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 0);

        let rendered = report.render();
        assert!(rendered.contains("FAILED: store error 404"));
        assert!(rendered.contains(r#"id=1 name="Squat""#));
        assert!(rendered.contains("1 passed, 1 failed, 0 skipped"));
    }

    #[test]
    fn test_report_row_preview_truncates() {
        let rows: Vec<Row> = (0..8).map(|i| row(&[("id", json!(i))])).collect();
        let mut r = report(vec![CheckOutcome {
            label: "profiles".to_string(),
            table: "profiles".to_string(),
            columns: vec!["id".to_string()],
            status: CheckStatus::Passed { rows },
        }]);
        r.row_preview = 3;

        let rendered = r.render();
        assert!(rendered.contains("id=2"));
        assert!(!rendered.contains("id=3"));
        assert!(rendered.contains("... 5 more"));
    }

    #[tokio::test]
    async fn test_unconfigured_store_skips_every_check() {
        let runner = DiagnosticsRunner::new(&Config::default());
        let report = runner.run().await;

        assert_eq!(report.outcomes.len(), default_checks().len());
        assert_eq!(report.skipped(), report.outcomes.len());
        assert_eq!(report.passed(), 0);
        assert_eq!(report.failed(), 0);
    }

    #[tokio::test]
    async fn test_model_probe_requires_key() {
        let result = run_model_probe(&Config::default()).await;
        assert!(matches!(result, Err(CatalogError::NotConfigured)));
    }
}
