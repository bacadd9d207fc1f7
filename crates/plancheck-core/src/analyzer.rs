use std::sync::Arc;

use crate::config::{DatabaseConfig, DATABASE_URL_VARS};
use crate::errors::AnalyzeError;
use crate::executor::{Connector, PgConnector, StatementExecutor};
use crate::model::{AnalysisVerdict, Outcome, StatementResult};
use crate::script::split_statements;

/// Runs a plan script against one connection and aggregates the verdict.
///
/// Statements run strictly in script order on a single connection. A flagged
/// plan does not stop the run; a statement that errors does. The connection is
/// released exactly once on every path after it was opened.
pub struct Analyzer {
    connector: Option<Arc<dyn Connector>>,
}

impl Analyzer {
    pub fn new(connector: Option<Arc<dyn Connector>>) -> Self {
        Self { connector }
    }

    pub fn from_config(cfg: Option<DatabaseConfig>) -> Self {
        let connector = cfg.map(|c| {
            tracing::debug!(event = "plancheck.config", source = c.source, "database configured");
            Arc::new(PgConnector::new(c.url)) as Arc<dyn Connector>
        });
        Self::new(connector)
    }

    pub fn is_configured(&self) -> bool {
        self.connector.is_some()
    }

    pub async fn run(&self, script: &str) -> Result<Outcome, AnalyzeError> {
        let Some(connector) = &self.connector else {
            let reason = format!(
                "no database configured (set {} or {})",
                DATABASE_URL_VARS[0], DATABASE_URL_VARS[1]
            );
            tracing::warn!(event = "plancheck.skipped", reason = %reason, "plan check skipped");
            return Ok(Outcome::skipped(reason));
        };

        let statements = split_statements(script);
        if statements.is_empty() {
            tracing::warn!(
                event = "plancheck.empty_script",
                "script contains no statements; nothing to check"
            );
            return Ok(Outcome::Completed(AnalysisVerdict::default()));
        }

        tracing::info!(
            event = "plancheck.start",
            connector = connector.name(),
            statements = statements.len(),
            "running plan check"
        );

        let mut conn = connector.connect().await.map_err(AnalyzeError::Connect)?;
        let evaluated = evaluate(conn.as_mut(), &statements).await;
        if let Err(e) = conn.end().await {
            tracing::warn!(event = "plancheck.release", error = %e, "failed to release connection");
        }
        let results = evaluated?;

        let verdict = AnalysisVerdict::new(results);
        tracing::info!(
            event = "plancheck.finish",
            statements = verdict.statements.len(),
            flagged = verdict.flagged_count(),
            "plan check finished"
        );
        Ok(Outcome::Completed(verdict))
    }
}

async fn evaluate(
    conn: &mut dyn StatementExecutor,
    statements: &[String],
) -> Result<Vec<StatementResult>, AnalyzeError> {
    let mut results = Vec::with_capacity(statements.len());
    for (i, sql) in statements.iter().enumerate() {
        let index = i + 1;
        let rows = conn
            .query(sql)
            .await
            .map_err(|source| AnalyzeError::Statement {
                index,
                sql: sql.clone(),
                source,
            })?;
        let result = StatementResult::new(index, sql.clone(), rows);
        tracing::debug!(
            event = "plancheck.statement",
            index,
            rows = result.rows.len(),
            flagged = result.flagged
        );
        results.push(result);
    }
    Ok(results)
}
