use async_trait::async_trait;
use serde_json::Value;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls, SimpleQueryMessage};

use super::{Connector, StatementExecutor};
use crate::errors::ExecutorError;
use crate::model::PlanRow;

pub struct PgConnector {
    url: String,
}

impl PgConnector {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl Connector for PgConnector {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn connect(&self) -> Result<Box<dyn StatementExecutor>, ExecutorError> {
        let (client, connection) = tokio_postgres::connect(&self.url, NoTls)
            .await
            .map_err(|e| ExecutorError::Connect(Box::new(e)))?;

        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::warn!(
                    event = "plancheck.pg.connection",
                    error = %e,
                    "postgres connection ended with error"
                );
            }
        });
        tracing::debug!(event = "plancheck.pg.connected", "connected to postgres");

        Ok(Box::new(PgExecutor {
            client: Some(client),
            driver: Some(driver),
        }))
    }
}

/// Runs statements over the simple query protocol, so any EXPLAIN variant
/// works and every column arrives as text in its natural order.
pub struct PgExecutor {
    client: Option<Client>,
    driver: Option<JoinHandle<()>>,
}

#[async_trait]
impl StatementExecutor for PgExecutor {
    async fn query(&mut self, sql: &str) -> Result<Vec<PlanRow>, ExecutorError> {
        let client = self.client.as_ref().ok_or(ExecutorError::Released)?;
        let messages = client
            .simple_query(sql)
            .await
            .map_err(|e| ExecutorError::Query(Box::new(e)))?;

        let mut rows = Vec::new();
        for msg in messages {
            if let SimpleQueryMessage::Row(row) = msg {
                let mut plan_row = PlanRow::new();
                for (idx, col) in row.columns().iter().enumerate() {
                    let value = row
                        .get(idx)
                        .map(|s| Value::String(s.to_string()))
                        .unwrap_or(Value::Null);
                    plan_row.push(col.name(), value);
                }
                rows.push(plan_row);
            }
        }
        Ok(rows)
    }

    async fn end(&mut self) -> Result<(), ExecutorError> {
        // Dropping the client closes the socket, which lets the driver task finish.
        drop(self.client.take());
        if let Some(driver) = self.driver.take() {
            driver
                .await
                .map_err(|e| ExecutorError::Release(Box::new(e)))?;
        }
        Ok(())
    }
}
