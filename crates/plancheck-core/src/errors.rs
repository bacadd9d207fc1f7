use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures reported by a statement executor or its connector.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("connect failed")]
    Connect(#[source] BoxError),
    #[error("query failed")]
    Query(#[source] BoxError),
    #[error("release failed")]
    Release(#[source] BoxError),
    #[error("connection already released")]
    Released,
}

impl ExecutorError {
    pub fn connect(msg: impl Into<String>) -> Self {
        let msg: String = msg.into();
        ExecutorError::Connect(msg.into())
    }

    pub fn query(msg: impl Into<String>) -> Self {
        let msg: String = msg.into();
        ExecutorError::Query(msg.into())
    }
}

/// Hard failures that abort a plan check run. A detected sequential scan is
/// not one of these; it is a completed run with a failing verdict.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("could not connect to database")]
    Connect(#[source] ExecutorError),

    #[error("statement #{index} failed to execute: {}", preview(.sql))]
    Statement {
        index: usize,
        sql: String,
        #[source]
        source: ExecutorError,
    },
}

pub(crate) fn preview(sql: &str) -> String {
    let flat = sql.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > 80 {
        let head: String = flat.chars().take(80).collect();
        format!("{}...", head)
    } else {
        flat
    }
}
