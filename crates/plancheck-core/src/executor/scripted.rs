//! In-memory connector with canned plans, for exercising the analyzer
//! without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use super::{Connector, StatementExecutor};
use crate::errors::ExecutorError;
use crate::model::PlanRow;

#[derive(Clone)]
enum Reply {
    Rows(Vec<PlanRow>),
    Error(String),
}

#[derive(Debug, Default)]
pub struct ScriptStats {
    connects: AtomicUsize,
    releases: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl ScriptStats {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

/// Statements are matched by exact text. Unknown statements return an empty plan.
#[derive(Clone, Default)]
pub struct ScriptedConnector {
    replies: HashMap<String, Reply>,
    connect_error: Option<String>,
    stats: Arc<ScriptStats>,
}

impl ScriptedConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, sql: &str, rows: Vec<PlanRow>) -> Self {
        self.replies.insert(sql.to_string(), Reply::Rows(rows));
        self
    }

    /// Shorthand for a one-column `QUERY PLAN` result, one row per line.
    pub fn plan(self, sql: &str, plan: &str) -> Self {
        let rows = plan
            .lines()
            .map(|l| PlanRow::new().with("QUERY PLAN", json!(l)))
            .collect();
        self.rows(sql, rows)
    }

    pub fn error(mut self, sql: &str, message: &str) -> Self {
        self.replies
            .insert(sql.to_string(), Reply::Error(message.to_string()));
        self
    }

    pub fn refuse_connect(mut self, message: &str) -> Self {
        self.connect_error = Some(message.to_string());
        self
    }

    pub fn stats(&self) -> Arc<ScriptStats> {
        self.stats.clone()
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn connect(&self) -> Result<Box<dyn StatementExecutor>, ExecutorError> {
        if let Some(msg) = &self.connect_error {
            return Err(ExecutorError::connect(msg.clone()));
        }
        self.stats.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedExecutor {
            replies: self.replies.clone(),
            stats: self.stats.clone(),
            open: true,
        }))
    }
}

struct ScriptedExecutor {
    replies: HashMap<String, Reply>,
    stats: Arc<ScriptStats>,
    open: bool,
}

#[async_trait]
impl StatementExecutor for ScriptedExecutor {
    async fn query(&mut self, sql: &str) -> Result<Vec<PlanRow>, ExecutorError> {
        if !self.open {
            return Err(ExecutorError::Released);
        }
        if let Ok(mut q) = self.stats.queries.lock() {
            q.push(sql.to_string());
        }
        match self.replies.get(sql) {
            Some(Reply::Rows(rows)) => Ok(rows.clone()),
            Some(Reply::Error(msg)) => Err(ExecutorError::query(msg.clone())),
            None => Ok(Vec::new()),
        }
    }

    async fn end(&mut self) -> Result<(), ExecutorError> {
        self.open = false;
        self.stats.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
