use serde::Serialize;
use serde_json::Value;

use crate::detect::{contains_seq_scan, render_plan_text};

/// One result row, columns in the order the database returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanRow {
    columns: Vec<(String, Value)>,
}

impl PlanRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push((column.into(), value));
    }

    pub fn columns(&self) -> &[(String, Value)] {
        &self.columns
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| v)
    }

    /// Values joined by single spaces. Strings are verbatim, null is empty.
    pub fn render_line(&self) -> String {
        self.columns
            .iter()
            .map(|(_, v)| match v {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<(String, Value)>> for PlanRow {
    fn from(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementResult {
    /// 1-based position in the script.
    pub index: usize,
    pub sql: String,
    #[serde(skip)]
    pub rows: Vec<PlanRow>,
    pub flagged: bool,
}

impl StatementResult {
    pub fn new(index: usize, sql: String, rows: Vec<PlanRow>) -> Self {
        let flagged = contains_seq_scan(&render_plan_text(&rows));
        Self {
            index,
            sql,
            rows,
            flagged,
        }
    }

    pub fn plan_text(&self) -> String {
        render_plan_text(&self.rows)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisVerdict {
    pub statements: Vec<StatementResult>,
}

impl AnalysisVerdict {
    pub fn new(statements: Vec<StatementResult>) -> Self {
        Self { statements }
    }

    pub fn flagged(&self) -> impl Iterator<Item = &StatementResult> {
        self.statements.iter().filter(|s| s.flagged)
    }

    pub fn flagged_count(&self) -> usize {
        self.flagged().count()
    }

    pub fn failed(&self) -> bool {
        self.statements.iter().any(|s| s.flagged)
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    /// No database configured. Neither a pass nor a failure.
    Skipped { reason: String },
    Completed(AnalysisVerdict),
}

impl Outcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Outcome::Skipped {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Skipped { .. } => "skipped",
            Outcome::Completed(v) if v.failed() => "fail",
            Outcome::Completed(_) => "pass",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Completed(v) if v.failed())
    }

    pub fn verdict(&self) -> Option<&AnalysisVerdict> {
        match self {
            Outcome::Completed(v) => Some(v),
            Outcome::Skipped { .. } => None,
        }
    }
}
