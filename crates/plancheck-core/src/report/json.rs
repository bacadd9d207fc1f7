use serde_json::{json, Value};

use crate::model::Outcome;

pub const SCHEMA_VERSION: u32 = 1;

pub fn outcome_json(outcome: &Outcome) -> Value {
    let mut doc = json!({
        "schema_version": SCHEMA_VERSION,
        "status": outcome.status(),
        "generated_at": chrono::Utc::now().to_rfc3339(),
    });
    match outcome {
        Outcome::Skipped { reason } => {
            doc["reason"] = json!(reason);
        }
        Outcome::Completed(verdict) => {
            doc["statements"] = json!(verdict.statements);
            doc["summary"] = json!({
                "statement_count": verdict.statements.len(),
                "flagged_count": verdict.flagged_count(),
            });
        }
    }
    doc
}
