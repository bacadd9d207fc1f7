//! Sequential scan detection over rendered plan text.
//!
//! This is a substring heuristic, not a plan parser: any occurrence of
//! "Seq Scan" in any letter case flags the statement, including occurrences
//! inside relation names or filter text.

use crate::model::PlanRow;

pub const SEQ_SCAN: &str = "Seq Scan";

/// One line per row, values joined by single spaces.
pub fn render_plan_text(rows: &[PlanRow]) -> String {
    rows.iter()
        .map(PlanRow::render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn contains_seq_scan(plan_text: &str) -> bool {
    plan_text
        .to_lowercase()
        .contains(&SEQ_SCAN.to_lowercase())
}
