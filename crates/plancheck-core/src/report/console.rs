use std::io::{self, Write};

use crate::errors::preview;
use crate::model::{AnalysisVerdict, Outcome};

pub fn print_outcome(outcome: &Outcome) {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    // Nothing sensible to do if the terminal is gone.
    let _ = render_outcome(outcome, &mut out, &mut err);
}

pub fn print_diagnostics(verdict: &AnalysisVerdict) {
    let _ = render_diagnostics(verdict, &mut io::stderr().lock());
}

/// Flagged statements and failures go to `err`; a pass summary goes to `out`.
pub fn render_outcome(
    outcome: &Outcome,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match outcome {
        Outcome::Skipped { reason } => {
            writeln!(err, "⏭️  plan check skipped: {}", reason)?;
        }
        Outcome::Completed(verdict) => {
            render_diagnostics(verdict, err)?;
            let total = verdict.statements.len();
            if verdict.failed() {
                writeln!(
                    err,
                    "❌ plan check failed: {} of {} statement{} use a sequential scan",
                    verdict.flagged_count(),
                    total,
                    if total != 1 { "s" } else { "" }
                )?;
            } else {
                writeln!(
                    out,
                    "✅ plan check passed: {} statement{}, no sequential scans",
                    total,
                    if total != 1 { "s" } else { "" }
                )?;
            }
        }
    }
    Ok(())
}

pub fn render_diagnostics(verdict: &AnalysisVerdict, err: &mut impl Write) -> io::Result<()> {
    for s in verdict.flagged() {
        writeln!(err, "⚠️  statement #{} uses a sequential scan", s.index)?;
        writeln!(err, "      {}", preview(&s.sql))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PlanRow, StatementResult};
    use serde_json::json;

    fn stmt(index: usize, sql: &str, plan: &str) -> StatementResult {
        StatementResult::new(
            index,
            sql.into(),
            vec![PlanRow::new().with("QUERY PLAN", json!(plan))],
        )
    }

    fn render(outcome: &Outcome) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        render_outcome(outcome, &mut out, &mut err).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_pass_goes_to_stdout() {
        let outcome = Outcome::Completed(AnalysisVerdict::new(vec![
            stmt(1, "EXPLAIN a", "Index Scan"),
            stmt(2, "EXPLAIN b", "Index Only Scan"),
        ]));
        let (out, err) = render(&outcome);
        assert_eq!(out, "✅ plan check passed: 2 statements, no sequential scans\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_fail_lists_each_flagged_statement() {
        let outcome = Outcome::Completed(AnalysisVerdict::new(vec![
            stmt(1, "EXPLAIN a", "Seq Scan on a"),
            stmt(2, "EXPLAIN b", "Index Scan on b"),
            stmt(3, "EXPLAIN\n  c", "seq scan on c"),
        ]));
        let (out, err) = render(&outcome);
        assert!(out.is_empty());
        assert!(err.contains("statement #1 uses a sequential scan"));
        assert!(!err.contains("statement #2"));
        assert!(err.contains("statement #3 uses a sequential scan"));
        assert!(err.contains("      EXPLAIN c\n"));
        assert!(err.ends_with("❌ plan check failed: 2 of 3 statements use a sequential scan\n"));
    }

    #[test]
    fn test_skip_goes_to_stderr() {
        let (out, err) = render(&Outcome::skipped("no database configured"));
        assert!(out.is_empty());
        assert!(err.contains("skipped: no database configured"));
    }
}
