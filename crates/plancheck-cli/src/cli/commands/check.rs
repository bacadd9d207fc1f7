use anyhow::Context;
use plancheck_core::config::DatabaseConfig;
use plancheck_core::report::{console, json};
use plancheck_core::{Analyzer, Outcome};

use super::exit_codes;
use crate::cli::args::CheckArgs;

pub async fn run(args: CheckArgs) -> anyhow::Result<i32> {
    let analyzer = Analyzer::from_config(DatabaseConfig::from_env());

    // Without a database the script is never executed, so it is not read either.
    let script = if analyzer.is_configured() {
        tokio::fs::read_to_string(&args.script)
            .await
            .with_context(|| format!("failed to read script {}", args.script.display()))?
    } else {
        String::new()
    };

    let outcome = analyzer.run(&script).await?;

    if args.format == "json" {
        if let Some(verdict) = outcome.verdict() {
            console::print_diagnostics(verdict);
        }
        println!("{}", serde_json::to_string_pretty(&json::outcome_json(&outcome))?);
    } else {
        console::print_outcome(&outcome);
    }

    Ok(exit_code(&outcome))
}

fn exit_code(outcome: &Outcome) -> i32 {
    if outcome.is_failure() {
        exit_codes::FAILED
    } else {
        exit_codes::OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plancheck_core::{AnalysisVerdict, PlanRow, StatementResult};
    use serde_json::json;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Outcome::skipped("no db")), exit_codes::OK);
        assert_eq!(
            exit_code(&Outcome::Completed(AnalysisVerdict::default())),
            exit_codes::OK
        );
        let flagged = StatementResult::new(
            1,
            "EXPLAIN SELECT 1".into(),
            vec![PlanRow::new().with("QUERY PLAN", json!("Seq Scan on t"))],
        );
        assert_eq!(
            exit_code(&Outcome::Completed(AnalysisVerdict::new(vec![flagged]))),
            exit_codes::FAILED
        );
    }
}
