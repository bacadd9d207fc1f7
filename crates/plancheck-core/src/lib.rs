pub mod analyzer;
pub mod config;
pub mod detect;
pub mod errors;
pub mod executor;
pub mod model;
pub mod report;
pub mod script;

pub use analyzer::Analyzer;
pub use errors::{AnalyzeError, ExecutorError};
pub use model::{AnalysisVerdict, Outcome, PlanRow, StatementResult};
