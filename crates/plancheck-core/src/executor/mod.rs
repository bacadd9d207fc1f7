use async_trait::async_trait;

use crate::errors::ExecutorError;
use crate::model::PlanRow;

pub mod postgres;
pub mod scripted;

pub use postgres::PgConnector;
pub use scripted::ScriptedConnector;

/// An open database connection. Owned by one run; `end` is called once.
#[async_trait]
pub trait StatementExecutor: Send {
    async fn query(&mut self, sql: &str) -> Result<Vec<PlanRow>, ExecutorError>;

    async fn end(&mut self) -> Result<(), ExecutorError>;
}

#[async_trait]
pub trait Connector: Send + Sync {
    fn name(&self) -> &'static str;

    async fn connect(&self) -> Result<Box<dyn StatementExecutor>, ExecutorError>;
}
