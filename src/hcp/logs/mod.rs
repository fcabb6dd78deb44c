//! Plan and apply log retrieval
//!
//! A run's plan and apply phases each expose a temporary `log-read-url`.
//! The log is streamed from that URL and accumulated into one string.

mod reader;

use log::debug;
use serde::Serialize;

use crate::error::{Result, TfeError};
use crate::hcp::runs::Run;
use crate::hcp::TfeClient;

pub use reader::{drain_log, HttpLogReader, LogReader};

/// Which phase of a run to read logs from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogPhase {
    Plan,
    Apply,
}

impl std::fmt::Display for LogPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogPhase::Plan => write!(f, "plan"),
            LogPhase::Apply => write!(f, "apply"),
        }
    }
}

impl std::str::FromStr for LogPhase {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "plan" => Ok(LogPhase::Plan),
            "apply" => Ok(LogPhase::Apply),
            _ => Err(format!("Unknown log phase: {}", s)),
        }
    }
}

/// A run ID paired with the full text of one of its log streams
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LogBundle {
    pub id: String,
    pub logs: String,
}

impl LogBundle {
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl TfeClient {
    /// Fetch the complete log of one phase of a run
    pub async fn fetch_run_log(&self, run: &Run, phase: LogPhase) -> Result<String> {
        let log_read_url = match phase {
            LogPhase::Plan => {
                let plan_id = run
                    .plan_id()
                    .ok_or_else(|| TfeError::NotFound(format!("plan of run '{}'", run.id)))?;
                self.get_plan(plan_id).await?.log_read_url().map(str::to_string)
            }
            LogPhase::Apply => {
                let apply_id = run
                    .apply_id()
                    .ok_or_else(|| TfeError::NotFound(format!("apply of run '{}'", run.id)))?;
                self.get_apply(apply_id).await?.log_read_url().map(str::to_string)
            }
        };

        let log_read_url = log_read_url
            .ok_or_else(|| TfeError::NotFound(format!("{} log of run '{}'", phase, run.id)))?;

        debug!("Reading {} log for run '{}'", phase, run.id);

        let mut reader = self.open_log(&log_read_url).await?;
        drain_log(&mut reader).await
    }
}
