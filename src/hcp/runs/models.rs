//! Run data models

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;
use crate::hcp::RelationshipData;

/// State transitions that can be requested for an existing run
///
/// Legality is decided by the service; nothing is checked locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    Apply,
    Discard,
    Cancel,
}

impl RunAction {
    /// Path segment under `/runs/:id/actions/`
    pub fn as_str(&self) -> &'static str {
        match self {
            RunAction::Apply => "apply",
            RunAction::Discard => "discard",
            RunAction::Cancel => "cancel",
        }
    }

    /// Past tense used in confirmation messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            RunAction::Apply => "applied",
            RunAction::Discard => "discarded",
            RunAction::Cancel => "cancelled",
        }
    }
}

impl std::fmt::Display for RunAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Run data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Run {
    pub id: String,
    pub attributes: RunAttributes,
    pub relationships: Option<RunRelationships>,
}

/// Run attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RunAttributes {
    pub status: String,
    #[serde(rename = "created-at")]
    pub created_at: Option<String>,
}

/// Run relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RunRelationships {
    pub plan: Option<RelationshipData>,
    pub apply: Option<RelationshipData>,
}

impl TfeResource for Run {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        // Runs don't have names, use ID
        &self.id
    }
}

impl Run {
    /// Get the status of the run
    pub fn status(&self) -> &str {
        &self.attributes.status
    }

    /// Get created_at timestamp, defaulting to empty string if not available
    pub fn created_at(&self) -> &str {
        self.attributes.created_at.as_deref().unwrap_or("")
    }

    /// ID of the plan sub-resource
    pub fn plan_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.plan.as_ref())
            .and_then(|p| p.id())
    }

    /// ID of the apply sub-resource
    pub fn apply_id(&self) -> Option<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.apply.as_ref())
            .and_then(|a| a.id())
    }
}

/// Minimal run projection printed by `run list`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub id: String,
    pub status: String,
    pub created_at: String,
}

impl From<&Run> for RunSummary {
    fn from(run: &Run) -> Self {
        Self {
            id: run.id.clone(),
            status: run.status().to_string(),
            created_at: normalize_timestamp(run.created_at()),
        }
    }
}

/// Render API timestamps as UTC RFC 3339; unparseable values pass through
fn normalize_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| {
            t.with_timezone(&Utc)
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        })
        .unwrap_or_else(|_| raw.to_string())
}

/// Plan data from TFE API (GET /plans/:id)
#[derive(Deserialize, Debug, Clone)]
pub struct Plan {
    pub id: String,
    pub attributes: PlanAttributes,
}

/// Plan attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct PlanAttributes {
    pub status: String,
    #[serde(rename = "log-read-url")]
    pub log_read_url: Option<String>,
}

impl Plan {
    /// Get plan status
    pub fn status(&self) -> &str {
        &self.attributes.status
    }

    /// Get log read URL (temporary, expires in 1 minute)
    pub fn log_read_url(&self) -> Option<&str> {
        self.attributes.log_read_url.as_deref()
    }
}

/// Apply data from TFE API (GET /applies/:id)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Apply {
    pub id: String,
    pub attributes: ApplyAttributes,
}

/// Apply attributes from TFE API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApplyAttributes {
    pub status: String,
    #[serde(rename = "resource-additions")]
    pub resource_additions: Option<i32>,
    #[serde(rename = "resource-changes")]
    pub resource_changes: Option<i32>,
    #[serde(rename = "resource-destructions")]
    pub resource_destructions: Option<i32>,
    #[serde(rename = "resource-imports")]
    pub resource_imports: Option<i32>,
    #[serde(rename = "log-read-url")]
    pub log_read_url: Option<String>,
    #[serde(rename = "status-timestamps")]
    pub status_timestamps: Option<serde_json::Value>,
}

impl Apply {
    /// Get apply status
    pub fn status(&self) -> &str {
        &self.attributes.status
    }

    /// Get log read URL (temporary, expires in 1 minute)
    pub fn log_read_url(&self) -> Option<&str> {
        self.attributes.log_read_url.as_deref()
    }
}
