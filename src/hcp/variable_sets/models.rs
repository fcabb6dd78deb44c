//! Variable set data models

use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;

/// Variable set data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableSet {
    pub id: String,
    pub attributes: VariableSetAttributes,
}

/// Variable set attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableSetAttributes {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub global: bool,
    #[serde(rename = "workspace-count")]
    pub workspace_count: Option<u32>,
    #[serde(rename = "var-count")]
    pub var_count: Option<u32>,
}

impl TfeResource for VariableSet {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

/// Variable set record printed after an assignment
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VariableSetSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub global: bool,
    pub workspace_count: u32,
    pub var_count: u32,
}

impl From<&VariableSet> for VariableSetSummary {
    fn from(varset: &VariableSet) -> Self {
        Self {
            id: varset.id.clone(),
            name: varset.attributes.name.clone(),
            description: varset.attributes.description.clone().unwrap_or_default(),
            global: varset.attributes.global,
            workspace_count: varset.attributes.workspace_count.unwrap_or(0),
            var_count: varset.attributes.var_count.unwrap_or(0),
        }
    }
}
