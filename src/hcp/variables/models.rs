//! Variable data models

use log::debug;
use serde::{Deserialize, Serialize};

use crate::hcp::traits::TfeResource;

/// Where a variable is exposed during a run
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    /// Terraform input variable
    Terraform,
    /// Shell environment variable
    Env,
}

impl std::fmt::Display for VariableCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableCategory::Terraform => write!(f, "terraform"),
            VariableCategory::Env => write!(f, "env"),
        }
    }
}

/// Attributes of a variable about to be created
///
/// Built through [`NewVariable::new`], which never lets an environment
/// variable carry `hcl = true`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewVariable {
    pub key: String,
    pub value: String,
    pub description: String,
    pub hcl: bool,
    pub sensitive: bool,
    pub category: VariableCategory,
}

impl NewVariable {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
        hcl: bool,
        sensitive: bool,
        category: VariableCategory,
    ) -> Self {
        let key = key.into();
        let hcl = match category {
            VariableCategory::Env if hcl => {
                debug!("Environment variable '{}' cannot be HCL, storing as string", key);
                false
            }
            _ => hcl,
        };

        Self {
            key,
            value: value.into(),
            description: description.into(),
            hcl,
            sensitive,
            category,
        }
    }
}

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: VariableAttributes,
}

/// Variable attributes from TFE API
///
/// `value` is null for sensitive variables.
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,
    pub value: Option<String>,
    pub description: Option<String>,
    pub category: VariableCategory,
    #[serde(default)]
    pub hcl: bool,
    #[serde(default)]
    pub sensitive: bool,
}

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}
