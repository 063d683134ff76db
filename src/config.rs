//! Declarative session description
//!
//! A `SessionSpec` lists the resolved parameters of one method under test
//! together with the constraint chosen for each. It is what an editor
//! integration hands over once the user has finished picking constraints.
//!
//! ```yaml
//! parameters:
//!   - name: age
//!     type: int
//!     constraint: "<="
//!     threshold: "10"
//!   - name: nickname_length
//!     type: short
//! ```

use crate::constraint::NumericConstraint;
use crate::error::{Error, Result};
use crate::numeric::{FloatKind, IntegerKind, NumericKind};
use crate::types::ParamType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// All parameters of one generation session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(
    title = "Boilerplate Session",
    description = "Resolved parameters and their constraints"
)]
pub struct SessionSpec {
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

/// One parameter and its constraint selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParameterSpec {
    pub name: String,

    /// Source spelling of the declared type (`int`, `Integer`, `double`, ...)
    #[serde(rename = "type")]
    pub typ: String,

    #[serde(default)]
    pub constraint: NumericConstraint,

    /// Raw threshold text; required unless the constraint is `any`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
}

impl SessionSpec {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_norway::from_str(yaml).map_err(|e| Error::SpecParse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::SpecParse(e.to_string()))
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SpecParse(e.to_string()))
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Err(Error::SpecParse(format!(
                "Unsupported session file: {}",
                path.display()
            ))),
        }
    }

    /// JSON schema for session files
    pub fn json_schema() -> Result<String> {
        Ok(serde_json::to_string_pretty(&schemars::schema_for!(SessionSpec))?)
    }

    /// Problems that would stop generation, one message each
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for param in &self.parameters {
            if param.name.is_empty() {
                errors.push("Parameter name is required".into());
                continue;
            }
            if !seen.insert(param.name.as_str()) {
                errors.push(format!("Duplicate parameter name: {}", param.name));
            }
            let param_type = ParamType::resolve(&param.typ);
            if param_type.is_none() {
                errors.push(format!(
                    "Parameter {} has unsupported type: {}",
                    param.name, param.typ
                ));
            }
            if !param.constraint.requires_threshold() {
                continue;
            }
            match param.threshold.as_deref().map(str::trim) {
                None | Some("") => errors.push(format!(
                    "Parameter {} uses constraint {} but has no threshold",
                    param.name, param.constraint
                )),
                Some(text) => {
                    if let Some(t) = param_type.filter(|t| !threshold_parses(*t, text)) {
                        errors.push(format!(
                            "Parameter {} has unusable threshold {} for {}",
                            param.name, text, t
                        ));
                    }
                }
            }
        }

        errors
    }
}

/// Same parse the rule applies to its threshold
fn threshold_parses(param_type: ParamType, text: &str) -> bool {
    if let Some(kind) = IntegerKind::from_param_type(param_type) {
        kind.parse(text).is_some()
    } else if let Some(kind) = FloatKind::from_param_type(param_type) {
        kind.parse(text).is_some()
    } else {
        false
    }
}
