//! Scenario files
//!
//! A scenario is a named list of calculations stored as YAML:
//!
//! ```yaml
//! name: Household plan
//! calculations:
//!   - label: Mortgage
//!     calculation:
//!       type: loan_payment
//!       principal: 300000
//!       annual_rate_percent: 4.5
//!       years: 30
//! ```

use std::path::Path;

use fincalc_core::{CalcError, Calculation, CalculationOutput, evaluate_all};
use serde::{Deserialize, Serialize};

/// Error types for scenario loading
#[derive(Debug)]
pub enum ScenarioError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(msg) => write!(f, "IO error: {}", msg),
            ScenarioError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ScenarioError {}

/// A named batch of calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub calculations: Vec<ScenarioEntry>,
}

/// One calculation in a scenario, with an optional display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub calculation: Calculation,
}

impl ScenarioEntry {
    /// Label for display, falling back to the calculator name
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .unwrap_or_else(|| self.calculation.name())
    }
}

impl Scenario {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Read and parse a scenario file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScenarioError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            ScenarioError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Evaluate every entry, in file order
    pub fn evaluate(&self) -> Vec<Result<CalculationOutput, CalcError>> {
        let calculations: Vec<Calculation> = self
            .calculations
            .iter()
            .map(|entry| entry.calculation.clone())
            .collect();
        evaluate_all(&calculations)
    }
}
