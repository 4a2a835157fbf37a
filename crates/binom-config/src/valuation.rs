//! Valuation configuration: a model, a contract and what to report.
//!
//! Files are read as JSON or TOML depending on their extension:
//!
//! ```toml
//! name = "two-period-call"
//! hedge = true
//!
//! [model]
//! steps = 2
//! up = 1.1
//! down = 0.9
//! spot = 100.0
//! rate = 0.05
//!
//! [contract]
//! type = "call"
//! strike = 100.0
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use binom_core::Contract;
use binom_models::{BinomialModel, ModelParameters};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// A complete valuation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Configuration name/identifier.
    pub name: String,

    /// Description of this configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Market model parameters.
    pub model: ModelParameters,

    /// Contingent claim to value.
    pub contract: Contract,

    /// Whether to report hedging portfolios.
    #[serde(default)]
    pub hedge: bool,
}

impl ValuationConfig {
    /// Creates a configuration without description that does not hedge.
    pub fn new(name: impl Into<String>, model: ModelParameters, contract: Contract) -> Self {
        Self {
            name: name.into(),
            description: None,
            model,
            contract,
            hedge: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Enables or disables hedging output.
    #[must_use]
    pub fn with_hedge(mut self, hedge: bool) -> Self {
        self.hedge = hedge;
        self
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let contents = fs::read_to_string(path)?;

        let config = match extension.as_str() {
            "json" => Self::from_json_str(&contents)?,
            "toml" => Self::from_toml_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat { extension }),
        };

        debug!("Loaded valuation config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the pricing engine for this configuration.
    pub fn build_model(&self) -> ConfigResult<BinomialModel> {
        self.validate_or_error()?;
        Ok(BinomialModel::from_parameters(self.model)?)
    }
}

impl Validate for ValuationConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        for (field, message) in self.model.violations() {
            errors.push(ValidationError::new(format!("model.{field}"), message));
        }

        if !self.contract.has_finite_strike() {
            errors.push(ValidationError::new(
                "contract.strike",
                format!("Strike must be finite, got {}", self.contract.strike()),
            ));
        }

        errors
    }
}
