//! Shipping rule evaluator — pure logic, no I/O.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. US address in a restricted state.
//! 2. US address with a malformed ZIP code.
//! 3. Canadian address with a malformed postal code.
//!
//! An empty ZIP / postal code is never a format error, and an unset country
//! skips every check.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::outcome::{ErrorKind, ValidationOutcome};
use crate::address::{Address, Country};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// States we do not ship to (Alaska, Hawaii).
pub const DEFAULT_RESTRICTED_STATES: [&str; 2] = ["AK", "HI"];

/// Five digits, optionally followed by a hyphen and four more. ASCII digits only.
pub const DEFAULT_US_ZIP_PATTERN: &str = r"^[0-9]{5}(-[0-9]{4})?$";

/// Letter-digit-letter, optional single space, digit-letter-digit. Either case.
pub const DEFAULT_CA_POSTAL_PATTERN: &str = r"^[A-Za-z][0-9][A-Za-z] ?[0-9][A-Za-z][0-9]$";

static DEFAULT_RULES: LazyLock<ShippingRules> = LazyLock::new(|| {
    ShippingRuleConfig::default()
        .compile()
        .expect("valid default shipping patterns")
});

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunable data behind the shipping checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRuleConfig {
    /// US state codes that fail the restriction check. Compared case-sensitively.
    pub restricted_states: Vec<String>,
    pub us_zip_pattern: String,
    pub ca_postal_pattern: String,
}

impl Default for ShippingRuleConfig {
    fn default() -> Self {
        Self {
            restricted_states: DEFAULT_RESTRICTED_STATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            us_zip_pattern: DEFAULT_US_ZIP_PATTERN.to_string(),
            ca_postal_pattern: DEFAULT_CA_POSTAL_PATTERN.to_string(),
        }
    }
}

impl ShippingRuleConfig {
    /// Compile the postal patterns into a ready-to-use rule set.
    pub fn compile(self) -> Result<ShippingRules, CoreError> {
        let us_zip = compile_pattern("us_zip_pattern", &self.us_zip_pattern)?;
        let ca_postal = compile_pattern("ca_postal_pattern", &self.ca_postal_pattern)?;
        Ok(ShippingRules {
            config: self,
            us_zip,
            ca_postal,
        })
    }
}

fn compile_pattern(name: &str, pattern: &str) -> Result<Regex, CoreError> {
    Regex::new(pattern).map_err(|e| CoreError::Config(format!("{name} is not a valid regex: {e}")))
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Compiled shipping rules. Immutable, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct ShippingRules {
    config: ShippingRuleConfig,
    us_zip: Regex,
    ca_postal: Regex,
}

impl ShippingRules {
    /// The configuration these rules were compiled from.
    pub fn config(&self) -> &ShippingRuleConfig {
        &self.config
    }

    /// Evaluate the address, returning at most one error.
    pub fn evaluate(&self, address: &Address) -> ValidationOutcome {
        match address.country {
            Some(Country::Us) => {
                if self.is_restricted(&address.state) {
                    return ValidationOutcome::invalid(ErrorKind::ShippingRestricted);
                }
                if !address.zip_code.is_empty() && !self.us_zip.is_match(&address.zip_code) {
                    return ValidationOutcome::invalid(ErrorKind::InvalidZip);
                }
            }
            Some(Country::Ca) => {
                if !address.zip_code.is_empty() && !self.ca_postal.is_match(&address.zip_code) {
                    return ValidationOutcome::invalid(ErrorKind::InvalidPostalCode);
                }
            }
            None => {}
        }
        ValidationOutcome::Valid
    }

    fn is_restricted(&self, state: &str) -> bool {
        self.config.restricted_states.iter().any(|s| s == state)
    }
}

/// Evaluate an address against the default rule set.
pub fn evaluate(address: &Address) -> ValidationOutcome {
    DEFAULT_RULES.evaluate(address)
}

/// The default rule set, compiled once per process.
pub fn default_rules() -> &'static ShippingRules {
    &DEFAULT_RULES
}
