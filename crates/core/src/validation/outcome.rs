//! Validation outcome types.

use serde::{Deserialize, Serialize};

use super::messages::default_error_message;

/// Tag identifying which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    ShippingRestricted,
    InvalidZip,
    InvalidPostalCode,
    UsernameTaken,
}

impl ErrorKind {
    /// Wire tag, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ShippingRestricted => "shippingRestricted",
            ErrorKind::InvalidZip => "invalidZip",
            ErrorKind::InvalidPostalCode => "invalidPostalCode",
            ErrorKind::UsernameTaken => "usernameTaken",
        }
    }

    /// User-facing message attached when this check fails.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::ShippingRestricted => "Sorry, we don't ship to this state yet",
            ErrorKind::InvalidZip => {
                "Please enter a valid US ZIP code (e.g., 12345 or 12345-6789)"
            }
            ErrorKind::InvalidPostalCode => {
                "Please enter a valid Canadian postal code (e.g., A1A 1A1)"
            }
            ErrorKind::UsernameTaken => "This username is already taken",
        }
    }
}

/// A single failed check with its display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }

    /// Message to show next to `field_name`, falling back to the generic text
    /// for this kind when the message is blank.
    pub fn display_message(&self, field_name: &str) -> String {
        if self.message.is_empty() {
            default_error_message(self.kind.as_str(), field_name)
        } else {
            self.message.clone()
        }
    }
}

/// Result of evaluating one rule set against one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationError),
}

impl ValidationOutcome {
    pub fn invalid(kind: ErrorKind) -> Self {
        ValidationOutcome::Invalid(ValidationError::new(kind))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(err) => Some(err),
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.error().map(|err| err.kind)
    }
}
