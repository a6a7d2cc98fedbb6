use serde::{Deserialize, Serialize};

/// constraints on a single text input. rules are plain values so any
/// form can compose them into its own schema.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// label quoted in error messages
    pub label: String,
    /// when false, the empty string fails validation
    pub allow_empty: bool,
}

impl FieldRule {
    /// a rule requiring a non-empty string
    pub fn string(label: &str) -> FieldRule {
        FieldRule {
            label: label.to_string(),
            allow_empty: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ValidationError {
    Empty { label: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Empty { label } => write!(f, "\"{label}\" is not allowed to be empty"),
        }
    }
}

/// checks a single input value against a rule.
pub fn validate_field(rule: &FieldRule, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() && !rule.allow_empty {
        Err(ValidationError::Empty {
            label: rule.label.clone(),
        })
    } else {
        Ok(())
    }
}
