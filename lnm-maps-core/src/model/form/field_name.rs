use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the two inputs of the route form
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FormFieldName {
    Source,
    Destination,
}

impl FormFieldName {
    pub const ALL: [FormFieldName; 2] = [FormFieldName::Source, FormFieldName::Destination];

    /// human-readable label used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            FormFieldName::Source => "Source",
            FormFieldName::Destination => "Destination",
        }
    }

    /// input placeholder text
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormFieldName::Source => "Search Starting Point...",
            FormFieldName::Destination => "Search Destination...",
        }
    }
}

impl Display for FormFieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FormFieldName::Source => "source",
            FormFieldName::Destination => "destination",
        };
        write!(f, "{s}")
    }
}
