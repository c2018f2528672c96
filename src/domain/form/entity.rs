//! Form data entity and the generated-file descriptor.

use serde::{Deserialize, Serialize};

/// The three values captured by the form.
///
/// Always read, stored and rendered as a whole; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDataEntity {
    pub text_value: String,
    pub numeric_value: u64,
    pub option_value: String,
}

impl FormDataEntity {
    pub fn new(
        text_value: impl Into<String>,
        numeric_value: u64,
        option_value: impl Into<String>,
    ) -> Self {
        Self {
            text_value: text_value.into(),
            numeric_value,
            option_value: option_value.into(),
        }
    }
}

/// A PDF produced by one generation call.
///
/// `file_path` points at a file that existed on the local filesystem when
/// the descriptor was returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPdf {
    pub file_path: String,
    pub file_name: String,
}

impl GeneratedPdf {
    pub fn new(file_path: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            file_name: file_name.into(),
        }
    }
}
