//! Raw form input: keystroke formatters and submit-time validation.

use serde::{Deserialize, Serialize};

use super::entity::FormDataEntity;
use super::option::FormOption;
use crate::domain::foundation::ValidationError;

const EXTRA_LETTERS: &str = "áéíóúüñÑàèìòùÀÈÌÒÙâêîôûÂÊÎÔÛäëïöüÄËÏÖÜçÇ";

/// Drops everything except ASCII letters and digits, the accented letters
/// used in Spanish and neighbouring languages, and whitespace.
pub fn only_letters_and_numbers(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || EXTRA_LETTERS.contains(*c))
        .collect()
}

/// Drops everything except ASCII digits.
pub fn only_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Values as they sit in the form fields, all strings.
///
/// Also used to pre-fill the form with the last saved entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    #[serde(default)]
    pub text_value: String,
    #[serde(default)]
    pub numeric_value: Option<String>,
    #[serde(default)]
    pub option_value: String,
}

impl Default for FormSubmission {
    fn default() -> Self {
        Self {
            text_value: String::new(),
            numeric_value: Some(String::new()),
            option_value: FormOption::default().label().to_string(),
        }
    }
}

impl From<&FormDataEntity> for FormSubmission {
    fn from(entity: &FormDataEntity) -> Self {
        Self {
            text_value: entity.text_value.clone(),
            numeric_value: Some(entity.numeric_value.to_string()),
            option_value: entity.option_value.clone(),
        }
    }
}

impl FormSubmission {
    /// Validates every field and builds the entity.
    ///
    /// All field errors are reported together. An empty numeric field
    /// becomes `0`.
    pub fn validate(&self) -> Result<FormDataEntity, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let text_value = only_letters_and_numbers(&self.text_value);
        if text_value.is_empty() {
            errors.push(ValidationError::required("textValue"));
        }

        let numeric_value = match self.numeric_value.as_deref().map(str::trim) {
            None | Some("") => Some(0),
            Some(raw) if !raw.chars().all(|c| c.is_ascii_digit()) => {
                errors.push(ValidationError::not_numeric("numericValue"));
                None
            }
            Some(raw) => match raw.parse::<u64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    errors.push(ValidationError::out_of_range("numericValue"));
                    None
                }
            },
        };

        if self.option_value.is_empty() {
            errors.push(ValidationError::required("optionValue"));
        }

        match numeric_value {
            Some(numeric_value) if errors.is_empty() => Ok(FormDataEntity {
                text_value,
                numeric_value,
                option_value: self.option_value.clone(),
            }),
            _ => Err(errors),
        }
    }
}
