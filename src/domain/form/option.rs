//! The fixed set of choices offered for the option field.

use serde::{Deserialize, Serialize};

/// One of the three selectable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FormOption {
    #[default]
    #[serde(rename = "Opción 1")]
    First,
    #[serde(rename = "Opción 2")]
    Second,
    #[serde(rename = "Opción 3")]
    Third,
}

impl FormOption {
    pub const ALL: [FormOption; 3] = [FormOption::First, FormOption::Second, FormOption::Third];

    /// Label shown in the dropdown and stored in the entity.
    pub fn label(&self) -> &'static str {
        match self {
            FormOption::First => "Opción 1",
            FormOption::Second => "Opción 2",
            FormOption::Third => "Opción 3",
        }
    }

    /// All labels in display order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(FormOption::label).collect()
    }
}

impl std::fmt::Display for FormOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
