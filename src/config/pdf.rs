//! PDF backend selection

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::PdfBackendKind;

/// Which generator the composition root wires in
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PdfConfig {
    /// `markup` or `document_model`
    #[serde(default)]
    pub backend: PdfBackendKind,

    /// Path to `wkhtmltopdf`; PATH lookup when unset
    pub converter_path: Option<String>,
}

impl PdfConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(self.converter_path.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(ValidationError::EmptyConverterPath);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_markup_backend() {
        let config = PdfConfig::default();
        assert_eq!(config.backend, PdfBackendKind::Markup);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_converter_path_is_rejected() {
        let config = PdfConfig {
            converter_path: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
