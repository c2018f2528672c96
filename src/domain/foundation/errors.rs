//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating user-entered form fields.
///
/// The message of each variant is the localized string shown next to the
/// offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Requerido")]
    Required { field: String },

    #[error("Solo números")]
    NotNumeric { field: String },

    #[error("Número fuera de rango")]
    OutOfRange { field: String },
}

impl ValidationError {
    /// Creates a required-field validation error.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required { field: field.into() }
    }

    /// Creates a digits-only validation error.
    pub fn not_numeric(field: impl Into<String>) -> Self {
        ValidationError::NotNumeric { field: field.into() }
    }

    /// Creates a numeric overflow validation error.
    pub fn out_of_range(field: impl Into<String>) -> Self {
        ValidationError::OutOfRange { field: field.into() }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotNumeric { field }
            | ValidationError::OutOfRange { field } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidPdf,

    // Flow errors
    AlreadyInProgress,
    PermissionDenied,

    // Not found errors
    DocumentNotFound,
    AssetNotFound,

    // Infrastructure errors
    GenerationFailed,
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidPdf => "INVALID_PDF",
            ErrorCode::AlreadyInProgress => "ALREADY_IN_PROGRESS",
            ErrorCode::PermissionDenied => "PERMISSION_DENIED",
            ErrorCode::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            ErrorCode::AssetNotFound => "ASSET_NOT_FOUND",
            ErrorCode::GenerationFailed => "GENERATION_FAILED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// `message` is the user-facing toast text; `details` carries per-field
/// messages and the underlying cause for logs.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Collapses a set of field errors into one "invalid form" error.
    pub fn invalid_form(errors: &[ValidationError]) -> Self {
        errors.iter().fold(
            Self::new(
                ErrorCode::ValidationFailed,
                "Formulario inválido: revisa los campos ingresados.",
            ),
            |err, field_err| err.with_detail(field_err.field(), field_err.to_string()),
        )
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::invalid_form(&[err])
    }
}
