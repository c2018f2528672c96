//! Form Storage Port - Interface for persisting the last submitted form.
//!
//! Exactly one snapshot exists at a time; every save replaces it.

use async_trait::async_trait;

use crate::domain::form::FormDataEntity;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize form data: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize form data: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl StorageError {
    pub fn io(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

/// Port for saving and restoring the form values.
#[async_trait]
pub trait FormStorage: Send + Sync {
    /// Serialize and store the entity, overwriting any previous snapshot.
    async fn save_form_data(&self, data: &FormDataEntity) -> Result<(), StorageError>;

    /// Load the last snapshot.
    ///
    /// # Returns
    /// `None` when nothing has been saved yet.
    ///
    /// # Errors
    /// `StorageError::DeserializationFailed` if the stored value is not a
    /// valid snapshot.
    async fn load_form_data(&self) -> Result<Option<FormDataEntity>, StorageError>;
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, "No se pudo acceder a los datos guardados.")
            .with_detail("cause", err.to_string())
    }
}
