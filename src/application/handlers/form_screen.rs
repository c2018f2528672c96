//! FormScreen - restore the last values, validate, save and generate.
//!
//! A submission runs validate, save, generate in that order and ends with
//! the route for the viewer. Only one submission may run at a time.

use std::sync::Arc;

use serde::Serialize;

use super::generate_pdf::GeneratePdfUseCase;
use super::in_flight::InFlightGuard;
use super::viewer_screen::ViewerRoute;
use crate::domain::form::{FormOption, FormSubmission};
use crate::domain::foundation::DomainError;
use crate::ports::FormStorage;

/// What the form shows when it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub values: FormSubmission,
    pub options: Vec<&'static str>,
    /// Whether `values` came from storage rather than the defaults.
    pub restored: bool,
}

impl FormState {
    fn defaults() -> Self {
        Self {
            values: FormSubmission::default(),
            options: FormOption::labels(),
            restored: false,
        }
    }
}

/// Handler behind the form screen.
///
/// # Dependencies
///
/// - `FormStorage`: last submitted values
/// - `GeneratePdfUseCase`: PDF generation
pub struct FormScreen {
    storage: Arc<dyn FormStorage>,
    generate_pdf: GeneratePdfUseCase,
    guard: InFlightGuard,
}

impl FormScreen {
    pub fn new(storage: Arc<dyn FormStorage>, generate_pdf: GeneratePdfUseCase) -> Self {
        Self {
            storage,
            generate_pdf,
            guard: InFlightGuard::new(),
        }
    }

    /// Last saved values, or the defaults.
    ///
    /// A snapshot that cannot be read is logged and the defaults are shown.
    pub async fn restore(&self) -> FormState {
        match self.storage.load_form_data().await {
            Ok(Some(saved)) => {
                tracing::debug!(?saved, "Restored saved form data");
                FormState {
                    values: FormSubmission::from(&saved),
                    restored: true,
                    ..FormState::defaults()
                }
            }
            Ok(None) => FormState::defaults(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not restore saved form data");
                FormState::defaults()
            }
        }
    }

    /// Validate, save and generate; returns where the viewer should go.
    ///
    /// # Errors
    ///
    /// - `AlreadyInProgress` while another submission runs
    /// - `ValidationFailed` with one detail per invalid field
    /// - `StorageError` if the values could not be saved
    /// - `GenerationFailed` if the PDF backend failed
    pub async fn submit(
        &self,
        submission: &FormSubmission,
        file_name: Option<&str>,
    ) -> Result<ViewerRoute, DomainError> {
        let _token = self.guard.begin("submit")?;

        let entity = submission.validate().map_err(|errors| {
            tracing::warn!(?errors, "Form validation failed");
            DomainError::invalid_form(&errors)
        })?;

        tracing::info!(?entity, backend = %self.generate_pdf.backend(), "Submitting form");

        self.storage.save_form_data(&entity).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to save form data");
            DomainError::from(e)
        })?;

        let pdf = self
            .generate_pdf
            .execute(&entity, file_name)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error generating PDF");
                DomainError::from(e)
            })?;

        tracing::info!(path = %pdf.file_path, "PDF generated");
        Ok(ViewerRoute::from(pdf))
    }

    pub fn is_submitting(&self) -> bool {
        self.guard.is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryKeyValueStore, KeyValueFormStorage, FORM_DATA_KEY};
    use crate::domain::form::{FormDataEntity, GeneratedPdf};
    use crate::domain::foundation::ErrorCode;
    use crate::ports::{KeyValueStore, PdfBackendKind, PdfGenerationError, PdfGenerator};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingGenerator {
        calls: AtomicUsize,
        delay: Duration,
        fail: bool,
    }

    impl CountingGenerator {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay: Duration::ZERO,
                fail: false,
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::new()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PdfGenerator for CountingGenerator {
        async fn generate_pdf(
            &self,
            _input: &FormDataEntity,
            file_name: Option<&str>,
        ) -> Result<GeneratedPdf, PdfGenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(PdfGenerationError::NoOutputPath);
            }
            let name = file_name.unwrap_or("FormReport_20250101120000.pdf");
            Ok(GeneratedPdf::new(format!("/docs/{}", name), name))
        }

        fn backend(&self) -> PdfBackendKind {
            PdfBackendKind::Markup
        }
    }

    struct Fixture {
        screen: Arc<FormScreen>,
        generator: Arc<CountingGenerator>,
        store: InMemoryKeyValueStore,
    }

    fn fixture(generator: CountingGenerator) -> Fixture {
        let store = InMemoryKeyValueStore::new();
        let generator = Arc::new(generator);
        let storage = Arc::new(KeyValueFormStorage::new(Arc::new(store.clone())));
        let screen = Arc::new(FormScreen::new(
            storage,
            GeneratePdfUseCase::new(generator.clone()),
        ));
        Fixture {
            screen,
            generator,
            store,
        }
    }

    fn valid_submission() -> FormSubmission {
        FormSubmission {
            text_value: "abc".to_string(),
            numeric_value: Some("42".to_string()),
            option_value: "Opción 2".to_string(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Restore
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn restore_without_snapshot_shows_defaults() {
        let f = fixture(CountingGenerator::new());

        let state = f.screen.restore().await;

        assert!(!state.restored);
        assert_eq!(state.values.option_value, "Opción 1");
        assert_eq!(state.values.numeric_value.as_deref(), Some(""));
        assert_eq!(state.options, vec!["Opción 1", "Opción 2", "Opción 3"]);
    }

    #[tokio::test]
    async fn restore_after_submit_shows_saved_values() {
        let f = fixture(CountingGenerator::new());
        f.screen.submit(&valid_submission(), None).await.unwrap();

        let state = f.screen.restore().await;

        assert!(state.restored);
        assert_eq!(state.values, valid_submission());
    }

    #[tokio::test]
    async fn restore_with_corrupt_snapshot_falls_back_to_defaults() {
        let f = fixture(CountingGenerator::new());
        f.store.set_item(FORM_DATA_KEY, "not json").await.unwrap();

        let state = f.screen.restore().await;

        assert!(!state.restored);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Submit
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn submit_saves_generates_and_routes_to_viewer() {
        let f = fixture(CountingGenerator::new());

        let route = f.screen.submit(&valid_submission(), None).await.unwrap();

        assert_eq!(route.uri, "/docs/FormReport_20250101120000.pdf");
        assert_eq!(route.file_name.as_deref(), Some("FormReport_20250101120000.pdf"));
        assert_eq!(f.generator.calls(), 1);
        assert!(f.store.get_item(FORM_DATA_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn invalid_submission_never_saves_or_generates() {
        let f = fixture(CountingGenerator::new());
        let submission = FormSubmission {
            text_value: String::new(),
            numeric_value: Some("12a".to_string()),
            option_value: String::new(),
        };

        let err = f.screen.submit(&submission, None).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("textValue").map(String::as_str), Some("Requerido"));
        assert_eq!(
            err.details.get("numericValue").map(String::as_str),
            Some("Solo números")
        );
        assert_eq!(err.details.get("optionValue").map(String::as_str), Some("Requerido"));
        assert_eq!(f.generator.calls(), 0);
        assert!(f.store.is_empty().await);
    }

    #[tokio::test]
    async fn generation_failure_keeps_saved_values() {
        let f = fixture(CountingGenerator::failing());

        let err = f.screen.submit(&valid_submission(), None).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::GenerationFailed);
        assert!(f.screen.restore().await.restored);
        assert!(!f.screen.is_submitting());
    }

    #[tokio::test]
    async fn duplicate_submission_while_in_flight_is_rejected() {
        let f = fixture(CountingGenerator::slow(Duration::from_millis(200)));

        let first = {
            let screen = Arc::clone(&f.screen);
            tokio::spawn(async move { screen.submit(&valid_submission(), None).await })
        };
        while !f.screen.is_submitting() {
            tokio::task::yield_now().await;
        }

        let second = f.screen.submit(&valid_submission(), None).await;

        assert_eq!(second.unwrap_err().code(), ErrorCode::AlreadyInProgress);
        assert!(first.await.unwrap().is_ok());
        assert_eq!(f.generator.calls(), 1);
        assert!(!f.screen.is_submitting());
    }

    #[tokio::test]
    async fn explicit_file_name_reaches_generator() {
        let f = fixture(CountingGenerator::new());

        let route = f
            .screen
            .submit(&valid_submission(), Some("custom.pdf"))
            .await
            .unwrap();

        assert_eq!(route.file_name.as_deref(), Some("custom.pdf"));
    }
}
