//! wkhtmltopdf based HTML converter adapter.
//!
//! Pipes the HTML document into `wkhtmltopdf` on stdin and lets it write the
//! PDF straight to the requested target file. The binary must be installed;
//! when it is not, `convert` returns `ConversionError::Unavailable`.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::ports::{ConversionError, ConversionOutput, ConversionRequest, HtmlConverter};

/// HTML converter backed by the `wkhtmltopdf` command line tool.
///
/// # Example
///
/// ```rust,ignore
/// let converter = WkhtmltopdfConverter::new().with_converter_path("/usr/local/bin/wkhtmltopdf");
///
/// let output = converter
///     .convert(ConversionRequest {
///         html: "<h1>Hola</h1>".into(),
///         file_name: "FormReport_20250101120000".into(),
///         directory: "/tmp/documents".into(),
///     })
///     .await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct WkhtmltopdfConverter {
    /// Path to the executable. If None, will search PATH.
    converter_path: Option<String>,
}

impl WkhtmltopdfConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom path to the `wkhtmltopdf` executable.
    pub fn with_converter_path(mut self, path: impl Into<String>) -> Self {
        self.converter_path = Some(path.into());
        self
    }

    fn converter_command(&self) -> &str {
        self.converter_path.as_deref().unwrap_or("wkhtmltopdf")
    }

    async fn check_converter(&self) -> bool {
        let output = Command::new(self.converter_command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }
}

#[async_trait]
impl HtmlConverter for WkhtmltopdfConverter {
    async fn convert(&self, request: ConversionRequest) -> Result<ConversionOutput, ConversionError> {
        if !self.check_converter().await {
            return Err(ConversionError::unavailable(format!(
                "'{}' is not installed or not executable",
                self.converter_command()
            )));
        }

        tokio::fs::create_dir_all(&request.directory)
            .await
            .map_err(|e| {
                ConversionError::io(format!(
                    "Failed to create {}: {}",
                    request.directory.display(),
                    e
                ))
            })?;

        let target = request.target_path();
        tracing::debug!(target = %target.display(), html_len = request.html.len(), "Starting HTML conversion");

        let mut child = Command::new(self.converter_command())
            .args(["--quiet", "--encoding", "utf-8", "-"])
            .arg(&target)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ConversionError::failed(format!("Failed to start wkhtmltopdf: {}", e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(request.html.as_bytes())
                .await
                .map_err(|e| ConversionError::failed(format!("Failed to write to wkhtmltopdf: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ConversionError::failed(format!("wkhtmltopdf execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConversionError::failed(format!(
                "wkhtmltopdf returned error: {}",
                stderr.trim()
            )));
        }

        let written = tokio::fs::try_exists(&target).await.unwrap_or(false);
        Ok(ConversionOutput {
            file_path: written.then_some(target),
        })
    }

    async fn is_available(&self) -> bool {
        self.check_converter().await
    }
}
