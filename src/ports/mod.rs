//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `KeyValueStore` - flat string store
//! - `FormStorage` - last submitted form snapshot
//!
//! ## PDF Generation
//!
//! - `PdfGenerator` - form entity to PDF file, swappable strategy
//! - `HtmlConverter` - external HTML to PDF conversion
//!
//! ## Platform
//!
//! - `StoragePermission` - downloads folder write access
//! - `ImageAssetSource` - bundled benchmark images

mod form_storage;
mod html_converter;
mod image_asset_source;
mod key_value_store;
mod pdf_generator;
mod storage_permission;

pub use form_storage::{FormStorage, StorageError};
pub use html_converter::{ConversionError, ConversionOutput, ConversionRequest, HtmlConverter};
pub use image_asset_source::{AssetError, ImageAssetSource};
pub use key_value_store::KeyValueStore;
pub use pdf_generator::{PdfBackendKind, PdfGenerationError, PdfGenerator};
pub use storage_permission::{PermissionStatus, StoragePermission};
