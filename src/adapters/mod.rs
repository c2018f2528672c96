//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `storage` - key-value stores and the form snapshot
//! - `pdf` - the markup and document-model PDF backends
//! - `permission` - platform storage permission
//! - `assets` - bundled benchmark images
//! - `http` - REST API for the screens

pub mod assets;
pub mod http;
pub mod pdf;
pub mod permission;
pub mod storage;
