//! Form PDF - form capture with swappable PDF generation backends
//!
//! This crate restores and saves the last form entry, renders it to PDF
//! through a markup or document-model backend, and benchmarks HTML
//! conversion with heavy embedded images.

pub mod adapters;
pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod ports;
