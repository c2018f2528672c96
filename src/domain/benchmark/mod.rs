//! Image render benchmark domain.

mod image_kind;
mod result;

pub use image_kind::{GridColumns, ImageKind};
pub use result::{BenchmarkComparison, BenchmarkResult};

/// Number of image cells in every benchmark document.
pub const BENCHMARK_IMAGE_COUNT: usize = 46;
