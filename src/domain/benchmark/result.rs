//! Benchmark measurements and the original-vs-optimized comparison.

use serde::Serialize;

use super::image_kind::{GridColumns, ImageKind};
use crate::domain::foundation::Timestamp;

/// One completed benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub image_type: ImageKind,
    pub columns: GridColumns,
    /// Whole run: asset load, encoding, HTML assembly, conversion.
    pub generation_time_ms: u64,
    /// Converter call alone.
    pub conversion_time_ms: u64,
    /// `None` when the output could not be stat'ed.
    pub pdf_size_bytes: Option<u64>,
    pub file_path: String,
    pub timestamp: Timestamp,
}

impl BenchmarkResult {
    /// Output size in megabytes, two decimals, for the toast line.
    pub fn size_mb(&self) -> f64 {
        let bytes = self.pdf_size_bytes.unwrap_or(0) as f64;
        (bytes / 1024.0 / 1024.0 * 100.0).round() / 100.0
    }
}

/// How much faster and smaller the optimized run was.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    /// Original minus optimized; positive means optimized was faster.
    pub time_diff_ms: i64,
    /// `time_diff_ms` as a percentage of the original time, one decimal.
    pub time_percentage: f64,
    /// Original minus optimized size, when both sizes are known.
    pub size_diff_bytes: Option<i64>,
}

impl BenchmarkComparison {
    /// Compares the first original and first optimized result in `results`.
    ///
    /// Returns `None` until both kinds have been run.
    pub fn from_results(results: &[BenchmarkResult]) -> Option<Self> {
        let original = results.iter().find(|r| r.image_type == ImageKind::Original)?;
        let optimized = results.iter().find(|r| r.image_type == ImageKind::Optimized)?;

        let time_diff_ms = original.generation_time_ms as i64 - optimized.generation_time_ms as i64;
        let time_percentage = if original.generation_time_ms == 0 {
            0.0
        } else {
            (time_diff_ms as f64 / original.generation_time_ms as f64 * 1000.0).round() / 10.0
        };
        let size_diff_bytes = match (original.pdf_size_bytes, optimized.pdf_size_bytes) {
            (Some(a), Some(b)) => Some(a as i64 - b as i64),
            _ => None,
        };

        Some(Self {
            time_diff_ms,
            time_percentage,
            size_diff_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: ImageKind, time_ms: u64, size: Option<u64>) -> BenchmarkResult {
        BenchmarkResult {
            image_type: kind,
            columns: GridColumns::Two,
            generation_time_ms: time_ms,
            conversion_time_ms: time_ms / 2,
            pdf_size_bytes: size,
            file_path: format!("/tmp/{}.pdf", kind),
            timestamp: Timestamp::now(),
        }
    }

    #[test]
    fn comparison_requires_both_kinds() {
        let results = vec![result(ImageKind::Original, 1000, None)];
        assert!(BenchmarkComparison::from_results(&results).is_none());
    }

    #[test]
    fn comparison_reports_time_and_size_difference() {
        let results = vec![
            result(ImageKind::Original, 2000, Some(10_000)),
            result(ImageKind::Optimized, 500, Some(2_500)),
        ];

        let cmp = BenchmarkComparison::from_results(&results).unwrap();
        assert_eq!(cmp.time_diff_ms, 1500);
        assert_eq!(cmp.time_percentage, 75.0);
        assert_eq!(cmp.size_diff_bytes, Some(7_500));
    }

    #[test]
    fn comparison_uses_first_result_of_each_kind() {
        let results = vec![
            result(ImageKind::Optimized, 300, None),
            result(ImageKind::Original, 900, None),
            result(ImageKind::Original, 5000, None),
        ];

        let cmp = BenchmarkComparison::from_results(&results).unwrap();
        assert_eq!(cmp.time_diff_ms, 600);
        assert_eq!(cmp.size_diff_bytes, None);
    }

    #[test]
    fn comparison_tolerates_zero_original_time() {
        let results = vec![
            result(ImageKind::Original, 0, None),
            result(ImageKind::Optimized, 10, None),
        ];

        assert_eq!(BenchmarkComparison::from_results(&results).unwrap().time_percentage, 0.0);
    }

    #[test]
    fn size_mb_rounds_to_two_decimals() {
        let r = result(ImageKind::Original, 1, Some(1_572_864));
        assert_eq!(r.size_mb(), 1.5);
    }
}
