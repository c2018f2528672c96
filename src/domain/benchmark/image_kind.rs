//! Benchmark inputs: which bundled image and how many per row.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// The two bundled test images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    /// Full-size camera image, roughly 2MB.
    Original,
    /// Re-encoded image, roughly 300KB.
    Optimized,
}

impl ImageKind {
    /// Bundled asset file name.
    pub fn file_name(&self) -> &'static str {
        match self {
            ImageKind::Original => "original.jpg",
            ImageKind::Optimized => "optimized.jpg",
        }
    }

    /// Approximate size printed on each grid cell.
    pub fn size_label(&self) -> &'static str {
        match self {
            ImageKind::Original => "2MB",
            ImageKind::Optimized => "300KB",
        }
    }

    /// Human description printed in the report header.
    pub fn description(&self) -> &'static str {
        match self {
            ImageKind::Original => "Imágenes Originales (~2MB c/u)",
            ImageKind::Optimized => "Imágenes Optimizadas (~300KB c/u)",
        }
    }

    /// Rough total payload for the whole grid.
    pub fn estimated_total(&self) -> &'static str {
        match self {
            ImageKind::Original => "~92MB",
            ImageKind::Optimized => "~14MB",
        }
    }
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageKind::Original => write!(f, "original"),
            ImageKind::Optimized => write!(f, "optimized"),
        }
    }
}

/// Images per grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridColumns {
    #[default]
    Two,
    Three,
}

impl GridColumns {
    pub fn count(&self) -> u8 {
        match self {
            GridColumns::Two => 2,
            GridColumns::Three => 3,
        }
    }
}

impl TryFrom<u8> for GridColumns {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(GridColumns::Two),
            3 => Ok(GridColumns::Three),
            _ => Err(ValidationError::out_of_range("columns")),
        }
    }
}

impl From<GridColumns> for u8 {
    fn from(columns: GridColumns) -> Self {
        columns.count()
    }
}
