//! Error types.
//!
//! Rendering, filtering and animation never fail at runtime. Errors exist
//! only at the edges: invalid static data, invalid motion ranges, loading a
//! config file and writing the exported bundle.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Category;

/// Invariant violations in the static catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate course id {0}")]
    DuplicateCourseId(u32),

    #[error("duplicate mentor id {0}")]
    DuplicateMentorId(u32),

    #[error("course {id} uses category {category:?}, which is not a concrete category")]
    InvalidCategory { id: u32, category: Category },

    #[error("course {id} has rating {rating} outside [0, 5]")]
    RatingOutOfRange { id: u32, rating: f32 },
}

/// Invalid motion mapping definitions.
#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("mapping needs at least two stops, got {0}")]
    TooFewStops(usize),

    #[error("input has {input} stops but output has {output}")]
    StopCountMismatch { input: usize, output: usize },

    #[error("input stops must be strictly increasing (stop {index})")]
    UnorderedInput { index: usize },

    #[error("spring {field} must be positive and finite, got {value}")]
    InvalidSpring { field: &'static str, value: f64 },
}

/// Site-level errors: configuration and export.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config {field} must be {expected}, got {value}")]
    InvalidConfig {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Motion(#[from] MotionError),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
