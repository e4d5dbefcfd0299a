//! Error types
//!
//! Two severities exist. [`Error`] is file-level: the whole parse of one input
//! is abandoned and no POIs are returned for it. [`CoordinateError`] is
//! geometry-level: one geometry is skipped and the reader carries on.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// File-level failures
#[derive(Debug, Error)]
pub enum Error {
    /// Extension is not one of .shp, .kml, .kmz
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// File could not be opened or read
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// KMZ container is not a readable zip archive
    #[error("invalid KMZ archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// KMZ archive has no .kml entry
    #[error("no KML file found in KMZ archive {}", .0.display())]
    NoKmlInArchive(PathBuf),

    /// Malformed KML document
    #[error("malformed KML: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    /// Shapefile could not be opened or decoded
    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    /// TSV serialization failed
    #[error("failed to write TSV: {0}")]
    Csv(#[from] csv::Error),

    /// Densification distance too small to produce a bounded point count
    #[error("interpolation distance must be 0 or at least 1 m, got {0}")]
    InvalidInterpolateDistance(f64),

    /// A whole batch of inputs produced zero POIs
    #[error("no POIs extracted from any input files")]
    NothingExtracted,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for file-level operations
pub type Result<T> = std::result::Result<T, Error>;

/// A coordinate string that could not be parsed
#[derive(Debug, Error)]
pub enum CoordinateError {
    #[error("invalid longitude in {token:?}: {source}")]
    InvalidLongitude {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("invalid latitude in {token:?}: {source}")]
    InvalidLatitude {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}
