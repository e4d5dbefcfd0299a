//! Multi-file processing into one combined POI list

use std::path::Path;

use tracing::{error, info};

use crate::domain::PoiList;
use crate::domain::poi::{DEFAULT_COLOR, DEFAULT_MAX_LOD};
use crate::error::{Error, Result};
use crate::reader::reader_for_path;

/// Smallest non-zero densification distance in meters
pub const MIN_INTERPOLATE_DISTANCE: f64 = 1.0;

/// Accept 0 (disabled) or a distance of at least [`MIN_INTERPOLATE_DISTANCE`]
pub fn check_interpolate_distance(meters: f64) -> Result<f64> {
    if meters == 0.0 || meters >= MIN_INTERPOLATE_DISTANCE {
        Ok(meters)
    } else {
        Err(Error::InvalidInterpolateDistance(meters))
    }
}

/// Settings shared by every file of a batch
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Meters, 0 disables densification
    pub interpolate_distance: f64,
    pub max_lod: i32,
    pub color: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            interpolate_distance: 0.0,
            max_lod: DEFAULT_MAX_LOD,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl BatchOptions {
    pub fn with_interpolate_distance(mut self, meters: f64) -> Self {
        self.interpolate_distance = meters;
        self
    }

    pub fn with_max_lod(mut self, max_lod: i32) -> Self {
        self.max_lod = max_lod;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Process one input file with the reader its extension selects
pub fn process_file(path: &Path, options: &BatchOptions) -> Result<PoiList> {
    let reader = reader_for_path(path, options.interpolate_distance)?;
    reader.parse_file_with_full_config(path, options.max_lod, &options.color)
}

/// Process every input in argument order and concatenate the results
///
/// A file that fails is logged and skipped. Only an empty combined result is
/// an error ([`Error::NothingExtracted`]).
pub fn process_input_files<P: AsRef<Path>>(inputs: &[P], options: &BatchOptions) -> Result<PoiList> {
    let mut all = PoiList::new();

    for input in inputs {
        let path = input.as_ref();
        info!(path = %path.display(), "processing");

        match process_file(path, options) {
            Ok(pois) => {
                info!(path = %path.display(), count = pois.len(), "extracted POIs");
                all.append(pois);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to process file");
            }
        }
    }

    if all.is_empty() {
        return Err(Error::NothingExtracted);
    }

    Ok(all)
}
