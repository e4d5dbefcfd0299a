//! Format readers: one file in, one ordered POI list out

pub mod kml;
pub mod shapefile;

use std::path::Path;

use crate::domain::poi::{DEFAULT_COLOR, DEFAULT_MAX_LOD, Poi, PoiList};
use crate::error::{Error, Result};

pub use self::kml::KmlReader;
pub use self::shapefile::ShapefileReader;

/// Common contract of the shapefile and KML/KMZ readers
///
/// A failed call returns an error and no POIs; there is no partial output.
pub trait FormatReader {
    /// Parse with an explicit max level-of-detail and color applied to every POI
    fn parse_file_with_full_config(&self, path: &Path, max_lod: i32, color: &str)
    -> Result<PoiList>;

    /// Parse with the default color
    fn parse_file_with_config(&self, path: &Path, max_lod: i32) -> Result<PoiList> {
        self.parse_file_with_full_config(path, max_lod, DEFAULT_COLOR)
    }

    /// Parse with the default max level-of-detail and color
    fn parse_file(&self, path: &Path) -> Result<PoiList> {
        self.parse_file_with_config(path, DEFAULT_MAX_LOD)
    }
}

/// Pick a reader by file extension (case-insensitive)
///
/// `.shp` selects the shapefile reader, `.kml`/`.kmz` the KML reader.
/// `interpolate_distance` is in meters, 0 disables densification.
pub fn reader_for_path(path: &Path, interpolate_distance: f64) -> Result<Box<dyn FormatReader>> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "shp" => Ok(Box::new(ShapefileReader::new(interpolate_distance))),
        "kml" | "kmz" => Ok(Box::new(KmlReader::new(interpolate_distance))),
        "" => Err(Error::UnsupportedFormat(String::new())),
        other => Err(Error::UnsupportedFormat(format!(".{other}"))),
    }
}

/// Normalize a user supplied color to the engine's hex form
///
/// A leading `#` is dropped. Six (RRGGBB) or eight (AARRGGBB) hex digits are
/// accepted as is; anything else falls back to [`DEFAULT_COLOR`].
pub fn normalize_color(input: &str) -> String {
    let hex = input.trim().trim_start_matches('#');
    let valid = matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        hex.to_string()
    } else {
        DEFAULT_COLOR.to_string()
    }
}

/// Attributes applied to every POI a reader emits during one call
#[derive(Debug, Clone, Copy)]
pub(crate) struct PoiStyle<'a> {
    pub color: &'a str,
    pub max_lod: i32,
}

impl PoiStyle<'_> {
    pub fn poi(&self, lon: f64, lat: f64) -> Poi {
        Poi::new(lon, lat, self.color, self.max_lod)
    }

    /// Build one line-like geometry, densified when `interpolate_distance > 0`
    pub fn line<I>(&self, points: I, interpolate_distance: f64) -> PoiList
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let line: PoiList = points
            .into_iter()
            .map(|(lon, lat)| self.poi(lon, lat))
            .collect();

        if interpolate_distance > 0.0 {
            line.interpolate_by_distance(interpolate_distance)
        } else {
            line
        }
    }
}
