use std::path::Path;

use shapefile::{Shape, ShapeReader};
use tracing::debug;

use super::{FormatReader, PoiStyle};
use crate::domain::PoiList;
use crate::error::Result;

/// Reader for ESRI .shp files
///
/// Only point and polyline records are converted. Polyline parts are joined
/// into one sequence in file order.
#[derive(Debug, Clone, Default)]
pub struct ShapefileReader {
    /// Max segment length in meters for polylines, 0 disables
    interpolate_distance: f64,
}

impl ShapefileReader {
    pub fn new(interpolate_distance: f64) -> Self {
        Self {
            interpolate_distance,
        }
    }
}

impl FormatReader for ShapefileReader {
    fn parse_file_with_full_config(
        &self,
        path: &Path,
        max_lod: i32,
        color: &str,
    ) -> Result<PoiList> {
        let mut reader = ShapeReader::from_path(path)?;
        let style = PoiStyle { color, max_lod };
        let mut pois = PoiList::new();

        for (index, shape) in reader.iter_shapes().enumerate() {
            match shape? {
                Shape::Point(point) => pois.push(style.poi(point.x, point.y)),
                Shape::Polyline(line) => {
                    let points = line.parts().iter().flatten().map(|p| (p.x, p.y));
                    pois.append(style.line(points, self.interpolate_distance));
                }
                other => {
                    debug!(
                        record = index,
                        shape_type = ?other.shapetype(),
                        "skipping unsupported shape"
                    );
                }
            }
        }

        debug!(path = %path.display(), count = pois.len(), "parsed shapefile");
        Ok(pois)
    }
}
