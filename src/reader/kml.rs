use std::path::Path;

use tracing::debug;

use super::{FormatReader, PoiStyle};
use crate::domain::PoiList;
use crate::error::{CoordinateError, Result};
use crate::kml::{self, Geometry, LinearRing, parse_coordinates};

/// Reader for .kml and .kmz files
#[derive(Debug, Clone, Default)]
pub struct KmlReader {
    /// Max segment length in meters for line-like geometries, 0 disables
    interpolate_distance: f64,
}

impl KmlReader {
    pub fn new(interpolate_distance: f64) -> Self {
        Self {
            interpolate_distance,
        }
    }

    /// Append the POIs of one geometry, recursing into multi-geometries
    ///
    /// A geometry with a malformed coordinate string contributes nothing;
    /// siblings are still converted.
    fn convert_geometry(&self, geometry: &Geometry, style: &PoiStyle, out: &mut PoiList) {
        let result = match geometry {
            Geometry::Point(point) => parse_coordinates(&point.coordinates).map(|coords| {
                for c in coords {
                    out.push(style.poi(c.lon, c.lat));
                }
            }),
            Geometry::LineString(line) => parse_coordinates(&line.coordinates).map(|coords| {
                let points = coords.into_iter().map(|c| (c.lon, c.lat));
                out.append(style.line(points, self.interpolate_distance));
            }),
            Geometry::LinearRing(ring) => self.convert_ring(ring, style, out),
            Geometry::Polygon(polygon) => match polygon
                .outer_boundary
                .as_ref()
                .and_then(|b| b.linear_ring.as_ref())
            {
                Some(ring) => self.convert_ring(ring, style, out),
                None => Ok(()),
            },
            Geometry::MultiGeometry(multi) => {
                for child in &multi.geometries {
                    self.convert_geometry(child, style, out);
                }
                Ok(())
            }
        };

        if let Err(e) = result {
            debug!(error = %e, "skipping geometry with malformed coordinates");
        }
    }

    /// Rings drop a duplicated closing coordinate before densification
    fn convert_ring(
        &self,
        ring: &LinearRing,
        style: &PoiStyle,
        out: &mut PoiList,
    ) -> std::result::Result<(), CoordinateError> {
        let mut coords = parse_coordinates(&ring.coordinates)?;

        let closed = match (coords.first(), coords.last()) {
            (Some(first), Some(last)) => {
                coords.len() > 1 && first.lon == last.lon && first.lat == last.lat
            }
            _ => false,
        };
        if closed {
            coords.pop();
        }

        let points = coords.into_iter().map(|c| (c.lon, c.lat));
        out.append(style.line(points, self.interpolate_distance));
        Ok(())
    }
}

impl FormatReader for KmlReader {
    fn parse_file_with_full_config(
        &self,
        path: &Path,
        max_lod: i32,
        color: &str,
    ) -> Result<PoiList> {
        let data = kml::parse_file(path)?;
        let style = PoiStyle { color, max_lod };
        let mut pois = PoiList::new();

        if let Some(document) = &data.document {
            for placemark in document.all_placemarks() {
                if let Some(geometry) = &placemark.geometry {
                    self.convert_geometry(geometry, &style, &mut pois);
                }
            }
        }

        debug!(path = %path.display(), count = pois.len(), "parsed KML");
        Ok(pois)
    }
}
