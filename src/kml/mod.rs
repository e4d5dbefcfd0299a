//! KML/KMZ decoding into a geometry tree

pub mod coordinates;
pub mod parser;
pub mod types;

pub use coordinates::{Coordinate, parse_coordinates};
pub use parser::{parse_bytes, parse_file, read_kmz};
pub use types::{
    Boundary, Document, ExtendedData, Folder, Geometry, Kml, LineString, LinearRing,
    MultiGeometry, Placemark, Point, Polygon,
};
