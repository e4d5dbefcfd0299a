//! shape2poi - Convert shapefile and KML/KMZ geometry into game POI layers

pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod kml;
pub mod logging;
pub mod package;
pub mod reader;

pub use domain::{Poi, PoiList};
pub use error::{CoordinateError, Error, Result};
pub use reader::{FormatReader, KmlReader, ShapefileReader, normalize_color, reader_for_path};
