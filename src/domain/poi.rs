use std::ops::Deref;

use geo::Point;

use crate::geometry::{haversine_distance, interpolate_point};

/// Default marker color (blue, RRGGBB)
pub const DEFAULT_COLOR: &str = "0000ff";
pub const DEFAULT_FONT_SIZE: i32 = 12;
pub const DEFAULT_MAX_LOD: i32 = 10;
pub const DEFAULT_DEMAND: &str = "0";
pub const DEFAULT_POPULATION: i64 = 0;

/// Font size floor for points inserted by interpolation
const MIN_INTERPOLATED_FONT_SIZE: i32 = 6;
/// Interpolated points render this much smaller than the point they follow
const INTERPOLATED_FONT_SIZE_STEP: i32 = 2;

/// A point-of-interest marker
///
/// Coordinates are WGS84 degrees and are not range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub lon: f64,
    pub lat: f64,
    pub color: String,
    pub text: String,
    pub font_size: i32,
    pub max_lod: i32,
    pub transparent: bool,
    pub demand: String,
    pub population: i64,
}

impl Poi {
    /// Create an unlabeled marker with default font size, demand and population
    pub fn new(lon: f64, lat: f64, color: &str, max_lod: i32) -> Self {
        Self {
            lon,
            lat,
            color: color.to_string(),
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            max_lod,
            transparent: false,
            demand: DEFAULT_DEMAND.to_string(),
            population: DEFAULT_POPULATION,
        }
    }

    fn position(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    /// A smaller, unlabeled copy of this marker moved to `position`
    fn interpolated_at(&self, position: Point<f64>) -> Self {
        Self {
            lon: position.x(),
            lat: position.y(),
            color: self.color.clone(),
            text: String::new(),
            font_size: self
                .font_size
                .saturating_sub(INTERPOLATED_FONT_SIZE_STEP)
                .max(MIN_INTERPOLATED_FONT_SIZE),
            max_lod: self.max_lod,
            transparent: self.transparent,
            demand: self.demand.clone(),
            population: self.population,
        }
    }
}

/// Ordered, append-only sequence of POIs
///
/// Insertion order is the traversal order of the source geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoiList(Vec<Poi>);

impl PoiList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, poi: Poi) {
        self.0.push(poi);
    }

    /// Append every POI of `other`, keeping both orders
    pub fn append(&mut self, other: PoiList) {
        self.0.extend(other.0);
    }

    /// Densify the list as one line so no segment exceeds `max_distance_m`
    ///
    /// # Algorithm
    /// For each consecutive pair (current, next):
    /// 1. Keep current
    /// 2. If the great-circle distance exceeds the maximum, split the segment
    ///    into `n = ceil(distance / max)` equal parts and insert the `n - 1`
    ///    inner points, styled after current
    ///
    /// The last point is appended unchanged. Lists shorter than two points
    /// and non-positive distances are returned as is.
    pub fn interpolate_by_distance(self, max_distance_m: f64) -> PoiList {
        // also rejects NaN
        if self.0.len() < 2 || !(max_distance_m > 0.0) {
            return self;
        }

        let mut out = Vec::with_capacity(self.0.len() * 2);

        for pair in self.0.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            out.push(current.clone());

            let distance = haversine_distance(current.position(), next.position());
            if distance <= max_distance_m {
                continue;
            }

            let segments = (distance / max_distance_m).ceil() as usize;
            for j in 1..segments {
                let fraction = j as f64 / segments as f64;
                let position = interpolate_point(current.position(), next.position(), fraction);
                out.push(current.interpolated_at(position));
            }
        }

        if let Some(last) = self.0.last() {
            out.push(last.clone());
        }

        PoiList(out)
    }
}

impl Deref for PoiList {
    type Target = [Poi];

    fn deref(&self) -> &[Poi] {
        &self.0
    }
}

impl From<Vec<Poi>> for PoiList {
    fn from(pois: Vec<Poi>) -> Self {
        Self(pois)
    }
}

impl FromIterator<Poi> for PoiList {
    fn from_iter<I: IntoIterator<Item = Poi>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PoiList {
    type Item = Poi;
    type IntoIter = std::vec::IntoIter<Poi>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PoiList {
    type Item = &'a Poi;
    type IntoIter = std::slice::Iter<'a, Poi>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
