pub mod geodesic;

pub use geodesic::{EARTH_RADIUS_KM, haversine_distance, interpolate_point};
