use geo::Point;

/// Mean Earth radius used for all great-circle math
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Angular separations below this are treated as the same point
const MIN_ANGULAR_DISTANCE: f64 = 1e-10;

/// Central angle between two points in radians (haversine formula)
fn central_angle(from: Point<f64>, to: Point<f64>) -> f64 {
    let lat1 = from.y().to_radians();
    let lat2 = to.y().to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (to.x() - from.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two WGS84 points
///
/// Points are `x = lon`, `y = lat` in degrees.
///
/// # Returns
/// * Distance in meters on a sphere of radius [`EARTH_RADIUS_KM`]
pub fn haversine_distance(from: Point<f64>, to: Point<f64>) -> f64 {
    EARTH_RADIUS_KM * central_angle(from, to) * 1000.0
}

/// Point at `fraction` (0.0..=1.0) of the way along the great circle from `from` to `to`
///
/// Spherical linear interpolation in 3-D unit-vector space. When the two
/// points are (numerically) the same, `from` is returned unchanged.
pub fn interpolate_point(from: Point<f64>, to: Point<f64>, fraction: f64) -> Point<f64> {
    let d = central_angle(from, to);
    if d < MIN_ANGULAR_DISTANCE {
        return from;
    }

    let (lat1, lon1) = (from.y().to_radians(), from.x().to_radians());
    let (lat2, lon2) = (to.y().to_radians(), to.x().to_radians());

    let a = ((1.0 - fraction) * d).sin() / d.sin();
    let b = (fraction * d).sin() / d.sin();

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);

    Point::new(lon.to_degrees(), lat.to_degrees())
}
