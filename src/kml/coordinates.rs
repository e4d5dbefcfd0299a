use crate::error::CoordinateError;

/// One `lon,lat[,alt]` tuple from a KML `<coordinates>` element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
    /// Meters, 0 when the tuple has no third field
    pub alt: f64,
}

/// Parse a KML coordinate string into coordinates, in token order
///
/// # Algorithm
/// 1. Split on whitespace into tuples
/// 2. Split each tuple on commas
/// 3. Tuples with fewer than two fields are dropped
/// 4. A non-numeric longitude or latitude fails the whole string
/// 5. A missing or unparsable altitude becomes 0
///
/// Empty or whitespace-only input yields an empty vector.
pub fn parse_coordinates(input: &str) -> Result<Vec<Coordinate>, CoordinateError> {
    let mut coords = Vec::new();

    for token in input.split_whitespace() {
        let parts: Vec<&str> = token.split(',').collect();
        if parts.len() < 2 {
            continue;
        }

        let lon = parts[0]
            .parse::<f64>()
            .map_err(|source| CoordinateError::InvalidLongitude {
                token: token.to_string(),
                source,
            })?;
        let lat = parts[1]
            .parse::<f64>()
            .map_err(|source| CoordinateError::InvalidLatitude {
                token: token.to_string(),
                source,
            })?;
        let alt = parts
            .get(2)
            .and_then(|a| a.parse::<f64>().ok())
            .unwrap_or(0.0);

        coords.push(Coordinate { lon, lat, alt });
    }

    Ok(coords)
}
