use std::io::Write;

use csv::WriterBuilder;

use crate::domain::Poi;
use crate::error::Result;

/// Column order expected by the game's POI layer loader
pub const TSV_HEADER: [&str; 9] = [
    "lon",
    "lat",
    "color",
    "text",
    "font_size",
    "max_lod",
    "transparent",
    "demand",
    "population",
];

/// Write POIs as tab-separated values with a header row
///
/// Floats use their shortest round-trip form without exponent. Fields that
/// contain a tab, quote or newline are quoted.
pub fn write_tsv<W: Write>(pois: &[Poi], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(writer);

    wtr.write_record(TSV_HEADER)?;
    for poi in pois {
        wtr.write_record([
            poi.lon.to_string(),
            poi.lat.to_string(),
            poi.color.clone(),
            poi.text.clone(),
            poi.font_size.to_string(),
            poi.max_lod.to_string(),
            poi.transparent.to_string(),
            poi.demand.clone(),
            poi.population.to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_tsv_bytes(pois: &[Poi]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_tsv(pois, &mut buf).unwrap();
        buf
    }

    fn lines(pois: &[Poi]) -> Vec<String> {
        let bytes = to_tsv_bytes(pois);
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_header_only_for_empty_list() {
        assert_eq!(
            lines(&[]),
            vec!["lon\tlat\tcolor\ttext\tfont_size\tmax_lod\ttransparent\tdemand\tpopulation"]
        );
    }

    #[test]
    fn test_row_formatting() {
        let poi = Poi::new(10.0, 53.5, "0000ff", 10);
        let out = lines(&[poi]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], "10\t53.5\t0000ff\t\t12\t10\tfalse\t0\t0");
    }

    #[test]
    fn test_float_precision_kept() {
        let poi = Poi::new(-122.4194155, 0.0000001, "0000ff", 10);
        let out = lines(&[poi]);
        assert!(out[1].starts_with("-122.4194155\t0.0000001\t"));
    }

    #[test]
    fn test_special_characters_quoted() {
        let mut poi = Poi::new(1.0, 2.0, "ff0000", 5);
        poi.text = "Main\tStreet".to_string();
        poi.transparent = true;

        let out = String::from_utf8(to_tsv_bytes(&[poi])).unwrap();
        assert!(out.contains("\"Main\tStreet\""));
        assert!(out.contains("\ttrue\t"));
    }
}
