use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::types::Kml;
use crate::error::{Error, Result};

/// Parse a .kml or .kmz file into its geometry tree
///
/// The container is chosen by extension (case-insensitive): `.kmz` is
/// opened as a zip archive, anything else is read as plain KML.
pub fn parse_file(path: &Path) -> Result<Kml> {
    let is_kmz = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("kmz"));

    let bytes = if is_kmz {
        read_kmz(path)?
    } else {
        std::fs::read(path).map_err(|e| Error::io(path, e))?
    };

    parse_bytes(&bytes)
}

/// Deserialize KML bytes into the geometry tree
pub fn parse_bytes(bytes: &[u8]) -> Result<Kml> {
    Ok(quick_xml::de::from_reader(bytes)?)
}

/// Read the first `*.kml` entry (case-insensitive) out of a KMZ archive
pub fn read_kmz(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut archive = zip::ZipArchive::new(file)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if !entry.name().to_lowercase().ends_with(".kml") {
            continue;
        }

        // entry sizes in the header are untrusted
        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(path, e))?;
        return Ok(bytes);
    }

    Err(Error::NoKmlInArchive(path.to_path_buf()))
}
