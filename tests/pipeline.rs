use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use shape2poi::batch::{BatchOptions, process_input_files};
use shape2poi::package::{PackageConfig, create_package, default_output_path};
use shape2poi::{Error, FormatReader, reader_for_path};
use tempfile::tempdir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

const ROUTES_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Document>
  <name>Routes</name>
  <Placemark>
    <name>Depot</name>
    <Point><coordinates>9.9937,53.5511,0</coordinates></Point>
  </Placemark>
  <Folder>
    <name>Lines</name>
    <Placemark>
      <name>Harbour</name>
      <LineString><coordinates>9.9700,53.5450,0 9.9800,53.5460,0 9.9900,53.5480,0</coordinates></LineString>
    </Placemark>
    <Placemark>
      <name>Block</name>
      <Polygon><outerBoundaryIs><LinearRing>
        <coordinates>10.0,53.0 10.01,53.0 10.01,53.01 10.0,53.01 10.0,53.0</coordinates>
      </LinearRing></outerBoundaryIs></Polygon>
    </Placemark>
  </Folder>
</Document>
</kml>"#;

fn write_kmz(path: &Path, entry: &str, kml: &str) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    zip.start_file("images/icon.png", SimpleFileOptions::default())
        .unwrap();
    zip.write_all(&[0x89, b'P', b'N', b'G']).unwrap();
    zip.start_file(entry, SimpleFileOptions::default()).unwrap();
    zip.write_all(kml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

#[test]
fn kml_and_kmz_yield_the_same_pois() {
    let dir = tempdir().unwrap();
    let kml = dir.path().join("routes.kml");
    let kmz = dir.path().join("routes.kmz");
    std::fs::write(&kml, ROUTES_KML).unwrap();
    write_kmz(&kmz, "doc.kml", ROUTES_KML);

    let from_kml = reader_for_path(&kml, 0.0).unwrap().parse_file(&kml).unwrap();
    let from_kmz = reader_for_path(&kmz, 0.0).unwrap().parse_file(&kmz).unwrap();

    // 1 point, 3 line vertices, 4 ring vertices without the closing duplicate
    assert_eq!(from_kml.len(), 8);
    assert_eq!(from_kml, from_kmz);
    assert_eq!((from_kml[0].lon, from_kml[0].lat), (9.9937, 53.5511));
}

#[test]
fn batch_to_package() {
    let dir = tempdir().unwrap();
    let kml = dir.path().join("routes.kml");
    let bogus = dir.path().join("readme.md");
    std::fs::write(&kml, ROUTES_KML).unwrap();
    std::fs::write(&bogus, "# not geometry").unwrap();

    let options = BatchOptions::default()
        .with_interpolate_distance(200.0)
        .with_max_lod(6)
        .with_color("ff8800");
    let pois = process_input_files(&[&kml, &bogus], &options).unwrap();
    assert!(pois.len() > 8);
    assert!(pois.iter().all(|p| p.max_lod == 6 && p.color == "ff8800"));

    let output = dir.path().join("routes_mod.zip");
    let summary = create_package(&pois, &PackageConfig::new(&output)).unwrap();
    assert_eq!(summary.poi_count, pois.len());

    let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
    assert_eq!(archive.len(), 2);

    let mut manifest = String::new();
    archive
        .by_name("mod.txt")
        .unwrap()
        .read_to_string(&mut manifest)
        .unwrap();
    assert!(manifest.contains("name=routes_mod"));
    assert!(manifest.contains("tsv = routes_mod.tsv"));

    let mut table = String::new();
    archive
        .by_name("routes_mod.tsv")
        .unwrap()
        .read_to_string(&mut table)
        .unwrap();
    let rows: Vec<&str> = table.lines().collect();
    assert_eq!(rows.len(), pois.len() + 1);
    assert!(rows[0].starts_with("lon\tlat\tcolor"));
    assert!(rows[1].starts_with("9.9937\t53.5511\tff8800\t\t12\t6\tfalse"));
}

#[test]
fn nothing_extracted_from_unusable_inputs() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.shp");
    let unsupported = dir.path().join("data.gpx");
    std::fs::write(&unsupported, "<gpx/>").unwrap();

    let result = process_input_files(&[&missing, &unsupported], &BatchOptions::default());
    assert!(matches!(result, Err(Error::NothingExtracted)));
}

#[test]
fn default_output_names() {
    assert_eq!(
        default_output_path(&["routes.kml"]),
        Path::new("routes_mod.zip")
    );
    assert_eq!(
        default_output_path(&["a.kml", "b.kmz"]),
        Path::new("combined_mod.zip")
    );
}
