use serde::Deserialize;

/// Root `<kml>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Kml {
    #[serde(rename = "Document")]
    pub document: Option<Document>,
}

/// `<Document>`: top-level placemarks and folders
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Placemark", default)]
    pub placemarks: Vec<Placemark>,
    #[serde(rename = "Folder", default)]
    pub folders: Vec<Folder>,
}

/// `<Folder>`: placemarks plus arbitrarily nested sub-folders
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Folder {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Placemark", default)]
    pub placemarks: Vec<Placemark>,
    #[serde(rename = "Folder", default)]
    pub folders: Vec<Folder>,
}

impl Document {
    /// Every placemark in the document, depth-first
    ///
    /// The document's own placemarks come first, then each folder in
    /// document order (its own placemarks, then its sub-folders').
    pub fn all_placemarks(&self) -> Vec<&Placemark> {
        let mut out: Vec<&Placemark> = self.placemarks.iter().collect();
        for folder in &self.folders {
            folder.collect_placemarks(&mut out);
        }
        out
    }
}

impl Folder {
    /// This folder's placemarks followed by those of its sub-folders, recursively
    pub fn all_placemarks(&self) -> Vec<&Placemark> {
        let mut out = Vec::new();
        self.collect_placemarks(&mut out);
        out
    }

    fn collect_placemarks<'a>(&'a self, out: &mut Vec<&'a Placemark>) {
        out.extend(self.placemarks.iter());
        for folder in &self.folders {
            folder.collect_placemarks(out);
        }
    }
}

/// `<Placemark>` holding at most one geometry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawPlacemark")]
pub struct Placemark {
    pub name: Option<String>,
    pub style_url: Option<String>,
    pub geometry: Option<Geometry>,
    pub extended_data: Option<ExtendedData>,
}

/// Wire shape of `<Placemark>`; geometry kinds arrive as sibling elements
#[derive(Deserialize)]
struct RawPlacemark {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "styleUrl", default)]
    style_url: Option<String>,
    #[serde(rename = "Point")]
    point: Option<Point>,
    #[serde(rename = "LineString")]
    line_string: Option<LineString>,
    #[serde(rename = "LinearRing")]
    linear_ring: Option<LinearRing>,
    #[serde(rename = "Polygon")]
    polygon: Option<Polygon>,
    #[serde(rename = "MultiGeometry")]
    multi_geometry: Option<MultiGeometry>,
    #[serde(rename = "ExtendedData")]
    extended_data: Option<ExtendedData>,
}

impl From<RawPlacemark> for Placemark {
    fn from(raw: RawPlacemark) -> Self {
        let geometry = raw
            .point
            .map(Geometry::Point)
            .or(raw.line_string.map(Geometry::LineString))
            .or(raw.linear_ring.map(Geometry::LinearRing))
            .or(raw.polygon.map(Geometry::Polygon))
            .or(raw.multi_geometry.map(Geometry::MultiGeometry));

        Self {
            name: raw.name,
            style_url: raw.style_url,
            geometry,
            extended_data: raw.extended_data,
        }
    }
}

/// The five shape kinds a placemark or multi-geometry can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiGeometry(MultiGeometry),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub coordinates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LineString {
    #[serde(default)]
    pub coordinates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinearRing {
    #[serde(default)]
    pub coordinates: String,
}

/// `<Polygon>`; inner boundaries are kept in the tree but never converted
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Polygon {
    #[serde(rename = "outerBoundaryIs")]
    pub outer_boundary: Option<Boundary>,
    #[serde(rename = "innerBoundaryIs", default)]
    pub inner_boundaries: Vec<Boundary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Boundary {
    #[serde(rename = "LinearRing")]
    pub linear_ring: Option<LinearRing>,
}

/// `<MultiGeometry>`; children in source order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawMultiGeometry")]
pub struct MultiGeometry {
    pub geometries: Vec<Geometry>,
}

#[derive(Deserialize)]
struct RawMultiGeometry {
    #[serde(rename = "$value", default)]
    items: Vec<RawGeometry>,
}

#[derive(Deserialize)]
enum RawGeometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiGeometry(MultiGeometry),
    // gx:Track, Model and friends
    #[serde(other)]
    Unsupported,
}

impl From<RawMultiGeometry> for MultiGeometry {
    fn from(raw: RawMultiGeometry) -> Self {
        let geometries = raw
            .items
            .into_iter()
            .filter_map(|item| match item {
                RawGeometry::Point(p) => Some(Geometry::Point(p)),
                RawGeometry::LineString(l) => Some(Geometry::LineString(l)),
                RawGeometry::LinearRing(r) => Some(Geometry::LinearRing(r)),
                RawGeometry::Polygon(p) => Some(Geometry::Polygon(p)),
                RawGeometry::MultiGeometry(m) => Some(Geometry::MultiGeometry(m)),
                RawGeometry::Unsupported => None,
            })
            .collect();
        Self { geometries }
    }
}

/// `<ExtendedData>`: untyped `<Data>` pairs and schema-typed `<SimpleData>`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExtendedData {
    #[serde(rename = "Data", default)]
    pub data: Vec<Data>,
    #[serde(rename = "SchemaData", default)]
    pub schema_data: Vec<SchemaData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Data {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SchemaData {
    #[serde(rename = "@schemaUrl", default)]
    pub schema_url: String,
    #[serde(rename = "SimpleData", default)]
    pub simple_data: Vec<SimpleData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimpleData {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placemark(name: &str) -> Placemark {
        Placemark {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn names(placemarks: &[&Placemark]) -> Vec<String> {
        placemarks
            .iter()
            .map(|p| p.name.clone().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_all_placemarks_order() {
        let doc = Document {
            name: None,
            placemarks: vec![placemark("root1"), placemark("root2")],
            folders: vec![Folder {
                name: Some("folder".to_string()),
                placemarks: vec![placemark("folder1")],
                folders: vec![Folder {
                    name: Some("sub".to_string()),
                    placemarks: vec![placemark("sub1")],
                    folders: Vec::new(),
                }],
            }],
        };

        let all = doc.all_placemarks();
        assert_eq!(names(&all), vec!["root1", "root2", "folder1", "sub1"]);
    }

    #[test]
    fn test_all_placemarks_sibling_folders_before_nephews() {
        // folder A's sub-folder is visited before sibling folder B
        let doc = Document {
            name: None,
            placemarks: Vec::new(),
            folders: vec![
                Folder {
                    name: None,
                    placemarks: vec![placemark("a")],
                    folders: vec![Folder {
                        name: None,
                        placemarks: vec![placemark("a.sub")],
                        folders: Vec::new(),
                    }],
                },
                Folder {
                    name: None,
                    placemarks: vec![placemark("b")],
                    folders: Vec::new(),
                },
            ],
        };

        assert_eq!(names(&doc.all_placemarks()), vec!["a", "a.sub", "b"]);
    }

    #[test]
    fn test_folder_all_placemarks() {
        let folder = Folder {
            name: None,
            placemarks: vec![placemark("x")],
            folders: vec![Folder {
                name: None,
                placemarks: vec![placemark("y"), placemark("z")],
                folders: Vec::new(),
            }],
        };
        assert_eq!(names(&folder.all_placemarks()), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(Document::default().all_placemarks().is_empty());
    }
}
