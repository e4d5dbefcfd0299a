use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::manifest::{default_manifest, update_tsv_reference};
use super::tsv::write_tsv;
use crate::domain::Poi;
use crate::error::{Error, Result};

/// Name of the manifest entry inside every package
pub const MANIFEST_FILE: &str = "mod.txt";

/// Where and how to write a package
#[derive(Debug, Clone)]
pub struct PackageConfig {
    /// Output archive, forced to a `.zip` extension
    pub output: PathBuf,
    /// Custom manifest whose `tsv` lines get rewritten
    pub manifest: Option<PathBuf>,
}

impl PackageConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: zip_path(output.into()),
            manifest: None,
        }
    }

    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        self.manifest = manifest;
        self
    }

    /// Mod name: the archive file name without extension
    pub fn mod_name(&self) -> String {
        self.output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string())
    }

    pub fn tsv_file_name(&self) -> String {
        format!("{}.tsv", self.mod_name())
    }

    fn manifest_content(&self, tsv_file: &str) -> Result<String> {
        match &self.manifest {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| Error::io(path.as_path(), e))?;
                Ok(update_tsv_reference(&content, tsv_file))
            }
            None => Ok(default_manifest(&self.mod_name(), tsv_file)),
        }
    }
}

/// Summary of a written package
#[derive(Debug, Clone)]
pub struct PackageSummary {
    pub path: PathBuf,
    pub tsv_file: String,
    pub poi_count: usize,
}

/// Default package path: `<stem>_mod.zip` for one input, `combined_mod.zip` otherwise
pub fn default_output_path<P: AsRef<Path>>(inputs: &[P]) -> PathBuf {
    match inputs {
        [single] => {
            let stem = single
                .as_ref()
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".to_string());
            PathBuf::from(format!("{stem}_mod.zip"))
        }
        _ => PathBuf::from("combined_mod.zip"),
    }
}

fn zip_path(path: PathBuf) -> PathBuf {
    let is_zip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
    if is_zip {
        path
    } else {
        path.with_extension("zip")
    }
}

/// Write `mod.txt` followed by the POI table into a zip archive
pub fn create_package(pois: &[Poi], config: &PackageConfig) -> Result<PackageSummary> {
    let path = config.output.as_path();
    let tsv_file = config.tsv_file_name();
    let manifest = config.manifest_content(&tsv_file)?;

    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(MANIFEST_FILE, options)?;
    zip.write_all(manifest.as_bytes())
        .map_err(|e| Error::io(path, e))?;

    zip.start_file(tsv_file.as_str(), options)?;
    write_tsv(pois, &mut zip)?;

    let mut inner = zip.finish()?;
    inner.flush().map_err(|e| Error::io(path, e))?;

    debug!(path = %path.display(), tsv = %tsv_file, count = pois.len(), "wrote package");

    Ok(PackageSummary {
        path: path.to_path_buf(),
        tsv_file,
        poi_count: pois.len(),
    })
}
