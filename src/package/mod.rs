//! Mod packaging: TSV table, manifest and zip archive

pub mod archive;
pub mod manifest;
pub mod tsv;

pub use archive::{
    MANIFEST_FILE, PackageConfig, PackageSummary, create_package, default_output_path,
};
pub use manifest::{default_manifest, update_tsv_reference};
pub use tsv::{TSV_HEADER, write_tsv};
