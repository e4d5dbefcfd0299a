/// Manifest written when no custom `mod.txt` is given
pub fn default_manifest(mod_name: &str, tsv_file: &str) -> String {
    format!(
        "[ModMeta]
schema=1
name={mod_name}
author=shape2poi
desc=Generated POI layer from geographic files
version=1.0.0

[POILayer]
id = {mod_name}_pois
name = {mod_name} POIs
tsv = {tsv_file}
"
    )
}

/// Point every `tsv = ...` line of a manifest at `tsv_file`
///
/// Other lines are kept byte for byte.
pub fn update_tsv_reference(content: &str, tsv_file: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with("tsv") && trimmed.contains('=') {
                format!("tsv = {tsv_file}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest() {
        let manifest = default_manifest("routes_mod", "routes_mod.tsv");
        assert!(manifest.starts_with("[ModMeta]\nschema=1\nname=routes_mod\n"));
        assert!(manifest.contains("author=shape2poi\n"));
        assert!(manifest.contains("[POILayer]\nid = routes_mod_pois\n"));
        assert!(manifest.contains("name = routes_mod POIs\n"));
        assert!(manifest.ends_with("tsv = routes_mod.tsv\n"));
    }

    #[test]
    fn test_update_tsv_reference() {
        let content = "[POILayer]\nid = custom\n  tsv=old.tsv\nname = Custom\n";
        assert_eq!(
            update_tsv_reference(content, "new.tsv"),
            "[POILayer]\nid = custom\ntsv = new.tsv\nname = Custom\n"
        );
    }

    #[test]
    fn test_update_without_reference_is_unchanged() {
        let content = "[ModMeta]\nname=x\ntsvfile\n";
        assert_eq!(update_tsv_reference(content, "new.tsv"), content);
    }

    #[test]
    fn test_update_every_layer() {
        let content = "[A]\ntsv = a.tsv\n[B]\ntsv = b.tsv";
        assert_eq!(
            update_tsv_reference(content, "c.tsv"),
            "[A]\ntsv = c.tsv\n[B]\ntsv = c.tsv"
        );
    }
}
