//! Check operation - manifest validation.

use std::path::Path;

use synops_manifest::Manifest;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Structural errors already stopped the manifest from loading, so only
/// warnings remain to be reported.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let mut kinds = std::collections::BTreeMap::new();
    for entity in manifest.file.walk().skip(1) {
        *kinds.entry(entity.kind.name()).or_insert(0) += 1;
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        file_name: manifest.file.name.clone(),
        kinds: kinds.into_iter().collect(),
        warnings: manifest.warnings.iter().map(ToString::to_string).collect(),
    }
}
