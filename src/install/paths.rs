use std::path::{Path, PathBuf};

use crate::platform::PlatformKey;

/// Catalog entry for a tool and target: `<tool>-<os>-<arch>[.exe]`.
pub(crate) fn source_path(catalog_dir: &Path, tool: &str, key: PlatformKey) -> PathBuf {
    catalog_dir.join(format!("{}-{}{}", tool, key, key.os.exe_suffix()))
}

/// Canonical installed name: `<tool>[.exe]`.
pub(crate) fn dest_path(catalog_dir: &Path, tool: &str, key: PlatformKey) -> PathBuf {
    catalog_dir.join(format!("{}{}", tool, key.os.exe_suffix()))
}
