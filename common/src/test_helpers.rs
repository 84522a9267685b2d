/// Shared Test Helpers for Cross-Crate Use
///
/// Config loading is file based, so tests across `common` and `ecom` need a
/// throwaway directory holding a handful of YAML files that include each
/// other.
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes each `(relative name, contents)` pair into a fresh temp directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for as long as the files are needed.
pub fn write_config_tree(files: &[(&str, &str)]) -> std::io::Result<TempDir> {
    let dir = tempfile::tempdir()?;
    for (name, contents) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
    }
    Ok(dir)
}

/// Path of `name` inside a tree created by [`write_config_tree`].
pub fn config_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
