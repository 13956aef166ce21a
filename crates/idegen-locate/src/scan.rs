//! Recursive search for directories holding a marker file.

use idegen_core::util::fs::is_directory;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Every directory under `base`, `base` included, that directly contains
/// an entry named `file_name`.
///
/// Directories are visited parent before children with siblings in name
/// order. Unreadable directories and symlink loops are skipped. A missing
/// `base` yields an empty list.
pub fn subdirectories_with_file(base: impl AsRef<Path>, file_name: &str) -> Vec<PathBuf> {
    let base = base.as_ref();
    if !is_directory(base) {
        return Vec::new();
    }

    WalkDir::new(base)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                trace!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir() && entry.path().join(file_name).exists())
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_subdirectories_with_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for dir in ["app", "app/lib", "app/lib/vendor", "docs", "zeta"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        for file in ["package.json", "app/package.json", "app/lib/vendor/package.json", "zeta/package.json"] {
            fs::write(root.join(file), "{}").unwrap();
        }

        let found = subdirectories_with_file(root, "package.json");
        assert_eq!(
            found,
            vec![
                root.to_path_buf(),
                root.join("app"),
                root.join("app/lib/vendor"),
                root.join("zeta"),
            ]
        );
    }

    #[test]
    fn test_missing_base_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(subdirectories_with_file(temp_dir.path().join("absent"), "package.json").is_empty());
    }
}
