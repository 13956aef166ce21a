//! Filesystem utilities.
//!
//! Read-only helpers never fail: a path that can't be inspected is treated
//! as absent. Helpers that write propagate I/O errors.

use idegen_types::{ConflictAction, IdegenError, Result};
use regex::Regex;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Lexically normalize a path.
///
/// Drops `.` components and folds `..` into the preceding normal
/// component. Leading `..` on a relative path is kept; `..` directly under
/// a root is dropped. The filesystem is not consulted.
pub fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Read entire file as string (slurp).
pub fn slurp(path: impl AsRef<Path>) -> Result<String> {
    fs::read_to_string(path).map_err(Into::into)
}

/// Whether `path` exists and is a directory (symlinks followed).
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Whether `path` exists and is a regular file (symlinks followed).
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Create a directory and its parents; nothing happens if it already exists.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !is_directory(path) {
        trace!("Creating directory {:?}", path);
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Copy a file, creating the destination's parent directories.
///
/// A missing source is reported as `Validation` rather than a raw I/O error.
pub fn copy_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<()> {
    let (source, destination) = (source.as_ref(), destination.as_ref());

    if !file_exists(source) {
        return Err(IdegenError::Validation(format!(
            "Source is not a file: {:?}",
            source
        )));
    }
    if let Some(parent) = destination.parent() {
        ensure_dir(parent)?;
    }
    fs::copy(source, destination)?;
    Ok(())
}

/// Outcome of a recursive copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Destination files written
    pub written: Vec<PathBuf>,
    /// Destination files left alone after a conflict
    pub skipped: Vec<PathBuf>,
    /// Destination files that already had identical content
    pub unchanged: Vec<PathBuf>,
}

/// Recursively copy `source` into `destination`, replacing existing files.
///
/// Returns the number of files copied.
pub fn copy_tree(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<usize> {
    let report = copy_tree_with_conflicts(source, destination, &mut |_: &Path| ConflictAction::Overwrite)?;
    Ok(report.written.len())
}

/// Recursively copy `source` into `destination`, asking before replacing.
///
/// Destination files with identical content are left alone silently. For
/// every other existing destination file `on_conflict` decides whether it
/// is overwritten.
pub fn copy_tree_with_conflicts(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    on_conflict: &mut dyn FnMut(&Path) -> ConflictAction,
) -> Result<CopyReport> {
    let (source, destination) = (source.as_ref(), destination.as_ref());

    if !is_directory(source) {
        return Err(IdegenError::Validation(format!(
            "Source is not a directory: {:?}",
            source
        )));
    }

    ensure_dir(destination)?;
    let mut report = CopyReport::default();

    for entry in WalkDir::new(source).min_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            idegen_types::bug!("walked path {:?} is outside {:?}", entry.path(), source);
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
            continue;
        }

        if target.exists() {
            if same_contents(entry.path(), &target)? {
                trace!("Unchanged {:?}", target);
                report.unchanged.push(target);
                continue;
            }
            if on_conflict(&target) == ConflictAction::Skip {
                debug!("Keeping existing {:?}", target);
                report.skipped.push(target);
                continue;
            }
        }

        fs::copy(entry.path(), &target)?;
        trace!("Copied {:?} -> {:?}", entry.path(), target);
        report.written.push(target);
    }

    Ok(report)
}

fn same_contents(a: &Path, b: &Path) -> Result<bool> {
    let (meta_a, meta_b) = (fs::metadata(a)?, fs::metadata(b)?);
    if !meta_b.is_file() || meta_a.len() != meta_b.len() {
        return Ok(false);
    }
    Ok(fs::read(a)? == fs::read(b)?)
}

/// Names of the regular files directly inside `directory` matching `pattern`.
fn matching_files(pattern: &Regex, directory: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if pattern.is_match(&name) && file_exists(entry.path()) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Copy the files directly inside `source` whose names match `pattern`.
///
/// Returns the number of files copied.
pub fn copy_files_matching(
    pattern: &Regex,
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<usize> {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    ensure_dir(destination)?;

    let names = matching_files(pattern, source)?;
    for name in &names {
        fs::copy(source.join(name), destination.join(name))?;
    }
    Ok(names.len())
}

/// Delete the files directly inside `location` whose names match `pattern`.
///
/// Directories are never removed. Returns the number of files deleted.
pub fn unlink_files_matching(pattern: &Regex, location: impl AsRef<Path>) -> Result<usize> {
    let location = location.as_ref();

    let names = matching_files(pattern, location)?;
    for name in &names {
        fs::remove_file(location.join(name))?;
    }
    Ok(names.len())
}

/// Replace every matching file in `destination` with the matching files
/// from `source`.
///
/// Matching destination files with no counterpart in `source` are removed
/// too. Returns the number of files copied.
pub fn replace_files_matching(
    pattern: &Regex,
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<usize> {
    let destination = destination.as_ref();
    if is_directory(destination) {
        unlink_files_matching(pattern, destination)?;
    }
    copy_files_matching(pattern, source, destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/opt/./jetbrains/../JetBrains/"), PathBuf::from("/opt/JetBrains"));
        assert_eq!(normalize_path("/.."), PathBuf::from("/"));
        assert_eq!(normalize_path("../a/./b/.."), PathBuf::from("../a"));
        assert_eq!(normalize_path("a/.."), PathBuf::from("."));
    }

    #[test]
    fn test_is_directory_and_file_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("f.txt");
        write(&file, "x");

        assert!(is_directory(temp_dir.path()));
        assert!(!is_directory(&file));
        assert!(file_exists(&file));
        assert!(!file_exists(temp_dir.path()));
        assert!(!file_exists(temp_dir.path().join("missing")));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_copy_file_requires_source() {
        let temp_dir = TempDir::new().unwrap();
        let result = copy_file(temp_dir.path().join("nope"), temp_dir.path().join("out"));
        assert!(matches!(result, Err(IdegenError::Validation(_))));

        let source = temp_dir.path().join("in.txt");
        write(&source, "data");
        copy_file(&source, temp_dir.path().join("deep").join("out.txt")).unwrap();
        assert_eq!(slurp(temp_dir.path().join("deep").join("out.txt")).unwrap(), "data");
    }

    #[test]
    fn test_copy_tree() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        write(&source.join("tools").join("External Tools.xml"), "<tools/>");
        write(&source.join("readme"), "hi");

        let dest = temp_dir.path().join("dest");
        assert_eq!(copy_tree(&source, &dest).unwrap(), 2);
        assert_eq!(slurp(dest.join("tools").join("External Tools.xml")).unwrap(), "<tools/>");
    }

    #[test]
    fn test_copy_tree_with_conflicts() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        write(&source.join("same.xml"), "same");
        write(&source.join("keep.xml"), "new");
        write(&source.join("replace.xml"), "new");
        write(&source.join("fresh.xml"), "new");

        let dest = temp_dir.path().join("dest");
        write(&dest.join("same.xml"), "same");
        write(&dest.join("keep.xml"), "old");
        write(&dest.join("replace.xml"), "old");

        let mut asked = Vec::new();
        let report = copy_tree_with_conflicts(&source, &dest, &mut |path: &Path| {
            asked.push(path.file_name().unwrap().to_string_lossy().into_owned());
            if path.ends_with("keep.xml") {
                ConflictAction::Skip
            } else {
                ConflictAction::Overwrite
            }
        })
        .unwrap();

        assert_eq!(asked, vec!["keep.xml", "replace.xml"]);
        assert_eq!(report.written, vec![dest.join("fresh.xml"), dest.join("replace.xml")]);
        assert_eq!(report.skipped, vec![dest.join("keep.xml")]);
        assert_eq!(report.unchanged, vec![dest.join("same.xml")]);
        assert_eq!(slurp(dest.join("keep.xml")).unwrap(), "old");
        assert_eq!(slurp(dest.join("replace.xml")).unwrap(), "new");
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let result = copy_tree(temp_dir.path().join("absent"), temp_dir.path().join("dest"));
        assert!(matches!(result, Err(IdegenError::Validation(_))));
    }

    #[test]
    fn test_replace_files_matching() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        write(&source.join("run.xml"), "fresh");
        write(&source.join("notes.txt"), "ignored");

        let dest = temp_dir.path().join("dest");
        write(&dest.join("stale.xml"), "stale");
        write(&dest.join("keep.txt"), "kept");
        fs::create_dir_all(dest.join("dir.xml")).unwrap();

        let pattern = Regex::new(r"\.xml$").unwrap();
        assert_eq!(replace_files_matching(&pattern, &source, &dest).unwrap(), 1);

        assert!(!dest.join("stale.xml").exists());
        assert!(dest.join("dir.xml").is_dir());
        assert_eq!(slurp(dest.join("run.xml")).unwrap(), "fresh");
        assert_eq!(slurp(dest.join("keep.txt")).unwrap(), "kept");
        assert!(!dest.join("notes.txt").exists());
    }
}
