//! Versioned path resolution.

use crate::segment::PathSegment;
use crate::version::sort_ranked;
use idegen_core::util::fs::{file_exists, is_directory, normalize_path};
use idegen_types::MalformedVersionPolicy;
use regex::Regex;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// Resolves paths containing version-qualified directory names.
///
/// Holds only the ranking policy, so it is cheap to copy into blocking
/// tasks. All lookups re-read the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionedPathResolver {
    policy: MalformedVersionPolicy,
}

impl VersionedPathResolver {
    /// Resolver with the default ranking policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver ranking unversioned names according to `policy`.
    pub fn with_policy(policy: MalformedVersionPolicy) -> Self {
        Self { policy }
    }

    /// Return the first candidate that exists and is a directory.
    ///
    /// Candidates are normalized lexically before the check. `None` when no
    /// candidate qualifies.
    pub fn resolve_first_existing_root<I, P>(&self, candidates: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        candidates
            .into_iter()
            .map(normalize_path)
            .find(|candidate| {
                let found = is_directory(candidate);
                trace!("Root candidate {:?}: {}", candidate, if found { "present" } else { "absent" });
                found
            })
    }

    /// Names of the subdirectories of `directory` matching `pattern`, best
    /// version first.
    ///
    /// A missing or unreadable `directory` yields an empty list. Entries
    /// that match but are not directories are left out.
    pub fn find_matching_subdirectories(&self, directory: impl AsRef<Path>, pattern: &Regex) -> Vec<String> {
        let directory = directory.as_ref();

        let Ok(entries) = fs::read_dir(directory) else {
            trace!("Cannot list {:?}", directory);
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                (pattern.is_match(&name) && is_directory(entry.path())).then_some(name)
            })
            .collect();

        sort_ranked(&mut names, self.policy);
        trace!("Matches for /{}/ in {:?}: {:?}", pattern.as_str(), directory, names);
        names
    }

    /// Walk `segments` from `base`, returning the concrete path when every
    /// step exists.
    ///
    /// Before each segment the path built so far must exist. A pattern
    /// segment takes the best-ranked matching subdirectory. The result is
    /// absolute and normalized; `None` if any step or the final path is
    /// missing.
    pub fn resolve_versioned_path(&self, base: impl AsRef<Path>, segments: &[PathSegment]) -> Option<PathBuf> {
        let mut current = absolute(base.as_ref());

        for segment in segments {
            if !current.exists() {
                trace!("Stopped at missing {:?}", current);
                return None;
            }

            match segment {
                // A root in the literal is dropped so the walk stays below `base`
                PathSegment::Literal(name) => current.extend(
                    Path::new(name)
                        .components()
                        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_))),
                ),
                PathSegment::Pattern(pattern) => {
                    let best = self.find_matching_subdirectories(&current, pattern).into_iter().next()?;
                    debug!("Selected {:?} in {:?} for /{}/", best, current, pattern.as_str());
                    current.push(best);
                }
            }
        }

        let resolved = normalize_path(&current);
        if resolved.exists() {
            Some(resolved)
        } else {
            trace!("Final path {:?} is missing", resolved);
            None
        }
    }

    /// Find an executable below the first existing install root.
    ///
    /// Picks the root with [`resolve_first_existing_root`](Self::resolve_first_existing_root),
    /// descends into the best directory matching `version_pattern`, then
    /// through `trailing` and finally requires `executable` to be a file
    /// there. Roots after the first existing one are never searched.
    pub fn resolve_executable_across_roots<I, P>(
        &self,
        roots: I,
        version_pattern: &Regex,
        trailing: &[PathSegment],
        executable: &str,
    ) -> Option<PathBuf>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let root = self.resolve_first_existing_root(roots)?;

        let segments: Vec<PathSegment> = std::iter::once(PathSegment::Pattern(version_pattern.clone()))
            .chain(trailing.iter().cloned())
            .collect();
        let directory = self.resolve_versioned_path(&root, &segments)?;

        let candidate = directory.join(executable);
        if file_exists(&candidate) {
            debug!("Found executable {:?}", candidate);
            Some(candidate)
        } else {
            trace!("No executable {:?} in {:?}", executable, directory);
            None
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// [`VersionedPathResolver::resolve_first_existing_root`] with the default policy.
pub fn resolve_first_existing_root<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    VersionedPathResolver::new().resolve_first_existing_root(candidates)
}

/// [`VersionedPathResolver::find_matching_subdirectories`] with the default policy.
pub fn find_matching_subdirectories(directory: impl AsRef<Path>, pattern: &Regex) -> Vec<String> {
    VersionedPathResolver::new().find_matching_subdirectories(directory, pattern)
}

/// [`VersionedPathResolver::resolve_versioned_path`] with the default policy.
pub fn resolve_versioned_path(base: impl AsRef<Path>, segments: &[PathSegment]) -> Option<PathBuf> {
    VersionedPathResolver::new().resolve_versioned_path(base, segments)
}

/// [`VersionedPathResolver::resolve_executable_across_roots`] with the default policy.
pub fn resolve_executable_across_roots<I, P>(
    roots: I,
    version_pattern: &Regex,
    trailing: &[PathSegment],
    executable: &str,
) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    VersionedPathResolver::new().resolve_executable_across_roots(roots, version_pattern, trailing, executable)
}
