//! Resolution on tokio's blocking pool.
//!
//! Each call moves one lookup onto `spawn_blocking` so async callers never
//! stall a runtime worker on filesystem probes. Dropping the returned
//! future discards the result; the probe itself is read-only.

use crate::resolver::VersionedPathResolver;
use crate::segment::PathSegment;
use idegen_types::{IdegenError, Result};
use regex::Regex;
use std::path::PathBuf;

async fn blocking<T, F>(job: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| IdegenError::Other(format!("Path resolution task failed: {}", e)))
}

impl VersionedPathResolver {
    /// [`resolve_first_existing_root`](Self::resolve_first_existing_root) on the blocking pool.
    pub async fn first_existing_root_blocking_task(self, candidates: Vec<PathBuf>) -> Result<Option<PathBuf>> {
        blocking(move || self.resolve_first_existing_root(candidates)).await
    }

    /// [`resolve_versioned_path`](Self::resolve_versioned_path) on the blocking pool.
    pub async fn versioned_path_blocking_task(
        self,
        base: PathBuf,
        segments: Vec<PathSegment>,
    ) -> Result<Option<PathBuf>> {
        blocking(move || self.resolve_versioned_path(base, &segments)).await
    }

    /// [`resolve_executable_across_roots`](Self::resolve_executable_across_roots) on the blocking pool.
    pub async fn executable_across_roots_blocking_task(
        self,
        roots: Vec<PathBuf>,
        version_pattern: Regex,
        trailing: Vec<PathSegment>,
        executable: String,
    ) -> Result<Option<PathBuf>> {
        blocking(move || {
            self.resolve_executable_across_roots(roots, &version_pattern, &trailing, &executable)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_versioned_path_blocking_task() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("WebStorm 2021.1").join("bin")).unwrap();

        let resolver = VersionedPathResolver::new();
        let segments = vec![PathSegment::pattern("^WebStorm").unwrap(), PathSegment::literal("bin")];
        let found = resolver
            .versioned_path_blocking_task(temp_dir.path().to_path_buf(), segments)
            .await
            .unwrap();

        assert_eq!(found, Some(temp_dir.path().join("WebStorm 2021.1").join("bin")));
    }

    #[tokio::test]
    async fn test_executable_blocking_task_not_installed() {
        let temp_dir = TempDir::new().unwrap();
        let found = VersionedPathResolver::new()
            .executable_across_roots_blocking_task(
                vec![temp_dir.path().join("absent")],
                Regex::new("^WebStorm").unwrap(),
                vec![PathSegment::literal("bin")],
                "WebStorm.exe".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_first_existing_root_blocking_task() {
        let temp_dir = TempDir::new().unwrap();
        let found = VersionedPathResolver::new()
            .first_existing_root_blocking_task(vec![temp_dir.path().join("absent"), temp_dir.path().to_path_buf()])
            .await
            .unwrap();

        assert_eq!(found, Some(temp_dir.path().to_path_buf()));
    }
}
