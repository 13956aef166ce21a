//! # idegen Locate
//!
//! Finds installed applications whose directory names carry a version that
//! the caller doesn't know in advance, such as
//! `C:/Program Files/JetBrains/WebStorm 2021.1/bin`.
//!
//! A lookup is a base directory plus a list of [`PathSegment`]s. Literal
//! segments are appended as given; pattern segments are matched against the
//! subdirectories of the path built so far and the highest version wins.
//! Any missing step makes the whole lookup return `None`: a partially built
//! path is never returned.
//!
//! Every lookup is a read-only, blocking query against the filesystem at
//! call time. Nothing is cached.
//!
//! ## Example
//!
//! ```no_run
//! use idegen_locate::{PathSegment, VersionedPathResolver};
//!
//! # fn main() -> idegen_types::Result<()> {
//! let resolver = VersionedPathResolver::new();
//! let bin = resolver.resolve_versioned_path(
//!     "/opt",
//!     &[PathSegment::pattern(r"^jetbrains-webstorm.*$")?, PathSegment::literal("bin")],
//! );
//! println!("{:?}", bin);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod resolver;
pub mod scan;
pub mod segment;
pub mod task;
pub mod version;

pub use resolver::{
    find_matching_subdirectories, resolve_executable_across_roots, resolve_first_existing_root,
    resolve_versioned_path, VersionedPathResolver,
};
pub use scan::subdirectories_with_file;
pub use segment::PathSegment;
pub use version::{compare_ranked, trailing_version};
