//! Common utility functions.

pub mod data;
pub mod process;
pub mod fs;

// Re-export commonly used items
pub use data::{deep_merge, load_yaml, load_yaml_file};
pub use process::spawn_detached;
pub use fs::{copy_tree, copy_tree_with_conflicts, ensure_dir, normalize_path, slurp};
