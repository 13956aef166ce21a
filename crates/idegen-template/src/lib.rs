//! # idegen Template
//!
//! Renders IDE configuration templates against a context value:
//! - A Handlebars engine configured for verbatim XML output
//! - Single-file rendering, with tokens allowed in the destination file name
//! - Whole template directories copied into place with an overwrite switch

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod materialize;

pub use engine::{render, TemplateEngine};
pub use materialize::{render_dir, render_file, RenderOptions, RenderReport};
