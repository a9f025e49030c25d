//! swagdoc — extract OpenAPI annotations from source files.
//!
//! Two kinds of input are understood:
//!
//! - **doc comments**: `/** ... */` blocks (and CoffeeScript `### ... ###`
//!   blocks) carrying `@swagger` or `@openapi` tags whose body is YAML;
//! - **YAML documents**: `.yaml`/`.yml` files taken as one fragment each.
//!
//! [`extract_annotations`] handles one file and returns its [`AnnotationSet`].
//! [`validate_options`] checks the options object before any file is read.

pub mod classify;
pub mod error;
pub mod model;
pub mod options;
pub mod parser;
pub mod reader;
pub mod render;
pub mod tags;

pub use classify::extract_yaml_from_jsdoc;
pub use error::{OptionsError, ReadError};
pub use model::{AnnotationSet, DocTag, FileAnnotations, ParsedDoc, SourceFile, SyntaxFamily, Tag};
pub use options::{has_empty_property, validate_options, Options};
pub use reader::DEFAULT_ENCODING;
pub use tags::{is_tag_present_in_tags, push_unique_tag};

use std::path::Path;

/// Read `path` with `encoding` (UTF-8 when `None`) and extract its annotations.
///
/// Any read failure aborts the file; no partial set is returned.
pub fn extract_annotations(path: &Path, encoding: Option<&str>) -> Result<AnnotationSet, ReadError> {
    let source = SourceFile::resolve(path);
    let text = reader::read(&source.path, encoding.unwrap_or(DEFAULT_ENCODING))?;
    Ok(parser::annotate(&source, &text))
}
