//! Data model for extracted annotations — format-agnostic.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Comment convention used to locate annotation blocks in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SyntaxFamily {
    /// `/** ... */` block comments (JavaScript, TypeScript, CoffeeScript after normalization).
    Plain,
    /// The whole file is a single YAML document.
    YamlDocument,
}

/// Source dialects whose block comments must be rewritten before the
/// `/** ... */` scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Block comments already use `/** ... */`.
    CStyle,
    /// `### ... ###` block comments.
    CoffeeScript,
}

/// A resolved input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub family: SyntaxFamily,
    pub dialect: Dialect,
}

impl SourceFile {
    /// Resolve the syntax family and dialect from the file extension.
    /// `.yaml`/`.yml` map to [`SyntaxFamily::YamlDocument`], everything else is plain.
    pub fn resolve(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let (family, dialect) = match ext.as_deref() {
            Some("yaml" | "yml") => (SyntaxFamily::YamlDocument, Dialect::CStyle),
            Some("coffee" | "litcoffee") => (SyntaxFamily::Plain, Dialect::CoffeeScript),
            _ => (SyntaxFamily::Plain, Dialect::CStyle),
        };
        Self {
            path: path.to_path_buf(),
            family,
            dialect,
        }
    }
}

/// One `@title description` entry of a doc comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTag {
    pub title: String,
    pub description: String,
}

/// Parsed doc comment: free text before the first tag, then the tags in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDoc {
    pub description: String,
    pub tags: Vec<DocTag>,
}

impl ParsedDoc {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.description.trim().is_empty()
    }
}

/// Annotations extracted from a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationSet {
    /// Raw YAML fragments, ready to merge.
    pub yaml: Vec<String>,
    /// Verbatim doc comment blocks, to be parsed by the consumer.
    pub jsdoc: Vec<String>,
}

impl AnnotationSet {
    pub fn is_empty(&self) -> bool {
        self.yaml.is_empty() && self.jsdoc.is_empty()
    }

    /// Every YAML fragment this file contributes: the `yaml` channel first,
    /// then the `@swagger`/`@openapi` bodies found in the `jsdoc` blocks.
    pub fn yaml_fragments(&self) -> Vec<String> {
        let mut fragments = self.yaml.clone();
        for block in &self.jsdoc {
            let doc = crate::parser::jsdoc::parse(block);
            fragments.extend(crate::classify::extract_yaml_from_jsdoc(&doc));
        }
        fragments
    }
}

/// Annotations paired with the file they came from.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnnotations {
    pub source: String,
    #[serde(flatten)]
    pub annotations: AnnotationSet,
}

/// An API tag as registered in the top-level `tags` list of a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_yaml_family() {
        assert_eq!(
            SourceFile::resolve("api/parameters.yaml").family,
            SyntaxFamily::YamlDocument
        );
        assert_eq!(
            SourceFile::resolve("api/parameters.YML").family,
            SyntaxFamily::YamlDocument
        );
    }

    #[test]
    fn resolves_plain_family() {
        let js = SourceFile::resolve("routes/users.js");
        assert_eq!(js.family, SyntaxFamily::Plain);
        assert_eq!(js.dialect, Dialect::CStyle);

        let coffee = SourceFile::resolve("routes/login.coffee");
        assert_eq!(coffee.family, SyntaxFamily::Plain);
        assert_eq!(coffee.dialect, Dialect::CoffeeScript);

        assert_eq!(SourceFile::resolve("Makefile").family, SyntaxFamily::Plain);
    }

    #[test]
    fn yaml_fragments_combine_both_channels() {
        let set = AnnotationSet {
            yaml: vec!["parameters: {}\n".to_string()],
            jsdoc: vec![
                "/**\n * @openapi\n * /ping:\n *   get:\n */".to_string(),
                "/**\n * @param {string} id\n */".to_string(),
            ],
        };
        assert_eq!(
            set.yaml_fragments(),
            vec!["parameters: {}\n".to_string(), "/ping:\n  get:".to_string()]
        );
    }
}
