//! Routing of parsed blocks into the `yaml` and `jsdoc` channels.

use crate::model::{AnnotationSet, ParsedDoc, SyntaxFamily};

/// Tag titles whose body is an OpenAPI YAML fragment.
const RESERVED_TITLES: &[&str] = &["swagger", "openapi"];

fn is_reserved(title: &str) -> bool {
    RESERVED_TITLES.iter().any(|r| r.eq_ignore_ascii_case(title))
}

/// Bodies of every `@swagger`/`@openapi` tag, in tag order, verbatim.
pub fn extract_yaml_from_jsdoc(doc: &ParsedDoc) -> Vec<String> {
    doc.tags
        .iter()
        .filter(|tag| is_reserved(&tag.title))
        .map(|tag| tag.description.clone())
        .collect()
}

/// Route one extracted block into `set`.
///
/// YAML documents go to `yaml` when non-blank. Doc comment blocks are kept
/// verbatim under `jsdoc` for the consumer to parse; blocks that parsed to
/// nothing at all are dropped.
pub fn classify(set: &mut AnnotationSet, family: SyntaxFamily, raw: &str, doc: &ParsedDoc) {
    match family {
        SyntaxFamily::YamlDocument => {
            if !doc.description.is_empty() {
                set.yaml.push(doc.description.clone());
            }
        }
        SyntaxFamily::Plain => {
            if doc.is_empty() || raw.is_empty() {
                tracing::trace!("dropping empty comment block");
                return;
            }
            set.jsdoc.push(raw.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocTag;

    fn doc_with(tags: &[(&str, &str)]) -> ParsedDoc {
        ParsedDoc {
            description: String::new(),
            tags: tags
                .iter()
                .map(|(t, d)| DocTag {
                    title: t.to_string(),
                    description: d.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn ignores_other_tags() {
        let doc = doc_with(&[("coverage", "for else path")]);
        assert!(extract_yaml_from_jsdoc(&doc).is_empty());
    }

    #[test]
    fn reserved_titles_any_case() {
        let doc = doc_with(&[
            ("Swagger", "/a:\n  get: {}"),
            ("param", "id"),
            ("OPENAPI", "/b:\n  post: {}"),
        ]);
        assert_eq!(
            extract_yaml_from_jsdoc(&doc),
            vec!["/a:\n  get: {}".to_string(), "/b:\n  post: {}".to_string()]
        );
    }

    #[test]
    fn yaml_document_goes_to_yaml_only() {
        let mut set = AnnotationSet::default();
        let doc = ParsedDoc {
            description: "parameters: {}\n".to_string(),
            tags: Vec::new(),
        };
        classify(&mut set, SyntaxFamily::YamlDocument, "parameters: {}\n", &doc);
        assert_eq!(set.yaml, vec!["parameters: {}\n".to_string()]);
        assert!(set.jsdoc.is_empty());
    }

    #[test]
    fn blank_yaml_document_is_dropped() {
        let mut set = AnnotationSet::default();
        classify(&mut set, SyntaxFamily::YamlDocument, "\n", &ParsedDoc::default());
        assert!(set.is_empty());
    }

    #[test]
    fn doc_blocks_are_kept_verbatim() {
        let mut set = AnnotationSet::default();
        let raw = "/**\n * @swagger\n * /x:\n */";
        let doc = doc_with(&[("swagger", "/x:")]);
        classify(&mut set, SyntaxFamily::Plain, raw, &doc);
        assert_eq!(set.jsdoc, vec![raw.to_string()]);
        assert!(set.yaml.is_empty());
    }

    #[test]
    fn empty_doc_block_is_dropped() {
        let mut set = AnnotationSet::default();
        classify(&mut set, SyntaxFamily::Plain, "/** */", &ParsedDoc::default());
        assert!(set.is_empty());
    }
}
