//! YAML renderer — one document per fragment.
//!
//! Fragments are emitted as-is, separated by `---` and preceded by a
//! comment naming their source file. Doc comment blocks are not YAML and
//! are left out.

use crate::model::FileAnnotations;
use crate::render::Renderer;
use anyhow::Result;

pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn render(&self, files: &[FileAnnotations]) -> Result<String> {
        let mut out = String::new();
        for file in files {
            for fragment in &file.annotations.yaml {
                out.push_str("---\n");
                out.push_str(&format!("# {}\n", file.source));
                out.push_str(fragment);
                if !fragment.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnnotationSet;

    #[test]
    fn separates_fragments() {
        let files = vec![
            FileAnnotations {
                source: "a.js".to_string(),
                annotations: AnnotationSet {
                    yaml: vec!["/a:\n  get: {}".to_string()],
                    jsdoc: vec!["/** @param x */".to_string()],
                },
            },
            FileAnnotations {
                source: "b.yaml".to_string(),
                annotations: AnnotationSet {
                    yaml: vec!["components: {}\n".to_string()],
                    jsdoc: vec![],
                },
            },
        ];
        assert_eq!(
            YamlRenderer.render(&files).unwrap(),
            "---\n# a.js\n/a:\n  get: {}\n---\n# b.yaml\ncomponents: {}\n"
        );
    }

    #[test]
    fn nothing_to_render() {
        assert_eq!(YamlRenderer.render(&[]).unwrap(), "");
    }
}
