//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the per-file annotation sets directly.

use crate::model::FileAnnotations;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, files: &[FileAnnotations]) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(files).context("failed to serialize annotations")?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnnotationSet;

    #[test]
    fn flattens_channels_next_to_source() {
        let files = vec![FileAnnotations {
            source: "routes.js".to_string(),
            annotations: AnnotationSet {
                yaml: vec![],
                jsdoc: vec!["/** @swagger */".to_string()],
            },
        }];
        let out = JsonRenderer.render(&files).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["source"], "routes.js");
        assert_eq!(value[0]["yaml"], serde_json::json!([]));
        assert_eq!(value[0]["jsdoc"][0], "/** @swagger */");
    }
}
