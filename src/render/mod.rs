//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod text;
pub mod yaml;

use crate::model::FileAnnotations;
use anyhow::{anyhow, Result};

/// Trait for rendering extracted annotations into a specific output format.
pub trait Renderer {
    fn render(&self, files: &[FileAnnotations]) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "json" => Ok(Box::new(json::JsonRenderer)),
        "yaml" | "yml" => Ok(Box::new(yaml::YamlRenderer)),
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use json, yaml, or text", format)),
    }
}
