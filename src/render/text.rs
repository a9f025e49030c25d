//! Plain-text renderer for reading extraction results in a terminal.

use crate::model::FileAnnotations;
use crate::render::Renderer;
use anyhow::Result;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, files: &[FileAnnotations]) -> Result<String> {
        let mut out = String::new();
        for file in files {
            let set = &file.annotations;
            out.push_str(&format!(
                "{} ({} yaml, {} jsdoc)\n",
                file.source,
                set.yaml.len(),
                set.jsdoc.len()
            ));
            write_section(&mut out, "yaml", &set.yaml);
            write_section(&mut out, "jsdoc", &set.jsdoc);
        }
        Ok(out)
    }
}

fn write_section(out: &mut String, label: &str, entries: &[String]) {
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("  [{} #{}]\n", label, i + 1));
        for line in entry.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
}
