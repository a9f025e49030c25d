//! Comment block extraction.
//!
//! Locates `/** ... */` blocks (after rewriting CoffeeScript `###` blocks)
//! or, for YAML documents, returns the whole file as one block.

use crate::model::{Dialect, SyntaxFamily};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static RE_DOC_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*\*.*?\*/").unwrap());

static RE_COFFEE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)###(.*?)###").unwrap());

/// Rewrite dialect-specific block comments into `/** ... */` blocks.
///
/// `###\n* @swagger\n###` becomes `/**\n* @swagger\n*/`.
pub fn normalize(text: &str, dialect: Dialect) -> Cow<'_, str> {
    match dialect {
        Dialect::CStyle => Cow::Borrowed(text),
        Dialect::CoffeeScript => RE_COFFEE_BLOCK.replace_all(text, "/**$1*/"),
    }
}

/// Extract candidate annotation blocks from already-normalized text.
pub fn extract(text: &str, family: SyntaxFamily) -> Vec<&str> {
    match family {
        SyntaxFamily::YamlDocument => vec![text],
        SyntaxFamily::Plain => RE_DOC_BLOCK
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|block| {
                let keep = block.contains('@');
                if !keep {
                    tracing::trace!(len = block.len(), "discarding comment without tags");
                }
                keep
            })
            .collect(),
    }
}
