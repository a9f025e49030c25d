//! JSDoc-style block comment parser.
//!
//! Unwraps the comment markers, then walks the body line by line:
//! free text up to the first `@tag` becomes the description, and each
//! `@tag` collects every following line until the next tag.

use crate::model::{DocTag, ParsedDoc};
use regex::Regex;
use std::sync::LazyLock;

// Leading ` * ` continuation markup; at most one space after the star is eaten
// so YAML indentation below it survives.
static RE_LINE_MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]*\*[ \t]?").unwrap());

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*@([A-Za-z_$][\w$.:-]*)(.*)$").unwrap());

/// Parse one raw comment block (delimiters included) into a [`ParsedDoc`].
pub fn parse(block: &str) -> ParsedDoc {
    let body = unwrap(block);

    let mut description: Vec<&str> = Vec::new();
    let mut tags: Vec<(String, Vec<&str>)> = Vec::new();

    for raw in body.lines() {
        let line = RE_LINE_MARKUP.find(raw).map_or(raw, |m| &raw[m.end()..]);

        if let Some(caps) = RE_TAG.captures(line) {
            let title = caps.get(1).map_or("", |m| m.as_str()).to_string();
            let rest = caps.get(2).map_or("", |m| m.as_str()).trim();
            tags.push((title, vec![rest]));
            continue;
        }

        match tags.last_mut() {
            Some((_, lines)) => lines.push(line),
            None => description.push(line),
        }
    }

    ParsedDoc {
        description: description.join("\n").trim().to_string(),
        tags: tags
            .into_iter()
            .map(|(title, lines)| DocTag {
                title,
                description: join_body(&lines),
            })
            .collect(),
    }
}

/// Parse a whole YAML document. It carries no tags; non-blank content is
/// kept verbatim as the description.
pub fn parse_document(text: &str) -> ParsedDoc {
    if text.trim().is_empty() {
        return ParsedDoc::default();
    }
    ParsedDoc {
        description: text.to_string(),
        tags: Vec::new(),
    }
}

/// Strip `/**` (or `/*`) and the closing `*/`.
fn unwrap(block: &str) -> &str {
    let body = block
        .strip_prefix("/**")
        .or_else(|| block.strip_prefix("/*"))
        .unwrap_or(block);
    body.strip_suffix("*/").unwrap_or(body)
}

/// Join a tag's lines, dropping leading blank lines and trailing whitespace
/// but keeping the indentation of the first content line.
fn join_body(lines: &[&str]) -> String {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    lines[start..].join("\n").trim_end().to_string()
}
