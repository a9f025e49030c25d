//! Parser module — dispatch by syntax family.

pub mod comments;
pub mod jsdoc;

use crate::classify;
use crate::model::{AnnotationSet, SourceFile, SyntaxFamily};

/// Parse a single extracted block according to its family.
pub fn parse_block(block: &str, family: SyntaxFamily) -> crate::model::ParsedDoc {
    match family {
        SyntaxFamily::Plain => jsdoc::parse(block),
        SyntaxFamily::YamlDocument => jsdoc::parse_document(block),
    }
}

/// Extract, parse and classify every annotation block of already-decoded text.
pub fn annotate(source: &SourceFile, text: &str) -> AnnotationSet {
    let normalized = comments::normalize(text, source.dialect);
    let mut set = AnnotationSet::default();

    for block in comments::extract(&normalized, source.family) {
        let doc = parse_block(block, source.family);
        classify::classify(&mut set, source.family, block, &doc);
    }

    tracing::debug!(
        path = %source.path.display(),
        family = ?source.family,
        yaml = set.yaml.len(),
        jsdoc = set.jsdoc.len(),
        "extracted annotations"
    );
    set
}
