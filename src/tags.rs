//! Tag list membership, used when merging tag declarations across files.

use crate::model::Tag;

pub fn is_tag_present_in_tags(tag: &Tag, tags: &[Tag]) -> bool {
    tags.iter().any(|t| t == tag)
}

/// Append `tag` unless an identical one is already registered.
/// Returns whether it was added.
pub fn push_unique_tag(tags: &mut Vec<Tag>, tag: Tag) -> bool {
    if is_tag_present_in_tags(&tag, tags) {
        return false;
    }
    tags.push(tag);
    true
}
