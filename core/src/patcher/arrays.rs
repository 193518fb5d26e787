//! Array augmentation: appending one element to a located registration array.

use crate::patcher::changes::{ChangeKind, InsertionChange};
use crate::patcher::decorators::RegistrationSite;

/// Computes the insertion appending `element_text` to the array at `site`.
///
/// An empty array receives the element right after `[`. Otherwise `, element`
/// goes directly after the last element, ahead of any trailing comma, comment
/// or line break, which all stay in place. Existing elements are never rewritten.
pub fn append_element(site: &RegistrationSite, element_text: &str) -> InsertionChange {
    match site.element_ranges.last() {
        None => InsertionChange::new(
            site.array_range.start + 1,
            element_text,
            ChangeKind::ArrayElement,
        ),
        Some(last) => InsertionChange::new(
            last.end,
            format!(", {element_text}"),
            ChangeKind::ArrayElement,
        ),
    }
}
