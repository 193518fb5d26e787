//! Decorator site lookup: `@Decorator({ key: [ ... ] })` on a top-level class.

use crate::parser::{ExprNode, ObjectLiteral, SourceDocument, TextRange};
use tracing::debug;

/// A located registration array inside a decorator's configuration object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSite {
    /// Decorator name, e.g. `NgModule`.
    pub decorator_name: String,
    /// Property key, e.g. `imports`.
    pub property_key: String,
    /// Range of the array literal, brackets included.
    pub array_range: TextRange,
    /// Ranges of the existing elements in order.
    pub element_ranges: Vec<TextRange>,
}

impl RegistrationSite {
    /// Whether an element with the same text (ignoring whitespace) is already listed.
    pub fn contains(&self, doc: &SourceDocument, element_text: &str) -> bool {
        let wanted = squash(element_text);
        self.element_ranges
            .iter()
            .any(|r| squash(doc.slice(*r)) == wanted)
    }
}

/// Outcome of [`locate_registration_array`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationLookup {
    /// The property exists and holds an array literal.
    Found(RegistrationSite),
    /// The decorator exists but its configuration lacks the property.
    /// Carries the configuration object so a property can be added.
    PropertyMissing(ObjectLiteral),
    /// The property exists but its value is not an array literal
    /// (e.g. a shared constant).
    NotAnArray(TextRange),
    /// No top-level class carries the decorator with an object argument.
    NotFound,
}

/// Finds `propertyKey` in the configuration object of the first top-level
/// class decorated with a call `@decoratorName(...)`. Bare `@decoratorName`
/// decorators are skipped. Read-only.
pub fn locate_registration_array(
    doc: &SourceDocument,
    decorator_name: &str,
    property_key: &str,
) -> RegistrationLookup {
    let arguments = doc.tree().classes().find_map(|class| {
        class
            .decorators
            .iter()
            .filter(|d| d.name == decorator_name)
            .find_map(|d| d.arguments.as_deref())
    });

    let Some(arguments) = arguments else {
        debug!(path = doc.path(), decorator_name, "No decorated class found");
        return RegistrationLookup::NotFound;
    };

    let config = match arguments {
        [ExprNode::Object(config), ..] => config,
        _ => {
            debug!(
                path = doc.path(),
                decorator_name, "Decorator has no configuration object"
            );
            return RegistrationLookup::NotFound;
        }
    };

    match config.property(property_key).map(|p| &p.value) {
        Some(ExprNode::Array(array)) => RegistrationLookup::Found(RegistrationSite {
            decorator_name: decorator_name.to_string(),
            property_key: property_key.to_string(),
            array_range: array.range,
            element_ranges: array.elements.clone(),
        }),
        Some(other @ (ExprNode::Object(_) | ExprNode::Other(_))) => {
            RegistrationLookup::NotAnArray(other.range())
        }
        None => RegistrationLookup::PropertyMissing(config.clone()),
    }
}

fn squash(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
