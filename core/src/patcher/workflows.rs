//! High-level patching recipes built from the import locator, the decorator
//! site locator and the augmenters. Each returns a complete `PatchSet` or an
//! error; nothing is partially applied.

use crate::error::{AppError, AppResult};
use crate::parser::{ExprNode, SourceDocument};
use crate::patcher::arrays::append_element;
use crate::patcher::changes::PatchSet;
use crate::patcher::decorators::{locate_registration_array, RegistrationLookup};
use crate::patcher::files::{insert_import, ImportSpecifier};
use crate::patcher::objects::{append_interface_member, append_property};
use tracing::{debug, warn};

/// One entry to register in a decorator array, with the imports it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Element expression, e.g. `EffectsModule.forRoot([AppEffects])`.
    pub element: String,
    /// Imports the element depends on.
    pub imports: Vec<ImportSpecifier>,
    /// Optional registrations are dropped when the site is missing.
    pub required: bool,
}

impl Registration {
    /// A mandatory registration.
    pub fn required(element: impl Into<String>, imports: Vec<ImportSpecifier>) -> Self {
        Self {
            element: element.into(),
            imports,
            required: true,
        }
    }

    /// A registration that may be skipped.
    pub fn optional(element: impl Into<String>, imports: Vec<ImportSpecifier>) -> Self {
        Self {
            required: false,
            ..Self::required(element, imports)
        }
    }
}

/// Registers `registrations` in the `property` array of `@decorator(...)`.
///
/// Imports come first in the patch, then a single element insertion listing
/// every element not already present. When the property is missing it is
/// added as `property: [elements]`.
///
/// # Errors
///
/// `AppError::SiteNotFound` if the site cannot be located (or is not an array
/// literal) and at least one registration is required.
pub fn register_in_decorator(
    doc: &SourceDocument,
    decorator: &str,
    property: &str,
    registrations: &[Registration],
) -> AppResult<PatchSet> {
    let lookup = locate_registration_array(doc, decorator, property);

    if matches!(
        lookup,
        RegistrationLookup::NotFound | RegistrationLookup::NotAnArray(_)
    ) {
        if registrations.iter().any(|r| r.required) {
            return Err(AppError::SiteNotFound {
                path: doc.path().to_string(),
                decorator: decorator.to_string(),
                property: property.to_string(),
            });
        }
        warn!(
            path = doc.path(),
            decorator, property, "Registration site missing, skipping optional entries"
        );
        return Ok(PatchSet::new());
    }

    let mut patch = PatchSet::new();
    for registration in registrations {
        for spec in &registration.imports {
            patch.push_opt(insert_import(doc, spec));
        }
    }

    let mut pending: Vec<&str> = Vec::new();
    for registration in registrations {
        let element = registration.element.as_str();
        let present = match &lookup {
            RegistrationLookup::Found(site) => site.contains(doc, element),
            _ => false,
        };
        if present || pending.contains(&element) {
            debug!(path = doc.path(), element, "Element already registered");
            continue;
        }
        pending.push(element);
    }

    if !pending.is_empty() {
        let elements = pending.join(", ");
        match &lookup {
            RegistrationLookup::Found(site) => patch.push(append_element(site, &elements)),
            RegistrationLookup::PropertyMissing(config) => {
                patch.push(append_property(doc, config, property, &format!("[{elements}]")));
            }
            RegistrationLookup::NotAnArray(_) | RegistrationLookup::NotFound => {}
        }
    }

    Ok(patch)
}

/// A feature state slice to wire into a root state file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRegistration {
    /// Key in the state interface and reducer map, e.g. `users`.
    pub key: String,
    /// Namespace alias of the reducer module, e.g. `fromUsers`.
    pub namespace: String,
    /// Module reference of the reducer file relative to the state file.
    pub module_reference: String,
}

/// Adds `key: ns.State;` to the first interface and `key: ns.reducer` to the
/// `reducers` object of a state file, plus the namespace import.
///
/// Entries whose key already exists are left untouched.
pub fn add_reducer_to_state(
    doc: &SourceDocument,
    registration: &StateRegistration,
) -> AppResult<PatchSet> {
    let StateRegistration {
        key,
        namespace,
        module_reference,
    } = registration;

    let iface = doc.tree().interfaces().next().ok_or_else(|| {
        AppError::General(format!("Could not find a state interface in {}", doc.path()))
    })?;

    let reducers = match doc.tree().variable("reducers").and_then(|v| v.init.as_ref()) {
        Some(ExprNode::Object(object)) => object,
        _ => {
            return Err(AppError::General(format!(
                "Could not find a 'reducers' object literal in {}",
                doc.path()
            )))
        }
    };

    let mut patch = PatchSet::new();
    patch.push_opt(insert_import(
        doc,
        &ImportSpecifier::namespace(namespace.as_str(), module_reference.as_str()),
    ));

    let has_member = iface
        .members
        .iter()
        .any(|m| member_key(doc.slice(*m)) == key);
    if !has_member {
        patch.push(append_interface_member(
            doc,
            iface,
            &format!("{key}: {namespace}.State;"),
        ));
    }

    if reducers.property(key).is_none() {
        patch.push(append_property(
            doc,
            reducers,
            key,
            &format!("{namespace}.reducer"),
        ));
    }

    Ok(patch)
}

/// `readonly users?: fromUsers.State;` -> `users`
fn member_key(member: &str) -> &str {
    let head = member.split(':').next().unwrap_or_default().trim();
    let head = head.strip_prefix("readonly ").unwrap_or(head).trim();
    head.trim_end_matches('?')
}
