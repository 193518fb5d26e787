#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Casing transforms for generated file names and identifiers.

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};

/// `UserProfile` / `user profile` -> `user-profile`
pub fn dasherize(name: &str) -> String {
    name.to_kebab_case()
}

/// `user-profile` -> `UserProfile`
pub fn classify(name: &str) -> String {
    name.to_upper_camel_case()
}

/// `user-profile` -> `userProfile`
pub fn camelize(name: &str) -> String {
    name.to_lower_camel_case()
}
