//! Naming convention utilities for emitted TypeScript.

/// Convert a method name to lowerCamelCase.
///
/// Handles snake_case and PascalCase input; the conversion is a pure
/// function of the source name, so emitted names are deterministic.
///
/// # Examples
///
/// ```
/// use protots_core::to_camel_case;
///
/// assert_eq!(to_camel_case("List"), "list");
/// assert_eq!(to_camel_case("get_user"), "getUser");
/// assert_eq!(to_camel_case("GetUserById"), "getUserById");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for (i, c) in s.chars().enumerate() {
        if c == '_' {
            capitalize_next = true;
        } else if i == 0 {
            result.extend(c.to_lowercase());
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
