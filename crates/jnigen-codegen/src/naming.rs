//! Naming convention utilities for code generation.
//!
//! Wire-level field names are snake_case; the managed object model exposes
//! them as camelCase accessors.

/// Convert snake_case to camelCase.
///
/// # Examples
///
/// ```
/// use jnigen_codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("sw_if_index"), "swIfIndex");
/// assert_eq!(to_camel_case("address"), "address");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push_str(&c.to_uppercase().to_string());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn to_camel_case___converts_snake_case() {
        assert_eq!(to_camel_case("sw_if_index"), "swIfIndex");
        assert_eq!(to_camel_case("prefix_len"), "prefixLen");
        assert_eq!(to_camel_case("foo_bar_baz"), "fooBarBaz");
    }

    #[test]
    fn to_camel_case___handles_simple_words() {
        assert_eq!(to_camel_case("address"), "address");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn to_camel_case___handles_consecutive_underscores() {
        assert_eq!(to_camel_case("foo__bar"), "fooBar");
        assert_eq!(to_camel_case("_leading"), "Leading");
        assert_eq!(to_camel_case("trailing_"), "trailing");
    }
}
