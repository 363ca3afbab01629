//! Minimal `${name}` placeholder templates for emitted fragments

use crate::{CodegenError, CodegenResult};

/// A fixed template with `${name}` placeholders.
///
/// Placeholders are parsed once at construction. Substitution is pure text
/// replacement: every placeholder must receive a value, values for keys the
/// template does not use are ignored, and the content of substituted values
/// is never validated.
#[derive(Debug, Clone)]
pub struct Template {
    name: &'static str,
    text: &'static str,
    placeholders: Vec<String>,
}

impl Template {
    /// Parse a template. `name` identifies the template in error messages.
    pub fn new(name: &'static str, text: &'static str) -> Self {
        Self {
            name,
            text,
            placeholders: parse_placeholders(text),
        }
    }

    /// Placeholder names, deduplicated, in first-appearance order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Fill the template with the given `(key, value)` pairs.
    pub fn substitute(&self, values: &[(&str, &str)]) -> CodegenResult<String> {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                // Unterminated marker; keep the tail literally.
                out.push_str(&rest[start..]);
                return Ok(out);
            };
            let placeholder = &after[..end];
            let value = values
                .iter()
                .find(|(key, _)| *key == placeholder)
                .map(|(_, value)| *value)
                .ok_or_else(|| CodegenError::MissingSubstitution {
                    context: self.name.to_string(),
                    placeholder: placeholder.to_string(),
                })?;
            out.push_str(value);
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

fn parse_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        let name = &after[..end];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        rest = &after[end + 1..];
    }

    names
}
