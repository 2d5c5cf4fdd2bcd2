//! Minimal reader/writer for `style` attribute text
//!
//! This is not a CSS parser. The grammar is: split on `;` into declarations,
//! skip blank ones, split each on its first `:` into property and value, trim
//! both halves. Comments, escapes and `;` inside quoted strings are not
//! understood.

use super::errors::InlineError;

/// One `property: value` pair from a style attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    /// True for `background`/`background-image` values that still point at
    /// an external image
    #[must_use]
    pub fn has_external_background(&self) -> bool {
        matches!(self.property.as_str(), "background-image" | "background")
            && self.value.contains("url(")
            && !self.value.contains("url(data")
    }

    /// The raw reference between the first `(` and the following `)`
    pub fn url_reference(&self) -> Result<&str, InlineError> {
        let malformed = || InlineError::MalformedStyle(format!("{}: {}", self.property, self.value));

        let open = self.value.find('(').ok_or_else(malformed)?;
        let close = self.value[open + 1..].find(')').ok_or_else(malformed)?;
        Ok(&self.value[open + 1..open + 1 + close])
    }
}

/// Split style text into declarations
///
/// A non-blank declaration without a `:` fails the whole attribute.
pub fn parse_declarations(style: &str) -> Result<Vec<Declaration>, InlineError> {
    style
        .split(';')
        .map(str::trim)
        .filter(|declaration| !declaration.is_empty())
        .map(|declaration| {
            let (property, value) = declaration
                .split_once(':')
                .ok_or_else(|| InlineError::MalformedStyle(declaration.to_string()))?;
            Ok(Declaration {
                property: property.trim().to_string(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}

/// Join declarations back into attribute text as `property: value; ...`
#[must_use]
pub fn serialize_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}: {}", d.property, d.value))
        .collect::<Vec<_>>()
        .join("; ")
}
