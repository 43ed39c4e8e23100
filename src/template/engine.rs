//! Placeholder substitution engine.
//!
//! Templates are plain text with `{{ name }}` placeholders. The generated
//! files are shell scripts, compose files and Dockerfiles, all of which use
//! single braces for their own interpolation (`${PORT}`), so only a doubled
//! brace opens a placeholder. Single `{` and `}` pass through untouched.
//!
//! # Syntax
//!
//! - `{{ name }}` - Substitutes the value of variable `name` (whitespace
//!   around the name is ignored)
//! - `{` / `}` - Rendered literally
//!
//! # Error Handling
//!
//! Undefined variables are an error rather than an empty substitution, so a
//! typo in a template surfaces as a render failure instead of a silently
//! broken output file.

use std::collections::HashMap;
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Error type for template rendering failures.
///
/// Positions are byte offsets of the opening `{{` in the template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder named a variable that is not in the context.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{{` was found without a closing `}}`.
    #[error("unterminated placeholder at position {position} in template")]
    UnterminatedPlaceholder { position: usize },

    /// A placeholder with no name (e.g., `{{ }}`).
    #[error("empty placeholder at position {position} in template")]
    EmptyPlaceholder { position: usize },
}

/// Render a template string by substituting `{{ name }}` placeholders.
///
/// Returns the rendered text, or the first [`TemplateError`] encountered
/// scanning left to right.
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut cursor = 0;

    while let Some(offset) = template[cursor..].find(OPEN) {
        let position = cursor + offset;
        result.push_str(&template[cursor..position]);

        let name_start = position + OPEN.len();
        let name_len = template[name_start..]
            .find(CLOSE)
            .ok_or(TemplateError::UnterminatedPlaceholder { position })?;

        let name = template[name_start..name_start + name_len].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyPlaceholder { position });
        }

        let value = variables
            .get(name)
            .ok_or_else(|| TemplateError::UndefinedVariable {
                name: name.to_string(),
                position,
            })?;
        result.push_str(value);

        cursor = name_start + name_len + CLOSE.len();
    }

    result.push_str(&template[cursor..]);
    Ok(result)
}

/// Helper to create a variables map from a list of key-value pairs.
#[cfg(test)]
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
