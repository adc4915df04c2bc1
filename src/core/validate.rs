use super::constants::{NAME_MAX_LEN, NAME_MIN_LEN};
use super::error::ValidationError;

/// A trimmed name that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whitespace as a browser's `\s` and `String.prototype.trim` see it:
/// WhiteSpace plus LineTerminator. Differs from `char::is_whitespace`
/// (no U+0085, adds U+FEFF).
#[inline]
pub fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || is_js_space(c)
}

/// Trim `raw` and accept it when it is 5..=20 ASCII letters or whitespace.
pub fn validate_name(raw: &str) -> Result<Name, ValidationError> {
    let trimmed = raw.trim_matches(is_js_space);
    if let Some(bad) = trimmed.chars().find(|c| !is_name_char(*c)) {
        return Err(ValidationError::InvalidCharacter(bad));
    }
    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN {
        return Err(ValidationError::TooShort { len });
    }
    if len > NAME_MAX_LEN {
        return Err(ValidationError::TooLong { len });
    }
    Ok(Name(trimmed.to_string()))
}
