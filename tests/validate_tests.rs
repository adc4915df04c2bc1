// Host-side tests for name validation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod validate {
        include!("../src/core/validate.rs");
    }
}

use crate::core::constants::NAME_ERROR_MESSAGE;
use crate::core::error::ValidationError;
use crate::core::validate::{is_js_space, validate_name};

#[test]
fn accepts_letters_and_spaces() {
    assert_eq!(validate_name("Anna Bell").unwrap().as_str(), "Anna Bell");
    assert_eq!(validate_name("Alice").unwrap().as_str(), "Alice");
    assert_eq!(validate_name("mary jane watson").unwrap().as_str(), "mary jane watson");
}

#[test]
fn trims_before_checking() {
    let name = validate_name("   Alice  \n").unwrap();
    assert_eq!(name.as_str(), "Alice");
    assert_eq!(name.to_string(), "Alice");
    // the surrounding whitespace doesn't count toward the length
    assert_eq!(
        validate_name("  Ann  "),
        Err(ValidationError::TooShort { len: 3 })
    );
}

#[test]
fn interior_whitespace_is_allowed() {
    assert!(validate_name("Anna\tBell").is_ok());
    assert!(validate_name("A B C D E").is_ok());
}

#[test]
fn length_bounds_are_inclusive() {
    for len in 0..=30 {
        let raw = "a".repeat(len);
        let result = validate_name(&raw);
        if (5..=20).contains(&len) {
            assert!(result.is_ok(), "len {len} should pass");
        } else {
            assert!(result.is_err(), "len {len} should fail");
        }
    }
}

#[test]
fn too_short_and_too_long_report_lengths() {
    assert_eq!(validate_name("Anna"), Err(ValidationError::TooShort { len: 4 }));
    assert_eq!(validate_name(""), Err(ValidationError::TooShort { len: 0 }));
    assert_eq!(validate_name("     "), Err(ValidationError::TooShort { len: 0 }));
    let long = "Abcdefghij Klmnopqrstu";
    assert_eq!(validate_name(long), Err(ValidationError::TooLong { len: 22 }));
}

#[test]
fn rejects_other_characters() {
    assert_eq!(
        validate_name("Anna<script>"),
        Err(ValidationError::InvalidCharacter('<'))
    );
    assert_eq!(
        validate_name("Anna2bell"),
        Err(ValidationError::InvalidCharacter('2'))
    );
    assert_eq!(
        validate_name("Jöhn Smith"),
        Err(ValidationError::InvalidCharacter('ö'))
    );
    assert_eq!(
        validate_name("O'Brien"),
        Err(ValidationError::InvalidCharacter('\''))
    );
    assert!(validate_name("Mary-Jane").is_err());
}

#[test]
fn every_error_shows_the_same_message() {
    let errors = [
        ValidationError::TooShort { len: 1 },
        ValidationError::TooLong { len: 40 },
        ValidationError::InvalidCharacter('#'),
    ];
    for e in errors {
        assert_eq!(e.to_string(), NAME_ERROR_MESSAGE);
    }
}

#[test]
fn whitespace_follows_browser_rules() {
    // NEL is Unicode whitespace but not `\s`
    assert_eq!(
        validate_name("Annabel\u{85}Lee"),
        Err(ValidationError::InvalidCharacter('\u{85}'))
    );
    assert!(validate_name("\u{85}Annabel").is_err());
    // BOM is `\s` and is trimmed like any other space
    assert_eq!(validate_name("\u{FEFF}Annabel").unwrap().as_str(), "Annabel");
    assert!(validate_name("Anna\u{FEFF}Bell").is_ok());
    assert!(validate_name("Anna\u{3000}Bell").is_ok());
}

#[test]
fn js_space_set() {
    for c in ['\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ', '\u{A0}', '\u{2005}', '\u{2028}', '\u{FEFF}'] {
        assert!(is_js_space(c), "{:?}", c);
    }
    for c in ['\u{85}', '\u{180E}', '\u{200B}', 'a'] {
        assert!(!is_js_space(c), "{:?}", c);
    }
}
