//! Target language codes accepted by `--to`.

use crate::error::ConfigError;
use crate::ui::Style;

/// Default target language (the tool was built for Chinese readers).
pub const DEFAULT_TARGET_LANGUAGE: &str = "zh";

/// Supported language codes (ISO 639-1) and the names used in prompts.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Looks up the display name of a language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Validates that the given language code is supported.
pub fn validate_language(code: &str) -> Result<(), ConfigError> {
    if language_name(code).is_some() {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedLanguage {
            code: code.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_supported() {
        assert!(validate_language(DEFAULT_TARGET_LANGUAGE).is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(validate_language("xx").is_err());
        assert!(validate_language("").is_err());
        assert!(validate_language("ZH").is_err()); // Case sensitive
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("ja"), Some("Japanese"));
        assert_eq!(language_name("zh-TW"), Some("Chinese (Traditional)"));
        assert_eq!(language_name("klingon"), None);
    }
}
