// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Target-language display names.

/// Code used when the requested language is unknown.
pub const DEFAULT_LANGUAGE: &str = "zh";

const LANGUAGES: &[(&str, &str)] = &[
    ("zh", "Chinese"),
    ("en", "English"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("ru", "Russian"),
];

/// Display name for a language code. Unknown codes map to [`DEFAULT_LANGUAGE`].
pub fn language_display_name(code: &str) -> &'static str {
    lookup(code)
        .or_else(|| lookup(DEFAULT_LANGUAGE))
        .unwrap_or("Chinese")
}

fn lookup(code: &str) -> Option<&'static str> {
    let code = code.trim();
    LANGUAGES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Every supported `(code, display name)` pair.
pub fn supported_languages() -> &'static [(&'static str, &'static str)] {
    LANGUAGES
}
