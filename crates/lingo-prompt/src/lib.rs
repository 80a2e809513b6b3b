// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction shared by every vendor adapter.
//!
//! All functions are pure: the same inputs always give the same prompt, so
//! vendors differ only in how they transport these strings.

pub mod language;
pub mod style;

pub use language::{DEFAULT_LANGUAGE, language_display_name, supported_languages};
pub use style::{NamingStyle, style_for};

/// System prompt for translation calls.
pub fn translation_system_prompt() -> &'static str {
    "You are a professional translation assistant. Translate the text the user \
     provides accurately. Reply with the translation only, without explanations."
}

/// User prompt asking for `text` in the language named by `target_language`.
///
/// Unknown language codes fall back to Chinese.
pub fn translation_user_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text into {}:\n\n{text}",
        language_display_name(target_language)
    )
}

/// System prompt for naming calls.
pub fn naming_system_prompt() -> &'static str {
    "You are a professional programming naming assistant. Turn natural-language \
     descriptions into conventional English names for variables, functions, and classes."
}

/// User prompt requesting `count` identifiers in `style` as a JSON document.
pub fn naming_user_prompt(text: &str, count: usize, style: NamingStyle) -> String {
    format!(
        r#"Based on the description below, suggest {count} variable/function/class names that follow the {hint} convention.

Description: {text}

Reply strictly in the following JSON format and nothing else:
{{
  "suggestions": [
    {{
      "name": "suggested name",
      "style": "naming style",
      "description": "short explanation"
    }}
  ]
}}"#,
        hint = style.hint()
    )
}
