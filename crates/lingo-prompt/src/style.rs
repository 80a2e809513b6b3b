// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File extension to identifier naming convention.

use strum::{Display, EnumIter, EnumString};

/// Identifier casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum NamingStyle {
    #[strum(serialize = "camelCase")]
    CamelCase,
    #[strum(serialize = "snake_case")]
    SnakeCase,
    #[strum(serialize = "kebab-case")]
    KebabCase,
}

impl NamingStyle {
    /// Two sample identifiers in this style.
    pub fn examples(self) -> &'static str {
        match self {
            NamingStyle::CamelCase => "userList, getData",
            NamingStyle::SnakeCase => "user_list, get_data",
            NamingStyle::KebabCase => "user-list, get-data",
        }
    }

    /// The hint embedded in naming prompts, e.g. `camelCase (e.g. userList, getData)`.
    pub fn hint(self) -> String {
        format!("{self} (e.g. {})", self.examples())
    }
}

const EXTENSION_STYLES: &[(&str, NamingStyle)] = &[
    ("js", NamingStyle::CamelCase),
    ("ts", NamingStyle::CamelCase),
    ("jsx", NamingStyle::CamelCase),
    ("tsx", NamingStyle::CamelCase),
    ("java", NamingStyle::CamelCase),
    ("cs", NamingStyle::CamelCase),
    ("go", NamingStyle::CamelCase),
    ("vue", NamingStyle::CamelCase),
    ("py", NamingStyle::SnakeCase),
    ("rb", NamingStyle::SnakeCase),
    ("php", NamingStyle::SnakeCase),
    ("sql", NamingStyle::SnakeCase),
    ("rs", NamingStyle::SnakeCase),
    ("css", NamingStyle::KebabCase),
    ("scss", NamingStyle::KebabCase),
    ("less", NamingStyle::KebabCase),
    ("html", NamingStyle::KebabCase),
];

/// Naming style for a file extension. Case-insensitive, a leading dot is
/// ignored, and anything unknown (including empty) is camelCase.
pub fn style_for(extension: &str) -> NamingStyle {
    let ext = extension.trim().trim_start_matches('.');
    EXTENSION_STYLES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map_or(NamingStyle::CamelCase, |(_, style)| *style)
}
