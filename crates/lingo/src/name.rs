// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lingo name` command implementation.

use std::io::IsTerminal;
use std::path::Path;

use lingo_core::{LingoError, NamingSuggestion};
use lingo_registry::ProviderRegistry;

/// Extension used to pick the naming style: `--ext` wins, then the file's extension.
pub fn extension_of(ext: Option<&str>, file: Option<&Path>) -> String {
    ext.map(str::to_string)
        .or_else(|| {
            file.and_then(Path::extension)
                .map(|e| e.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

/// Asks the active provider for names and prints them.
pub async fn run_name(
    registry: &ProviderRegistry,
    text: &str,
    extension: &str,
    json: bool,
) -> Result<(), LingoError> {
    let adapter = registry.get();
    if !adapter.is_configured() {
        return Err(LingoError::missing_credentials(
            registry.active_display_name(),
            &registry.active_settings_key(),
        ));
    }

    let suggestions = adapter.generate_naming_suggestions(text, extension).await?;
    if json {
        let rendered = serde_json::to_string_pretty(&suggestions)
            .map_err(|e| LingoError::Internal(format!("failed to encode suggestions: {e}")))?;
        println!("{rendered}");
    } else {
        print!("{}", render(&suggestions, std::io::stdout().is_terminal()));
    }
    Ok(())
}

fn render(suggestions: &[NamingSuggestion], use_color: bool) -> String {
    let width = suggestions.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, suggestion) in suggestions.iter().enumerate() {
        let name = format!("{:<width$}", suggestion.name);
        let line = if use_color {
            use colored::Colorize;
            format!(
                "  {}. {}  {}\n",
                i + 1,
                name.green().bold(),
                suggestion.description.dimmed()
            )
        } else {
            format!("  {}. {name}  {}\n", i + 1, suggestion.description)
        };
        out.push_str(&line);
    }
    out
}
