// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lingo status` command implementation.
//!
//! Lists every provider, whether it has usable credentials, and which one is
//! active. Checking never sends a request.

use std::io::IsTerminal;

use lingo_core::{LingoError, ProviderType};
use lingo_registry::ProviderRegistry;
use serde::Serialize;
use strum::IntoEnumIterator;

/// One row of `--json` output.
#[derive(Debug, Serialize)]
pub struct ProviderStatus {
    pub provider: ProviderType,
    pub display_name: &'static str,
    pub settings_key: String,
    pub configured: bool,
    pub active: bool,
}

pub fn collect(registry: &ProviderRegistry) -> Vec<ProviderStatus> {
    let active = registry.resolve_active_type();
    ProviderType::iter()
        .map(|provider| ProviderStatus {
            provider,
            display_name: provider.display_name(),
            settings_key: provider.settings_key(),
            configured: registry.get_for(provider).is_configured(),
            active: provider == active,
        })
        .collect()
}

pub fn run_status(registry: &ProviderRegistry, json: bool, plain: bool) -> Result<(), LingoError> {
    let statuses = collect(registry);
    if json {
        let rendered = serde_json::to_string_pretty(&statuses)
            .map_err(|e| LingoError::Internal(format!("failed to encode status: {e}")))?;
        println!("{rendered}");
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print!("{}", render(&statuses, use_color));
    }
    Ok(())
}

fn render(statuses: &[ProviderStatus], use_color: bool) -> String {
    let mut out = String::from("\n  lingo status\n");
    out.push_str(&format!("  {}\n", "-".repeat(44)));

    for status in statuses {
        let marker = if status.active { "*" } else { " " };
        let label = format!("{:<20}", status.display_name);
        let state = match (status.configured, use_color) {
            (true, true) => {
                use colored::Colorize;
                format!("{} configured", "✓".green())
            }
            (false, true) => {
                use colored::Colorize;
                format!("{} set {}", "✗".red(), status.settings_key.yellow())
            }
            (true, false) => "[OK] configured".to_string(),
            (false, false) => format!("[--] set {}", status.settings_key),
        };
        out.push_str(&format!("  {marker} {label}{state}\n"));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_test_utils::settings_for;

    #[test]
    fn active_provider_is_marked_and_configured() {
        let registry = ProviderRegistry::new(settings_for(
            ProviderType::Kimi,
            "sk-kimi",
            "https://api.moonshot.cn/v1",
        ));
        let statuses = collect(&registry);
        assert_eq!(statuses.len(), 8);

        let active: Vec<_> = statuses.iter().filter(|s| s.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].provider, ProviderType::Kimi);
        assert!(active[0].configured);

        let openai = statuses
            .iter()
            .find(|s| s.provider == ProviderType::Openai)
            .unwrap();
        assert!(!openai.configured);
        assert_eq!(openai.settings_key, "openai.api_key");
    }

    #[test]
    fn plain_render_lists_missing_keys() {
        let registry = ProviderRegistry::new(settings_for(
            ProviderType::Deepseek,
            "sk-ds",
            "https://api.deepseek.com/v1",
        ));
        let rendered = render(&collect(&registry), false);
        assert!(rendered.contains("* DeepSeek"));
        assert!(rendered.contains("[OK] configured"));
        assert!(rendered.contains("[--] set gemini.api_key"));
        assert!(!rendered.contains('✓'));
    }

    #[test]
    fn json_rows_use_lowercase_provider_names() {
        let registry = ProviderRegistry::new(settings_for(
            ProviderType::Azure,
            "az-key",
            "https://example.openai.azure.com/openai/deployments/x",
        ));
        let value = serde_json::to_value(collect(&registry)).unwrap();
        let azure = value
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["provider"] == "azure")
            .unwrap();
        assert_eq!(azure["active"], true);
        assert_eq!(azure["configured"], true);
        assert_eq!(azure["display_name"], "Azure OpenAI");
    }
}
