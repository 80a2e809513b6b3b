// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lingo - translation and identifier naming backed by a configurable LLM vendor.
//!
//! This is the binary entry point. It plays the part of the editor host:
//! loads configuration, builds the provider registry, and drives one call.

mod name;
mod status;
mod translate;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lingo_config::{ConfigError, LingoConfig, LiveSettings};
use lingo_core::{CancellationToken, ErrorKind, LingoError, ProviderType};
use lingo_registry::ProviderRegistry;

/// Lingo - translation and identifier naming backed by a configurable LLM vendor.
#[derive(Parser, Debug)]
#[command(name = "lingo", version, about, long_about = None)]
struct Cli {
    /// Provider to use instead of `assistant.provider`.
    #[arg(long, global = true)]
    provider: Option<ProviderType>,

    /// Explicit configuration file (skips the standard search path).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text, streaming the result to stdout. Reads stdin when TEXT is omitted.
    Translate {
        text: Option<String>,
        /// Target language code (zh, en, ja, ko, fr, de, es, ru).
        #[arg(long, value_name = "LANG")]
        to: Option<String>,
    },
    /// Suggest identifier names for a description.
    Name {
        text: String,
        /// File extension selecting the naming style.
        #[arg(long, conflicts_with = "file")]
        ext: Option<String>,
        /// Source file whose extension selects the naming style.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Number of suggestions to request.
        #[arg(long)]
        count: Option<usize>,
        /// Print suggestions as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show every provider with its configured state.
    Status {
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(errors) => {
            lingo_config::render_errors(&errors);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.assistant.log_level);

    let registry = ProviderRegistry::new(Arc::new(LiveSettings::new(config)));
    match run(cli.command, &registry).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lingo: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(command: Commands, registry: &ProviderRegistry) -> Result<(), LingoError> {
    match command {
        Commands::Translate { text, .. } => {
            let text = match text {
                Some(text) => text,
                None => translate::read_stdin().await?,
            };
            let cancel = CancellationToken::new();
            let on_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_signal.cancel();
                }
            });
            translate::run_translate(registry, &text, &mut std::io::stdout(), &cancel).await
        }
        Commands::Name {
            text,
            ext,
            file,
            json,
            ..
        } => {
            let extension = name::extension_of(ext.as_deref(), file.as_deref());
            name::run_name(registry, &text, &extension, json).await
        }
        Commands::Status { json, plain } => status::run_status(registry, json, plain),
    }
}

/// Loads configuration, applies command-line overrides, and revalidates.
fn load_config(cli: &Cli) -> Result<LingoConfig, Vec<ConfigError>> {
    let mut config = match &cli.config {
        Some(path) => lingo_config::load_and_validate_path(path)?,
        None => lingo_config::load_and_validate()?,
    };
    apply_overrides(&mut config, cli);
    lingo_config::validation::validate_config(&config)?;
    Ok(config)
}

fn apply_overrides(config: &mut LingoConfig, cli: &Cli) {
    if let Some(provider) = cli.provider {
        config.assistant.provider = provider;
    }
    match &cli.command {
        Commands::Translate { to: Some(lang), .. } => {
            config.assistant.target_language = lang.clone();
        }
        Commands::Name {
            count: Some(count), ..
        } => {
            config.assistant.naming_count = *count;
        }
        _ => {}
    }
}

fn exit_code(err: &LingoError) -> u8 {
    match err.kind() {
        ErrorKind::ConfigurationError => 2,
        _ => 1,
    }
}

/// Initializes the tracing subscriber with the configured log level.
///
/// `RUST_LOG` takes precedence. Output goes to stderr so stdout carries only results.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lingo={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_provider_flag_parses_lowercase_names() {
        let cli = parse(&["lingo", "status", "--provider", "deepseek"]);
        assert_eq!(cli.provider, Some(ProviderType::Deepseek));
        assert!(Cli::try_parse_from(["lingo", "--provider", "bard", "status"]).is_err());
    }

    #[test]
    fn ext_and_file_are_mutually_exclusive() {
        let err = Cli::try_parse_from([
            "lingo", "name", "user list", "--ext", "py", "--file", "a.rs",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = LingoConfig::default();
        apply_overrides(
            &mut config,
            &parse(&["lingo", "--provider", "gemini", "translate", "hi", "--to", "ja"]),
        );
        assert_eq!(config.assistant.provider, ProviderType::Gemini);
        assert_eq!(config.assistant.target_language, "ja");

        apply_overrides(&mut config, &parse(&["lingo", "name", "x", "--count", "7"]));
        assert_eq!(config.assistant.naming_count, 7);
        assert_eq!(config.assistant.provider, ProviderType::Gemini);
    }

    #[test]
    #[serial]
    fn out_of_range_count_override_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lingo.toml");
        std::fs::write(&path, "[assistant]\nprovider = \"kimi\"\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let ok = load_config(&parse(&["lingo", "--config", &path, "status"])).unwrap();
        assert_eq!(ok.assistant.provider, ProviderType::Kimi);

        let errors =
            load_config(&parse(&["lingo", "--config", &path, "name", "x", "--count", "50"]))
                .unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn configuration_errors_exit_with_two() {
        assert_eq!(exit_code(&LingoError::Config("missing key".into())), 2);
        assert_eq!(exit_code(&LingoError::Schema("bad".into())), 1);
        assert_eq!(
            exit_code(&LingoError::Transport {
                message: "503".into(),
                source: None
            }),
            1
        );
    }
}
