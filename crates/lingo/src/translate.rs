// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lingo translate` command implementation.

use std::io::Write;

use lingo_core::{CancellationToken, LingoError, StreamSink};
use lingo_registry::ProviderRegistry;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

/// Writes each chunk as it arrives and remembers how the call ended.
struct WriterSink<'a, W: Write + Send> {
    out: &'a mut W,
    outcome: Option<Result<(), LingoError>>,
}

impl<'a, W: Write + Send> WriterSink<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self { out, outcome: None }
    }
}

impl<W: Write + Send> StreamSink for WriterSink<'_, W> {
    fn on_chunk(&mut self, text: &str) {
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            warn!(error = %e, "failed to write translation chunk");
        }
    }

    fn on_complete(&mut self) {
        if let Err(e) = writeln!(self.out) {
            warn!(error = %e, "failed to terminate translation output");
        }
        self.outcome = Some(Ok(()));
    }

    fn on_error(&mut self, error: LingoError) {
        self.outcome = Some(Err(error));
    }
}

/// Reads the whole of stdin as the text to translate.
pub async fn read_stdin() -> Result<String, LingoError> {
    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .map_err(|e| LingoError::Internal(format!("failed to read stdin: {e}")))?;
    Ok(text)
}

/// Streams a translation of `text` from the active provider into `out`.
///
/// A cancelled call returns `Ok(())` with whatever output was already written.
pub async fn run_translate<W: Write + Send>(
    registry: &ProviderRegistry,
    text: &str,
    out: &mut W,
    cancel: &CancellationToken,
) -> Result<(), LingoError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(LingoError::Internal("no text to translate".to_string()));
    }

    let adapter = registry.get();
    if !adapter.is_configured() {
        return Err(LingoError::missing_credentials(
            registry.active_display_name(),
            &registry.active_settings_key(),
        ));
    }

    let mut sink = WriterSink::new(out);
    adapter.translate_stream(text, &mut sink, cancel).await;
    match sink.outcome {
        Some(outcome) => outcome,
        None => {
            debug!(provider = %adapter.provider_type(), "translation cancelled");
            Ok(())
        }
    }
}
