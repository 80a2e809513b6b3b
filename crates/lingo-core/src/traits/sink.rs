// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Receiver side of a streaming translation.

use crate::error::LingoError;

/// Callbacks for one streaming call.
///
/// Adapters never call these directly; they go through
/// [`crate::stream::StreamGuard`], which guarantees zero or more
/// `on_chunk` calls followed by at most one terminal call.
pub trait StreamSink: Send {
    /// A UTF-8 text fragment. Fragments concatenate to the full result.
    fn on_chunk(&mut self, text: &str);

    /// The call finished successfully.
    fn on_complete(&mut self);

    /// The call failed.
    fn on_error(&mut self, error: LingoError);
}
