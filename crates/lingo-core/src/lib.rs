// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lingo editor assistant.
//!
//! Defines the provider contract every vendor adapter implements, the
//! canonical error taxonomy, the stream guard that enforces the callback
//! terminal invariant, and the structured parser for naming suggestions.

pub mod client;
pub mod error;
pub mod stream;
pub mod suggestions;
pub mod traits;
pub mod types;

pub use client::LazyClient;
pub use error::{ErrorKind, LingoError, normalize_api_error};
pub use stream::{CallState, StreamGuard};
pub use suggestions::parse_suggestions;
pub use traits::{ProviderAdapter, StreamSink};
pub use types::{
    Capabilities, NamingSuggestion, ProtocolFamily, ProviderConfig, ProviderType, StreamingMode,
};

/// Re-exported so adapters and hosts share one cancellation type.
pub use tokio_util::sync::CancellationToken;
