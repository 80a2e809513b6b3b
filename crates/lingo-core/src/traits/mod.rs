// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the assistant host, the registry, and vendor adapters.

pub mod provider;
pub mod sink;

pub use provider::ProviderAdapter;
pub use sink::StreamSink;
