// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat-completions SSE bodies for mocked HTTP servers.

use serde_json::json;

/// One `data:` frame carrying `content` as `choices[0].delta.content`.
pub fn delta_frame(content: &str) -> String {
    let payload = json!({
        "id": "chatcmpl-test",
        "object": "chat.completion.chunk",
        "choices": [{ "index": 0, "delta": { "content": content }, "finish_reason": null }]
    });
    format!("data: {payload}\n\n")
}

/// Frames for every chunk, then `data: [DONE]`.
pub fn stream_body(chunks: &[&str]) -> String {
    let mut body: String = chunks.iter().map(|c| delta_frame(c)).collect();
    body.push_str("data: [DONE]\n\n");
    body
}

/// Frames for every chunk with no `[DONE]` marker.
pub fn stream_body_without_done(chunks: &[&str]) -> String {
    chunks.iter().map(|c| delta_frame(c)).collect()
}

/// Non-streaming chat-completions response with `content` as the message.
pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// A naming-suggestions document with `n` camelCase names.
pub fn suggestions_json(n: usize) -> String {
    let items: Vec<_> = (0..n)
        .map(|i| {
            json!({
                "name": format!("userList{i}"),
                "style": "camelCase",
                "description": format!("suggestion {i}")
            })
        })
        .collect();
    json!({ "suggestions": items }).to_string()
}
