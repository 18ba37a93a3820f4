//! Built-in service definitions.
//!
//! These are configuration data, not behavior: hosts override or extend them
//! by registering under the same key.

/// `(key, label, base_url, param_name)` for every built-in service, in
/// registration order.
pub const DEFAULT_SERVICES: &[(&str, &str, &str, &str)] = &[
    ("chatgpt", "ChatGPT", "https://chat.openai.com/", "q"),
    ("claude", "Claude", "https://claude.ai/new", "q"),
    ("perplexity", "Perplexity", "https://www.perplexity.ai/search", "q"),
    ("gemini", "Gemini", "https://gemini.google.com/app", "q"),
];
