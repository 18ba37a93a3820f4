//! Launch URL construction.
//!
//! Pure functions, shared by every presentation mode so they all dispatch
//! identically.

use crate::domain::ServiceDefinition;

/// Percent-encode a prompt as a URL component.
///
/// Spaces become `%20` (never `+`) and every reserved character is encoded;
/// only `A-Z a-z 0-9 - _ . ~` pass through.
pub fn encode_prompt(prompt: &str) -> String {
    urlencoding::encode(prompt).into_owned()
}

/// Separator to append a new query parameter to `base_url`.
fn query_separator(base_url: &str) -> char {
    if base_url.contains('?') { '&' } else { '?' }
}

/// Build `base_url + separator + param_name=encoded(prompt)`.
pub fn build_launch_url(definition: &ServiceDefinition, prompt: &str) -> String {
    let base_url = definition.base_url();
    format!(
        "{base_url}{}{}={}",
        query_separator(base_url),
        definition.param_name(),
        encode_prompt(prompt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(base_url: &str, param: &str) -> ServiceDefinition {
        ServiceDefinition::new("Example", base_url, param).unwrap()
    }

    #[test]
    fn test_question_mark_when_no_query() {
        let url = build_launch_url(&def("https://example.com/app", "q"), "hi");
        assert_eq!(url, "https://example.com/app?q=hi");
    }

    #[test]
    fn test_ampersand_when_query_present() {
        let url = build_launch_url(&def("https://example.com/app?x=1", "q"), "hi");
        assert_eq!(url, "https://example.com/app?x=1&q=hi");
    }

    #[test]
    fn test_space_is_percent_twenty() {
        assert_eq!(encode_prompt("hello world"), "hello%20world");
        assert!(!encode_prompt("a b").contains('+'));
    }

    #[test]
    fn test_reserved_characters_encoded() {
        assert_eq!(encode_prompt("a&b=c?d#e/f"), "a%26b%3Dc%3Fd%23e%2Ff");
        assert_eq!(encode_prompt("1+1"), "1%2B1");
    }

    #[test]
    fn test_unicode_encoded_as_utf8() {
        assert_eq!(encode_prompt("café"), "caf%C3%A9");
    }

    #[test]
    fn test_unreserved_pass_through() {
        assert_eq!(encode_prompt("Az09-_.~"), "Az09-_.~");
    }

    #[test]
    fn test_custom_param_name() {
        let url = build_launch_url(&def("https://example.com/search", "prompt"), "x y");
        assert_eq!(url, "https://example.com/search?prompt=x%20y");
    }

    #[test]
    fn test_empty_prompt_still_encodable() {
        let url = build_launch_url(&def("https://example.com/", "q"), "");
        assert_eq!(url, "https://example.com/?q=");
    }
}
