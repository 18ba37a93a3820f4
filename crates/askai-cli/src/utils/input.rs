//! User input utilities for interactive command-line prompts.
//!
//! The line readers are generic over `BufRead`/`Write` so presenters can be
//! driven by in-memory buffers in tests.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Read, Write};

/// Reads one line, without its line terminator.
///
/// Returns `Ok(None)` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Writes `prompt` and reads the answer, trimmed.
///
/// Returns `Ok(None)` if the input is closed before an answer arrives.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;
    Ok(read_line(input)?.map(|answer| answer.trim().to_string()))
}

/// Builds the prompt text from command-line words or, with `stdin`, from the
/// whole of `reader`.
///
/// Words are joined with single spaces. Surrounding whitespace is kept; the
/// launcher decides what counts as empty.
pub fn collect_prompt<R: Read>(words: &[String], stdin: Option<R>) -> Result<String> {
    let Some(mut reader) = stdin else {
        return Ok(words.join(" "));
    };

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Failed to read prompt from stdin")?;
    if !words.is_empty() {
        text.insert_str(0, &format!("{}\n\n", words.join(" ")));
    }
    Ok(text)
}

/// [`collect_prompt`] against the process stdin.
pub fn prompt_from_args(words: &[String], use_stdin: bool) -> Result<String> {
    collect_prompt(words, use_stdin.then(io::stdin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminator() {
        let mut input = Cursor::new("first\r\nsecond\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_prompt_line_writes_prompt() {
        let mut input = Cursor::new("  2 \n");
        let mut output = Vec::new();
        let answer = prompt_line(&mut input, &mut output, "Pick").unwrap();
        assert_eq!(answer.as_deref(), Some("2"));
        assert_eq!(String::from_utf8(output).unwrap(), "Pick: ");
    }

    #[test]
    fn test_collect_prompt_from_words() {
        let words = vec!["hello".to_string(), "world".to_string()];
        let text = collect_prompt(&words, None::<Cursor<&str>>).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_collect_prompt_from_stdin_with_preamble() {
        let words = vec!["Summarize:".to_string()];
        let text = collect_prompt(&words, Some(Cursor::new("line one\nline two\n"))).unwrap();
        assert_eq!(text, "Summarize:\n\nline one\nline two\n");
    }
}
