//! Splitting of a command segment into its argument vector.
//!
//! There is no quoting, escaping or substitution: a token is exactly the run of
//! characters between delimiters. Tokens borrow from the input, which is never
//! modified, so the same line can be split by [`crate::parser`] before and
//! tokenized after without aliasing.

/// Characters that separate tokens: space, tab, carriage return, newline, bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Split `line` into argument tokens.
///
/// Runs of delimiters collapse, so no token is ever empty. An empty or
/// delimiter-only line yields no tokens at all.
///
/// ```
/// use ush::lexer::split_into_tokens;
/// assert_eq!(split_into_tokens("ls  -la\t/tmp"), vec!["ls", "-la", "/tmp"]);
/// ```
pub fn split_into_tokens(line: &str) -> Vec<&str> {
    line.split(is_delimiter)
        .filter(|token| !token.is_empty())
        .collect()
}
