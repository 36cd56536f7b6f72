/// Characters that separate one token from the next.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Splits a raw input line into whitespace-delimited tokens.
///
/// Runs of consecutive delimiters collapse, so no empty tokens are ever
/// produced. Tokens are copied into owned strings rather than borrowed from
/// the line, so they outlive the buffer they came from.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(&DELIMITERS[..])
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
