//! Literal formatting shared by the generated languages.

/// Wrap text in double quotes, escaping backslashes and quotes.
///
/// The result is a valid string literal in Prisma, Python and TypeScript.
pub fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
