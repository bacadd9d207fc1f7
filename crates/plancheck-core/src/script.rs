use regex::Regex;
use std::sync::OnceLock;

fn terminator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r";\s*\n").expect("statement terminator regex is valid"))
}

/// Splits a script into statements on "semicolon, optional whitespace,
/// newline". This is not SQL-aware: semicolons inside comments or string
/// literals that end a line will split too, and the last statement of a
/// line-packed script keeps its own semicolon.
pub fn split_statements(script: &str) -> Vec<String> {
    terminator()
        .split(script)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
