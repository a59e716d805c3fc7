//! Python reserved words and identifier escaping.

/// Python keywords generated identifiers must not collide with.
/// Sorted so membership checks can binary search.
pub const RESERVED_WORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "exec", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "not", "or",
    "pass", "print", "raise", "return", "try", "while", "with", "yield",
];

/// Case-sensitive reserved-word check.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.binary_search(&name).is_ok()
}

/// Escape a reserved word by prefixing a single underscore.
pub fn escape_reserved_word(name: &str) -> String {
    format!("_{name}")
}
