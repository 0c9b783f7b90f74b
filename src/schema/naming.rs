//! Identifier naming for generated declarations

use crate::types::FieldNaming;
use regex::Regex;
use std::sync::LazyLock;

/// Valid declaration name: a letter followed by letters, digits or underscores
static TYPE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// Runs of word separators for camel-case conversion
static WORD_SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\-\s.]+").unwrap());

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Check that a user supplied declaration name is usable as-is
pub fn is_valid_type_name(name: &str) -> bool {
    TYPE_NAME_REGEX.is_match(name)
}

/// Check whether `name` is a Rust keyword, strict or reserved
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Turn a JSON key into an exported identifier
pub fn export_name(key: &str, style: FieldNaming) -> String {
    let raw = match style {
        FieldNaming::Capitalize => capitalize(key),
        FieldNaming::Camel => WORD_SEPARATOR_REGEX
            .split(key)
            .map(capitalize)
            .collect::<String>(),
    };
    sanitize(&raw)
}

/// Append a numeric suffix, used when a name is already taken
pub fn with_suffix(base: &str, n: usize) -> String {
    format!("{base}{n}")
}

/// snake_case field identifier for Rust output
pub fn rust_field_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut after_lower = false;

    for ch in key.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() {
                if after_lower {
                    out.push('_');
                }
                out.extend(ch.to_lowercase());
                after_lower = false;
            } else {
                out.push(ch);
                after_lower = true;
            }
        } else {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            after_lower = false;
        }
    }

    while out.ends_with('_') {
        out.pop();
    }

    if out.is_empty() {
        return "field".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if NON_RAW_KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    } else if RUST_KEYWORDS.contains(&out.as_str()) {
        out.insert_str(0, "r#");
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn sanitize(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    // Go exports only identifiers starting with an upper-case letter
    if !out.starts_with(char::is_uppercase) {
        out.insert(0, 'X');
    }
    out
}
