//! Go struct output

use super::TargetGenerator;
use crate::schema::{Declaration, FieldType};
use std::fmt::Write as _;

/// Keywords and predeclared identifiers a type name must not take
const GO_RESERVED: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var", "any", "bool", "byte", "comparable",
    "complex64", "complex128", "error", "float32", "float64", "int", "int8", "int16", "int32",
    "int64", "rune", "string", "uint", "uint8", "uint16", "uint32", "uint64", "uintptr", "true",
    "false", "iota", "nil",
];

/// Punctuation `encoding/json` accepts in a tag name besides letters and digits
const TAG_PUNCTUATION: &str = "!#$%&()*+-./:;<=>?@[]^_{|}~ ";

/// Emits `type Name struct { ... }` with `json` struct tags
#[derive(Debug, Clone, Copy, Default)]
pub struct GoGenerator;

impl TargetGenerator for GoGenerator {
    fn render(&self, declaration: &Declaration) -> String {
        let mut out = format!("type {} struct {{\n", declaration.name);
        for field in &declaration.fields {
            let ty = go_type(&field.ty);
            let _ = match json_tag(&field.key) {
                Some(tag) => writeln!(out, "\t{} {} {}", field.name, ty, tag),
                None => writeln!(
                    out,
                    "\t{} {} `json:\"-\"` // key {:?} has no json tag form",
                    field.name, ty, field.key
                ),
            };
        }
        out.push_str("}\n");
        out
    }

    fn is_reserved(&self, name: &str) -> bool {
        GO_RESERVED.contains(&name)
    }

    fn supports_key(&self, key: &str) -> bool {
        is_tag_name(key)
    }
}

fn go_type(ty: &FieldType) -> String {
    match ty {
        FieldType::String => "string".to_string(),
        FieldType::Bool => "bool".to_string(),
        FieldType::Integer => "int".to_string(),
        FieldType::Float => "float64".to_string(),
        FieldType::Any => "interface{}".to_string(),
        FieldType::Named(name) => name.clone(),
        FieldType::Array(item) => format!("[]{}", go_type(item)),
        // A JSON null decodes into the zero value
        FieldType::Nullable(inner) => go_type(inner),
    }
}

/// Whether `encoding/json` reads `key` back as the tag name
fn is_tag_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || TAG_PUNCTUATION.contains(c))
}

/// Struct tag binding the field to its JSON key.
///
/// A bare `-` means "skip this field", so the key `-` is written as `-,`.
fn json_tag(key: &str) -> Option<String> {
    if !is_tag_name(key) {
        return None;
    }
    let name = if key == "-" { "-," } else { key };
    Some(format!("`json:\"{name}\"`"))
}
