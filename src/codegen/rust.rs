//! Rust struct output

use super::TargetGenerator;
use crate::schema::naming::{is_rust_keyword, rust_field_name, with_suffix};
use crate::schema::{Declaration, FieldType};
use std::collections::HashSet;
use std::fmt::Write as _;

/// Imports the derives rely on
const SERDE_IMPORT: &str = "use serde::{Deserialize, Serialize};\n";

/// Primitive, prelude and imported names a struct would shadow
const RUST_RESERVED_TYPES: &[&str] = &[
    "bool", "char", "str", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32",
    "u64", "u128", "usize", "f32", "f64", "Box", "Clone", "Copy", "Default", "Drop", "Eq",
    "Err", "Fn", "FnMut", "FnOnce", "From", "Into", "Iterator", "None", "Ok", "Option", "Ord",
    "PartialEq", "PartialOrd", "Result", "Send", "Sized", "Some", "String", "Sync", "ToOwned",
    "ToString", "Vec", "Serialize", "Deserialize",
];

/// Emits serde-derived structs
#[derive(Debug, Clone, Copy, Default)]
pub struct RustGenerator;

impl TargetGenerator for RustGenerator {
    fn render(&self, declaration: &Declaration) -> String {
        let mut out = String::from("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
        let _ = writeln!(out, "pub struct {} {{", declaration.name);

        let mut used = HashSet::new();
        for field in &declaration.fields {
            let base = rust_field_name(&field.key);
            let mut ident = base.clone();
            let mut n = 2;
            while !used.insert(ident.clone()) {
                ident = with_suffix(&base, n);
                n += 1;
            }

            if ident.trim_start_matches("r#") != field.key {
                let _ = writeln!(out, "    #[serde(rename = {:?})]", field.key);
            }
            let _ = writeln!(out, "    pub {}: {},", ident, rust_type(&field.ty));
        }

        out.push_str("}\n");
        out
    }

    fn is_reserved(&self, name: &str) -> bool {
        is_rust_keyword(name) || RUST_RESERVED_TYPES.contains(&name)
    }

    fn preamble(&self) -> Option<&'static str> {
        Some(SERDE_IMPORT)
    }
}

fn rust_type(ty: &FieldType) -> String {
    match ty {
        FieldType::String => "String".to_string(),
        FieldType::Bool => "bool".to_string(),
        FieldType::Integer => "i64".to_string(),
        FieldType::Float => "f64".to_string(),
        FieldType::Any => "serde_json::Value".to_string(),
        FieldType::Named(name) => name.clone(),
        FieldType::Array(item) => format!("Vec<{}>", rust_type(item)),
        FieldType::Nullable(inner) => format!("Option<{}>", rust_type(inner)),
    }
}
