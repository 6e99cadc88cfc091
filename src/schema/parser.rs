//! Parser for declaration strings
//!
//! Grammar:
//!
//! ```text
//! declaration := field-decl (';' field-decl)* ';'?
//! field-decl  := name ':' type-expr
//! type-expr   := base-type '?'?
//! base-type   := 'string' | 'integer' | 'number' | 'boolean'
//!              | 'object' | 'array' | 'any'
//! ```
//!
//! Whitespace (including newlines) around names and separators is
//! insignificant, so multi-line declarations indent freely. Empty segments
//! between separators are skipped, which also makes a trailing ';' legal.

use super::errors::{SchemaError, SchemaResult};
use super::types::{Declaration, FieldDecl, FieldType};

/// Parses a declaration string into its ordered field list.
///
/// An all-whitespace declaration parses to an empty field list: it declares
/// nothing, so every object satisfies it.
pub fn parse_declaration(input: &str) -> SchemaResult<Declaration> {
    let mut fields: Vec<FieldDecl> = Vec::new();
    let mut offset = 0usize;

    for segment in input.split(';') {
        let position = offset;
        offset += segment.len() + 1;

        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (name, expr) = trimmed
            .split_once(':')
            .ok_or_else(|| SchemaError::parse(position, format!("expected <name>:<type>, got '{}'", trimmed)))?;
        let name = name.trim();
        let expr = expr.trim();

        if name.is_empty() {
            return Err(SchemaError::parse(position, "empty field name"));
        }
        if fields.iter().any(|decl| decl.name == name) {
            return Err(SchemaError::parse(position, format!("duplicate field '{}'", name)));
        }

        let (keyword, optional) = match expr.strip_suffix('?') {
            Some(base) => (base.trim_end(), true),
            None => (expr, false),
        };
        let field_type = FieldType::from_keyword(keyword)
            .ok_or_else(|| SchemaError::parse(position, format!("unknown type '{}'", keyword)))?;

        fields.push(FieldDecl {
            name: name.to_string(),
            expression: expr.to_string(),
            field_type,
            optional,
        });
    }

    Ok(Declaration { fields })
}
