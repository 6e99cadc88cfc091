//! Declaration type definitions
//!
//! Supported base types:
//! - string: UTF-8 string
//! - integer: 64-bit integer (floats rejected)
//! - number: any JSON number
//! - boolean: true/false
//! - object: nested object (shape not inspected)
//! - array: any array (elements not inspected)
//! - any: matches every value, including null

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Base types a field may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit integer; floats do not qualify
    Integer,
    /// Any JSON number, integer or float
    Number,
    /// Boolean
    Boolean,
    /// Nested object; inner shape is not checked
    Object,
    /// Array; element types are not checked
    Array,
    /// Matches any value
    Any,
}

impl FieldType {
    /// Resolves a grammar keyword to its type, if it is one.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(FieldType::String),
            "integer" => Some(FieldType::Integer),
            "number" => Some(FieldType::Number),
            "boolean" => Some(FieldType::Boolean),
            "object" => Some(FieldType::Object),
            "array" => Some(FieldType::Array),
            "any" => Some(FieldType::Any),
            _ => None,
        }
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
            FieldType::Any => "any",
        }
    }

    /// Checks a value against this type. No coercion: a float is not an
    /// integer and a numeric string is not a number.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Object => value.is_object(),
            FieldType::Array => value.is_array(),
            FieldType::Any => true,
        }
    }
}

/// One parsed `name:type` field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name as declared
    pub name: String,
    /// Type expression as written, e.g. "integer?"
    pub expression: String,
    /// Parsed base type
    pub field_type: FieldType,
    /// Whether the field may be absent (declared with a '?' suffix)
    pub optional: bool,
}

/// A fully parsed declaration: the ordered field list of one model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Field declarations in the order they were written
    pub fields: Vec<FieldDecl>,
}

impl Declaration {
    /// Looks up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|decl| decl.name == name)
    }
}
