//! Record type checking against declaration strings
//!
//! The checker is a capability, not a concrete dependency: the store holds
//! a `dyn TypeChecker`, so a different expression engine can stand in
//! behind the same contract.
//!
//! Checking is deterministic and never mutates the record.

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::parser::parse_declaration;

/// Capability contract: decide whether a record satisfies a declaration
/// string, reporting the failing field and expression when it does not.
pub trait TypeChecker {
    /// Checks `record` against `declaration`.
    ///
    /// # Errors
    ///
    /// - `SchemaError::Parse` if the declaration string is malformed
    /// - `SchemaError::Mismatch` if the record violates the declaration
    fn check(&self, record: &Value, declaration: &str) -> SchemaResult<()>;
}

/// The shipped checker: parses the declaration grammar and evaluates it
/// field by field.
///
/// Records are open-shaped: fields the declaration does not mention are
/// permitted. Declared fields must be present (unless marked optional)
/// with exactly the declared JSON type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationChecker;

impl TypeChecker for DeclarationChecker {
    fn check(&self, record: &Value, declaration: &str) -> SchemaResult<()> {
        let parsed = parse_declaration(declaration)?;

        let obj = record
            .as_object()
            .ok_or_else(|| SchemaError::mismatch("$root", "object", Some(record.clone())))?;

        for field in &parsed.fields {
            match obj.get(&field.name) {
                Some(value) => {
                    if !field.field_type.matches(value) {
                        return Err(SchemaError::mismatch(
                            &field.name,
                            &field.expression,
                            Some(value.clone()),
                        ));
                    }
                }
                None => {
                    if !field.optional {
                        return Err(SchemaError::mismatch(&field.name, &field.expression, None));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_record_passes() {
        let checker = DeclarationChecker;
        let record = json!({ "name": "Recurso 1" });
        assert!(checker.check(&record, "name:string").is_ok());
    }

    #[test]
    fn test_multi_field_declaration() {
        let checker = DeclarationChecker;
        let record = json!({ "name": "proc", "priority": 3 });
        assert!(checker.check(&record, "name:string;priority:integer").is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let checker = DeclarationChecker;
        let record = json!({ "priority": 3 });
        let err = checker.check(&record, "name:string;priority:integer").unwrap_err();
        let failure = err.failure().unwrap();
        assert_eq!(failure.field, "name");
        assert_eq!(failure.expression, "string");
        assert!(failure.target.is_none());
    }

    #[test]
    fn test_type_mismatch_carries_target() {
        let checker = DeclarationChecker;
        let record = json!({ "name": 42 });
        let err = checker.check(&record, "name:string").unwrap_err();
        let failure = err.failure().unwrap();
        assert_eq!(failure.field, "name");
        assert_eq!(failure.target, Some(json!(42)));
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        let checker = DeclarationChecker;
        let record = json!({ "name": "x" });
        assert!(checker.check(&record, "name:string;age:integer?").is_ok());

        // Present but wrong type still fails
        let record = json!({ "name": "x", "age": "old" });
        assert!(checker.check(&record, "name:string;age:integer?").is_err());
    }

    #[test]
    fn test_extra_fields_allowed() {
        let checker = DeclarationChecker;
        let record = json!({ "name": "x", "undeclared": true });
        assert!(checker.check(&record, "name:string").is_ok());
    }

    #[test]
    fn test_null_fails_typed_field() {
        let checker = DeclarationChecker;
        let record = json!({ "name": null });
        assert!(checker.check(&record, "name:string").is_err());
        assert!(checker.check(&record, "name:any").is_ok());
    }

    #[test]
    fn test_non_object_record_fails_at_root() {
        let checker = DeclarationChecker;
        let err = checker.check(&json!([1, 2, 3]), "name:string").unwrap_err();
        assert_eq!(err.failure().unwrap().field, "$root");
    }

    #[test]
    fn test_malformed_declaration_is_parse_error() {
        let checker = DeclarationChecker;
        let err = checker.check(&json!({}), "name=string").unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[test]
    fn test_check_is_deterministic() {
        let checker = DeclarationChecker;
        let record = json!({ "name": "x", "priority": 1 });
        for _ in 0..100 {
            assert!(checker.check(&record, "name:string;priority:integer").is_ok());
        }
    }
}
