//! Schema Invariant Tests
//!
//! Checker-level properties:
//! - Checking is deterministic
//! - Declared fields must be present with exactly the declared type
//! - No coercion, no defaults
//! - Failures carry structured detail

use memodb::schema::{parse_declaration, DeclarationChecker, FieldType, SchemaError, TypeChecker};
use serde_json::json;

// =============================================================================
// Determinism
// =============================================================================

/// Same record checks the same way every time.
#[test]
fn test_check_is_deterministic() {
    let checker = DeclarationChecker;
    let record = json!({ "name": "Recurso 1" });

    for _ in 0..100 {
        assert!(checker.check(&record, "name:string").is_ok());
    }
}

/// Invalid record fails consistently with the same detail.
#[test]
fn test_invalid_record_fails_consistently() {
    let checker = DeclarationChecker;
    let record = json!({ "name": 1 });

    let first = checker.check(&record, "name:string").unwrap_err();
    for _ in 0..100 {
        assert_eq!(checker.check(&record, "name:string").unwrap_err(), first);
    }
}

// =============================================================================
// Grammar
// =============================================================================

/// Multi-line declarations with trailing separators parse cleanly.
#[test]
fn test_multiline_declaration() {
    let decl = parse_declaration(
        "
            name:string;
            priority:integer;
        ",
    )
    .unwrap();
    assert_eq!(decl.fields.len(), 2);
    assert_eq!(decl.fields[0].field_type, FieldType::String);
    assert_eq!(decl.fields[1].field_type, FieldType::Integer);
}

/// Every base type keyword resolves.
#[test]
fn test_all_base_types_parse() {
    let decl = parse_declaration(
        "a:string;b:integer;c:number;d:boolean;e:object;f:array;g:any",
    )
    .unwrap();
    assert_eq!(decl.fields.len(), 7);
}

/// Malformed declarations are parse errors, not mismatches.
#[test]
fn test_malformed_declarations() {
    assert!(matches!(
        parse_declaration("name").unwrap_err(),
        SchemaError::Parse { .. }
    ));
    assert!(matches!(
        parse_declaration("name:varchar").unwrap_err(),
        SchemaError::Parse { .. }
    ));
    assert!(matches!(
        parse_declaration(":string").unwrap_err(),
        SchemaError::Parse { .. }
    ));
}

// =============================================================================
// Checking Semantics
// =============================================================================

/// A declared field must be present unless marked optional.
#[test]
fn test_required_and_optional_fields() {
    let checker = DeclarationChecker;
    let declaration = "name:string;priority:integer?";

    assert!(checker.check(&json!({ "name": "p" }), declaration).is_ok());
    assert!(checker
        .check(&json!({ "name": "p", "priority": 3 }), declaration)
        .is_ok());
    assert!(checker.check(&json!({ "priority": 3 }), declaration).is_err());
}

/// Exact type matching: a float is not an integer, a numeric string is
/// not a number.
#[test]
fn test_no_coercion() {
    let checker = DeclarationChecker;

    assert!(checker.check(&json!({ "n": 3 }), "n:integer").is_ok());
    assert!(checker.check(&json!({ "n": 3.5 }), "n:integer").is_err());
    assert!(checker.check(&json!({ "n": 3.5 }), "n:number").is_ok());
    assert!(checker.check(&json!({ "n": "3" }), "n:number").is_err());
}

/// Undeclared fields are permitted; records are open-shaped.
#[test]
fn test_open_records() {
    let checker = DeclarationChecker;
    let record = json!({ "name": "x", "anything": [1, 2, 3] });
    assert!(checker.check(&record, "name:string").is_ok());
}

/// Failure detail names the field, expression, and value.
#[test]
fn test_failure_detail() {
    let checker = DeclarationChecker;
    let err = checker
        .check(&json!({ "name": "p", "priority": true }), "name:string;priority:integer")
        .unwrap_err();

    let failure = err.failure().unwrap();
    assert_eq!(failure.field, "priority");
    assert_eq!(failure.expression, "integer");
    assert_eq!(failure.target, Some(json!(true)));
}
