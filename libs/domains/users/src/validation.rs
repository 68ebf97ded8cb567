//! Request payload validation.
//!
//! Payloads arrive as untyped JSON. Validation runs in two passes: a type
//! pass that pulls each recognized field out of the object, then the
//! `validator` rules declared on [`UpdateUser`]. Every violation from both
//! passes is reported together; nothing is returned unless all of them pass.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::{ValidationError, Violation};
use crate::models::{CreateUser, Fragment, UpdateUser};

/// Which fields are required
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `name` and `email` required, `age` optional
    Create,
    /// Every field optional
    Update,
}

/// Decode a raw request body. Malformed or empty bodies are rejected as a
/// violation on `body`.
pub fn parse_payload(body: &[u8]) -> Result<Value, ValidationError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed JSON body");
        ValidationError::single("body", "Malformed JSON")
    })
}

/// Validate `payload` under `mode`.
pub fn validate(payload: &Value, mode: Mode) -> Result<Fragment, ValidationError> {
    match mode {
        Mode::Create => validate_create(payload).map(Fragment::Create),
        Mode::Update => validate_update(payload).map(Fragment::Update),
    }
}

pub fn validate_create(payload: &Value) -> Result<CreateUser, ValidationError> {
    let UpdateUser {
        name: Some(name),
        email: Some(email),
        age,
    } = check_fields(payload, Mode::Create)?
    else {
        // Not reached: in create mode check_fields rejects a missing name or email
        return Err(ValidationError::single("body", "Required"));
    };

    Ok(CreateUser { name, email, age })
}

pub fn validate_update(payload: &Value) -> Result<UpdateUser, ValidationError> {
    check_fields(payload, Mode::Update)
}

fn check_fields(payload: &Value, mode: Mode) -> Result<UpdateUser, ValidationError> {
    let Value::Object(object) = payload else {
        return Err(ValidationError::single("body", "Expected object"));
    };

    let mut violations = Vec::new();

    if mode == Mode::Create {
        for required in ["name", "email"] {
            if !object.contains_key(required) {
                violations.push(Violation::new(required, "Required"));
            }
        }
    }

    let fields = UpdateUser {
        name: typed_field(object, "name", "Expected string", &mut violations),
        email: typed_field(object, "email", "Expected string", &mut violations),
        age: integer_field(object, "age", &mut violations),
    };

    if let Err(errors) = fields.validate() {
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                violations.push(Violation::new(field.to_string(), message));
            }
        }
    }

    if violations.is_empty() {
        Ok(fields)
    } else {
        violations.sort_by(|a, b| a.field.cmp(&b.field));
        Err(ValidationError { violations })
    }
}

/// `None` when the key is absent or has the wrong JSON type; the latter also
/// records a violation. `null` is a wrong type, not an absent key.
fn typed_field<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &str,
    expected: &str,
    violations: &mut Vec<Violation>,
) -> Option<T> {
    let value = object.get(key)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            violations.push(Violation::new(key, expected));
            None
        }
    }
}

/// Integers may be written in float form (`30.0`, `1e2`) as long as the
/// value has no fractional part and fits `i64`.
fn integer_field(
    object: &Map<String, Value>,
    key: &str,
    violations: &mut Vec<Violation>,
) -> Option<i64> {
    let value = object.get(key)?;
    let parsed = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    };

    if parsed.is_none() {
        violations.push(Violation::new(key, "Expected integer"));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_accepts_full_payload() {
        let user = validate_create(&json!({
            "name": "John Doe",
            "email": "john@example.com",
            "age": 30
        }))
        .unwrap();

        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.age, Some(30));
    }

    #[test]
    fn test_create_age_is_optional() {
        let user = validate_create(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com"
        }))
        .unwrap();
        assert_eq!(user.age, None);
    }

    #[test]
    fn test_create_ignores_client_id_and_unknown_keys() {
        let fragment = validate(
            &json!({ "id": 99, "name": "A", "email": "a@example.com", "role": "admin" }),
            Mode::Create,
        )
        .unwrap();

        assert_eq!(
            fragment,
            Fragment::Create(CreateUser {
                name: "A".to_string(),
                email: "a@example.com".to_string(),
                age: None,
            })
        );
    }

    #[test]
    fn test_create_missing_required_fields() {
        let err = validate_create(&json!({ "email": "john@example.com" })).unwrap_err();
        assert_eq!(err.violations, vec![Violation::new("name", "Required")]);

        let err = validate_create(&json!({})).unwrap_err();
        assert!(err.has_field("name"));
        assert!(err.has_field("email"));
    }

    #[test]
    fn test_field_rules() {
        let err = validate_create(&json!({ "name": "", "email": "john@example.com" })).unwrap_err();
        assert_eq!(err.violations, vec![Violation::new("name", "Name is required")]);

        let err = validate_create(&json!({ "name": "John", "email": "invalid-email" })).unwrap_err();
        assert_eq!(err.violations, vec![Violation::new("email", "Invalid email format")]);

        let err = validate_create(&json!({ "name": "John", "email": "john@example.com", "age": -5 }))
            .unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::new("age", "Age must be a positive integer")]
        );
    }

    #[test]
    fn test_age_zero_is_allowed() {
        let user =
            validate_create(&json!({ "name": "Baby", "email": "b@example.com", "age": 0 })).unwrap();
        assert_eq!(user.age, Some(0));
    }

    #[test]
    fn test_type_mismatches() {
        let err = validate_create(&json!({
            "name": 42,
            "email": null,
            "age": 30.5
        }))
        .unwrap_err();

        assert_eq!(
            err.violations,
            vec![
                Violation::new("age", "Expected integer"),
                Violation::new("email", "Expected string"),
                Violation::new("name", "Expected string"),
            ]
        );
    }

    #[test]
    fn test_age_accepts_integral_floats() {
        let user = validate_create(&json!({ "name": "John", "email": "john@example.com", "age": 30.0 }))
            .unwrap();
        assert_eq!(user.age, Some(30));

        let payload = parse_payload(br#"{"name":"John","email":"john@example.com","age":1e2}"#).unwrap();
        assert_eq!(validate_create(&payload).unwrap().age, Some(100));

        let patch = validate_update(&json!({ "age": 0.0 })).unwrap();
        assert_eq!(patch.age, Some(0));
    }

    #[test]
    fn test_age_rejects_fractions_and_out_of_range() {
        for age in [json!(30.5), json!(1e300), json!(18446744073709551615u64), json!("30"), json!(true)] {
            let err = validate_update(&json!({ "age": age })).unwrap_err();
            assert_eq!(err.violations, vec![Violation::new("age", "Expected integer")]);
        }

        let err = validate_update(&json!({ "age": -3.0 })).unwrap_err();
        assert_eq!(
            err.violations,
            vec![Violation::new("age", "Age must be a positive integer")]
        );
    }

    #[test]
    fn test_email_rejects_malformed_local_and_domain_parts() {
        for email in [".john@example.com", "john..doe@example.com", "a@b", "john@localhost"] {
            let err = validate_create(&json!({ "name": "John", "email": email })).unwrap_err();
            assert_eq!(
                err.violations,
                vec![Violation::new("email", "Invalid email format")],
                "{}",
                email
            );
        }
    }

    #[test]
    fn test_reports_every_offending_field() {
        let err = validate_create(&json!({ "name": "", "email": "nope", "age": -1 })).unwrap_err();
        let fields: Vec<&str> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["age", "email", "name"]);
    }

    #[test]
    fn test_update_allows_partial_and_empty() {
        let patch = validate_update(&json!({ "age": 31 })).unwrap();
        assert_eq!(
            patch,
            UpdateUser {
                age: Some(31),
                ..Default::default()
            }
        );

        assert_eq!(validate_update(&json!({})).unwrap(), UpdateUser::default());
    }

    #[test]
    fn test_update_applies_same_field_rules() {
        let err = validate_update(&json!({ "email": "invalid-email" })).unwrap_err();
        assert!(err.has_field("email"));

        let err = validate(&json!({ "name": "" }), Mode::Update).unwrap_err();
        assert!(err.has_field("name"));
    }

    #[test]
    fn test_non_object_payload() {
        for payload in [json!([]), json!("text"), json!(1), json!(null)] {
            let err = validate(&payload, Mode::Update).unwrap_err();
            assert_eq!(err.violations, vec![Violation::new("body", "Expected object")]);
        }
    }

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload(br#"{"name":"x"}"#).unwrap(), json!({ "name": "x" }));

        for body in [&b""[..], b"{not json", b"{\"name\":"] {
            let err = parse_payload(body).unwrap_err();
            assert!(err.has_field("body"));
        }
    }
}
