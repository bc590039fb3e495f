//! Input rules for creating a hero-power association.
//!
//! Checks run in a fixed order before anything is written:
//!
//! 1. `strength`, `power_id` and `hero_id` must all be present and truthy
//!    (JSON `null`, `false`, `0`, `""`, `[]` and `{}` count as missing).
//! 2. `strength` must be a string.
//! 3. The referenced hero and power must exist. Existence is checked by the
//!    caller against the store; this module only resolves the raw ids.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const REFERENCE_NOT_FOUND: &str = "Hero or Power not found";
pub const STRENGTH_NOT_STRING: &str = "strength must be a string";

/// Raw `POST /hero_powers` body. Fields stay untyped so that falsy values
/// can be told apart from absent ones by [`validate`] rather than by serde.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroPowerInput {
    pub strength: Option<Value>,
    pub power_id: Option<Value>,
    pub hero_id: Option<Value>,
}

/// A hero-power request that passed the presence checks.
///
/// `hero_id` / `power_id` are `None` when the supplied value can never
/// match a row (e.g. `"abc"` or `1.5`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedHeroPower {
    pub strength: String,
    pub hero_id: Option<DbId>,
    pub power_id: Option<DbId>,
}

impl CheckedHeroPower {
    /// Both ids as `(hero_id, power_id)`, or a validation error if either
    /// cannot reference a row.
    pub fn references(&self) -> Result<(DbId, DbId), CoreError> {
        match (self.hero_id, self.power_id) {
            (Some(hero_id), Some(power_id)) => Ok((hero_id, power_id)),
            _ => Err(CoreError::Validation(REFERENCE_NOT_FOUND.into())),
        }
    }
}

/// JSON truthiness: everything except `null`, `false`, zero, and empty
/// strings/arrays/objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Resolve a JSON id value to a row id. Integers, integral floats and
/// numeric strings resolve; anything else does not.
pub fn resolve_id(value: &Value) -> Option<DbId> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn present(field: &Option<Value>) -> Option<&Value> {
    field.as_ref().filter(|v| is_truthy(v))
}

/// Apply the presence and type checks to a raw request body.
pub fn validate(input: &HeroPowerInput) -> Result<CheckedHeroPower, CoreError> {
    let (Some(strength), Some(power_id), Some(hero_id)) = (
        present(&input.strength),
        present(&input.power_id),
        present(&input.hero_id),
    ) else {
        return Err(CoreError::Validation(MISSING_FIELDS.into()));
    };

    let strength = strength
        .as_str()
        .ok_or_else(|| CoreError::Validation(STRENGTH_NOT_STRING.into()))?;

    Ok(CheckedHeroPower {
        strength: strength.to_string(),
        hero_id: resolve_id(hero_id),
        power_id: resolve_id(power_id),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn input(body: Value) -> HeroPowerInput {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn complete_input_passes() {
        let checked =
            validate(&input(json!({"strength": "Strong", "power_id": 2, "hero_id": 3}))).unwrap();
        assert_eq!(checked.strength, "Strong");
        assert_eq!(checked.references().unwrap(), (3, 2));
    }

    #[test]
    fn missing_strength_is_rejected() {
        let err = validate(&input(json!({"power_id": 1, "hero_id": 1}))).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == MISSING_FIELDS);
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for body in [
            json!({"strength": "", "power_id": 1, "hero_id": 1}),
            json!({"strength": "Weak", "power_id": 0, "hero_id": 1}),
            json!({"strength": "Weak", "power_id": 1, "hero_id": null}),
            json!({"strength": false, "power_id": 1, "hero_id": 1}),
            json!({"strength": "Weak", "power_id": [], "hero_id": 1}),
        ] {
            let err = validate(&input(body.clone())).unwrap_err();
            assert_matches!(err, CoreError::Validation(msg) if msg == MISSING_FIELDS, "{body}");
        }
    }

    #[test]
    fn non_string_strength_is_rejected() {
        let err = validate(&input(json!({"strength": 5, "power_id": 1, "hero_id": 1}))).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == STRENGTH_NOT_STRING);
    }

    #[test]
    fn unresolvable_id_fails_reference_check() {
        let checked =
            validate(&input(json!({"strength": "Average", "power_id": "abc", "hero_id": 1})))
                .unwrap();
        assert_eq!(checked.power_id, None);
        assert_matches!(
            checked.references(),
            Err(CoreError::Validation(msg)) if msg == REFERENCE_NOT_FOUND
        );
    }

    #[test]
    fn id_resolution() {
        assert_eq!(resolve_id(&json!(7)), Some(7));
        assert_eq!(resolve_id(&json!(7.0)), Some(7));
        assert_eq!(resolve_id(&json!("12")), Some(12));
        assert_eq!(resolve_id(&json!(1.5)), None);
        assert_eq!(resolve_id(&json!(true)), None);
        assert_eq!(resolve_id(&json!({"id": 1})), None);
    }

    #[test]
    fn truthiness() {
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([0])));
    }
}
