//! Field validator contract

use serde_json::Value;

use crate::entity::Entity;

/// A pluggable validator for one field type.
///
/// A validator handles whichever rule types it knows about and reports
/// "not applicable" for the rest. Both methods receive the rule-type
/// name and the configured rule value (which may be `Value::Null` when
/// the rule is mandatory but unconfigured).
///
/// Return values:
/// - `None` — no handler for this rule type; the phase passes trivially
/// - `Some(true)` — the rule holds
/// - `Some(false)` — the rule is violated
pub trait FieldValidator: Send + Sync {
    /// Checks a rule against the entity's current field value.
    fn check(&self, rule: &str, entity: &Entity, field: &str, rule_value: &Value) -> Option<bool> {
        let _ = (rule, entity, field, rule_value);
        None
    }

    /// Checks a rule against an auxiliary raw-data payload.
    ///
    /// The payload is the raw input the entity was populated from
    /// (e.g. a request body); validators use it for rules that care
    /// about what was submitted rather than what was stored.
    fn raw_check(&self, rule: &str, data: &Value, field: &str, rule_value: &Value) -> Option<bool> {
        let _ = (rule, data, field, rule_value);
        None
    }
}
