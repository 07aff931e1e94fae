//! Form field and component descriptions.
//!
//! Both shapes come from the form layer as camelCase JSON and are read-only
//! here. Rule toggles keep their source order so the emitted rule list
//! matches the order the form declared them in.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Ordered `ruleName -> enabled` toggles. Any JSON value is accepted as the
/// toggle and judged with [`is_truthy`].
pub type RuleToggles = IndexMap<String, Value>;

/// A single form input plus the rules that apply to it.
///
/// Properties are kept as raw JSON so loosely typed form configs (numeric
/// ids, string lengths) pass through untouched. A property present with a
/// `null` value is `Some(Value::Null)`, distinct from an absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_type: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub required: Option<Value>,
    /// Lower bound; a number or a date string depending on `type`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,
    /// Upper bound; a number or a date string depending on `type`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,
    #[serde(default)]
    pub rules: RuleToggles,
}

impl Field {
    /// The key this field's value is sent under.
    ///
    /// Strings are used verbatim; a missing name becomes `"undefined"` and
    /// any other JSON value its textual form (`null`, `12`, `true`).
    pub fn name_key(&self) -> String {
        match &self.name {
            None => "undefined".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Keep a present key as `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A field-like description that carries arbitrary extra properties.
///
/// Everything except `rules` lands in `properties`; only allow-listed keys
/// are ever copied out of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub rules: RuleToggles,
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// Anything that can feed the rule payload builder: a set of rule toggles
/// plus named properties to copy into each rule's config.
pub trait RuleSource {
    fn rules(&self) -> &RuleToggles;

    /// Look up a property by its wire (camelCase) name. `None` means the
    /// source does not have the property at all.
    fn property(&self, key: &str) -> Option<Value>;
}

impl RuleSource for Field {
    fn rules(&self) -> &RuleToggles {
        &self.rules
    }

    fn property(&self, key: &str) -> Option<Value> {
        match key {
            "name" => self.name.clone(),
            "type" => self.field_type.clone(),
            "id" => self.id.clone(),
            "maxLength" => self.max_length.clone(),
            "required" => self.required.clone(),
            "min" => self.min.clone(),
            "max" => self.max.clone(),
            _ => None,
        }
    }
}

impl RuleSource for Component {
    fn rules(&self) -> &RuleToggles {
        &self.rules
    }

    fn property(&self, key: &str) -> Option<Value> {
        self.properties.get(key).cloned()
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything
/// else (empty arrays and objects included) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
