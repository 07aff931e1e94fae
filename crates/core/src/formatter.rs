//! Builders for the request payload: the input map and the rule list.
//!
//! Every function here is pure; no validation is done on the shapes passed
//! in.

use serde_json::{Map, Value};

use crate::field::{is_truthy, Component, Field, RuleSource};
use crate::payload::RulePayloadEntry;

/// The properties allowed to travel in a rule's `config`.
///
/// Anything not listed stays local, so unrelated component properties never
/// reach the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowList(&'static [&'static str]);

impl AllowList {
    /// Properties forwarded for plain fields.
    pub const FIELD: AllowList = AllowList(&["type", "name", "id", "maxLength", "required"]);

    /// Properties forwarded for components; adds the range bounds.
    pub const COMPONENT: AllowList = AllowList(&[
        "type",
        "name",
        "id",
        "maxLength",
        "required",
        "min",
        "max",
    ]);

    pub const fn new(keys: &'static [&'static str]) -> Self {
        Self(keys)
    }

    /// Copy the allow-listed properties the source actually has.
    pub fn pick<S: RuleSource + ?Sized>(&self, source: &S) -> Map<String, Value> {
        self.0
            .iter()
            .filter_map(|key| source.property(key).map(|v| (key.to_string(), v)))
            .collect()
    }
}

/// Build the single-pair input map `{ [field.name]: value }`, keyed by
/// [`Field::name_key`].
///
/// Falsy values (`""`, `0`, `false`, `null`, absent) all become `""`.
pub fn create_field_input(field: &Field) -> Map<String, Value> {
    let value = field
        .value
        .as_ref()
        .filter(|v| is_truthy(v))
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()));

    let mut input = Map::new();
    input.insert(field.name_key(), value);
    input
}

/// One entry per enabled rule, in source order, each carrying the
/// allow-listed properties of `source` as its config. Disabled rules are
/// dropped.
pub fn get_rules_payload<S: RuleSource + ?Sized>(
    source: &S,
    allow_list: &AllowList,
) -> Vec<RulePayloadEntry> {
    let enabled: Vec<&String> = source
        .rules()
        .iter()
        .filter(|(_, enabled)| is_truthy(enabled))
        .map(|(name, _)| name)
        .collect();

    if enabled.is_empty() {
        return Vec::new();
    }

    let config = allow_list.pick(source);
    enabled
        .into_iter()
        .map(|rule_name| RulePayloadEntry {
            rule_name: rule_name.clone(),
            config: Some(config.clone()),
        })
        .collect()
}

/// Rule payload for a field, using [`AllowList::FIELD`].
pub fn create_field_rules_payload(field: &Field) -> Vec<RulePayloadEntry> {
    get_rules_payload(field, &AllowList::FIELD)
}

/// Rule payload for a component, using [`AllowList::COMPONENT`].
pub fn create_component_rules_payload(component: &Component) -> Vec<RulePayloadEntry> {
    get_rules_payload(component, &AllowList::COMPONENT)
}

/// Rule payload from a flat list of names: `{ruleName}` per element, in
/// order, with no filtering and no config.
pub fn rule_names_payload<I, S>(names: I) -> Vec<RulePayloadEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(RulePayloadEntry::named).collect()
}
