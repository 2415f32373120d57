//! # Field Validation Rules
//!
//! Parser for the clause language of `apivalidator:` annotations:
//!
//! ```text
//! required, paramname=full_name, default=user, enum=user|moderator|admin, min=0, max=128
//! ```
//!
//! Parsing never fails. Unknown keys are ignored and `min`, `max` and `enum` keep
//! their raw text; whether a value fits its field is decided when code is emitted.

/// The rule set of one field, as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    /// `paramname=<name>`.
    pub param_name: Option<String>,
    /// `required`.
    pub required: bool,
    /// `default=<value>`.
    pub default_value: Option<String>,
    /// `enum=<a>|<b>|...`, alternatives in declared order.
    pub enum_values: Option<Vec<String>>,
    /// `min=<number>`, raw text.
    pub min_bound: Option<String>,
    /// `max=<number>`, raw text.
    pub max_bound: Option<String>,
}

impl FieldRules {
    /// Resolves the request parameter name for a field.
    ///
    /// Defaults to the lower-cased field name when `paramname` is absent or empty.
    pub fn param_name_for(&self, field_name: &str) -> String {
        self.param_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| field_name.to_lowercase())
    }
}

/// Parses a comma-separated clause list into a `FieldRules`.
///
/// Each clause is `key` or `key=value`, trimmed. A repeated key keeps its last value.
///
/// # Examples
/// ```
/// use apigen_core::rules::parse_field_rules;
///
/// let rules = parse_field_rules("required,min=10,paramname=login");
/// assert!(rules.required);
/// assert_eq!(rules.min_bound.as_deref(), Some("10"));
/// assert_eq!(rules.param_name_for("Login"), "login");
/// ```
pub fn parse_field_rules(text: &str) -> FieldRules {
    let mut rules = FieldRules::default();

    for clause in text.split(',') {
        let clause = clause.trim();
        if clause.is_empty() {
            continue;
        }
        let (key, value) = match clause.split_once('=') {
            Some((k, v)) => (k.trim(), v.trim()),
            None => (clause, ""),
        };

        match key {
            "paramname" => rules.param_name = Some(value.to_string()),
            "required" => rules.required = true,
            "default" => rules.default_value = Some(value.to_string()),
            "enum" => rules.enum_values = Some(value.split('|').map(str::to_string).collect()),
            "min" => rules.min_bound = Some(value.to_string()),
            "max" => rules.max_bound = Some(value.to_string()),
            _ => {}
        }
    }

    rules
}
