//! Advert payload validation from a fixed field list.

use crate::error::FieldErrors;
use crate::store::NewAdvert;
use serde_json::{Map, Value};

/// Key used for errors that concern the payload as a whole.
pub const SCHEMA_KEY: &str = "_schema";

/// A client-writable string field and its maximum length in characters.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub max_length: usize,
}

/// Writable fields of an advert. `id` and `created_at` are server-assigned and not listed.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule { name: "title", max_length: 25 },
    FieldRule { name: "description", max_length: 200 },
    FieldRule { name: "owner", max_length: 30 },
];

pub struct AdvertValidator;

impl AdvertValidator {
    /// Validate a request body. Every rule is checked and all messages collected;
    /// nothing is returned unless the whole payload is valid. Unknown keys are ignored.
    pub fn validate(body: &Value) -> Result<NewAdvert, FieldErrors> {
        let Value::Object(map) = body else {
            let mut errors = FieldErrors::new();
            errors.insert(SCHEMA_KEY.to_string(), vec!["Invalid input type.".to_string()]);
            return Err(errors);
        };

        let mut errors = FieldErrors::new();
        for rule in FIELD_RULES {
            if let Err(message) = check_field(map, rule) {
                errors.entry(rule.name.to_string()).or_default().push(message);
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewAdvert {
            title: string_field(map, "title"),
            description: string_field(map, "description"),
            owner: string_field(map, "owner"),
        })
    }
}

fn check_field(map: &Map<String, Value>, rule: &FieldRule) -> Result<(), String> {
    match map.get(rule.name) {
        None => Err("Missing data for required field.".into()),
        Some(Value::Null) => Err("Field may not be null.".into()),
        Some(Value::String(s)) if s.chars().count() > rule.max_length => {
            Err(format!("Longer than maximum length {}.", rule.max_length))
        }
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err("Not a valid string.".into()),
    }
}

fn string_field(map: &Map<String, Value>, name: &str) -> String {
    map.get(name).and_then(Value::as_str).unwrap_or_default().to_string()
}
