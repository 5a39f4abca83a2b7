//! Request validation for advert payloads.

mod validation;
pub use validation::{AdvertValidator, FieldRule, FIELD_RULES, SCHEMA_KEY};
