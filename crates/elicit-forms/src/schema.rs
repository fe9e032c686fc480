//! Schema compilation for form field sets.
//!
//! Walks a [`FieldSet`] and produces one JSON-Schema-shaped object for
//! the whole form, in the wire shape elicitation clients expect:
//!
//! ```json
//! {
//!     "type": "object",
//!     "properties": { "<name>": { ... }, ... },
//!     "required": ["<name>", ...]
//! }
//! ```

use serde_json::{Map, Value};

use crate::registry::FieldSet;

/// Compiles a field set into a JSON schema object.
///
/// Pure and deterministic: `properties` iterates in declaration order,
/// and `required` lists the names of required fields in the same order.
/// Every field appears in `properties` regardless of required status.
///
/// Policy: when no field is required, the `required` key is omitted
/// entirely (rather than emitted as an empty list).
#[must_use]
pub fn compile(fields: &FieldSet) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for (name, field) in fields.iter() {
        properties.insert(name.to_string(), field.to_schema_property());
        if field.required() {
            required.push(Value::String(name.to_string()));
        }
    }

    let mut schema = Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), Value::Array(required));
    }

    Value::Object(schema)
}
