//! Field types for elicitation forms.
//!
//! Each field type owns its constraints and exposes two operations:
//!
//! - `to_schema_property()`: a pure, deterministic JSON schema fragment
//! - `validate(raw)`: coerce an untyped value to the field's type, or
//!   fail with a field-scoped error carrying the display title
//!
//! JSON `null` stands for an absent value throughout: a required field
//! with no default rejects it, anything else yields the default (or the
//! type-appropriate empty value).

use regex::Regex;
use serde_json::{Map, Value};

use elicit_core::FieldError;

/// Base schema keys common to all field types.
///
/// Emits `title`, `description`, and `default` when set, in that order.
fn base_schema(title: &str, description: &str, default: Option<Value>) -> Map<String, Value> {
    let mut schema = Map::new();
    if !title.is_empty() {
        schema.insert("title".to_string(), Value::String(title.to_string()));
    }
    if !description.is_empty() {
        schema.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
    }
    if let Some(default) = default {
        schema.insert("default".to_string(), default);
    }
    schema
}

// ============================================================================
// String
// ============================================================================

/// String field for text input.
#[derive(Debug, Clone)]
pub struct StringField {
    title: String,
    description: String,
    required: bool,
    default: Option<String>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<String>,
    choices: Option<Vec<String>>,
}

impl StringField {
    /// Creates a required string field with the given display title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            required: true,
            default: None,
            min_length: None,
            max_length: None,
            pattern: None,
            choices: None,
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Sets the inclusive minimum length in characters.
    #[must_use]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the inclusive maximum length in characters.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets a regex pattern the value must match.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Restricts the value to a closed list of literal choices.
    #[must_use]
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Converts to a JSON schema string property.
    #[must_use]
    pub fn to_schema_property(&self) -> Value {
        let mut schema = base_schema(
            &self.title,
            &self.description,
            self.default.clone().map(Value::String),
        );
        schema.insert("type".to_string(), Value::String("string".to_string()));

        if let Some(min) = self.min_length {
            schema.insert("minLength".to_string(), Value::from(min));
        }
        if let Some(max) = self.max_length {
            schema.insert("maxLength".to_string(), Value::from(max));
        }
        if let Some(ref pattern) = self.pattern {
            schema.insert("pattern".to_string(), Value::String(pattern.clone()));
        }
        if let Some(ref choices) = self.choices {
            schema.insert(
                "enum".to_string(),
                Value::Array(choices.iter().cloned().map(Value::String).collect()),
            );
        }

        Value::Object(schema)
    }

    /// Validates a raw value against this field.
    pub fn validate(&self, raw: &Value) -> Result<Value, FieldError> {
        if raw.is_null() {
            if self.required && self.default.is_none() {
                return Err(FieldError::new(&self.title, "is required"));
            }
            return Ok(Value::String(self.default.clone().unwrap_or_default()));
        }

        let Some(value) = raw.as_str() else {
            return Err(FieldError::new(&self.title, "must be a string"));
        };

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(FieldError::new(
                    &self.title,
                    format!("must be at least {min} characters"),
                ));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(FieldError::new(
                    &self.title,
                    format!("must be at most {max} characters"),
                ));
            }
        }

        if let Some(ref pattern) = self.pattern {
            let Ok(re) = Regex::new(pattern) else {
                return Err(FieldError::new(&self.title, "pattern is invalid"));
            };
            if !re.is_match(value) {
                return Err(FieldError::new(&self.title, "format is invalid"));
            }
        }

        if let Some(ref choices) = self.choices {
            if !choices.iter().any(|c| c == value) {
                return Err(FieldError::new(
                    &self.title,
                    format!("must be one of: {}", choices.join(", ")),
                ));
            }
        }

        Ok(Value::String(value.to_string()))
    }
}

// ============================================================================
// Integer
// ============================================================================

/// Integer field for whole number input.
#[derive(Debug, Clone)]
pub struct IntegerField {
    title: String,
    description: String,
    required: bool,
    default: Option<i64>,
    minimum: Option<i64>,
    maximum: Option<i64>,
}

impl IntegerField {
    /// Creates a required integer field with the given display title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            required: true,
            default: None,
            minimum: None,
            maximum: None,
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets the inclusive minimum.
    #[must_use]
    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the inclusive maximum.
    #[must_use]
    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Converts to a JSON schema integer property.
    #[must_use]
    pub fn to_schema_property(&self) -> Value {
        let mut schema = base_schema(
            &self.title,
            &self.description,
            self.default.map(Value::from),
        );
        schema.insert("type".to_string(), Value::String("integer".to_string()));

        if let Some(min) = self.minimum {
            schema.insert("minimum".to_string(), Value::from(min));
        }
        if let Some(max) = self.maximum {
            schema.insert("maximum".to_string(), Value::from(max));
        }

        Value::Object(schema)
    }

    /// Validates a raw value against this field.
    ///
    /// Strings are parsed as base-10 integers; floating values truncate
    /// toward zero.
    pub fn validate(&self, raw: &Value) -> Result<Value, FieldError> {
        if raw.is_null() {
            if self.required && self.default.is_none() {
                return Err(FieldError::new(&self.title, "is required"));
            }
            return Ok(Value::from(self.default.unwrap_or(0)));
        }

        let value = match raw {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i
                } else if let Some(f) = n.as_f64() {
                    let truncated = f.trunc();
                    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
                        return Err(FieldError::new(&self.title, "must be an integer"));
                    }
                    truncated as i64
                } else {
                    return Err(FieldError::new(&self.title, "must be an integer"));
                }
            }
            Value::String(s) => match s.parse::<i64>() {
                Ok(i) => i,
                Err(_) => return Err(FieldError::new(&self.title, "must be an integer")),
            },
            _ => return Err(FieldError::new(&self.title, "must be an integer")),
        };

        if let Some(min) = self.minimum {
            if value < min {
                return Err(FieldError::new(
                    &self.title,
                    format!("must be at least {min}"),
                ));
            }
        }
        if let Some(max) = self.maximum {
            if value > max {
                return Err(FieldError::new(
                    &self.title,
                    format!("must be at most {max}"),
                ));
            }
        }

        Ok(Value::from(value))
    }
}

// ============================================================================
// Number
// ============================================================================

/// Number field for decimal input.
#[derive(Debug, Clone)]
pub struct NumberField {
    title: String,
    description: String,
    required: bool,
    default: Option<f64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
}

impl NumberField {
    /// Creates a required number field with the given display title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            required: true,
            default: None,
            minimum: None,
            maximum: None,
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets the inclusive minimum.
    #[must_use]
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Sets the inclusive maximum.
    #[must_use]
    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Converts to a JSON schema number property.
    #[must_use]
    pub fn to_schema_property(&self) -> Value {
        let mut schema = base_schema(
            &self.title,
            &self.description,
            self.default.map(Value::from),
        );
        schema.insert("type".to_string(), Value::String("number".to_string()));

        if let Some(min) = self.minimum {
            schema.insert("minimum".to_string(), Value::from(min));
        }
        if let Some(max) = self.maximum {
            schema.insert("maximum".to_string(), Value::from(max));
        }

        Value::Object(schema)
    }

    /// Validates a raw value against this field.
    ///
    /// Integers and strings are coerced; the cleaned value is always a
    /// floating representation.
    pub fn validate(&self, raw: &Value) -> Result<Value, FieldError> {
        if raw.is_null() {
            if self.required && self.default.is_none() {
                return Err(FieldError::new(&self.title, "is required"));
            }
            return Ok(Value::from(self.default.unwrap_or(0.0)));
        }

        let value = match raw {
            Value::Number(n) => match n.as_f64() {
                Some(f) => f,
                None => return Err(FieldError::new(&self.title, "must be a number")),
            },
            Value::String(s) => match s.parse::<f64>() {
                Ok(f) if f.is_finite() => f,
                _ => return Err(FieldError::new(&self.title, "must be a number")),
            },
            _ => return Err(FieldError::new(&self.title, "must be a number")),
        };

        if let Some(min) = self.minimum {
            if value < min {
                return Err(FieldError::new(
                    &self.title,
                    format!("must be at least {min}"),
                ));
            }
        }
        if let Some(max) = self.maximum {
            if value > max {
                return Err(FieldError::new(
                    &self.title,
                    format!("must be at most {max}"),
                ));
            }
        }

        Ok(Value::from(value))
    }
}

// ============================================================================
// Boolean
// ============================================================================

/// Boolean field for true/false input.
#[derive(Debug, Clone)]
pub struct BooleanField {
    title: String,
    description: String,
    required: bool,
    default: Option<bool>,
}

impl BooleanField {
    /// Creates a required boolean field with the given display title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            required: true,
            default: None,
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, default: bool) -> Self {
        self.default = Some(default);
        self
    }

    /// Converts to a JSON schema boolean property.
    #[must_use]
    pub fn to_schema_property(&self) -> Value {
        let mut schema = base_schema(
            &self.title,
            &self.description,
            self.default.map(Value::Bool),
        );
        schema.insert("type".to_string(), Value::String("boolean".to_string()));
        Value::Object(schema)
    }

    /// Validates a raw value against this field.
    ///
    /// Strings map case-insensitively from the true/1/yes/on and
    /// false/0/no/off sets; numbers use truthiness.
    pub fn validate(&self, raw: &Value) -> Result<Value, FieldError> {
        if raw.is_null() {
            if self.required && self.default.is_none() {
                return Err(FieldError::new(&self.title, "is required"));
            }
            return Ok(Value::Bool(self.default.unwrap_or(false)));
        }

        let value = match raw {
            Value::Bool(b) => *b,
            Value::String(s) => match s.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => return Err(FieldError::new(&self.title, "must be true or false")),
            },
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            _ => return Err(FieldError::new(&self.title, "must be true or false")),
        };

        Ok(Value::Bool(value))
    }
}

// ============================================================================
// Enum
// ============================================================================

/// One member of an enumeration: a symbolic name and a raw wire value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumChoice {
    name: String,
    value: String,
}

impl EnumChoice {
    /// Creates a choice from a symbolic name and its raw value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the symbolic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw wire value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the human-readable label: the symbolic name with
    /// underscores replaced by spaces, title-cased.
    #[must_use]
    pub fn label(&self) -> String {
        title_case(&self.name.replace('_', " "))
    }
}

/// Enum field for selecting from predefined choices.
#[derive(Debug, Clone)]
pub struct EnumField {
    title: String,
    description: String,
    required: bool,
    default: Option<String>,
    choices: Vec<EnumChoice>,
}

impl EnumField {
    /// Creates a required enum field with the given display title and
    /// closed choice list.
    #[must_use]
    pub fn new(title: impl Into<String>, choices: Vec<EnumChoice>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            required: true,
            default: None,
            choices,
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the default value (one of the choices' raw values).
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Returns the declared choices.
    #[must_use]
    pub fn choices(&self) -> &[EnumChoice] {
        &self.choices
    }

    /// Converts to a JSON schema enum property.
    ///
    /// Exposes both the raw values (`enum`) and human-readable labels
    /// (`enumNames`); no `type` key.
    #[must_use]
    pub fn to_schema_property(&self) -> Value {
        let mut schema = base_schema(
            &self.title,
            &self.description,
            self.default.clone().map(Value::String),
        );
        schema.insert(
            "enum".to_string(),
            Value::Array(
                self.choices
                    .iter()
                    .map(|c| Value::String(c.value.clone()))
                    .collect(),
            ),
        );
        schema.insert(
            "enumNames".to_string(),
            Value::Array(
                self.choices
                    .iter()
                    .map(|c| Value::String(c.label()))
                    .collect(),
            ),
        );
        Value::Object(schema)
    }

    /// Validates a raw value against this field.
    ///
    /// The value must equal one of the declared raw values exactly;
    /// matching is case-sensitive.
    pub fn validate(&self, raw: &Value) -> Result<Value, FieldError> {
        if raw.is_null() {
            if self.required && self.default.is_none() {
                return Err(FieldError::new(&self.title, "is required"));
            }
            return Ok(Value::String(self.default.clone().unwrap_or_default()));
        }

        let Some(value) = raw.as_str() else {
            return Err(FieldError::new(&self.title, "must be a string"));
        };

        if !self.choices.iter().any(|c| c.value == value) {
            let names: Vec<&str> = self.choices.iter().map(|c| c.name.as_str()).collect();
            return Err(FieldError::new(
                &self.title,
                format!("must be one of: {}", names.join(", ")),
            ));
        }

        Ok(Value::String(value.to_string()))
    }
}

// ============================================================================
// Field enum
// ============================================================================

/// Any field type, unified for registry storage and dispatch.
#[derive(Debug, Clone)]
pub enum Field {
    /// Text input.
    String(StringField),
    /// Whole number input.
    Integer(IntegerField),
    /// Decimal input.
    Number(NumberField),
    /// True/false input.
    Boolean(BooleanField),
    /// Closed enumeration input.
    Enum(EnumField),
}

impl Field {
    /// Returns the field's display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Field::String(f) => &f.title,
            Field::Integer(f) => &f.title,
            Field::Number(f) => &f.title,
            Field::Boolean(f) => &f.title,
            Field::Enum(f) => &f.title,
        }
    }

    /// Returns whether the field is required.
    #[must_use]
    pub fn required(&self) -> bool {
        match self {
            Field::String(f) => f.required,
            Field::Integer(f) => f.required,
            Field::Number(f) => f.required,
            Field::Boolean(f) => f.required,
            Field::Enum(f) => f.required,
        }
    }

    /// Returns the configured default as a JSON value, if set.
    #[must_use]
    pub fn default_value(&self) -> Option<Value> {
        match self {
            Field::String(f) => f.default.clone().map(Value::String),
            Field::Integer(f) => f.default.map(Value::from),
            Field::Number(f) => f.default.map(Value::from),
            Field::Boolean(f) => f.default.map(Value::Bool),
            Field::Enum(f) => f.default.clone().map(Value::String),
        }
    }

    /// Converts the field to a JSON schema property fragment.
    #[must_use]
    pub fn to_schema_property(&self) -> Value {
        match self {
            Field::String(f) => f.to_schema_property(),
            Field::Integer(f) => f.to_schema_property(),
            Field::Number(f) => f.to_schema_property(),
            Field::Boolean(f) => f.to_schema_property(),
            Field::Enum(f) => f.to_schema_property(),
        }
    }

    /// Validates a raw value against the field.
    pub fn validate(&self, raw: &Value) -> Result<Value, FieldError> {
        match self {
            Field::String(f) => f.validate(raw),
            Field::Integer(f) => f.validate(raw),
            Field::Number(f) => f.validate(raw),
            Field::Boolean(f) => f.validate(raw),
            Field::Enum(f) => f.validate(raw),
        }
    }
}

impl From<StringField> for Field {
    fn from(f: StringField) -> Self {
        Field::String(f)
    }
}

impl From<IntegerField> for Field {
    fn from(f: IntegerField) -> Self {
        Field::Integer(f)
    }
}

impl From<NumberField> for Field {
    fn from(f: NumberField) -> Self {
        Field::Number(f)
    }
}

impl From<BooleanField> for Field {
    fn from(f: BooleanField) -> Self {
        Field::Boolean(f)
    }
}

impl From<EnumField> for Field {
    fn from(f: EnumField) -> Self {
        Field::Enum(f)
    }
}

/// Capitalizes the first letter of each alphabetic run and lowercases
/// the rest, matching the display-label convention for enum names.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
