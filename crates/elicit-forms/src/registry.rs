//! Field registry: ordered name→field mappings for form definitions.
//!
//! A [`FieldSet`] is built once per form type via [`FieldSetBuilder`] and
//! read-only thereafter. The builder reproduces declaration-time
//! collection: ancestor sets are merged first (via [`FieldSetBuilder::extend`]),
//! then the type's own declarations, and redeclaring a name replaces the
//! field in place so the most-derived definition wins while iteration
//! order keeps the original declaration position.

use crate::fields::Field;

/// Immutable, ordered collection of named fields.
///
/// Iteration order is declaration order: ancestors before the declaring
/// type, each level in source order. Safe to share read-only across
/// concurrently active sessions; cheap to clone for per-session
/// overrides.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: Vec<(String, Field)>,
}

impl FieldSet {
    /// Creates an empty field set.
    ///
    /// A form with zero declared fields is valid and compiles to a
    /// schema with an empty `properties` object.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts building a field set.
    #[must_use]
    pub fn builder() -> FieldSetBuilder {
        FieldSetBuilder::new()
    }

    /// Returns the field declared under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find_map(|(n, f)| (n == name).then_some(f))
    }

    /// Returns true if a field is declared under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// Iterates name/field pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(n, f)| (n.as_str(), f))
    }

    /// Iterates declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a copy of this set with `field` replacing the definition
    /// under `name`, keeping the original declaration position. If the
    /// name is not declared, the field is appended.
    #[must_use]
    pub fn with_field(&self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        let mut copy = self.clone();
        copy.insert(name.into(), field.into());
        copy
    }

    /// Inserts or replaces in place.
    fn insert(&mut self, name: String, field: Field) {
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = field;
        } else {
            self.fields.push((name, field));
        }
    }
}

/// Builder for [`FieldSet`].
///
/// The explicit static registration step: call [`extend`](Self::extend)
/// with each ancestor's field set (base-most first), then
/// [`field`](Self::field) for each of the type's own declarations in
/// source order, then [`build`](Self::build).
#[derive(Debug, Default)]
pub struct FieldSetBuilder {
    set: FieldSet,
}

impl FieldSetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges every field from an ancestor set, in the ancestor's order.
    ///
    /// Names already present are replaced in place.
    #[must_use]
    pub fn extend(mut self, ancestor: &FieldSet) -> Self {
        for (name, field) in ancestor.iter() {
            self.set.insert(name.to_string(), field.clone());
        }
        self
    }

    /// Declares a field under `name`.
    ///
    /// Redeclaring a name replaces the earlier definition in place, so
    /// the most-derived declaration wins without changing iteration
    /// order.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: impl Into<Field>) -> Self {
        self.set.insert(name.into(), field.into());
        self
    }

    /// Freezes the collected mapping.
    #[must_use]
    pub fn build(self) -> FieldSet {
        self.set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{BooleanField, IntegerField, StringField};

    #[test]
    fn test_collects_fields_in_declaration_order() {
        let set = FieldSet::builder()
            .field("name", StringField::new("Name"))
            .field("age", IntegerField::new("Age"))
            .field("active", BooleanField::new("Active"))
            .build();

        assert_eq!(set.len(), 3);
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, ["name", "age", "active"]);
        assert!(set.contains("age"));
        assert_eq!(set.get("name").unwrap().title(), "Name");
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn test_empty_set_is_valid() {
        let set = FieldSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.names().count(), 0);
    }

    #[test]
    fn test_extend_merges_ancestors_first() {
        let base = FieldSet::builder()
            .field("name", StringField::new("Name"))
            .field("choice", StringField::new("Choice"))
            .build();

        let extended = FieldSet::builder()
            .extend(&base)
            .field("email", StringField::new("Email"))
            .field("age", IntegerField::new("Age"))
            .build();

        assert_eq!(extended.len(), 4);
        let names: Vec<&str> = extended.names().collect();
        assert_eq!(names, ["name", "choice", "email", "age"]);
    }

    #[test]
    fn test_redeclaration_replaces_in_place() {
        let base = FieldSet::builder()
            .field("name", StringField::new("Name"))
            .field("age", IntegerField::new("Age"))
            .build();

        // The derived declaration wins, but keeps the ancestor position.
        let derived = FieldSet::builder()
            .extend(&base)
            .field("name", StringField::new("Full Name").min_length(2))
            .build();

        assert_eq!(derived.len(), 2);
        let names: Vec<&str> = derived.names().collect();
        assert_eq!(names, ["name", "age"]);
        assert_eq!(derived.get("name").unwrap().title(), "Full Name");
    }

    #[test]
    fn test_with_field_copies_without_touching_the_original() {
        let base = FieldSet::builder()
            .field("name", StringField::new("Name"))
            .build();

        let overridden = base.with_field("name", StringField::new("Override"));

        assert_eq!(base.get("name").unwrap().title(), "Name");
        assert_eq!(overridden.get("name").unwrap().title(), "Override");
        assert_eq!(overridden.len(), 1);
    }
}
