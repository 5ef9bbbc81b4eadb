#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// The input kind of a single field. Drives widget rendering only; values are
/// never validated against it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Date,
    SingleSelect,
}

/// Shape of one field of a record. Immutable for the life of an editor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: String,
    pub kind: FieldKind,
    /// Choices for `SingleSelect`; empty for every other kind.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub placeholder: String,
}

impl FieldSpec {
    pub fn text(label: &str, placeholder: &str) -> Self {
        Self::new(label, FieldKind::Text, placeholder)
    }

    pub fn email(label: &str, placeholder: &str) -> Self {
        Self::new(label, FieldKind::Email, placeholder)
    }

    pub fn date(label: &str) -> Self {
        Self::new(label, FieldKind::Date, "")
    }

    pub fn select(label: &str, options: &[&str]) -> Self {
        FieldSpec {
            label: label.to_string(),
            kind: FieldKind::SingleSelect,
            options: options.iter().map(|o| o.to_string()).collect(),
            placeholder: String::new(),
        }
    }

    fn new(label: &str, kind: FieldKind, placeholder: &str) -> Self {
        FieldSpec {
            label: label.to_string(),
            kind,
            options: Vec::new(),
            placeholder: placeholder.to_string(),
        }
    }
}

/// Ordered field specs describing one slot's record shape. Labels are unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Schema(Vec<FieldSpec>);

impl Schema {
    /// Builds a schema, dropping any field whose label repeats an earlier one.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        let mut unique: Vec<FieldSpec> = Vec::with_capacity(fields.len());
        for field in fields {
            if unique.iter().any(|f| f.label == field.label) {
                tracing::warn!("Dropping duplicate schema label '{}'", field.label);
                continue;
            }
            unique.push(field);
        }
        Schema(unique)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|f| f.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_labels_are_dropped() {
        let schema = Schema::new(vec![
            FieldSpec::text("Skill", "Rust"),
            FieldSpec::select("Level", &["Beginner"]),
            FieldSpec::text("Skill", "again"),
        ]);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.labels().collect::<Vec<_>>(), vec!["Skill", "Level"]);
        assert_eq!(schema.fields()[0].placeholder, "Rust");
    }

    #[test]
    fn test_select_carries_options() {
        let spec = FieldSpec::select("Level", &["Beginner", "Expert"]);
        assert_eq!(spec.kind, FieldKind::SingleSelect);
        assert_eq!(spec.options, vec!["Beginner", "Expert"]);
        assert!(FieldSpec::date("Start Date").options.is_empty());
    }
}
