#![allow(dead_code)]

use serde::Serialize;

use crate::resume::{FieldSpec, Record, Schema};

/// One staged field: its spec plus the value typed so far.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BufferedField {
    pub spec: FieldSpec,
    pub value: String,
}

/// Transient staging area for the record being composed.
///
/// Always holds exactly one entry per schema field, in schema order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldBuffer(Vec<BufferedField>);

impl FieldBuffer {
    pub fn empty(schema: &Schema) -> Self {
        FieldBuffer(
            schema
                .fields()
                .iter()
                .map(|spec| BufferedField {
                    spec: spec.clone(),
                    value: String::new(),
                })
                .collect(),
        )
    }

    /// Fills each field from the matching label of `record`, or empty.
    pub fn from_record(schema: &Schema, record: &Record) -> Self {
        let mut buffer = Self::empty(schema);
        for field in &mut buffer.0 {
            field.value = record.get(&field.spec.label).to_string();
        }
        buffer
    }

    pub fn reset(&mut self) {
        for field in &mut self.0 {
            field.value.clear();
        }
    }

    /// Replaces one value, leaving every other field untouched.
    /// Returns `false` when `index` is out of range.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|f| f.value.as_str())
    }

    pub fn fields(&self) -> &[BufferedField] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|f| f.value.is_empty())
    }

    /// One key per schema label, valued from the buffer.
    pub fn to_record(&self) -> Record {
        self.0
            .iter()
            .map(|f| (f.spec.label.clone(), f.value.clone()))
            .collect()
    }
}
