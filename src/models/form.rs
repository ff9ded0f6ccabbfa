use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::field::{Field, FieldKind};
use crate::models::row::RowSchema;
use crate::utils::date::to_iso;

/// Raw, editable form state: one string per field.
///
/// It survives failed validations and failed appends so the user only has to
/// fix or resubmit, never retype.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    values: BTreeMap<Field, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill every field of `schema` with its default value:
    /// empty text, 0 for counts, `today` for dates and the first configured
    /// person for personnel pickers.
    pub fn with_defaults(schema: RowSchema, personnel: &[String], today: NaiveDate) -> Self {
        let mut form = Self::new();
        for field in schema.fields() {
            let value = match field.kind() {
                FieldKind::Text => String::new(),
                FieldKind::Count => "0".to_string(),
                FieldKind::Date => to_iso(today),
                FieldKind::Person => personnel.first().cloned().unwrap_or_default(),
            };
            form.set(field, value);
        }
        form
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Builder-style variant of [`FormInput::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Current value, empty when the field was never set.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }
}
