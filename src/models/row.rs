use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::models::field::Field;

/// Column header of the attribution column that leads every schema.
pub const SUBMITTED_BY: &str = "submitted_by";

/// Versioned column layout of the append target.
///
/// Adding, removing or reordering a column is a new version, never an edit of
/// an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowSchema {
    #[default]
    AttributedV1,
    AttributedEquipmentV2,
}

impl RowSchema {
    pub const ALL: [RowSchema; 2] = [RowSchema::AttributedV1, RowSchema::AttributedEquipmentV2];

    pub fn version(&self) -> u32 {
        match self {
            RowSchema::AttributedV1 => 1,
            RowSchema::AttributedEquipmentV2 => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowSchema::AttributedV1 => "attributed-v1",
            RowSchema::AttributedEquipmentV2 => "attributed-equipment-v2",
        }
    }

    /// Whether the form collects barricade counts under this schema.
    pub fn has_equipment(&self) -> bool {
        matches!(self, RowSchema::AttributedEquipmentV2)
    }

    /// Form fields in column order (after `submitted_by`). The form renders
    /// them in the same order.
    pub fn fields(&self) -> Vec<Field> {
        let mut out = Field::BASIC.to_vec();
        if self.has_equipment() {
            out.extend(Field::EQUIPMENT);
        }
        out
    }

    pub fn headers(&self) -> Vec<&'static str> {
        let mut out = vec![SUBMITTED_BY];
        out.extend(self.fields().iter().map(|f| f.name()));
        out
    }

    pub fn column_count(&self) -> usize {
        self.fields().len() + 1
    }
}

impl fmt::Display for RowSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized record, ready to append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub schema: RowSchema,
    pub values: Vec<String>,
}

/// Client-generated identifier of one form submission.
///
/// A manual resubmission of the same form reuses it, so the row store (or the
/// append client) can recognise a repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
