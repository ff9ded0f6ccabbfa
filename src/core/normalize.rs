use crate::models::field::Field;
use crate::models::job_record::JobRecord;
use crate::models::row::{Row, RowSchema};
use crate::utils::date::{to_iso, to_long};

/// Build the persisted row for `record` in the column order of `schema`.
///
/// Pure: the same inputs always give the same row. Dates are ISO strings;
/// a record without equipment counts fills those columns with 0.
pub fn normalize(record: &JobRecord, submitted_by: &str, schema: RowSchema) -> Row {
    let mut values = Vec::with_capacity(schema.column_count());
    values.push(submitted_by.to_string());
    values.extend(schema.fields().into_iter().map(|f| column_value(record, f)));
    Row { schema, values }
}

fn column_value(record: &JobRecord, field: Field) -> String {
    let equipment = record.equipment.unwrap_or_default();
    match field {
        Field::SiteName => record.site_name.clone(),
        Field::JobNumber => record.job_number.clone(),
        Field::Quantity => record.quantity.to_string(),
        Field::Location => record.location.clone(),
        Field::EmployeeName => record.employee_name.clone(),
        Field::InstallEngineer => record.install_engineer.clone(),
        Field::DeliveryDate => to_iso(record.delivery_date),
        Field::InstallationDate => to_iso(record.installation_date),
        Field::RemovalDate => to_iso(record.removal_date),
        Field::RemovalEngineer => record.removal_engineer.clone(),
        Field::FullSet => equipment.full_set.to_string(),
        Field::DoorSet => equipment.door_set.to_string(),
        Field::SinglePanel => equipment.single_panel.to_string(),
        Field::AngleSet => equipment.angle_set.to_string(),
        Field::SingleAngle => equipment.single_angle.to_string(),
    }
}

/// One labelled line of the on-screen confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Confirmation lines for a submitted record. Dates use the long form
/// ("January 10, 2024") and never end up in a persisted row.
pub fn summary(record: &JobRecord, submitted_by: &str) -> Vec<SummaryLine> {
    let mut out = vec![SummaryLine {
        label: "Submitted By",
        value: submitted_by.to_string(),
    }];

    let mut fields = Field::BASIC.to_vec();
    if record.equipment.is_some() {
        fields.extend(Field::EQUIPMENT);
    }

    for field in fields {
        let value = match field {
            Field::Quantity => format!("{} units", record.quantity),
            Field::DeliveryDate => to_long(record.delivery_date),
            Field::InstallationDate => to_long(record.installation_date),
            Field::RemovalDate => to_long(record.removal_date),
            other => column_value(record, other),
        };
        out.push(SummaryLine {
            label: summary_label(field),
            value,
        });
    }
    out
}

fn summary_label(field: Field) -> &'static str {
    match field {
        Field::Quantity => "Quantity",
        other => other.label(),
    }
}
