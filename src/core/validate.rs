use chrono::NaiveDate;

use crate::errors::ValidationError;
use crate::models::field::Field;
use crate::models::form::FormInput;
use crate::models::job_record::{EquipmentCounts, JobRecord};
use crate::models::row::RowSchema;
use crate::utils::date::{min_date, parse_date};

/// Field rules for one configured form.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: RowSchema,
    personnel: Vec<String>,
    enforce_date_order: bool,
}

impl Validator {
    pub fn new(schema: RowSchema, personnel: Vec<String>) -> Self {
        Self {
            schema,
            personnel,
            enforce_date_order: false,
        }
    }

    /// Also require delivery <= installation <= removal.
    pub fn with_date_order(mut self, enforce: bool) -> Self {
        self.enforce_date_order = enforce;
        self
    }

    pub fn schema(&self) -> RowSchema {
        self.schema
    }

    pub fn personnel(&self) -> &[String] {
        &self.personnel
    }

    /// Check every field of `input` and build a [`JobRecord`].
    ///
    /// All violations are returned together; `today` is the upper bound of
    /// the accepted date window.
    pub fn validate(
        &self,
        input: &FormInput,
        today: NaiveDate,
    ) -> Result<JobRecord, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let quantity = self.count(input, Field::Quantity, &mut errors);

        let employee_name = self.person(input, Field::EmployeeName, &mut errors);
        let install_engineer = self.person(input, Field::InstallEngineer, &mut errors);
        let removal_engineer = self.person(input, Field::RemovalEngineer, &mut errors);

        let delivery_date = self.date(input, Field::DeliveryDate, today, &mut errors);
        let installation_date = self.date(input, Field::InstallationDate, today, &mut errors);
        let removal_date = self.date(input, Field::RemovalDate, today, &mut errors);

        if self.enforce_date_order {
            let pairs = [
                (Field::DeliveryDate, delivery_date, Field::InstallationDate, installation_date),
                (Field::InstallationDate, installation_date, Field::RemovalDate, removal_date),
            ];
            for (earlier, a, later, b) in pairs {
                if let (Some(a), Some(b)) = (a, b)
                    && b < a
                {
                    errors.push(ValidationError::DateOrder { earlier, later });
                }
            }
        }

        let equipment = if self.schema.has_equipment() {
            Some(EquipmentCounts {
                full_set: self.count(input, Field::FullSet, &mut errors).unwrap_or(0),
                door_set: self.count(input, Field::DoorSet, &mut errors).unwrap_or(0),
                single_panel: self.count(input, Field::SinglePanel, &mut errors).unwrap_or(0),
                angle_set: self.count(input, Field::AngleSet, &mut errors).unwrap_or(0),
                single_angle: self.count(input, Field::SingleAngle, &mut errors).unwrap_or(0),
            })
        } else {
            None
        };

        if !errors.is_empty() {
            errors.sort_by_key(ValidationError::field);
            log::debug!("form rejected with {} violation(s)", errors.len());
            return Err(errors);
        }

        match (
            quantity,
            employee_name,
            install_engineer,
            removal_engineer,
            delivery_date,
            installation_date,
            removal_date,
        ) {
            (Some(q), Some(emp), Some(inst), Some(rem), Some(dd), Some(id), Some(rd)) => {
                Ok(JobRecord {
                    site_name: input.get(Field::SiteName).to_string(),
                    job_number: input.get(Field::JobNumber).to_string(),
                    quantity: q,
                    location: input.get(Field::Location).to_string(),
                    employee_name: emp,
                    install_engineer: inst,
                    removal_engineer: rem,
                    delivery_date: dd,
                    installation_date: id,
                    removal_date: rd,
                    equipment,
                })
            }
            // each None above already pushed an error
            _ => Err(errors),
        }
    }

    fn count(
        &self,
        input: &FormInput,
        field: Field,
        errors: &mut Vec<ValidationError>,
    ) -> Option<u64> {
        match input.get(field).trim().parse::<u64>() {
            Ok(n) => Some(n),
            Err(_) => {
                errors.push(ValidationError::OutOfRange(field));
                None
            }
        }
    }

    fn date(
        &self,
        input: &FormInput,
        field: Field,
        today: NaiveDate,
        errors: &mut Vec<ValidationError>,
    ) -> Option<NaiveDate> {
        let Some(d) = parse_date(input.get(field)) else {
            errors.push(ValidationError::InvalidDate(field));
            return None;
        };
        if d < min_date() || d > today {
            errors.push(ValidationError::DateOutOfRange(field));
            return None;
        }
        Some(d)
    }

    fn person(
        &self,
        input: &FormInput,
        field: Field,
        errors: &mut Vec<ValidationError>,
    ) -> Option<String> {
        let value = input.get(field);
        if self.personnel.iter().any(|p| p == value) {
            Some(value.to_string())
        } else {
            errors.push(ValidationError::InvalidOption(field));
            None
        }
    }
}
