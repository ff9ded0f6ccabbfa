use chrono::NaiveDate;

/// Barricade counts collected by the extended form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquipmentCounts {
    pub full_set: u64,
    pub door_set: u64,
    pub single_panel: u64,
    pub angle_set: u64,
    pub single_angle: u64,
}

/// A validated job-site entry. Only the validator builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub site_name: String,
    pub job_number: String,
    pub quantity: u64,
    pub location: String,
    pub employee_name: String,
    pub install_engineer: String,
    pub removal_engineer: String,
    pub delivery_date: NaiveDate,
    pub installation_date: NaiveDate,
    pub removal_date: NaiveDate,
    pub equipment: Option<EquipmentCounts>,
}
