use std::fmt;

/// Form group a field is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    JobDetails,
    Personnel,
    Dates,
    Equipment,
}

impl FieldGroup {
    pub fn title(&self) -> &'static str {
        match self {
            FieldGroup::JobDetails => "📝 Job Details",
            FieldGroup::Personnel => "👷 Personnel",
            FieldGroup::Dates => "📅 Dates",
            FieldGroup::Equipment => "🚧 Barricades",
        }
    }
}

/// Value type of a field, which decides both its default and its validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Count,
    Date,
    Person,
}

/// Every input of the job form, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    SiteName,
    JobNumber,
    Quantity,
    Location,
    EmployeeName,
    InstallEngineer,
    DeliveryDate,
    InstallationDate,
    RemovalDate,
    RemovalEngineer,
    FullSet,
    DoorSet,
    SinglePanel,
    AngleSet,
    SingleAngle,
}

impl Field {
    pub const BASIC: [Field; 10] = [
        Field::SiteName,
        Field::JobNumber,
        Field::Quantity,
        Field::Location,
        Field::EmployeeName,
        Field::InstallEngineer,
        Field::DeliveryDate,
        Field::InstallationDate,
        Field::RemovalDate,
        Field::RemovalEngineer,
    ];

    pub const EQUIPMENT: [Field; 5] = [
        Field::FullSet,
        Field::DoorSet,
        Field::SinglePanel,
        Field::AngleSet,
        Field::SingleAngle,
    ];

    /// Machine name, used in error messages and as the column header.
    pub fn name(&self) -> &'static str {
        match self {
            Field::SiteName => "site_name",
            Field::JobNumber => "job_number",
            Field::Quantity => "quantity",
            Field::Location => "location",
            Field::EmployeeName => "employee_name",
            Field::InstallEngineer => "install_engineer",
            Field::DeliveryDate => "delivery_date",
            Field::InstallationDate => "installation_date",
            Field::RemovalDate => "removal_date",
            Field::RemovalEngineer => "removal_engineer",
            Field::FullSet => "full_set",
            Field::DoorSet => "door_set",
            Field::SinglePanel => "single_panel",
            Field::AngleSet => "angle_set",
            Field::SingleAngle => "single_angle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::SiteName => "Site Name",
            Field::JobNumber => "Job Number",
            Field::Quantity => "Quantity (in units)",
            Field::Location => "Location",
            Field::EmployeeName => "Employee Name",
            Field::InstallEngineer => "Site Engineer (Installation)",
            Field::DeliveryDate => "Delivery Date",
            Field::InstallationDate => "Installation Date",
            Field::RemovalDate => "Removal Date",
            Field::RemovalEngineer => "Site Engineer (Removal)",
            Field::FullSet => "Full Set",
            Field::DoorSet => "Door Set",
            Field::SinglePanel => "Single Panel",
            Field::AngleSet => "Angle Set",
            Field::SingleAngle => "Single Angle",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::SiteName | Field::JobNumber | Field::Location => FieldKind::Text,
            Field::EmployeeName | Field::InstallEngineer | Field::RemovalEngineer => {
                FieldKind::Person
            }
            Field::DeliveryDate | Field::InstallationDate | Field::RemovalDate => FieldKind::Date,
            Field::Quantity
            | Field::FullSet
            | Field::DoorSet
            | Field::SinglePanel
            | Field::AngleSet
            | Field::SingleAngle => FieldKind::Count,
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            Field::SiteName | Field::JobNumber | Field::Quantity | Field::Location => {
                FieldGroup::JobDetails
            }
            Field::EmployeeName | Field::InstallEngineer | Field::RemovalEngineer => {
                FieldGroup::Personnel
            }
            Field::DeliveryDate | Field::InstallationDate | Field::RemovalDate => {
                FieldGroup::Dates
            }
            _ => FieldGroup::Equipment,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
