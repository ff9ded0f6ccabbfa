use clap::{Args, Parser, Subcommand};

use crate::models::field::Field;

/// Command-line interface definition for sitejobs
/// Login-gated form that appends job-site entries to a shared spreadsheet
#[derive(Parser)]
#[command(
    name = "sitejobs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Site job entry form: log in, fill in the job, append it to the shared sheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple sheets)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic logging (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for fatal problems")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the column order written to the sheet
    Schema {
        #[arg(long, help = "Show every schema version, not only the configured one")]
        all: bool,
    },

    /// Log in and submit job entries
    Submit {
        /// Login identifier (prompted when omitted)
        #[arg(long = "user", short = 'u')]
        user: Option<String>,

        #[command(flatten)]
        fields: FieldArgs,

        #[arg(
            long = "no-input",
            help = "Never prompt: use defaults for missing fields and fail on any error"
        )]
        no_input: bool,

        #[arg(long = "dry-run", help = "Validate and show the row without appending it")]
        dry_run: bool,
    },
}

/// Form fields given on the command line. Values are kept as typed so the
/// form validator, not clap, decides what is acceptable.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    #[arg(long = "site-name")]
    pub site_name: Option<String>,

    #[arg(long = "job-number", allow_hyphen_values = true)]
    pub job_number: Option<String>,

    #[arg(long = "quantity", allow_hyphen_values = true)]
    pub quantity: Option<String>,

    #[arg(long = "location")]
    pub location: Option<String>,

    #[arg(long = "employee")]
    pub employee_name: Option<String>,

    #[arg(long = "install-engineer")]
    pub install_engineer: Option<String>,

    #[arg(long = "removal-engineer")]
    pub removal_engineer: Option<String>,

    /// Delivery date (YYYY-MM-DD)
    #[arg(long = "delivery-date", allow_hyphen_values = true)]
    pub delivery_date: Option<String>,

    /// Installation date (YYYY-MM-DD)
    #[arg(long = "installation-date", allow_hyphen_values = true)]
    pub installation_date: Option<String>,

    /// Removal date (YYYY-MM-DD)
    #[arg(long = "removal-date", allow_hyphen_values = true)]
    pub removal_date: Option<String>,

    #[arg(long = "full-set", allow_hyphen_values = true)]
    pub full_set: Option<String>,

    #[arg(long = "door-set", allow_hyphen_values = true)]
    pub door_set: Option<String>,

    #[arg(long = "single-panel", allow_hyphen_values = true)]
    pub single_panel: Option<String>,

    #[arg(long = "angle-set", allow_hyphen_values = true)]
    pub angle_set: Option<String>,

    #[arg(long = "single-angle", allow_hyphen_values = true)]
    pub single_angle: Option<String>,
}

impl FieldArgs {
    /// Fields supplied on the command line, with their raw values.
    pub fn provided(&self) -> Vec<(Field, String)> {
        [
            (Field::SiteName, &self.site_name),
            (Field::JobNumber, &self.job_number),
            (Field::Quantity, &self.quantity),
            (Field::Location, &self.location),
            (Field::EmployeeName, &self.employee_name),
            (Field::InstallEngineer, &self.install_engineer),
            (Field::DeliveryDate, &self.delivery_date),
            (Field::InstallationDate, &self.installation_date),
            (Field::RemovalDate, &self.removal_date),
            (Field::RemovalEngineer, &self.removal_engineer),
            (Field::FullSet, &self.full_set),
            (Field::DoorSet, &self.door_set),
            (Field::SinglePanel, &self.single_panel),
            (Field::AngleSet, &self.angle_set),
            (Field::SingleAngle, &self.single_angle),
        ]
        .into_iter()
        .filter_map(|(f, v)| v.clone().map(|v| (f, v)))
        .collect()
    }
}
