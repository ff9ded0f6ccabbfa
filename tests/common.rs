#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use sitejobs::models::field::Field;
use sitejobs::models::form::FormInput;

pub fn sj() -> Command {
    cargo_bin_cmd!("sitejobs")
}

/// Create a unique temp file path and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("sitejobs_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config with the usual two-person allow-list and a CSV sheet.
/// Returns (config path, sheet path).
pub fn setup_config(name: &str, extra: &str) -> (String, String) {
    let cfg = temp_path(name, "conf");
    let sheet = temp_path(name, "csv");
    let yaml = format!(
        "allow_list: [\"Name 1\", \"Name 2\"]\n\
         personnel: [\"Name 1\", \"Name 2\"]\n\
         {extra}\
         store:\n  kind: csv\n  path: \"{}\"\n",
        sheet.replace('\\', "\\\\")
    );
    fs::write(&cfg, yaml).expect("write config");
    (cfg, sheet)
}

/// The Site A job used across scenarios.
pub fn site_a_form() -> FormInput {
    FormInput::new()
        .with(Field::SiteName, "Site A")
        .with(Field::JobNumber, "JN1")
        .with(Field::Quantity, "5")
        .with(Field::Location, "Bldg 2")
        .with(Field::EmployeeName, "Name 1")
        .with(Field::InstallEngineer, "Name 2")
        .with(Field::DeliveryDate, "2024-01-10")
        .with(Field::InstallationDate, "2024-01-12")
        .with(Field::RemovalDate, "2024-02-01")
        .with(Field::RemovalEngineer, "Name 1")
}

/// Site A as command-line flags.
pub fn site_a_args() -> Vec<&'static str> {
    vec![
        "--site-name",
        "Site A",
        "--job-number",
        "JN1",
        "--quantity",
        "5",
        "--location",
        "Bldg 2",
        "--employee",
        "Name 1",
        "--install-engineer",
        "Name 2",
        "--delivery-date",
        "2024-01-10",
        "--installation-date",
        "2024-01-12",
        "--removal-date",
        "2024-02-01",
        "--removal-engineer",
        "Name 1",
    ]
}

/// Site A flags with one flag's value replaced.
pub fn site_a_args_with(flag: &str, value: &'static str) -> Vec<&'static str> {
    let mut args = site_a_args();
    if let Some(pos) = args.iter().position(|a| *a == flag) {
        args[pos + 1] = value;
    }
    args
}

pub fn personnel() -> Vec<String> {
    vec!["Name 1".to_string(), "Name 2".to_string()]
}
