use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{AppError, AppResult};
use crate::models::row::RowSchema;
use crate::utils::path::expand_tilde;

/// Environment variable read for the row-store credential unless configured otherwise.
pub const DEFAULT_CREDENTIAL_ENV: &str = "SITEJOBS_SHEETS_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identifiers allowed to log in.
    #[serde(default)]
    pub allow_list: Vec<String>,
    #[serde(default = "default_true")]
    pub login_case_sensitive: bool,
    /// Options offered by the employee and engineer pickers.
    #[serde(default = "default_personnel")]
    pub personnel: Vec<String>,
    #[serde(default)]
    pub schema: RowSchema,
    #[serde(default)]
    pub enforce_date_order: bool,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Local CSV sheet file
    #[default]
    Csv,
    /// Spreadsheet HTTP API
    Sheets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub kind: StoreKind,
    #[serde(default = "default_sheet_path")]
    pub path: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_credential_env")]
    pub credential_env: String,
    #[serde(default)]
    pub credential_file: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_true() -> bool {
    true
}
fn default_personnel() -> Vec<String> {
    vec!["Name 1".to_string(), "Name 2".to_string()]
}
fn default_sheet_path() -> String {
    Config::sheet_file().to_string_lossy().to_string()
}
fn default_endpoint() -> String {
    "https://sheets.googleapis.com".to_string()
}
fn default_sheet_name() -> String {
    "Sheet1".to_string()
}
fn default_credential_env() -> String {
    DEFAULT_CREDENTIAL_ENV.to_string()
}
fn default_timeout_secs() -> u64 {
    5
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::Csv,
            path: default_sheet_path(),
            endpoint: default_endpoint(),
            spreadsheet_id: String::new(),
            sheet_name: default_sheet_name(),
            credential_env: default_credential_env(),
            credential_file: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_list: Vec::new(),
            login_case_sensitive: true,
            personnel: default_personnel(),
            schema: RowSchema::default(),
            enforce_date_order: false,
            store: StoreConfig::default(),
        }
    }
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn sheet_path(&self) -> PathBuf {
        expand_tilde(&self.path)
    }

    /// Read the service credential: the configured environment variable
    /// first, then the credential file.
    pub fn resolve_credential(&self) -> AppResult<String> {
        if !self.credential_env.is_empty()
            && let Ok(token) = env::var(&self.credential_env)
            && !token.trim().is_empty()
        {
            return Ok(token.trim().to_string());
        }

        if let Some(file) = &self.credential_file {
            let path = expand_tilde(file);
            let token = fs::read_to_string(&path).map_err(|e| {
                AppError::Config(format!(
                    "cannot read credential file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            if !token.trim().is_empty() {
                return Ok(token.trim().to_string());
            }
        }

        Err(AppError::Config(format!(
            "missing service credential for the spreadsheet API: set ${} or store.credential_file",
            self.credential_env
        )))
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sitejobs")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sitejobs.conf")
    }

    /// Return the default path of the local CSV sheet
    pub fn sheet_file() -> PathBuf {
        Self::config_dir().join("jobs.csv")
    }

    /// Load configuration from `path`. A missing or malformed file is an error:
    /// the tool cannot run without an allow-list.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `sitejobs init` first)",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(cfg)
    }

    /// Every misconfiguration found, in a user-readable form.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();

        if self.allow_list.iter().all(|id| id.trim().is_empty()) {
            out.push("allow_list is empty: nobody could log in".to_string());
        }
        if self.personnel.iter().all(|p| p.trim().is_empty()) {
            out.push(
                "personnel is empty: the employee and engineer pickers have no options".to_string(),
            );
        }

        let mut seen = std::collections::HashSet::new();
        for p in &self.personnel {
            if !seen.insert(p) {
                out.push(format!("personnel contains '{}' more than once", p));
            }
        }

        match self.store.kind {
            StoreKind::Csv => {
                if self.store.path.trim().is_empty() {
                    out.push("store.path is empty".to_string());
                }
            }
            StoreKind::Sheets => {
                if self.store.spreadsheet_id.trim().is_empty() {
                    out.push("store.spreadsheet_id is empty".to_string());
                }
                if self.store.sheet_name.trim().is_empty() {
                    out.push("store.sheet_name is empty".to_string());
                }
                if reqwest::Url::parse(&self.store.endpoint).is_err() {
                    out.push(format!(
                        "store.endpoint '{}' is not a valid URL",
                        self.store.endpoint
                    ));
                }
                if self.store.timeout_secs == 0 {
                    out.push("store.timeout_secs must be greater than 0".to_string());
                }
                match self.store.resolve_credential() {
                    Ok(_) => {}
                    Err(AppError::Config(msg)) => out.push(msg),
                    Err(e) => out.push(e.to_string()),
                }
            }
        }

        out
    }

    /// Fail fast on a configuration the tool cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(problems.join("; ")))
        }
    }

    /// Write a default configuration file to `path`.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
