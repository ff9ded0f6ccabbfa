// src/sheet/mod.rs

mod csv;
mod http;

pub use self::csv::CsvSheet;
pub use self::http::SheetsApi;

use std::collections::HashSet;

use crate::config::{Config, StoreKind};
use crate::errors::{AppError, AppResult, AppendError};
use crate::models::row::{Row, SubmissionId};

/// An append-only row store: the only operation is "add this row at the end".
pub trait RowStore {
    fn append(&mut self, id: SubmissionId, row: &Row) -> Result<(), AppendError>;

    /// Human-readable target, for messages.
    fn describe(&self) -> String;
}

impl RowStore for Box<dyn RowStore> {
    fn append(&mut self, id: SubmissionId, row: &Row) -> Result<(), AppendError> {
        (**self).append(id, row)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Open the row store selected in the configuration.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn RowStore>> {
    match cfg.store.kind {
        StoreKind::Csv => Ok(Box::new(CsvSheet::new(cfg.store.sheet_path()))),
        StoreKind::Sheets => {
            let token = cfg.store.resolve_credential()?;
            let api = SheetsApi::new(
                &cfg.store.endpoint,
                &cfg.store.spreadsheet_id,
                &cfg.store.sheet_name,
                token,
                cfg.store.timeout(),
            )
            .map_err(|e| AppError::Config(e.to_string()))?;
            Ok(Box::new(api))
        }
    }
}

/// Appends normalized rows and remembers which submissions were acknowledged.
///
/// A submission id that already went through is not sent again, so a
/// double-confirmed resubmission cannot duplicate the row. No retries: a
/// failure goes straight back to the caller.
pub struct AppendClient<S: RowStore> {
    store: S,
    acknowledged: HashSet<SubmissionId>,
}

impl<S: RowStore> AppendClient<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            acknowledged: HashSet::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> String {
        self.store.describe()
    }

    pub fn append_row(&mut self, id: SubmissionId, row: &Row) -> Result<(), AppendError> {
        if row.values.len() != row.schema.column_count() {
            return Err(AppendError::SchemaMismatch(format!(
                "row has {} values, schema {} has {} columns",
                row.values.len(),
                row.schema,
                row.schema.column_count()
            )));
        }

        if self.acknowledged.contains(&id) {
            log::info!("submission {} already appended, skipping", id);
            return Ok(());
        }

        log::debug!("appending submission {} to {}", id, self.store.describe());
        self.store.append(id, row)?;
        self.acknowledged.insert(id);
        log::info!("submission {} appended", id);
        Ok(())
    }
}
