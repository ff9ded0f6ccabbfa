// src/sheet/csv.rs

use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

use crate::errors::AppendError;
use crate::models::row::{Row, SubmissionId};
use crate::sheet::RowStore;

/// A spreadsheet kept as a local CSV file.
///
/// The first line holds the column headers of the schema the file was
/// created with; rows of a different schema are refused.
#[derive(Debug, Clone)]
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Header of an existing, non-empty sheet.
    fn existing_header(&self) -> Result<Option<Vec<String>>, AppendError> {
        let non_empty = fs::metadata(&self.path)
            .map(|m| m.len() > 0)
            .unwrap_or(false);
        if !non_empty {
            return Ok(None);
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.io_error(e))?;

        match rdr.records().next() {
            Some(rec) => {
                let rec = rec.map_err(|e| self.io_error(e))?;
                Ok(Some(rec.iter().map(str::to_string).collect()))
            }
            None => Ok(None),
        }
    }

    /// True for a missing or empty file, or one whose last byte is a newline.
    fn ends_with_newline(&self) -> Result<bool, AppendError> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(true),
            Err(e) => return Err(self.io_error(e)),
        };
        let len = file.metadata().map_err(|e| self.io_error(e))?.len();
        if len == 0 {
            return Ok(true);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1)).map_err(|e| self.io_error(e))?;
        file.read_exact(&mut last).map_err(|e| self.io_error(e))?;
        Ok(last[0] == b'\n')
    }

    fn io_error(&self, e: impl std::fmt::Display) -> AppendError {
        AppendError::Unknown(format!("{}: {}", self.path.display(), e))
    }
}

impl RowStore for CsvSheet {
    fn append(&mut self, id: SubmissionId, row: &Row) -> Result<(), AppendError> {
        let expected = row.schema.headers();
        let header = self.existing_header()?;

        if let Some(found) = &header
            && found.iter().map(String::as_str).ne(expected.iter().copied())
        {
            return Err(AppendError::SchemaMismatch(format!(
                "{} starts with [{}], schema {} expects [{}]",
                self.path.display(),
                found.join(", "),
                row.schema,
                expected.join(", ")
            )));
        }

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let unterminated = !self.ends_with_newline()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        // a hand-edited sheet may lack the final line terminator
        if unterminated {
            file.write_all(b"\n").map_err(|e| self.io_error(e))?;
        }

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(&file);
        if header.is_none() {
            wtr.write_record(&expected).map_err(|e| self.io_error(e))?;
        }
        wtr.write_record(&row.values).map_err(|e| self.io_error(e))?;
        wtr.flush().map_err(|e| self.io_error(e))?;
        drop(wtr);

        file.sync_all().map_err(|e| self.io_error(e))?;
        log::debug!("submission {} written to {}", id, self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        format!("CSV sheet {}", self.path.display())
    }
}
