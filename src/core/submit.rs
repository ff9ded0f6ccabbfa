use chrono::NaiveDate;

use crate::core::normalize::{SummaryLine, normalize, summary};
use crate::core::validate::Validator;
use crate::errors::{AppError, AppResult, AuthError};
use crate::models::form::FormInput;
use crate::models::job_record::JobRecord;
use crate::models::row::{Row, SubmissionId};
use crate::models::session::Session;
use crate::sheet::{AppendClient, RowStore};

/// Result of one accepted form submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub record: JobRecord,
    pub row: Row,
    pub summary: Vec<SummaryLine>,
    /// False for a dry run: the row was built but not sent.
    pub appended: bool,
}

/// The submission chain: session check → validate → normalize → append.
pub struct SubmitLogic<S: RowStore> {
    validator: Validator,
    client: AppendClient<S>,
}

impl<S: RowStore> SubmitLogic<S> {
    pub fn new(validator: Validator, client: AppendClient<S>) -> Self {
        Self { validator, client }
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn client(&self) -> &AppendClient<S> {
        &self.client
    }

    /// Submit `form` on behalf of the logged-in user.
    ///
    /// Nothing is appended unless the session is authenticated and every field
    /// validates. `id` must be reused when the same form is resubmitted after
    /// a failed append.
    pub fn submit(
        &mut self,
        session: &Session,
        form: &FormInput,
        id: SubmissionId,
        today: NaiveDate,
        dry_run: bool,
    ) -> AppResult<Submission> {
        let submitted_by = session
            .username()
            .ok_or(AppError::Auth(AuthError::NotAuthenticated))?;

        let record = self.validator.validate(form, today)?;
        let row = normalize(&record, submitted_by, self.validator.schema());

        if !dry_run {
            self.client.append_row(id, &row)?;
        }

        let summary = summary(&record, submitted_by);
        Ok(Submission {
            id,
            record,
            row,
            summary,
            appended: !dry_run,
        })
    }
}
