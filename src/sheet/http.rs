// src/sheet/http.rs

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::json;
use std::time::Duration;

use crate::errors::AppendError;
use crate::models::row::{Row, SubmissionId};
use crate::sheet::RowStore;

/// Longest slice of an error response body quoted back to the user.
const MAX_BODY_EXCERPT: usize = 200;

/// Spreadsheet reached through a Google-Sheets-style `values:append` API.
pub struct SheetsApi {
    client: Client,
    url: Url,
    token: String,
    timeout: Duration,
    label: String,
}

impl SheetsApi {
    pub fn new(
        endpoint: &str,
        spreadsheet_id: &str,
        sheet_name: &str,
        token: String,
        timeout: Duration,
    ) -> Result<Self, AppendError> {
        let range = format!("{sheet_name}!A1:append");
        let mut url = Url::parse(endpoint)
            .map_err(|e| AppendError::Unknown(format!("invalid endpoint '{endpoint}': {e}")))?;
        url.path_segments_mut()
            .map_err(|_| {
                AppendError::Unknown(format!("endpoint '{endpoint}' cannot be a base URL"))
            })?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                spreadsheet_id,
                "values",
                range.as_str(),
            ]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", "RAW")
            .append_pair("insertDataOption", "INSERT_ROWS");

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| AppendError::Unknown(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            token,
            timeout,
            label: format!("spreadsheet {spreadsheet_id} / {sheet_name}"),
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> AppendError {
        if e.is_timeout() {
            AppendError::Timeout(format!("no answer within {}s", self.timeout.as_secs()))
        } else if e.is_connect() || e.is_request() {
            AppendError::NetworkFailure(e.to_string())
        } else {
            AppendError::Unknown(e.to_string())
        }
    }
}

/// Map a non-success HTTP status to the append error taxonomy.
fn status_error(status: StatusCode, body: &str) -> AppendError {
    let excerpt: String = body.chars().take(MAX_BODY_EXCERPT).collect();
    let detail = if excerpt.trim().is_empty() {
        status.to_string()
    } else {
        format!("{status}: {}", excerpt.trim())
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppendError::AuthFailure(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => AppendError::Timeout(detail),
        StatusCode::TOO_MANY_REQUESTS => AppendError::Unknown(format!("quota exceeded ({detail})")),
        s if s.is_server_error() => AppendError::NetworkFailure(detail),
        _ => AppendError::Unknown(detail),
    }
}

impl RowStore for SheetsApi {
    fn append(&mut self, id: SubmissionId, row: &Row) -> Result<(), AppendError> {
        let body = json!({
            "majorDimension": "ROWS",
            "values": [row.values],
        });

        let resp = self
            .client
            .post(self.url.clone())
            .bearer_auth(&self.token)
            .header("Idempotency-Key", id.to_string())
            .json(&body)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let text = resp.text().unwrap_or_default();
        log::warn!("row store answered {} for submission {}", status, id);
        Err(status_error(status, &text))
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
