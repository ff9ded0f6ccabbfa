mod common;

use chrono::NaiveDate;
use common::{personnel, site_a_form, temp_path};
use sitejobs::core::auth::{AuthGate, StaticAllowList};
use sitejobs::core::submit::SubmitLogic;
use sitejobs::core::validate::Validator;
use sitejobs::errors::{AppError, AppendError, AuthError, ValidationError};
use sitejobs::models::field::Field;
use sitejobs::models::row::{Row, RowSchema, SubmissionId};
use sitejobs::models::session::Session;
use sitejobs::sheet::{AppendClient, CsvSheet, RowStore, SheetsApi};
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// In-memory store that records every call and can be told to fail.
#[derive(Default)]
struct FakeStore {
    calls: usize,
    rows: Vec<(SubmissionId, Row)>,
    fail_with: Option<AppendError>,
}

impl RowStore for FakeStore {
    fn append(&mut self, id: SubmissionId, row: &Row) -> Result<(), AppendError> {
        self.calls += 1;
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        self.rows.push((id, row.clone()));
        Ok(())
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn session() -> Session {
    AuthGate::new(StaticAllowList::new(personnel(), true))
        .login("Name 1")
        .unwrap()
}

fn logic(store: FakeStore) -> SubmitLogic<FakeStore> {
    SubmitLogic::new(
        Validator::new(RowSchema::AttributedV1, personnel()),
        AppendClient::new(store),
    )
}

fn sample_row(first: &str) -> Row {
    let mut values = vec![first.to_string()];
    values.extend((1..RowSchema::AttributedV1.column_count()).map(|i| i.to_string()));
    Row {
        schema: RowSchema::AttributedV1,
        values,
    }
}

// ---------------------------
// Submission chain
// ---------------------------

#[test]
fn test_submit_appends_exactly_one_v1_row() {
    let mut logic = logic(FakeStore::default());
    let id = SubmissionId::new();

    let sub = logic
        .submit(&session(), &site_a_form(), id, today(), false)
        .expect("submitted");
    assert!(sub.appended);

    let store = logic.client().store();
    assert_eq!(store.calls, 1);
    assert_eq!(store.rows[0].0, id);
    assert_eq!(store.rows[0].1.values[0], "Name 1");
    assert_eq!(store.rows[0].1.values[7], "2024-01-10");
}

#[test]
fn test_invalid_form_never_reaches_the_store() {
    let mut logic = logic(FakeStore::default());
    let form = site_a_form().with(Field::Quantity, "-1");

    match logic.submit(&session(), &form, SubmissionId::new(), today(), false) {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors, vec![ValidationError::OutOfRange(Field::Quantity)]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(logic.client().store().calls, 0);
}

#[test]
fn test_anonymous_session_cannot_submit() {
    let mut logic = logic(FakeStore::default());
    let result = logic.submit(
        &Session::anonymous(),
        &site_a_form(),
        SubmissionId::new(),
        today(),
        false,
    );
    assert!(matches!(
        result,
        Err(AppError::Auth(AuthError::NotAuthenticated))
    ));
    assert_eq!(logic.client().store().calls, 0);
}

#[test]
fn test_network_failure_is_surfaced_without_retry() {
    let mut logic = logic(FakeStore {
        fail_with: Some(AppendError::NetworkFailure("connection reset".into())),
        ..FakeStore::default()
    });
    let form = site_a_form();
    let before = form.clone();

    let result = logic.submit(&session(), &form, SubmissionId::new(), today(), false);
    assert!(matches!(
        result,
        Err(AppError::Append(AppendError::NetworkFailure(_)))
    ));
    assert_eq!(logic.client().store().calls, 1);
    assert_eq!(form, before);
}

#[test]
fn test_dry_run_does_not_append() {
    let mut logic = logic(FakeStore::default());
    let sub = logic
        .submit(&session(), &site_a_form(), SubmissionId::new(), today(), true)
        .unwrap();
    assert!(!sub.appended);
    assert_eq!(sub.row.values[1], "Site A");
    assert_eq!(logic.client().store().calls, 0);
}

// ---------------------------
// Append client
// ---------------------------

#[test]
fn test_acknowledged_submission_is_not_sent_twice() {
    let mut client = AppendClient::new(FakeStore::default());
    let id = SubmissionId::new();
    let row = sample_row("Name 1");

    client.append_row(id, &row).unwrap();
    client.append_row(id, &row).unwrap();
    assert_eq!(client.store().calls, 1);

    client.append_row(SubmissionId::new(), &row).unwrap();
    assert_eq!(client.store().calls, 2);
}

#[test]
fn test_failed_submission_can_be_resent() {
    let mut client = AppendClient::new(FakeStore {
        fail_with: Some(AppendError::Timeout("no answer within 5s".to_string())),
        ..FakeStore::default()
    });
    let id = SubmissionId::new();
    let row = sample_row("Name 1");
    assert!(client.append_row(id, &row).is_err());
    assert!(client.append_row(id, &row).is_err());
    assert_eq!(client.store().calls, 2);
}

#[test]
fn test_short_row_is_rejected_before_append() {
    let mut client = AppendClient::new(FakeStore::default());
    let mut row = sample_row("Name 1");
    row.values.pop();
    assert!(matches!(
        client.append_row(SubmissionId::new(), &row),
        Err(AppendError::SchemaMismatch(_))
    ));
    assert_eq!(client.store().calls, 0);
}

// ---------------------------
// CSV sheet
// ---------------------------

#[test]
fn test_csv_sheet_writes_header_once() {
    let path = temp_path("csv_header_once", "csv");
    let mut sheet = CsvSheet::new(&path);

    sheet.append(SubmissionId::new(), &sample_row("Name 1")).unwrap();
    sheet.append(SubmissionId::new(), &sample_row("Name 2")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("submitted_by,site_name,job_number"));
    assert!(lines[1].starts_with("Name 1,1,2"));
    assert!(lines[2].starts_with("Name 2,1,2"));
}

#[test]
fn test_csv_sheet_terminates_last_line_before_appending() {
    let path = temp_path("csv_unterminated", "csv");
    let header = RowSchema::AttributedV1.headers().join(",");
    fs::write(&path, &header).unwrap();

    let mut sheet = CsvSheet::new(&path);
    sheet.append(SubmissionId::new(), &sample_row("Name 1")).unwrap();
    sheet.append(SubmissionId::new(), &sample_row("Name 2")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], header);
    assert!(lines[1].starts_with("Name 1,1,2"));
    assert!(lines[2].starts_with("Name 2,1,2"));
}

#[test]
fn test_csv_sheet_quotes_free_text() {
    let path = temp_path("csv_quotes", "csv");
    let mut sheet = CsvSheet::new(&path);
    let mut row = sample_row("Name 1");
    row.values[1] = "Site \"A\", north gate".to_string();
    sheet.append(SubmissionId::new(), &row).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rec = rdr.records().next().unwrap().unwrap();
    assert_eq!(&rec[1], "Site \"A\", north gate");
}

#[test]
fn test_csv_sheet_refuses_other_schema() {
    let path = temp_path("csv_schema_mismatch", "csv");
    fs::write(&path, "site_name,job_number\nA,1\n").unwrap();

    let mut sheet = CsvSheet::new(&path);
    assert!(matches!(
        sheet.append(SubmissionId::new(), &sample_row("Name 1")),
        Err(AppendError::SchemaMismatch(_))
    ));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "site_name,job_number\nA,1\n"
    );
}

// ---------------------------
// HTTP sheet
// ---------------------------

/// Read one HTTP request (head + body) from the stream.
fn read_request(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut head = String::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap() == 0 {
            break;
        }
        if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = v.trim().parse().unwrap_or(0);
        }
        let end = line == "\r\n";
        head.push_str(&line);
        if end {
            break;
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();
    head + &String::from_utf8_lossy(&body)
}

/// Serve a single canned response; the thread yields the request it saw.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });
    (format!("http://{addr}"), handle)
}

fn api(endpoint: &str, timeout: Duration) -> SheetsApi {
    SheetsApi::new(endpoint, "sheet-123", "Jobs", "secret-token".to_string(), timeout).unwrap()
}

#[test]
fn test_sheets_api_posts_row_with_idempotency_key() {
    let (endpoint, server) = serve_once("200 OK", "{}");
    let mut sheet = api(&endpoint, Duration::from_secs(5));
    let id = SubmissionId::new();

    sheet.append(id, &sample_row("Name 1")).expect("appended");

    let request = server.join().unwrap();
    let lower = request.to_ascii_lowercase();
    assert!(request.starts_with(
        "POST /v4/spreadsheets/sheet-123/values/Jobs!A1:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS "
    ));
    assert!(lower.contains("authorization: bearer secret-token"));
    assert!(lower.contains(&format!("idempotency-key: {id}")));
    assert!(request.contains(r#""majorDimension":"ROWS""#));
    assert!(request.contains(r#"["Name 1","1","2""#));
}

#[test]
fn test_sheets_api_rejected_credential() {
    let (endpoint, server) = serve_once("401 Unauthorized", r#"{"error":"bad token"}"#);
    let mut sheet = api(&endpoint, Duration::from_secs(5));

    let err = sheet.append(SubmissionId::new(), &sample_row("Name 1")).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, AppendError::AuthFailure(ref m) if m.contains("bad token")));
}

#[test]
fn test_sheets_api_server_error_is_network_failure() {
    let (endpoint, server) = serve_once("503 Service Unavailable", "");
    let mut sheet = api(&endpoint, Duration::from_secs(5));

    let err = sheet.append(SubmissionId::new(), &sample_row("Name 1")).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, AppendError::NetworkFailure(_)));
}

#[test]
fn test_sheets_api_gateway_timeout_reports_status() {
    let (endpoint, server) = serve_once("504 Gateway Timeout", "upstream timed out");
    let mut sheet = api(&endpoint, Duration::from_secs(5));

    let err = sheet.append(SubmissionId::new(), &sample_row("Name 1")).unwrap_err();
    server.join().unwrap();
    assert!(
        matches!(err, AppendError::Timeout(ref m) if m.contains("504") && m.contains("upstream")),
        "{err:?}"
    );
}

#[test]
fn test_sheets_api_unreachable_is_network_failure() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut sheet = api(&format!("http://{addr}"), Duration::from_secs(5));

    let err = sheet.append(SubmissionId::new(), &sample_row("Name 1")).unwrap_err();
    assert!(matches!(err, AppendError::NetworkFailure(_)), "{err:?}");
}

#[test]
fn test_sheets_api_slow_answer_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        read_request(&mut stream);
        thread::sleep(Duration::from_secs(3));
    });

    let mut sheet = api(&format!("http://{addr}"), Duration::from_secs(1));
    let err = sheet.append(SubmissionId::new(), &sample_row("Name 1")).unwrap_err();
    assert_eq!(err, AppendError::Timeout("no answer within 1s".to_string()));
    server.join().unwrap();
}
