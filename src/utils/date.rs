use chrono::NaiveDate;

/// ISO calendar date, the only form written to the row store.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Long human-readable form, used on screen only.
pub const LONG_FORMAT: &str = "%B %d, %Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Earliest date the form accepts.
pub fn min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).ok()
}

pub fn to_iso(d: NaiveDate) -> String {
    d.format(ISO_FORMAT).to_string()
}

pub fn to_long(d: NaiveDate) -> String {
    d.format(LONG_FORMAT).to_string()
}
