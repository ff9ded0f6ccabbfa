//! Read-only confirmation of a submitted record.

use crate::core::normalize::SummaryLine;
use crate::models::row::{Row, RowSchema};
use crate::utils::formatting::bold;
use crate::utils::table::Table;

const VALUE_WIDTH: usize = 48;

pub fn render_summary(lines: &[SummaryLine]) -> String {
    let label_width = lines.iter().map(|l| l.label.len()).max().unwrap_or(5) + 1;
    let mut table = Table::with_headers(&["Field", "Value"], VALUE_WIDTH);
    table.columns[0].width = label_width;

    for line in lines {
        table.add_row(vec![bold(&format!("{}:", line.label)), line.value.clone()]);
    }
    table.render()
}

/// The row exactly as it is (or would be) written, one column per line.
pub fn render_row(row: &Row) -> String {
    let headers = row.schema.headers();
    let mut table = Table::with_headers(&["#", "Column", "Value"], VALUE_WIDTH);
    table.columns[0].width = 3;
    table.columns[1].width = headers.iter().map(|h| h.len()).max().unwrap_or(6);

    for (i, (h, v)) in headers.iter().zip(&row.values).enumerate() {
        table.add_row(vec![(i + 1).to_string(), h.to_string(), v.clone()]);
    }
    table.render()
}

/// Column layout of a schema version.
pub fn render_schema(schema: RowSchema) -> String {
    let mut table = Table::with_headers(&["#", "Column"], 24);
    table.columns[0].width = 3;
    for (i, h) in schema.headers().iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), h.to_string()]);
    }
    format!("{} (version {})\n{}", schema, schema.version(), table.render())
}
