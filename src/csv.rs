// src/csv.rs
use std::io::Write;

use ::csv::{QuoteStyle, WriterBuilder};

use crate::error::Result;
use crate::record::{SessionRecord, CSV_HEADERS};

/* ---------------- Writing ---------------- */

/// Write records to any writer, `CSV_HEADERS` order.
/// Fields containing the separator, a quote or a newline are quoted; quotes doubled.
pub fn write_records<W: Write>(
    w: W,
    records: &[SessionRecord],
    include_headers: bool,
    sep: u8,
) -> Result<()> {
    let mut out = WriterBuilder::new()
        .delimiter(sep)
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(w);

    if include_headers {
        out.write_record(CSV_HEADERS)?;
    }
    for r in records {
        out.write_record(r.csv_row())?;
    }
    out.flush()?;
    Ok(())
}

/// Create a full export string (for stdout or tests).
/// - `records`: rows in output order
/// - `include_headers`: whether to emit a header line
/// - `sep`: field separator (',' or '\t')
pub fn to_export_string(records: &[SessionRecord], include_headers: bool, sep: u8) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records, include_headers, sep)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
