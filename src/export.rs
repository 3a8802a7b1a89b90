//! CSV export of raw samples.
//!
//! One value per line, no header, so the output pastes straight into a
//! spreadsheet column.

use std::io::Write;

use csv::WriterBuilder;

use crate::error::Result;

/// Writes `samples` to `writer`, one value per record.
pub fn write_samples_csv<W: Write>(writer: W, samples: &[f64]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    for value in samples {
        wtr.write_record([value.to_string()])?;
    }
    wtr.flush()?;
    tracing::debug!(rows = samples.len(), "exported samples");
    Ok(())
}

/// Renders `samples` as a CSV string.
///
/// # Examples
/// ```
/// use frontier_dist::export::samples_to_csv_string;
/// assert_eq!(samples_to_csv_string(&[1.5, 2.0]).unwrap(), "1.5\n2\n");
/// ```
pub fn samples_to_csv_string(samples: &[f64]) -> Result<String> {
    let mut buf = Vec::new();
    write_samples_csv(&mut buf, samples)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
