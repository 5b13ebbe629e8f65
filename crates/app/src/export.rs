//! Plain CSV dumps of simulated traces.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one header row and one row per sample, columns side by side.
///
/// Fails with `InvalidInput` when the header and column counts differ or the
/// columns have different lengths.
pub fn write_csv(path: &Path, headers: &[&str], columns: &[&[f64]]) -> io::Result<()> {
    if headers.len() != columns.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} headers for {} columns", headers.len(), columns.len()),
        ));
    }
    let rows = columns.first().map_or(0, |c| c.len());
    if let Some(i) = columns.iter().position(|c| c.len() != rows) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("column '{}' has {} rows, expected {}", headers[i], columns[i].len(), rows),
        ));
    }

    let mut csv = BufWriter::new(File::create(path)?);
    writeln!(csv, "{}", headers.join(","))?;
    for row in 0..rows {
        let line: Vec<String> = columns.iter().map(|c| format!("{:.6}", c[row])).collect();
        writeln!(csv, "{}", line.join(","))?;
    }
    csv.flush()
}
