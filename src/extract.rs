use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::record::FlightRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read every file, write the sorted interval stream to `out` and per-file
/// progress plus the final interval count to `diag`.
///
/// The sort is stable, so intervals that compare equal keep the order of
/// their source lines. A parse error anywhere aborts the run before any
/// interval has been written.
pub fn run(paths: &[PathBuf], mut out: impl Write, mut diag: impl Write) -> Result<()> {
    if paths.is_empty() {
        return Err(Error::Usage(
            "at least one flight data file is required".to_string(),
        ));
    }

    let mut intervals = Vec::new();
    for path in paths {
        let text = read_file(path)?;
        // progress line: the path and the file's second raw line, if any
        writeln!(diag, "{}  {}", path.display(), text.lines().nth(1).unwrap_or(""))?;
        scan(&text, &mut intervals)?;
    }

    intervals.sort();
    for interval in &intervals {
        writeln!(out, "{interval}")?;
    }
    writeln!(diag, "{}", intervals.len())?;
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect the intervals of one file's contents. The first line is a column
/// header and is dropped without inspection.
fn scan(text: &str, intervals: &mut Vec<Interval>) -> Result<()> {
    for line in text.lines().skip(1) {
        if let Some(record) = FlightRecord::from_line(line) {
            intervals.push(record?.interval()?);
        }
    }
    Ok(())
}
