use crate::error::Result;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// One data line in the on-disk format: quoted HHMM departure, `min`-suffixed
/// airtime.
pub fn row(year: i32, month: i32, day: i32, hour: u32, minute: u32, airtime: u32) -> String {
    format!(
        "{},{},{},\"{:02}{:02}\",{:03}min",
        year, month, day, hour, minute, airtime
    )
}

pub fn file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// A flight data file: column header plus the given rows.
pub fn data_file(rows: &[&str]) -> NamedTempFile {
    let mut contents = String::from("Year,Month,DayofMonth,DepTime,AirTime\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    file_with(&contents)
}

/// Run the extractor against capture buffers and hand back whatever was
/// written, even on failure.
pub fn run_into(paths: &[PathBuf]) -> (Result<()>, String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let result = crate::extract::run(paths, &mut out, &mut diag);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

pub fn arb_row() -> impl Strategy<Value = String> {
    (
        1990..2030i32,
        1..=12i32,
        1..=28i32,
        0..24u32,
        0..60u32,
        0..700u32,
    )
        .prop_map(|(year, month, day, hour, minute, airtime)| {
            row(year, month, day, hour, minute, airtime)
        })
}

/// Lines whose field count is anything but five.
pub fn arb_ragged() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("too,short".to_string()),
        Just("1,2,3,4,5,6".to_string()),
        "[a-z]{0,8}",
    ]
}
