//! Helpers that read produced bytes back for assertions.

use std::io::{Cursor, Read};

/// Parses CSV bytes into (headers, rows).
#[allow(dead_code)]
pub fn parse_csv(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .expect("Failed to read CSV headers")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("Failed to read CSV record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect();
    (headers, rows)
}

/// Opens zip bytes and returns (entry name, content) pairs in archive order.
#[allow(dead_code)]
pub fn read_zip(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("Archive should open");
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).expect("Failed to read archive entry");
            let mut content = Vec::new();
            entry
                .read_to_end(&mut content)
                .expect("Failed to read archive entry content");
            (entry.name().to_string(), content)
        })
        .collect()
}

/// Column of `row` under `header`.
#[allow(dead_code)]
pub fn cell<'a>(headers: &[String], row: &'a [String], header: &str) -> &'a str {
    let index = headers
        .iter()
        .position(|h| h == header)
        .unwrap_or_else(|| panic!("No column named {header:?}"));
    &row[index]
}
