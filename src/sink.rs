// src/sink.rs

//! CSV output for scraped usernames.
//!
//! One header line, one username per row. Quoting and escaping follow the
//! `csv` crate's standard conventions, so usernames containing delimiters,
//! quotes or line breaks survive a round trip.

use std::io::Write;
use std::path::Path;

use crate::error::{AppError, Result};

/// Header field name for the username column.
pub const CSV_HEADER: &str = "twitch_username";

/// Write usernames as a CSV file at `path`.
pub fn write_csv(usernames: &[String], path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(&mut writer, usernames)?;
    writer.flush()?;
    Ok(())
}

/// Serialize usernames to CSV bytes without touching disk.
pub fn csv_bytes(usernames: &[String]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(&mut writer, usernames)?;
    writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, usernames: &[String]) -> Result<()> {
    writer.write_record([CSV_HEADER])?;
    for username in usernames {
        writer.write_record([username])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn read_back(bytes: &[u8]) -> Vec<String> {
        let mut reader = csv::Reader::from_reader(bytes);
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            vec![CSV_HEADER]
        );
        reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect()
    }

    #[test]
    fn round_trips_plain_usernames() {
        let usernames = vec!["KaiCenat".to_string(), "xQc".to_string()];
        let bytes = csv_bytes(&usernames).unwrap();
        assert_eq!(read_back(&bytes), usernames);
    }

    #[test]
    fn round_trips_usernames_needing_quoting() {
        let usernames = vec![
            "with,comma".to_string(),
            "with\"quote".to_string(),
            "with\nnewline".to_string(),
        ];
        let bytes = csv_bytes(&usernames).unwrap();
        assert_eq!(read_back(&bytes), usernames);
    }

    #[test]
    fn empty_result_is_header_only() {
        let bytes = csv_bytes(&[]).unwrap();
        assert_eq!(bytes, b"twitch_username\n");
    }

    #[test]
    fn writes_file_to_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        let usernames = vec!["one".to_string(), "two".to_string()];

        write_csv(&usernames, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(read_back(&bytes), usernames);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing_dir").join("out.csv");
        assert!(matches!(
            write_csv(&["x".to_string()], &path),
            Err(AppError::Csv(_) | AppError::Io(_))
        ));
    }
}
