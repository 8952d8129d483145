//! Process batch loading.
//!
//! Input is headerless CSV, one process per row:
//! `processId,burstDuration,arrivalTime[,priority]`. Priority defaults to
//! [`Process::DEFAULT_PRIORITY`] when the fourth field is absent.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{Result, SchedError};
use crate::models::Process;

const FIELD_NAMES: [&str; 4] = ["id", "burst", "arrival", "priority"];

/// Extracts the scheduling file path from the full argument list
/// (program name first).
pub fn input_path<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().skip(1);
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(SchedError::InvalidArgs(
            "must give a scheduling file to process".to_string(),
        )),
    }
}

/// Opens the scheduling file.
pub fn open_processing_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| SchedError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads every row of `reader` into processes, in input order.
///
/// Fails on the first malformed row; nothing is returned partially.
pub fn load_processes<R: Read>(reader: R) -> Result<Vec<Process>> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut processes = Vec::new();
    for (i, record) in csv.records().enumerate() {
        let process = parse_record(i + 1, &record?)?;
        debug!(row = i + 1, process = process.id, "parsed process");
        processes.push(process);
    }

    info!(count = processes.len(), "loaded processes");
    Ok(processes)
}

/// Opens and loads `path`.
pub fn load_file(path: &Path) -> Result<Vec<Process>> {
    let file = open_processing_file(path)?;
    load_processes(file)
}

fn parse_record(row: usize, record: &StringRecord) -> Result<Process> {
    if !(3..=4).contains(&record.len()) {
        return Err(SchedError::Format {
            row,
            fields: record.len(),
        });
    }

    let mut values = [0i64; 4];
    values[3] = Process::DEFAULT_PRIORITY;
    for (slot, (field, raw)) in FIELD_NAMES.into_iter().zip(record.iter()).enumerate() {
        values[slot] = raw.parse().map_err(|source| SchedError::IntegerParse {
            row,
            field,
            value: raw.to_string(),
            source,
        })?;
    }

    let [id, burst, arrival, priority] = values;
    Ok(Process::new(id, burst, arrival).with_priority(priority))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_three_and_four_fields() {
        let input = "1,5,0,1\n2,3,2\n3, 8, 4, 3\n";
        let processes = load_processes(input.as_bytes()).unwrap();
        assert_eq!(
            processes,
            vec![
                Process::new(1, 5, 0).with_priority(1),
                Process::new(2, 3, 2),
                Process::new(3, 8, 4).with_priority(3),
            ]
        );
    }

    #[test]
    fn test_two_fields_is_format_error() {
        let err = load_processes("1,5,0\n2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SchedError::Format { row: 2, fields: 2 }));
    }

    #[test]
    fn test_five_fields_is_format_error() {
        let err = load_processes("1,5,0,1,9\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SchedError::Format { row: 1, fields: 5 }));
    }

    #[test]
    fn test_non_integer_field() {
        let err = load_processes("1,five,0\n".as_bytes()).unwrap_err();
        match err {
            SchedError::IntegerParse {
                row, field, value, ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(field, "burst");
                assert_eq!(value, "five");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(load_processes("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_input_path_requires_exactly_one_argument() {
        assert_eq!(
            input_path(args(&["prog", "batch.csv"])).unwrap(),
            PathBuf::from("batch.csv")
        );
        assert!(matches!(
            input_path(args(&["prog"])),
            Err(SchedError::InvalidArgs(_))
        ));
        assert!(matches!(
            input_path(args(&["prog", "a.csv", "b.csv"])),
            Err(SchedError::InvalidArgs(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,4,0,2").unwrap();
        writeln!(file, "2,6,1,1").unwrap();

        let processes = load_file(file.path()).unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[1].priority, 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        let err = load_file(&missing).unwrap_err();
        assert!(matches!(err, SchedError::FileOpen { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }
}
