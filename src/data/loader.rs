use std::collections::VecDeque;
use std::path::Path;

use csv::{Position, Reader, ReaderBuilder, StringRecord, Trim};

use super::error::LoadError;
use super::model::{Record, ScoreSeries};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a run log from a comma-separated file.
///
/// Layout:
/// * first row – header, skipped without inspection
/// * every later row – `<time_step>,<score>[,...]`; extra columns are ignored
///
/// Every physical line is a row, empty ones included. Stops at the first bad
/// row. The file is read in one go and closed before parsing starts.
pub fn load(path: &Path) -> Result<ScoreSeries, LoadError> {
    let data = std::fs::read(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rows = Rows::new(&data);

    match rows.next_row()?.ok_or(LoadError::MissingHeader)? {
        Row::Blank { .. } => log::debug!("Skipping empty header row"),
        Row::Fields { record, .. } => log::debug!("Skipping header row {:?}", record),
    }

    let mut series = ScoreSeries::new();
    while let Some(row) = rows.next_row()? {
        match row {
            Row::Blank { line } => {
                return Err(LoadError::MissingField { line, field: "time step" });
            }
            Row::Fields { line, record } => series.push(parse_record(&record, line)?),
        }
    }

    log::info!("Loaded {} records from {}", series.len(), path.display());
    Ok(series)
}

// ---------------------------------------------------------------------------
// Row reader
// ---------------------------------------------------------------------------

/// One physical line of input.
#[derive(Debug)]
enum Row {
    Blank { line: u64 },
    Fields { line: u64, record: StringRecord },
}

/// Records from the csv reader, with the empty lines it drops put back.
///
/// The reader stamps each record with the position where it *started looking*,
/// which is before any skipped empty lines and, for CRLF input, before the
/// `\n` left over from the previous terminator. The bytes between that
/// position and the record's first field are scanned here to recover both the
/// empty lines and the record's real line number.
struct Rows<'a> {
    data: &'a [u8],
    reader: Reader<&'a [u8]>,
    pending: VecDeque<Row>,
}

impl<'a> Rows<'a> {
    fn new(data: &'a [u8]) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::Fields)
            .from_reader(data);
        Rows {
            data,
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_row(&mut self) -> Result<Option<Row>, LoadError> {
        if let Some(row) = self.pending.pop_front() {
            return Ok(Some(row));
        }

        let start = self.reader.position().clone();
        let mut record = StringRecord::new();
        let more = self.reader.read_record(&mut record)?;

        let line = self.queue_blank_lines(&start);
        if more {
            self.pending.push_back(Row::Fields { line, record });
        }
        Ok(self.pending.pop_front())
    }

    /// Queue a `Blank` row for every empty line at `start` and return the
    /// line number of the first non-empty one.
    fn queue_blank_lines(&mut self, start: &Position) -> u64 {
        let data = self.data;
        let mut at = start.byte() as usize;
        let mut line = start.line();

        // `\n` half of the previous record's CRLF
        if at > 0 && data[at - 1] == b'\r' && data.get(at) == Some(&b'\n') {
            at += 1;
            line += 1;
        }

        loop {
            let width = match data.get(at..) {
                Some([b'\r', b'\n', ..]) => 2,
                Some([b'\n', ..]) | Some([b'\r', ..]) => 1,
                _ => break,
            };
            self.pending.push_back(Row::Blank { line });
            if data[at + width - 1] == b'\n' {
                line += 1;
            }
            at += width;
        }
        line
    }
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_record(row: &StringRecord, line: u64) -> Result<Record, LoadError> {
    Ok(Record {
        time_step: parse_field(row, 0, "time step", line)?,
        score: parse_field(row, 1, "score", line)?,
    })
}

fn parse_field(
    row: &StringRecord,
    idx: usize,
    field: &'static str,
    line: u64,
) -> Result<f64, LoadError> {
    let value = row
        .get(idx)
        .ok_or(LoadError::MissingField { line, field })?;

    value
        .parse::<f64>()
        .map_err(|source| LoadError::InvalidNumber {
            line,
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::error::ErrorKind;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_rows_after_header_in_order() {
        let file = write_csv("timestep,score\n0,10.5\n1,12.0\n2,9.75\n");

        let series = load(file.path()).unwrap();

        assert_eq!(series.time_steps(), &[0.0, 1.0, 2.0]);
        assert_eq!(series.scores(), &[10.5, 12.0, 9.75]);
    }

    #[test]
    fn header_only_yields_empty_series() {
        let file = write_csv("timestep,score\n");

        let series = load(file.path()).unwrap();

        assert!(series.is_empty());
        assert_eq!(series.time_steps().len(), series.scores().len());
    }

    #[test]
    fn numeric_header_is_still_skipped() {
        let file = write_csv("100,200\n0.5,1\n");

        let series = load(file.path()).unwrap();

        assert_eq!(series.time_steps(), &[0.5]);
        assert_eq!(series.scores(), &[1.0]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = write_csv("t,percent,time_percent\n0.02,1,0\n0.04,0.5,0.5\n");

        let series = load(file.path()).unwrap();

        assert_eq!(series.time_steps(), &[0.02, 0.04]);
        assert_eq!(series.scores(), &[1.0, 0.5]);
    }

    #[test]
    fn unsorted_and_duplicate_steps_are_kept() {
        let file = write_csv("timestep,score\n5,1\n2,2\n5,3\n");

        let series = load(file.path()).unwrap();

        assert_eq!(series.time_steps(), &[5.0, 2.0, 5.0]);
        assert_eq!(series.scores(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let file = write_csv("timestep, score\n 1 , 2.5\n");

        let series = load(file.path()).unwrap();

        assert_eq!(series.time_steps(), &[1.0]);
        assert_eq!(series.scores(), &[2.5]);
    }

    #[test]
    fn bad_score_is_a_parse_error() {
        let file = write_csv("timestep,score\n0,1\n1,2\n2,bad\n3,4\n");

        let err = load(file.path()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_matches!(
            err,
            LoadError::InvalidNumber { line: 4, field: "score", ref value, .. } if value == "bad"
        );
    }

    #[test]
    fn bad_time_step_is_a_parse_error() {
        let file = write_csv("timestep,score\nnope,1\n");

        let err = load(file.path()).unwrap_err();

        assert_matches!(err, LoadError::InvalidNumber { line: 2, field: "time step", .. });
    }

    #[test]
    fn single_field_row_is_a_parse_error() {
        let file = write_csv("timestep,score\n0,1\n7\n");

        let err = load(file.path()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_matches!(err, LoadError::MissingField { line: 3, field: "score" });
    }

    #[test]
    fn blank_row_is_a_parse_error() {
        let file = write_csv("timestep,score\n0,1\n\n2,3\n");

        let err = load(file.path()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_matches!(err, LoadError::MissingField { line: 3, field: "time step" });
    }

    #[test]
    fn trailing_blank_line_is_a_parse_error() {
        let file = write_csv("timestep,score\n0,1\n2,3\n\n");

        let err = load(file.path()).unwrap_err();

        assert_matches!(err, LoadError::MissingField { line: 4, field: "time step" });
    }

    #[test]
    fn blank_header_is_skipped_like_any_header() {
        let file = write_csv("\n0,1\n");

        let series = load(file.path()).unwrap();

        assert_eq!(series.time_steps(), &[0.0]);
        assert_eq!(series.scores(), &[1.0]);
    }

    #[test]
    fn crlf_lines_are_numbered_like_lf_lines() {
        let file = write_csv("timestep,score\r\n0,1\r\n1,x\r\n");

        let err = load(file.path()).unwrap_err();

        assert_matches!(err, LoadError::InvalidNumber { line: 3, field: "score", .. });
    }

    #[test]
    fn crlf_blank_row_is_a_parse_error() {
        let file = write_csv("timestep,score\r\n0,1\r\n\r\n2,3\r\n");

        let err = load(file.path()).unwrap_err();

        assert_matches!(err, LoadError::MissingField { line: 3, field: "time step" });
    }

    #[test]
    fn crlf_file_loads_without_phantom_rows() {
        let file = write_csv("timestep,score\r\n0,10.5\r\n1,12.0\r\n");

        let series = load(file.path()).unwrap();

        assert_eq!(series.time_steps(), &[0.0, 1.0]);
        assert_eq!(series.scores(), &[10.5, 12.0]);
    }

    #[test]
    fn empty_file_is_missing_header() {
        let file = write_csv("");

        let err = load(file.path()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_matches!(err, LoadError::MissingHeader);
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.csv");

        let err = load(&path).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FileAccess);
        assert_matches!(err, LoadError::FileAccess { path: p, .. } if p == path);
    }
}
