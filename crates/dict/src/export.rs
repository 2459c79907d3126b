// ABOUTME: Tab-separated export of WordRecords for flashcard import.
// ABOUTME: Writes a fixed header row, then one unquoted row per record.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::ExportError;
use crate::formats::ROW_HEADER;
use crate::record::WordRecord;

/// Writes import rows to any byte sink.
///
/// Fields are joined by tabs and rows end with `\n`. Nothing is quoted or
/// escaped; a tab or newline inside a field corrupts that row.
pub struct TsvWriter<W: Write> {
    inner: W,
    header_written: bool,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            header_written: false,
        }
    }

    fn write_fields<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.inner.write_all(b"\t")?;
            }
            self.inner.write_all(field.as_ref().as_bytes())?;
        }
        self.inner.write_all(b"\n")
    }

    /// Write the header row if it has not been written yet.
    pub fn write_header(&mut self) -> io::Result<()> {
        if !self.header_written {
            self.write_fields(&ROW_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }

    pub fn write_record(&mut self, record: &WordRecord) -> io::Result<()> {
        self.write_header()?;
        self.write_fields(&record.to_row())
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Render records into an in-memory TSV document, header included.
pub fn to_tsv_string(records: &[WordRecord]) -> String {
    let mut buf = Vec::new();
    {
        let mut writer = TsvWriter::new(&mut buf);
        // Writes into a Vec cannot fail.
        let _ = write_all(&mut writer, records);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_all<W: Write>(writer: &mut TsvWriter<W>, records: &[WordRecord]) -> io::Result<()> {
    writer.write_header()?;
    for record in records {
        writer.write_record(record)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write every record to it.
pub fn write_tsv_file(path: impl AsRef<Path>, records: &[WordRecord]) -> Result<(), ExportError> {
    let path = path.as_ref();
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = TsvWriter::new(BufWriter::new(file));
    write_all(&mut writer, records).map_err(io_err)?;
    writer.into_inner().map_err(io_err)?;

    debug!(path = %path.display(), rows = records.len(), "wrote import file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn records() -> Vec<WordRecord> {
        vec![
            WordRecord::new("hello", vec!["a greeting".into(), "surprise".into()])
                .with_pronunciation("/həˈləʊ/")
                .with_pos("exclamation, noun")
                .with_examples(vec!["Hello! How are you today?".into()]),
            WordRecord::new("minimal", vec!["Single definition".into()]),
        ]
    }

    #[test]
    fn tsv_has_header_and_rows() {
        let out = to_tsv_string(&records());
        let expected = "Word\tPronunciation\tPart of Speech\tDefinitions\tExamples\n\
                        hello\t/həˈləʊ/\texclamation, noun\t1. a greeting<br>2. surprise\t• Hello! How are you today?\n\
                        minimal\t\t\t1. Single definition\t\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn header_written_once() {
        let mut buf = Vec::new();
        let mut writer = TsvWriter::new(&mut buf);
        writer.write_header().unwrap();
        for rec in records() {
            writer.write_record(&rec).unwrap();
        }
        writer.into_inner().unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("Word\tPronunciation").count(), 1);
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn empty_records_still_get_header() {
        assert_eq!(
            to_tsv_string(&[]),
            "Word\tPronunciation\tPart of Speech\tDefinitions\tExamples\n"
        );
    }

    #[test]
    fn write_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anki.tsv");
        write_tsv_file(&path, &records()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, to_tsv_string(&records()));
    }

    #[test]
    fn write_file_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("anki.tsv");
        let err = write_tsv_file(&path, &records()).unwrap_err();
        let ExportError::Io { path: p, .. } = err;
        assert_eq!(p, path);
    }
}
