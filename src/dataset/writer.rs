use super::{header, LabeledRecord};
use crate::error::DigitError;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Appends labeled samples to a CSV file, writing the header once
#[derive(Debug, Clone)]
pub struct SampleWriter {
    path: PathBuf,
}

impl SampleWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record. The file is opened and closed within this call.
    pub fn append(&self, record: &LabeledRecord) -> Result<(), DigitError> {
        let needs_header = fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            tracing::debug!(path = %self.path.display(), "Writing sample file header");
            writer.write_record(header())?;
        }

        let row = std::iter::once(record.label().to_string())
            .chain(record.pixels().iter().map(|p| p.to_string()));
        writer.write_record(row)?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Label;
    use crate::preprocessing::SAMPLE_PIXELS;

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digits.csv");
        let writer = SampleWriter::new(&path);

        let record = LabeledRecord::new(Label::new(5).unwrap(), vec![0; SAMPLE_PIXELS]);
        writer.append(&record).unwrap();
        writer.append(&record).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("label,p0,p1,"));
        assert!(lines[0].ends_with(",p783"));
        assert!(lines[1].starts_with("5,0,0"));
        assert_eq!(lines[1].split(',').count(), SAMPLE_PIXELS + 1);
        assert_eq!(contents.matches("label").count(), 1);
    }

    #[test]
    fn test_existing_rows_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digits.csv");
        let writer = SampleWriter::new(&path);

        let first = LabeledRecord::new(Label::new(1).unwrap(), vec![1; SAMPLE_PIXELS]);
        let second = LabeledRecord::new(Label::new(2).unwrap(), vec![2; SAMPLE_PIXELS]);
        writer.append(&first).unwrap();
        let before = fs::read_to_string(&path).unwrap();
        writer.append(&second).unwrap();
        let after = fs::read_to_string(&path).unwrap();

        assert!(after.starts_with(&before));
    }

    #[test]
    fn test_empty_existing_file_gets_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digits.csv");
        fs::write(&path, "").unwrap();

        let record = LabeledRecord::new(Label::new(9).unwrap(), vec![0; SAMPLE_PIXELS]);
        SampleWriter::new(&path).append(&record).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("label,"));
    }
}
