use super::{Label, LabeledRecord};
use crate::error::DigitError;
use crate::preprocessing::SAMPLE_PIXELS;
use std::path::Path;

/// Read every labeled sample back from a CSV file written by [`super::SampleWriter`]
pub fn read_samples(path: &Path) -> Result<Vec<LabeledRecord>, DigitError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?;
    if headers.get(0) != Some("label") || headers.len() != SAMPLE_PIXELS + 1 {
        return Err(DigitError::MalformedRecord {
            line: 1,
            reason: "missing label,p0..p783 header".to_string(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let malformed = |reason: String| DigitError::MalformedRecord { line, reason };

        if row.len() != SAMPLE_PIXELS + 1 {
            return Err(malformed(format!(
                "expected {} fields, got {}",
                SAMPLE_PIXELS + 1,
                row.len()
            )));
        }

        let label_field = row.get(0).unwrap_or_default();
        let label = Label::parse(label_field)
            .map_err(|_| malformed(format!("invalid label {:?}", label_field)))?;

        let pixels = row
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, field)| {
                field
                    .trim()
                    .parse::<u8>()
                    .map_err(|e| malformed(format!("pixel p{}: {}", i, e)))
            })
            .collect::<Result<Vec<u8>, DigitError>>()?;

        records.push(LabeledRecord::new(label, pixels));
    }

    tracing::debug!(path = %path.display(), count = records.len(), "Read labeled samples");
    Ok(records)
}
