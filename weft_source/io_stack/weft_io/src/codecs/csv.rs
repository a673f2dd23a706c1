use super::Codec;
use crate::error::CodecError;
use crate::record::{FieldDef, Record, assign_field};

/// Header line of field names, one row per record.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvCodec;

impl<R: Record> Codec<Vec<R>> for CsvCodec {
    fn encode(&self, value: &Vec<R>) -> Result<Vec<u8>, CodecError> {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(Vec::new());

        writer.write_record(R::FIELDS.iter().map(|f| f.name))?;
        for record in value {
            writer.write_record(R::FIELDS.iter().map(|f| (f.get)(record)))?;
        }
        writer
            .into_inner()
            .map_err(|e| CodecError::Io(e.into_error()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<R>, CodecError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(CodecError::MissingRows);
        }

        let columns: Vec<Option<&FieldDef<R>>> = headers
            .iter()
            .map(|h| {
                let field = R::field(h.trim());
                if field.is_none() {
                    log::debug!("{}: ignoring unknown CSV column '{}'", R::TYPE_NAME, h.trim());
                }
                field
            })
            .collect();

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (index, row) in reader.records().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("{}: skipping malformed CSV line {line}: {e}", R::TYPE_NAME);
                    skipped += 1;
                    continue;
                }
            };
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            if row.len() != headers.len() {
                log::warn!(
                    "{}: skipping CSV line {line}, {} columns instead of {}",
                    R::TYPE_NAME,
                    row.len(),
                    headers.len()
                );
                skipped += 1;
                continue;
            }

            let mut record = R::default();
            let location = format!("{} CSV line {line}", R::TYPE_NAME);
            for (cell, column) in row.iter().zip(&columns) {
                if let Some(field) = column {
                    assign_field(&mut record, field, cell, &location);
                }
            }
            records.push(record);
        }

        if records.is_empty() {
            if skipped > 0 {
                return Err(CodecError::Parse(format!(
                    "{}: all {skipped} CSV rows are malformed",
                    R::TYPE_NAME
                )));
            }
            return Err(CodecError::MissingRows);
        }
        Ok(records)
    }
}
