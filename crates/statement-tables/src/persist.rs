//! Writing extracted tables to Parquet.
//!
//! All rows of a document are flattened into one table of nullable string
//! columns labelled by position (`"0"`, `"1"`, ...). The column count is the
//! widest row; shorter rows are padded with nulls.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow_array::{ArrayRef, RecordBatch, StringArray};
use arrow_schema::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::errors::ParquetError;
use parquet::file::properties::WriterProperties;
use tracing::info;

use crate::config::OUTPUT_EXTENSION;
use crate::error::{Result, StatementError};
use crate::extract::TablesResult;

/// Output path for a source document: same directory and stem, Parquet extension.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}

/// Build the flattened record batch for a document.
pub fn to_record_batch(result: &TablesResult) -> Result<RecordBatch> {
    let width = result.rows().map(Vec::len).max().unwrap_or(0).max(1);

    let fields: Vec<Field> = (0..width)
        .map(|c| Field::new(c.to_string(), DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let columns: Vec<ArrayRef> = (0..width)
        .map(|c| {
            let values: StringArray = result
                .rows()
                .map(|row| row.get(c).and_then(|cell| cell.as_deref()))
                .collect();
            Arc::new(values) as ArrayRef
        })
        .collect();

    RecordBatch::try_new(schema, columns).map_err(|source| StatementError::Arrow {
        path: result.source.clone(),
        source,
    })
}

/// Write `result` next to its source document, replacing any existing output.
///
/// Returns the path written.
pub fn save(result: &TablesResult) -> Result<PathBuf> {
    let path = output_path(&result.source);
    let batch = to_record_batch(result)?;

    let file = File::create(&path).map_err(|source| StatementError::Io {
        path: path.clone(),
        source,
    })?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let parquet_err = |source: ParquetError| StatementError::Parquet {
        path: path.clone(),
        source,
    };
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props)).map_err(parquet_err)?;
    writer.write(&batch).map_err(parquet_err)?;
    writer.close().map_err(parquet_err)?;

    info!(
        path = %path.display(),
        tables = result.tables.len(),
        rows = batch.num_rows(),
        "wrote tables"
    );
    Ok(path)
}
