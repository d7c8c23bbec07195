use std::io::Read;
use std::path::Path;

use anyhow::Context;
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{EmployeeRecord, HrDataset, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: column '{column}' has invalid value {value}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an HR dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the six employee columns (any order)
/// * `.json`    – `[{ "department": ..., "salary": ..., ... }, ...]`
/// * `.parquet` – flat columns; numeric columns may be any int/float type
pub fn load_file(path: &Path) -> anyhow::Result<HrDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            read_json(&text)
        }
        "parquet" | "pq" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_parquet(file)
        }
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
    .with_context(|| format!("loading employee data from {}", path.display()))?;

    let dataset = HrDataset::from_records(records);
    log::info!(
        "Loaded {} employees ({} departments, {} counties) from {}",
        dataset.len(),
        dataset.departments.len(),
        dataset.counties.len(),
        path.display()
    );
    Ok(dataset)
}

fn check_columns(present: &[&str]) -> Result<(), LoadError> {
    for required in REQUIRED_COLUMNS {
        if !present.contains(&required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one employee per row.
/// Extra columns are ignored; surrounding whitespace is trimmed.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<EmployeeRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    check_columns(&headers.iter().map(String::as_str).collect::<Vec<_>>())?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, as written by `df.to_json(orient='records')`.
pub fn read_json(text: &str) -> Result<Vec<EmployeeRecord>, LoadError> {
    let rows: Vec<JsonValue> = serde_json::from_str(text)?;

    let mut records = Vec::with_capacity(rows.len());
    for (row, value) in rows.into_iter().enumerate() {
        let Some(obj) = value.as_object() else {
            return Err(LoadError::InvalidValue {
                row,
                column: "<row>".to_string(),
                value: value.to_string(),
            });
        };
        check_columns(&obj.keys().map(String::as_str).collect::<Vec<_>>())?;
        records.push(serde_json::from_value(value)?);
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per employee field.
///
/// String columns may be Utf8, LargeUtf8 or dictionary encoded; numeric
/// columns may be any integer or float type. Nulls are rejected.
pub fn read_parquet(file: std::fs::File) -> Result<Vec<EmployeeRecord>, LoadError> {
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch?;
        let offset = records.len();

        let department = string_column(&batch, "department", offset)?;
        let county = string_column(&batch, "county", offset)?;
        let job_title = string_column(&batch, "job_title", offset)?;
        let salary = float_column(&batch, "salary", offset)?;
        let years = float_column(&batch, "years_of_experience", offset)?;
        let gender = string_column(&batch, "gender", offset)?;

        for row in 0..batch.num_rows() {
            records.push(EmployeeRecord {
                department: department[row].clone(),
                county: county[row].clone(),
                job_title: job_title[row].clone(),
                salary: salary[row],
                years_of_experience: years[row],
                gender: gender[row].clone(),
            });
        }
    }
    Ok(records)
}

// -- Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef, LoadError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}

fn null_value(row: usize, name: &str) -> LoadError {
    LoadError::InvalidValue {
        row,
        column: name.to_string(),
        value: "null".to_string(),
    }
}

fn string_column(batch: &RecordBatch, name: &str, offset: usize) -> Result<Vec<String>, LoadError> {
    let array = cast(column(batch, name)?.as_ref(), &DataType::Utf8)?;
    let strings = array.as_string::<i32>();
    (0..strings.len())
        .map(|row| {
            if strings.is_null(row) {
                Err(null_value(offset + row, name))
            } else {
                Ok(strings.value(row).to_string())
            }
        })
        .collect()
}

fn float_column(batch: &RecordBatch, name: &str, offset: usize) -> Result<Vec<f64>, LoadError> {
    let source = column(batch, name)?;
    if !source.data_type().is_numeric() {
        return Err(LoadError::InvalidValue {
            row: offset,
            column: name.to_string(),
            value: format!("{:?} column", source.data_type()),
        });
    }
    let array = cast(source.as_ref(), &DataType::Float64)?;
    let floats = array.as_primitive::<Float64Type>();
    (0..floats.len())
        .map(|row| {
            if floats.is_null(row) {
                Err(null_value(offset + row, name))
            } else {
                Ok(floats.value(row))
            }
        })
        .collect()
}
