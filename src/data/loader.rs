use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::cost::DEFAULT_CURRENCY_TOKEN;
use super::error::DataSourceError;
use super::model::{category_value, non_empty, ProgramDataset, ProgramRecord};

/// Columns every source must provide, in display order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "university",
    "faculty",
    "program_name",
    "program_type",
    "cost",
];

/// Options applied while normalising rows.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Currency word stripped from `cost` before numeric parsing.
    pub currency_token: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            currency_token: DEFAULT_CURRENCY_TOKEN.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a program dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.tsv` – header row naming the required columns
/// * `.json`         – `[{ "university": ..., "cost": ..., ... }, ...]`
/// * `.parquet`      – any column types, values are read as text
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<ProgramDataset, DataSourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(open(path)?, b',', options),
        "tsv" => load_csv(open(path)?, b'\t', options),
        "json" => load_json(open(path)?, options),
        "parquet" | "pq" => load_parquet(open(path)?, options),
        other => Err(DataSourceError::UnsupportedFormat(other.to_string())),
    }?;

    let unparsed = dataset.unparsed_cost_count();
    log::info!(
        "Loaded {} programs from {} ({} without a numeric cost)",
        dataset.len(),
        path.display(),
        unparsed
    );
    Ok(dataset)
}

fn open(path: &Path) -> Result<File, DataSourceError> {
    File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Assemble one record from raw cells in [`REQUIRED_COLUMNS`] order.
/// Missing-value markers in the categorical columns become absent values.
fn build_record(cells: [Option<String>; 5], options: &LoadOptions) -> ProgramRecord {
    let [university, faculty, program_name, program_type, cost] = cells;
    let record = ProgramRecord::new(
        category_value(university),
        category_value(faculty),
        program_name.unwrap_or_default(),
        category_value(program_type),
        cost,
        &options.currency_token,
    );
    if record.cost_numeric().is_none() {
        log::debug!(
            "Unparseable cost {:?} for program {:?}",
            record.cost,
            record.program_name
        );
    }
    record
}

fn missing_columns<'a>(present: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let present: BTreeSet<&str> = present.into_iter().collect();
    REQUIRED_COLUMNS
        .iter()
        .filter(|c| !present.contains(*c))
        .map(|c| c.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Header row with column names; extra columns are ignored.
pub fn load_csv<R: std::io::Read>(
    source: R,
    delimiter: u8,
    options: &LoadOptions,
) -> Result<ProgramDataset, DataSourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let missing = missing_columns(headers.iter().map(String::as_str));
    if !missing.is_empty() {
        return Err(DataSourceError::MissingColumns { missing });
    }

    // Every required column was found above.
    let indices: Vec<usize> = REQUIRED_COLUMNS
        .iter()
        .filter_map(|col| headers.iter().position(|h| h == col))
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let cells = [0, 1, 2, 3, 4].map(|i| non_empty(row.get(indices[i])));
        records.push(build_record(cells, options));
    }

    Ok(ProgramDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "university": "A", "faculty": "Science", "program_name": "Physics",
///     "program_type": "Thai", "cost": "18,000 บาท" },
///   ...
/// ]
/// ```
///
/// A key absent from one object is a missing value for that row, but every
/// required key must appear somewhere in a non-empty array.
pub fn load_json<R: std::io::Read>(
    source: R,
    options: &LoadOptions,
) -> Result<ProgramDataset, DataSourceError> {
    let root: JsonValue = serde_json::from_reader(source)?;
    let rows = root
        .as_array()
        .ok_or_else(|| DataSourceError::Malformed("expected a top-level JSON array".into()))?;

    let mut keys = BTreeSet::new();
    let mut objects = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| DataSourceError::Malformed(format!("row {i} is not a JSON object")))?;
        keys.extend(obj.keys().map(String::as_str));
        objects.push(obj);
    }

    if !objects.is_empty() {
        let missing = missing_columns(keys);
        if !missing.is_empty() {
            return Err(DataSourceError::MissingColumns { missing });
        }
    }

    let records = objects
        .into_iter()
        .map(|obj| {
            let cells = REQUIRED_COLUMNS.map(|col| obj.get(col).and_then(json_to_text));
            build_record(cells, options)
        })
        .collect();

    Ok(ProgramDataset::from_records(records))
}

fn json_to_text(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => non_empty(Some(s)),
        JsonValue::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas (`df.to_parquet()`) or Polars.
/// Each required column is cast to text so numeric `cost` columns work too.
pub fn load_parquet(file: File, options: &LoadOptions) -> Result<ProgramDataset, DataSourceError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    let missing = missing_columns(
        builder
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().as_str()),
    );
    if !missing.is_empty() {
        return Err(DataSourceError::MissingColumns { missing });
    }

    let reader = builder.build()?;
    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let mut columns: Vec<ArrayRef> = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for col in REQUIRED_COLUMNS {
            let idx = schema.index_of(col)?;
            columns.push(cast(batch.column(idx), &DataType::Utf8)?);
        }

        for row in 0..batch.num_rows() {
            let mut cells: [Option<String>; 5] = Default::default();
            for (cell, column) in cells.iter_mut().zip(&columns) {
                *cell = text_cell(column, row)?;
            }
            records.push(build_record(cells, options));
        }
    }

    Ok(ProgramDataset::from_records(records))
}

fn text_cell(column: &ArrayRef, row: usize) -> Result<Option<String>, DataSourceError> {
    if column.is_null(row) {
        return Ok(None);
    }
    let strings = column
        .as_string_opt::<i32>()
        .ok_or_else(|| DataSourceError::Malformed("column could not be read as text".into()))?;
    Ok(non_empty(Some(strings.value(row))))
}
