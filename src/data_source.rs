use crate::{
    Arguments, Dataset, MoveColumn, MoveRecord, MovesViewError, MovesViewResult, PathExtension,
    UniqueElements,
};

use polars::prelude::*;
use tokio::task::spawn_blocking;

use std::{
    fmt::Debug,
    io::Cursor,
    path::{Path, PathBuf},
};

// --- Constants ---

/// Default delimiter used for CSV parsing if not specified.
pub static DEFAULT_CSV_DELIMITER: &str = ",";

/// Where the moves file is looked up when no path is given.
pub static DEFAULT_MOVES_PATH: &str = "scraped data/moves.csv";

// --- DataSource Struct ---

/// Holds the configuration for **loading** the moves file.
///
/// Instances are created from `Arguments`, updated when the user opens or drops a
/// file, and consumed by `DataSource::load`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    /// The canonical, absolute path to the data file.
    pub absolute_path: PathBuf,
    /// The character used to separate columns in a CSV file.
    /// After a successful load it holds the delimiter that actually worked.
    pub csv_delimiter: String,
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource {
            absolute_path: PathBuf::new(),
            csv_delimiter: DEFAULT_CSV_DELIMITER.to_string(),
        }
    }
}

impl DataSource {
    /// Creates a new `DataSource` configured from command-line `Arguments`.
    ///
    /// ### Returns
    /// An error if the path cannot be canonicalized (e.g. it does not exist).
    pub fn new(args: &Arguments) -> MovesViewResult<Self> {
        Ok(DataSource {
            absolute_path: args.path.canonicalize()?,
            csv_delimiter: args.delimiter.clone(),
        })
    }

    /// Sets the data source path, canonicalizing it.
    pub fn set_path(&mut self, path: &Path) -> MovesViewResult<()> {
        self.absolute_path = path.canonicalize().map_err(MovesViewError::Io)?;
        tracing::debug!("absolute_path set to: {:#?}", self.absolute_path);
        Ok(())
    }

    /// Reads the file and builds the `Dataset`.
    ///
    /// ### Logic
    /// 1. Reject files whose extension is neither `csv` nor absent.
    /// 2. Read the CSV, detecting the delimiter (`read_csv_data`).
    /// 3. Convert the frame into `MoveRecord`s, coercing cells.
    /// 4. Remember the delimiter that worked.
    pub async fn load(mut self) -> MovesViewResult<Dataset> {
        tracing::debug!("fn load()\nsource: {self:#?}");

        // 1. Extension check.
        match self.absolute_path.extension_as_lowercase().as_deref() {
            Some("csv") | None => {}
            Some(ext) => {
                return Err(MovesViewError::UnsupportedFileType(format!(
                    "`{}` has extension `{ext}`; expected a .csv file",
                    self.absolute_path.display()
                )));
            }
        }

        // 2. Read.
        let (df, delimiter) = self.read_csv_data().await?;

        // 3. Convert.
        let records = records_from_frame(&df, &self.absolute_path)?;

        // 4. Record the working delimiter.
        self.csv_delimiter = (delimiter as char).to_string();

        tracing::info!(
            "Loaded {} moves from {}",
            records.len(),
            self.absolute_path.display()
        );

        Ok(Dataset::with_source(records, self))
    }

    /// Reads the CSV file, trying other common delimiters if the configured one
    /// does not yield a header with every move column.
    ///
    /// ### Returns
    /// The frame and the delimiter byte that produced it. If no delimiter works,
    /// the error from the configured delimiter is returned.
    async fn read_csv_data(&self) -> MovesViewResult<(DataFrame, u8)> {
        let initial_separator = self.get_csv_separator()?;
        let contents = read_utf8_bytes(&self.absolute_path).await?;

        // Common delimiters to try, starting with the configured one.
        let mut delimiters_to_try = vec![initial_separator, b',', b';', b'|', b'\t'];
        delimiters_to_try.unique();
        tracing::debug!(
            "Attempting CSV read. Delimiters to try: {:?}",
            delimiters_to_try
                .iter()
                .map(|&b| b as char)
                .collect::<Vec<_>>()
        );

        let mut first_error: Option<MovesViewError> = None;

        for delimiter in delimiters_to_try {
            let error = match read_csv_from_bytes(delimiter, contents.clone()).await {
                Ok(df) => {
                    let missing = missing_columns(&df);
                    if missing.is_empty() {
                        tracing::info!(
                            "Successfully read CSV with delimiter: '{}'",
                            delimiter as char
                        );
                        return Ok((df, delimiter));
                    }
                    MovesViewError::MissingColumns {
                        path: self.absolute_path.clone(),
                        columns: missing,
                    }
                }
                Err(error) => error,
            };

            tracing::warn!(
                "CSV read with delimiter '{}' failed: {}",
                delimiter as char,
                error
            );
            if first_error.is_none() {
                first_error = Some(error);
            }
        }

        let error = first_error.unwrap_or_else(|| {
            MovesViewError::CsvParsing(format!(
                "Failed to read CSV '{}' with common delimiters.",
                self.absolute_path.display()
            ))
        });
        tracing::error!("{}", error);
        Err(error)
    }

    /// Retrieves the CSV separator byte from the `csv_delimiter` String configuration.
    fn get_csv_separator(&self) -> MovesViewResult<u8> {
        match self.csv_delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(MovesViewError::InvalidDelimiter(self.csv_delimiter.clone())),
        }
    }
}

/// Reads the file as UTF-8 bytes.
///
/// Files that are not valid UTF-8 are decoded as Windows-1252, which agrees with
/// Latin-1 on every printable character (`0xE9` is `é`).
pub async fn read_utf8_bytes(path: &Path) -> MovesViewResult<Vec<u8>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(decode_to_utf8(bytes))
}

fn decode_to_utf8(bytes: Vec<u8>) -> Vec<u8> {
    match String::from_utf8(bytes) {
        Ok(text) => text.into_bytes(),
        Err(err) => {
            tracing::warn!("File is not valid UTF-8; decoding it as Windows-1252");
            let bytes = err.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned().into_bytes()
        }
    }
}

/// Parses UTF-8 CSV `contents` with every column as text.
///
/// - `with_infer_schema_length(Some(0))`: no type inference, all columns are `String`,
///   so values such as `"—"` in the Power column survive to be coerced later.
/// - `missing_is_null(true)`: empty fields become nulls (shown as `-`).
pub async fn read_csv_from_bytes(delimiter: u8, contents: Vec<u8>) -> MovesViewResult<DataFrame> {
    tracing::debug!(
        "Parsing {} bytes of CSV with delimiter '{}'",
        contents.len(),
        delimiter as char
    );

    let csv_parse_options = CsvParseOptions::default()
        .with_missing_is_null(true)
        .with_separator(delimiter);

    let csv_reader = CsvReadOptions::default()
        .with_parse_options(csv_parse_options)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(contents));

    let df = execute_polars_blocking(move || csv_reader.finish()).await?;

    tracing::debug!("CSV read complete. Shape: {:?}", df.shape());
    Ok(df)
}

/// Finds the frame column whose (trimmed) name equals `header`.
fn find_column(df: &DataFrame, header: &str) -> Option<PlSmallStr> {
    df.get_column_names()
        .into_iter()
        .find(|name| name.trim() == header)
        .cloned()
}

/// Headers of the move columns that `df` lacks.
fn missing_columns(df: &DataFrame) -> Vec<String> {
    MoveColumn::ALL
        .iter()
        .filter(|column| find_column(df, column.header()).is_none())
        .map(|column| column.header().to_string())
        .collect()
}

/// Converts each frame row into a `MoveRecord`, in row order.
pub fn records_from_frame(df: &DataFrame, path: &Path) -> MovesViewResult<Vec<MoveRecord>> {
    let mut columns = Vec::with_capacity(MoveColumn::ALL.len());
    for column in MoveColumn::ALL {
        let name = find_column(df, column.header()).ok_or_else(|| {
            MovesViewError::MissingColumns {
                path: path.to_path_buf(),
                columns: vec![column.header().to_string()],
            }
        })?;
        columns.push(df.column(name.as_str())?.cast(&DataType::String)?);
    }

    let cells = columns
        .iter()
        .map(|column| column.str())
        .collect::<PolarsResult<Vec<&StringChunked>>>()?;

    let records = (0..df.height())
        .map(|row| MoveRecord::from_cells(std::array::from_fn(|i| cells[i].get(row))))
        .collect();

    Ok(records)
}

/// Executes a potentially blocking Polars operation on a separate Tokio blocking thread.
///
/// Maps both the `JoinError` and the inner `PolarsError` to `MovesViewError`.
pub async fn execute_polars_blocking<T, F>(op: F) -> MovesViewResult<T>
where
    F: FnOnce() -> Result<T, PolarsError> + Send + 'static,
    T: Debug + Send + 'static,
{
    let polars_result = spawn_blocking(op).await.map_err(MovesViewError::from)?;
    let result = polars_result.map_err(MovesViewError::from)?;
    Ok(result)
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//
