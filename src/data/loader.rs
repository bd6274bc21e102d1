//! Survey Data Loader Module
//! Handles semicolon-delimited survey loading and column extraction using Polars.

use log::debug;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No data loaded")]
    NoData,
}

/// Field separator used by the OD Recife export.
pub const SEPARATOR: u8 = b';';

/// Handles survey file loading with Polars.
pub struct SurveyLoader {
    df: Option<DataFrame>,
}

impl Default for SurveyLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a `;`-separated, UTF-8 survey file with a header row.
    ///
    /// The whole file is scanned for schema inference so columns mixing
    /// integer codes with combined answers fall back to strings instead of
    /// failing to parse.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&DataFrame, LoaderError> {
        let path = file_path.as_ref();

        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_separator(SEPARATOR)
            .with_has_header(true)
            .with_encoding(CsvEncoding::Utf8)
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;

        for column in df.get_columns() {
            debug!("Column `{}` read as {:?}", column.name(), column.dtype());
        }

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Take ownership of the loaded DataFrame.
    pub fn into_dataframe(self) -> Option<DataFrame> {
        self.df
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_semicolon_file_with_mixed_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sexo;renda;meio_transporte_trab").unwrap();
        writeln!(file, "1;3;11").unwrap();
        writeln!(file, "2;;3,4").unwrap();
        writeln!(file, "1;9;").unwrap();
        file.flush().unwrap();

        let mut loader = SurveyLoader::new();
        let df = loader.load_csv(file.path()).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 3);
        assert_eq!(loader.get_row_count(), 3);
        assert_eq!(
            loader.get_columns(),
            vec!["sexo", "renda", "meio_transporte_trab"]
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let mut loader = SurveyLoader::new();
        let err = loader.load_csv("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
        assert_eq!(loader.get_row_count(), 0);
        assert!(loader.get_columns().is_empty());
        assert!(loader.into_dataframe().is_none());
    }
}
