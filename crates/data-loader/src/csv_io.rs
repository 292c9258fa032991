//! Reading and writing data frames as CSV.

use crate::error::{DataLoadError, Result};
use crate::types::{MISSING_MARKERS, TIMESTAMP_FORMAT};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

/// Read a whole CSV file into memory.
///
/// The first record is the header. Every row takes part in schema inference,
/// and the usual missing-value markers (`NA`, `NaN`, `null`, ...) read as null.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let markers: Vec<PlSmallStr> = MISSING_MARKERS.iter().map(|m| (*m).into()).collect();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| {
            options.with_null_values(Some(NullValues::AllColumns(markers.clone())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    debug!(
        "Read {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Write a data frame as CSV, creating parent directories as needed.
///
/// Nulls are written as empty fields and timestamps as `YYYY-MM-DD HH:MM:SS`.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    CsvWriter::new(file)
        .include_header(true)
        .with_datetime_format(Some(TIMESTAMP_FORMAT.to_string()))
        .finish(df)?;

    debug!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_csv_infers_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "app_id,title,win,price").unwrap();
        writeln!(file, "10,Counter-Strike,true,9.99").unwrap();
        writeln!(file, "20,Team Fortress Classic,false,NA").unwrap();
        drop(file);

        let df = read_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("app_id").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("win").unwrap().dtype(), &DataType::Boolean);
        let price = df.column("price").unwrap().f64().unwrap();
        assert_eq!(price.get(0), Some(9.99));
        assert_eq!(price.get(1), None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_write_csv_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("interim").join("out.csv");
        let mut df = df!(
            "app_id" => [70i64],
            "title" => ["Half-Life, Source"],
            "flag" => [None::<bool>],
        )
        .unwrap();

        write_csv(&mut df, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "app_id,title,flag\n70,\"Half-Life, Source\",\n");
    }

    #[test]
    fn test_whole_floats_keep_their_decimal_point() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        let mut df = df!("price" => [9.0f64]).unwrap();

        write_csv(&mut df, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "price\n9.0\n");
    }
}
