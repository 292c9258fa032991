//! Cell-level parsing for the raw storefront CSVs.
//!
//! - Price normalization for the game-complete catalog
//! - App id extraction from storefront URLs
//! - Unix epoch seconds to calendar timestamps
//!
//! Each parser works on one cell; the `*_column` functions apply it to a
//! whole polars column.

use crate::error::{DataLoadError, Result};
use crate::types::AppId;
use polars::prelude::*;

/// Normalize a textual storefront price to a number.
///
/// - `"$19.99"` becomes `19.99` (thousands separators are ignored)
/// - `"Free"` becomes `0`
/// - anything else, including unparseable `$` strings, is `None`
pub fn normalize_price(raw: &str) -> Option<f64> {
    if let Some(amount) = raw.strip_prefix('$') {
        amount.replace(',', "").trim().parse().ok()
    } else if raw == "Free" {
        Some(0.0)
    } else {
        None
    }
}

/// Numeric price column under `name`.
///
/// Numeric columns pass through (integers widen to floats). Text columns go
/// through [`normalize_price`] cell by cell.
pub fn refined_price_column(prices: &Column, name: &str) -> Result<Column> {
    let refined: Float64Chunked = match prices.dtype() {
        DataType::String => prices
            .str()?
            .into_iter()
            .map(|price| price.and_then(normalize_price))
            .collect(),
        dtype if dtype.is_primitive_numeric() => prices.cast(&DataType::Float64)?.f64()?.clone(),
        _ => Float64Chunked::full_null(name.into(), prices.len()),
    };
    Ok(refined.with_name(name.into()).into_column())
}

/// Pull the numeric id out of a storefront URL.
///
/// `https://store.steampowered.com/app/10/Counter_Strike/` yields `10`, and
/// bundle URLs work the same way. The scheme and host are stripped, the rest
/// is split on `/`, and the second segment must be a non-negative integer.
pub fn app_id_from_url(url: &str) -> Option<AppId> {
    let path = match url.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, path)| path).unwrap_or(""),
        None => url,
    };
    let segment = path.split('/').nth(1)?;
    segment.parse::<AppId>().ok().filter(|id| *id >= 0)
}

/// App ids parsed from a URL column. The first URL without an id fails.
pub fn app_id_column(urls: &Column, name: &str) -> Result<Column> {
    let ids = urls
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, url)| {
            url.and_then(app_id_from_url)
                .ok_or_else(|| DataLoadError::MalformedUrl {
                    row,
                    url: url.unwrap_or_default().to_string(),
                })
        })
        .collect::<Result<Vec<AppId>>>()?;
    Ok(Column::new(name.into(), ids))
}

/// Interpret an integer column as seconds since the Unix epoch.
///
/// Missing cells stay missing. A present cell that isn't an integer fails
/// with `InvalidValue`.
pub fn epoch_seconds_to_datetime(column: &Column) -> Result<Column> {
    let secs = column.cast(&DataType::Int64)?;
    if secs.null_count() > column.null_count() {
        let row = secs
            .is_null()
            .into_iter()
            .zip(column.is_null().into_iter())
            .position(|(cast, original)| cast == Some(true) && original == Some(false))
            .unwrap_or(0);
        return Err(DataLoadError::InvalidValue {
            field: column.name().to_string(),
            row,
            value: column.get(row).map(|v| v.to_string()).unwrap_or_default(),
        });
    }

    let millis = secs.i64()? * 1000;
    let datetimes = millis
        .into_series()
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
        .with_name(column.name().clone());
    Ok(datetimes.into_column())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_price() {
        assert_eq!(normalize_price("$19.99"), Some(19.99));
        assert_eq!(normalize_price("Free"), Some(0.0));
        assert_eq!(normalize_price("Preorder"), None);
        assert_eq!(normalize_price("$1,299.00"), Some(1299.0));
        assert_eq!(normalize_price("$"), None);
        assert_eq!(normalize_price("19.99"), None);
    }

    #[test]
    fn test_refined_price_column() {
        let text = Column::new("original_price".into(), [Some("$9.99"), Some("Free"), Some("Soon"), None]);
        let refined = refined_price_column(&text, "refined_price").unwrap();
        assert_eq!(refined.name().as_str(), "refined_price");
        let values: Vec<Option<f64>> = refined.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(9.99), Some(0.0), None, None]);

        let numeric = Column::new("original_price".into(), [5i64, 0]);
        let refined = refined_price_column(&numeric, "refined_price").unwrap();
        let values: Vec<Option<f64>> = refined.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(5.0), Some(0.0)]);
    }

    #[test]
    fn test_app_id_from_url() {
        assert_eq!(
            app_id_from_url("https://store.steampowered.com/app/379720/DOOM/"),
            Some(379720)
        );
        assert_eq!(
            app_id_from_url("https://store.steampowered.com/bundle/5699/Grand_Theft_Auto_V/"),
            Some(5699)
        );
        assert_eq!(app_id_from_url("https://store.steampowered.com/app/"), None);
        assert_eq!(app_id_from_url("https://store.steampowered.com/"), None);
        assert_eq!(app_id_from_url("https://store.steampowered.com/app/-5/"), None);
        assert_eq!(app_id_from_url("not a url"), None);
    }

    #[test]
    fn test_app_id_beyond_32_bits() {
        assert_eq!(
            app_id_from_url("https://store.example.com/app/5000000000/Big/"),
            Some(5_000_000_000)
        );
    }

    #[test]
    fn test_app_id_column_reports_row() {
        let urls = Column::new(
            "url".into(),
            ["https://store.steampowered.com/app/70/HalfLife/", "https://store.steampowered.com/app/"],
        );
        let err = app_id_column(&urls, "app_id").unwrap_err();
        assert!(matches!(err, DataLoadError::MalformedUrl { row: 1, .. }));
    }

    #[test]
    fn test_epoch_seconds_to_datetime() {
        let epochs = Column::new("created".into(), [Some(1_609_459_200i64), None]);
        let converted = epoch_seconds_to_datetime(&epochs).unwrap();
        assert_eq!(
            converted.dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        let millis = converted.cast(&DataType::Int64).unwrap();
        let values: Vec<Option<i64>> = millis.i64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1_609_459_200_000), None]);
    }

    #[test]
    fn test_epoch_rejects_text() {
        let epochs = Column::new("created".into(), ["1609459200", "yesterday"]);
        let err = epoch_seconds_to_datetime(&epochs).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { row: 1, .. }));
    }
}
