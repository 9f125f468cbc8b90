//! Skyscraper Record Module
//! Typed rows extracted from the cleaned DataFrame.

use polars::prelude::*;
use thiserror::Error;

use super::columns;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },
}

/// One skyscraper's attributes as loaded from the source file.
///
/// Records are read-only after extraction. The cleaner guarantees the
/// numeric fields below are present; text fields default to empty when the
/// source cell is blank.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyscraperRecord {
    pub name: String,
    pub city: String,
    pub country: String,
    pub material: String,
    pub latitude: f64,
    pub longitude: f64,
    pub floors_above: i64,
    pub height: f64,
    pub completed_year: i64,
    pub started_year: i64,
    pub rank: i64,
}

fn f64_values(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>, RecordError> {
    let casted = df.column(column)?.cast(&DataType::Float64)?;
    Ok(casted
        .as_materialized_series()
        .f64()?
        .into_iter()
        .collect())
}

fn str_values(df: &DataFrame, column: &str) -> Result<Vec<String>, RecordError> {
    let casted = df.column(column)?.cast(&DataType::String)?;
    Ok(casted
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect())
}

fn required(values: &[Option<f64>], column: &str, row: usize) -> Result<f64, RecordError> {
    values[row].ok_or_else(|| RecordError::MissingValue {
        column: column.to_string(),
        row,
    })
}

/// Build the record list from a cleaned DataFrame.
pub fn records_from_dataframe(df: &DataFrame) -> Result<Vec<SkyscraperRecord>, RecordError> {
    let names = str_values(df, columns::NAME)?;
    let cities = str_values(df, columns::CITY)?;
    let countries = str_values(df, columns::COUNTRY)?;
    let materials = str_values(df, columns::MATERIAL)?;
    let latitudes = f64_values(df, columns::LATITUDE)?;
    let longitudes = f64_values(df, columns::LONGITUDE)?;
    let floors = f64_values(df, columns::FLOORS_ABOVE)?;
    let heights = f64_values(df, columns::HEIGHT)?;
    let completed = f64_values(df, columns::COMPLETED_YEAR)?;
    let started = f64_values(df, columns::STARTED_YEAR)?;
    let ranks = f64_values(df, columns::RANK)?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        records.push(SkyscraperRecord {
            name: names[row].clone(),
            city: cities[row].clone(),
            country: countries[row].clone(),
            material: materials[row].clone(),
            latitude: required(&latitudes, columns::LATITUDE, row)?,
            longitude: required(&longitudes, columns::LONGITUDE, row)?,
            floors_above: required(&floors, columns::FLOORS_ABOVE, row)? as i64,
            height: required(&heights, columns::HEIGHT, row)?,
            completed_year: required(&completed, columns::COMPLETED_YEAR, row)? as i64,
            started_year: required(&started, columns::STARTED_YEAR, row)? as i64,
            // rank is not part of the cleaning contract; tolerate blanks
            rank: ranks[row].unwrap_or(0.0) as i64,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaned_frame() -> DataFrame {
        df!(
            columns::NAME => &["Willis Tower", "One WTC"],
            columns::MATERIAL => &[Some("steel"), None],
            columns::CITY => &["Chicago", "New York"],
            columns::COUNTRY => &["US", "US"],
            columns::LATITUDE => &[41.878f64, 40.713],
            columns::LONGITUDE => &[-87.636f64, -74.013],
            columns::FLOORS_ABOVE => &[108i64, 94],
            columns::HEIGHT => &[442.1f64, 541.3],
            columns::RANK => &[Some(23i64), None],
            columns::COMPLETED_YEAR => &[1974i64, 2014],
            columns::STARTED_YEAR => &[1970i64, 2006],
        )
        .unwrap()
    }

    #[test]
    fn extracts_typed_records() {
        let records = records_from_dataframe(&cleaned_frame()).unwrap();
        assert_eq!(records.len(), 2);

        let willis = &records[0];
        assert_eq!(willis.name, "Willis Tower");
        assert_eq!(willis.city, "Chicago");
        assert_eq!(willis.material, "steel");
        assert_eq!(willis.floors_above, 108);
        assert_eq!(willis.rank, 23);
        assert!((willis.height - 442.1).abs() < 1e-9);
        assert_eq!(willis.completed_year, 1974);
    }

    #[test]
    fn blank_text_and_rank_default_instead_of_failing() {
        let records = records_from_dataframe(&cleaned_frame()).unwrap();
        let wtc = &records[1];
        assert_eq!(wtc.material, "");
        assert_eq!(wtc.rank, 0);
    }

    #[test]
    fn missing_required_value_is_an_error() {
        let df = df!(
            columns::NAME => &["Nameless"],
            columns::MATERIAL => &["steel"],
            columns::CITY => &["Chicago"],
            columns::COUNTRY => &["US"],
            columns::LATITUDE => &[Option::<f64>::None],
            columns::LONGITUDE => &[-87.6f64],
            columns::FLOORS_ABOVE => &[10i64],
            columns::HEIGHT => &[100.0f64],
            columns::RANK => &[1i64],
            columns::COMPLETED_YEAR => &[1990i64],
            columns::STARTED_YEAR => &[1985i64],
        )
        .unwrap();
        let err = records_from_dataframe(&df).err().expect("must fail");
        assert!(matches!(err, RecordError::MissingValue { .. }));
    }
}
