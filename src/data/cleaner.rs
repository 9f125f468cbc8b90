//! Data Cleaner Module
//! Nulls out semantically invalid numeric values per column, then drops
//! rows that are missing any required field.

use polars::prelude::*;
use thiserror::Error;

use super::columns;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Comparison policy describing which values of a numeric column are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanPolicy {
    /// Invalid when the value equals zero (degenerate coordinates).
    EqualZero,
    /// Invalid when the value is strictly positive.
    GreaterThanZero,
    /// Invalid when the value is strictly negative.
    LessThanZero,
    /// Invalid when the value is zero or positive.
    AtLeastZero,
    /// Invalid when the value is zero or negative (counts, heights, years).
    AtMostZero,
}

impl CleanPolicy {
    /// Predicate matching the values this policy declares invalid.
    fn invalid(self, column: &str) -> Expr {
        match self {
            CleanPolicy::EqualZero => col(column).eq(lit(0.0)),
            CleanPolicy::GreaterThanZero => col(column).gt(lit(0.0)),
            CleanPolicy::LessThanZero => col(column).lt(lit(0.0)),
            CleanPolicy::AtLeastZero => col(column).gt_eq(lit(0.0)),
            CleanPolicy::AtMostZero => col(column).lt_eq(lit(0.0)),
        }
    }
}

/// Fixed per-column policies applied before row filtering.
pub const COLUMN_POLICIES: [(&str, CleanPolicy); 6] = [
    (columns::LATITUDE, CleanPolicy::EqualZero),
    (columns::LONGITUDE, CleanPolicy::EqualZero),
    (columns::FLOORS_ABOVE, CleanPolicy::AtMostZero),
    (columns::HEIGHT, CleanPolicy::AtMostZero),
    (columns::COMPLETED_YEAR, CleanPolicy::AtMostZero),
    (columns::STARTED_YEAR, CleanPolicy::AtMostZero),
];

/// Columns that must be non-null for a row to be retained.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    columns::CITY,
    columns::LATITUDE,
    columns::LONGITUDE,
    columns::FLOORS_ABOVE,
    columns::HEIGHT,
    columns::COMPLETED_YEAR,
    columns::STARTED_YEAR,
];

fn null_expr(column: &str, policy: CleanPolicy) -> Expr {
    when(policy.invalid(column))
        .then(lit(NULL))
        .otherwise(col(column))
        .alias(column)
}

/// Replace every value of `column` matching `policy` with null, leaving
/// other values untouched.
pub fn null_invalid(
    df: &DataFrame,
    column: &str,
    policy: CleanPolicy,
) -> Result<DataFrame, CleanerError> {
    let out = df
        .clone()
        .lazy()
        .with_column(null_expr(column, policy))
        .collect()?;
    Ok(out)
}

/// Apply all fixed column policies, then drop rows with a null in any
/// required column. No partial-record repair.
pub fn clean(df: &DataFrame) -> Result<DataFrame, CleanerError> {
    let nulled: Vec<Expr> = COLUMN_POLICIES
        .iter()
        .map(|(column, policy)| null_expr(column, *policy))
        .collect();
    let required: Vec<Expr> = REQUIRED_COLUMNS.iter().map(|c| col(*c)).collect();

    let out = df
        .clone()
        .lazy()
        .with_columns(nulled)
        .drop_nulls(Some(required))
        .collect()?;
    Ok(out)
}
