//! Data module - CSV loading, cleaning, and view projection

mod cleaner;
mod loader;
mod record;
mod views;

pub use cleaner::{clean, null_invalid, CleanPolicy, CleanerError, REQUIRED_COLUMNS};
pub use loader::{DataLoader, LoaderError};
pub use record::{records_from_dataframe, RecordError, SkyscraperRecord};
pub use views::{default_city, DataViews, HeightRow, MaterialRow};

/// Column names of the source CSV.
pub mod columns {
    pub const NAME: &str = "name";
    pub const MATERIAL: &str = "material";
    pub const CITY: &str = "location.city";
    pub const COUNTRY: &str = "location.country";
    pub const LATITUDE: &str = "location.latitude";
    pub const LONGITUDE: &str = "location.longitude";
    pub const FLOORS_ABOVE: &str = "statistics.floors above";
    pub const HEIGHT: &str = "statistics.height";
    pub const RANK: &str = "statistics.rank";
    pub const COMPLETED_YEAR: &str = "status.completed.year";
    pub const STARTED_YEAR: &str = "status.started.year";
}
