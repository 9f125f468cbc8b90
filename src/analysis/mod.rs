//! Analysis module - tabular aggregations over the cleaned views

mod counts;
mod heights;
mod materials;

pub use counts::{counts_by_city, selection_summary, CityCount, CountSummary};
pub use heights::{average_height_by_city, filter_by_height, map_center, CityHeight};
pub use materials::{city_breakdown, national_breakdown, MaterialShare};

/// Round to two decimal places for presentation.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(310.0), 310.0);
    }
}
