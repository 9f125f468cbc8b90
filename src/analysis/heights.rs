//! Height Aggregator
//! Answers: how tall are each city's skyscrapers, and which buildings fall
//! inside a height interval?

use std::collections::HashMap;

use super::round2;
use crate::data::HeightRow;

/// A city's average skyscraper height.
#[derive(Debug, Clone, PartialEq)]
pub struct CityHeight {
    pub city: String,
    /// Mean height in meters, rounded to 2 decimals.
    pub average_height: f64,
}

/// Group the height view by city and take the mean height, indexed by city
/// name (sorted alphabetically).
pub fn average_height_by_city(rows: &[HeightRow]) -> Vec<CityHeight> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for row in rows {
        let entry = sums.entry(row.city.as_str()).or_insert((0.0, 0));
        entry.0 += row.height;
        entry.1 += 1;
    }

    let mut result: Vec<CityHeight> = sums
        .into_iter()
        .map(|(city, (sum, n))| CityHeight {
            city: city.to_string(),
            average_height: round2(sum / n as f64),
        })
        .collect();

    result.sort_by(|a, b| a.city.cmp(&b.city));
    result
}

/// Buildings whose height lies inside `[lo, hi]`, bounds inclusive.
pub fn filter_by_height(rows: &[HeightRow], lo: f64, hi: f64) -> Vec<&HeightRow> {
    rows.iter()
        .filter(|r| r.height >= lo && r.height <= hi)
        .collect()
}

/// Mean (latitude, longitude) of the filtered set; the map's initial
/// center. `None` when the filter matched nothing.
pub fn map_center(rows: &[&HeightRow]) -> Option<(f64, f64)> {
    if rows.is_empty() {
        return None;
    }
    let n = rows.len() as f64;
    let lat = rows.iter().map(|r| r.latitude).sum::<f64>() / n;
    let lon = rows.iter().map(|r| r.longitude).sum::<f64>() / n;
    Some((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, city: &str, height: f64, lat: f64, lon: f64) -> HeightRow {
        HeightRow {
            name: name.to_string(),
            city: city.to_string(),
            height,
            rank: 0,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn average_height_per_city() {
        let rows = vec![
            row("A", "Chicago", 300.0, 41.8, -87.6),
            row("B", "Chicago", 320.0, 41.9, -87.7),
            row("C", "Boston", 150.0, 42.3, -71.0),
        ];
        let averages = average_height_by_city(&rows);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].city, "Boston");
        assert_eq!(averages[0].average_height, 150.0);
        assert_eq!(averages[1].city, "Chicago");
        assert_eq!(averages[1].average_height, 310.0);
    }

    #[test]
    fn single_record_average_is_exact() {
        let rows = vec![row("A", "Seattle", 184.41, 47.6, -122.3)];
        let averages = average_height_by_city(&rows);
        assert_eq!(averages[0].average_height, 184.41);
    }

    #[test]
    fn height_filter_bounds_are_inclusive() {
        let rows = vec![
            row("Low", "X", 150.0, 40.0, -80.0),
            row("High", "X", 250.0, 41.0, -81.0),
            row("EdgeLo", "X", 100.0, 42.0, -82.0),
            row("EdgeHi", "X", 200.0, 43.0, -83.0),
        ];
        let filtered = filter_by_height(&rows, 100.0, 200.0);
        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "EdgeLo", "EdgeHi"]);
    }

    #[test]
    fn map_center_is_the_coordinate_mean() {
        let rows = vec![
            row("A", "X", 150.0, 40.0, -80.0),
            row("B", "X", 160.0, 42.0, -82.0),
        ];
        let filtered = filter_by_height(&rows, 0.0, 600.0);
        let (lat, lon) = map_center(&filtered).unwrap();
        assert!((lat - 41.0).abs() < 1e-9);
        assert!((lon + 81.0).abs() < 1e-9);

        assert_eq!(map_center(&[]), None);
    }
}
