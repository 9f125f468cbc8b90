//! Count-by-City Aggregator
//! Answers: how many skyscrapers does each city have?

use std::collections::HashMap;

/// A city's skyscraper count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

/// Narrative summary over a selection of city counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSummary {
    pub most: CityCount,
    pub fewest: CityCount,
    pub range: usize,
}

/// Group the city view by city and count rows, sorted by descending count
/// (ties by ascending city name).
pub fn counts_by_city(cities: &[String]) -> Vec<CityCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for city in cities {
        *counts.entry(city.as_str()).or_default() += 1;
    }

    let mut result: Vec<CityCount> = counts
        .into_iter()
        .map(|(city, count)| CityCount {
            city: city.to_string(),
            count,
        })
        .collect();

    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.city.cmp(&b.city)));
    result
}

/// Max, min, and range over the user's selection. `None` when nothing is
/// selected.
pub fn selection_summary(selection: &[CityCount]) -> Option<CountSummary> {
    let most = selection.iter().max_by_key(|c| c.count)?.clone();
    let fewest = selection.iter().min_by_key(|c| c.count)?.clone();
    let range = most.count - fewest.count;
    Some(CountSummary {
        most,
        fewest,
        range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn counts_cover_every_row() {
        let view = cities(&["Chicago", "Chicago", "New York", "Boston", "Chicago"]);
        let counts = counts_by_city(&view);

        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, view.len());

        assert_eq!(counts[0].city, "Chicago");
        assert_eq!(counts[0].count, 3);
        // tie between Boston and New York resolved alphabetically
        assert_eq!(counts[1].city, "Boston");
        assert_eq!(counts[2].city, "New York");
    }

    #[test]
    fn summary_reports_max_min_and_range() {
        let counts = counts_by_city(&cities(&["A", "A", "A", "B", "C", "C"]));
        let summary = selection_summary(&counts).unwrap();
        assert_eq!(summary.most.city, "A");
        assert_eq!(summary.fewest.city, "B");
        assert_eq!(summary.range, 2);
    }

    #[test]
    fn empty_selection_has_no_summary() {
        assert_eq!(selection_summary(&[]), None);
    }

    #[test]
    fn single_city_selection_has_zero_range() {
        let counts = vec![CityCount {
            city: "Chicago".to_string(),
            count: 7,
        }];
        let summary = selection_summary(&counts).unwrap();
        assert_eq!(summary.most, summary.fewest);
        assert_eq!(summary.range, 0);
    }
}
