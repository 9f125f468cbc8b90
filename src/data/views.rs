//! View Projection Module
//! Splits the cleaned table into the three narrow views backing the
//! analytical pages.

use super::SkyscraperRecord;

/// Preferred default for the city selector when present in the data.
pub const DEFAULT_CITY: &str = "New York";

/// Row of the material view: which material was used where.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRow {
    pub material: String,
    pub city: String,
    pub country: String,
}

/// Row of the height view: everything the map and table dump need.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightRow {
    pub name: String,
    pub city: String,
    pub height: f64,
    pub rank: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// The cleaned table split per analytical question.
#[derive(Debug, Clone, Default)]
pub struct DataViews {
    /// Material composition view (rows with a blank material are skipped).
    pub materials: Vec<MaterialRow>,
    /// City-only view used for counting.
    pub cities: Vec<String>,
    /// Per-building view used for the map and the table dump.
    pub heights: Vec<HeightRow>,
}

impl DataViews {
    pub fn project(records: &[SkyscraperRecord]) -> Self {
        let materials = records
            .iter()
            .filter(|r| !r.material.is_empty())
            .map(|r| MaterialRow {
                material: r.material.clone(),
                city: r.city.clone(),
                country: r.country.clone(),
            })
            .collect();

        let cities = records.iter().map(|r| r.city.clone()).collect();

        let heights = records
            .iter()
            .map(|r| HeightRow {
                name: r.name.clone(),
                city: r.city.clone(),
                height: r.height,
                rank: r.rank,
                latitude: r.latitude,
                longitude: r.longitude,
            })
            .collect();

        Self {
            materials,
            cities,
            heights,
        }
    }

    /// Distinct city names, sorted alphabetically.
    pub fn distinct_cities(&self) -> Vec<String> {
        let mut cities = self.cities.clone();
        cities.sort();
        cities.dedup();
        cities
    }
}

/// City selector default: "New York" when present, else the first city
/// alphabetically.
pub fn default_city(cities: &[String]) -> Option<&str> {
    cities
        .iter()
        .find(|c| c.as_str() == DEFAULT_CITY)
        .or_else(|| cities.iter().min())
        .map(|c| c.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, city: &str, material: &str, height: f64) -> SkyscraperRecord {
        SkyscraperRecord {
            name: name.to_string(),
            city: city.to_string(),
            country: "US".to_string(),
            material: material.to_string(),
            latitude: 41.0,
            longitude: -87.0,
            floors_above: 50,
            height,
            completed_year: 2000,
            started_year: 1995,
            rank: 1,
        }
    }

    #[test]
    fn projection_splits_the_table() {
        let records = vec![
            record("A", "Chicago", "steel", 300.0),
            record("B", "Chicago", "", 320.0),
            record("C", "New York", "concrete", 250.0),
        ];
        let views = DataViews::project(&records);

        // blank material is excluded from the material view only
        assert_eq!(views.materials.len(), 2);
        assert_eq!(views.cities.len(), 3);
        assert_eq!(views.heights.len(), 3);
        assert_eq!(views.heights[1].name, "B");
        assert_eq!(views.distinct_cities(), vec!["Chicago", "New York"]);
    }

    #[test]
    fn default_city_prefers_new_york() {
        let cities = vec!["Boston".to_string(), "New York".to_string()];
        assert_eq!(default_city(&cities), Some("New York"));

        let cities = vec!["Seattle".to_string(), "Boston".to_string()];
        assert_eq!(default_city(&cities), Some("Boston"));

        assert_eq!(default_city(&[]), None);
    }
}
