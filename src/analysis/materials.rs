//! Material Share Aggregator
//! Answers: what materials are skyscrapers made from, per city and
//! nationwide?

use std::collections::HashMap;

use super::round2;
use crate::data::MaterialRow;

/// One material's share of a scope (a city or the whole table).
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialShare {
    pub material: String,
    pub count: usize,
    /// Percentage of the scope total, rounded to 2 decimals.
    pub percentage: f64,
}

/// Per-(material, city) counts, the base aggregation for both breakdowns.
fn material_city_counts(rows: &[MaterialRow]) -> HashMap<(String, String), usize> {
    let mut counts: HashMap<(String, String), usize> = HashMap::new();
    for row in rows {
        *counts
            .entry((row.material.clone(), row.city.clone()))
            .or_default() += 1;
    }
    counts
}

/// Turn material counts into a sorted percentage breakdown.
/// Sorted by descending percentage; ties broken by ascending material name
/// so top-N labeling is deterministic at rank boundaries.
fn shares(counts: HashMap<String, usize>) -> Vec<MaterialShare> {
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<MaterialShare> = counts
        .into_iter()
        .map(|(material, count)| MaterialShare {
            material,
            count,
            percentage: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.material.cmp(&b.material))
    });
    shares
}

/// Material breakdown for a single city.
pub fn city_breakdown(rows: &[MaterialRow], city: &str) -> Vec<MaterialShare> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for ((material, row_city), count) in material_city_counts(rows) {
        if row_city == city {
            *counts.entry(material).or_default() += count;
        }
    }
    shares(counts)
}

/// Nationwide material breakdown, summed across all cities.
pub fn national_breakdown(rows: &[MaterialRow]) -> Vec<MaterialShare> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for ((material, _city), count) in material_city_counts(rows) {
        *counts.entry(material).or_default() += count;
    }
    shares(counts)
}
