//! Page Renderers
//! One function per dashboard page. Every call recomputes its aggregates
//! from the in-memory views; nothing is cached between frames or pages.

use egui::RichText;

use crate::analysis::{self, CityCount};
use crate::charts::{CountBarChart, HeightMap, PieChart};
use crate::data::DataViews;
use crate::gui::UserSettings;

pub fn show_home(ui: &mut egui::Ui) {
    ui.heading("Skyscraper Information Database");
    ui.add_space(8.0);
    ui.label("Hello! Want to learn about skyscrapers? You've come to the right place.");
    ui.label(
        "Pick a page in the sidebar to explore construction materials, \
         per-city skyscraper counts, or a height-filtered map of every building.",
    );
}

pub fn show_materials(ui: &mut egui::Ui, views: &DataViews, settings: &UserSettings) {
    let city = settings.city.as_str();
    let city_shares = analysis::city_breakdown(&views.materials, city);

    ui.heading(format!("Skyscraper Materials in {city}"));
    ui.add_space(6.0);
    if city_shares.is_empty() {
        ui.label(format!("No material data available for {city}."));
    } else {
        PieChart::show(ui, "city", &city_shares);
        ui.add_space(4.0);
        let top = &city_shares[0];
        ui.label(format!(
            "One of the most popular skyscraper materials in {city} is {}, \
             accounting for {:.2}% of buildings.",
            top.material, top.percentage
        ));
    }

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    ui.heading("Total Percentage of Skyscraper Materials Across Cities in the US");
    ui.add_space(6.0);
    let national = analysis::national_breakdown(&views.materials);
    if national.is_empty() {
        ui.label("No material data available.");
    } else {
        PieChart::show(ui, "national", &national);
        ui.add_space(4.0);
        let top = &national[0];
        ui.label(format!(
            "This compares to the nationwide percentages, with {} accounting \
             for {:.2}% of all skyscraper construction material in the US.",
            top.material, top.percentage
        ));
    }
}

pub fn show_counts(ui: &mut egui::Ui, views: &DataViews, selected: &[String]) {
    ui.heading("Number of Skyscrapers by City");
    ui.add_space(6.0);

    let counts = analysis::counts_by_city(&views.cities);
    let selection: Vec<CityCount> = counts
        .into_iter()
        .filter(|c| selected.contains(&c.city))
        .collect();

    if selection.is_empty() {
        ui.label("Select one or more cities in the sidebar to compare their skyscraper counts.");
        return;
    }

    CountBarChart::show(ui, &selection);
    ui.add_space(8.0);

    if let Some(summary) = analysis::selection_summary(&selection) {
        ui.label(format!(
            "Out of your selected cities, the city with the highest amount of \
             skyscrapers is {}.",
            summary.most.city
        ));
        ui.label(format!(
            "The city with the least skyscrapers out of your selected cities is {}.",
            summary.fewest.city
        ));
        ui.label(format!(
            "The difference in amount of skyscrapers within these cities is {} skyscrapers.",
            summary.range
        ));
        if selection.len() == 1 {
            ui.label("This is because you chose only 1 city. For more info, choose more cities.");
        }
    }
}

pub fn show_heights(ui: &mut egui::Ui, views: &DataViews, settings: &UserSettings) {
    ui.heading("Average Height of Skyscrapers by City");
    ui.add_space(6.0);

    let (lo, hi) = settings.height_range;
    let filtered = analysis::filter_by_height(&views.heights, lo, hi);

    match analysis::map_center(&filtered) {
        None => {
            ui.label("There are no skyscrapers that meet your conditions.");
        }
        Some(center) => {
            ui.label("Displaying all skyscrapers within your selected height range.");
            ui.add_space(4.0);
            HeightMap::show(ui, &filtered, center, settings.marker_size);
        }
    }

    ui.add_space(12.0);
    ui.separator();
    ui.add_space(6.0);

    ui.label(RichText::new("Average height by city").strong());
    ui.add_space(4.0);
    let averages = analysis::average_height_by_city(&views.heights);
    egui::Grid::new("avg_height_table")
        .striped(true)
        .min_col_width(120.0)
        .show(ui, |ui| {
            ui.label(RichText::new("City").strong().size(12.0));
            ui.label(RichText::new("Average Height (m)").strong().size(12.0));
            ui.end_row();
            for entry in &averages {
                ui.label(&entry.city);
                ui.label(format!("{:.2}", entry.average_height));
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    egui::CollapsingHeader::new("View full table of information")
        .default_open(false)
        .show(ui, |ui| {
            egui::Grid::new("height_table")
                .striped(true)
                .min_col_width(90.0)
                .show(ui, |ui| {
                    for header in ["Name", "City", "Height (m)", "Rank", "Latitude", "Longitude"] {
                        ui.label(RichText::new(header).strong().size(12.0));
                    }
                    ui.end_row();
                    for row in &views.heights {
                        ui.label(&row.name);
                        ui.label(&row.city);
                        ui.label(format!("{:.2}", row.height));
                        ui.label(row.rank.to_string());
                        ui.label(format!("{:.4}", row.latitude));
                        ui.label(format!("{:.4}", row.longitude));
                        ui.end_row();
                    }
                });
        });
}
