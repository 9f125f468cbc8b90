//! Control Panel Widget
//! Left side panel with the page selector and the per-page filters.

use egui::{Color32, ComboBox, RichText, ScrollArea, Slider};

use crate::data::default_city;

/// Slider domains for the Heights page.
pub const HEIGHT_MIN: f64 = 0.0;
pub const HEIGHT_MAX: f64 = 600.0;
pub const HEIGHT_STEP: f64 = 10.0;
pub const MARKER_SIZE_MIN: f64 = 0.0;
pub const MARKER_SIZE_MAX: f64 = 50_000.0;
pub const MARKER_SIZE_STEP: f64 = 100.0;

/// Dashboard pages, selected by a single control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Materials,
    Counts,
    Heights,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Materials, Page::Counts, Page::Heights];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home Page",
            Page::Materials => "Skyscraper Materials",
            Page::Counts => "Number of Skyscrapers",
            Page::Heights => "Average Heights Map",
        }
    }
}

/// User-selected filters; read fresh on every render.
#[derive(Debug, Clone)]
pub struct UserSettings {
    pub page: Page,
    pub city: String,
    /// Inclusive height interval in meters.
    pub height_range: (f64, f64),
    pub marker_size: f64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            page: Page::Home,
            city: String::new(),
            height_range: (100.0, 200.0),
            marker_size: 25_000.0,
        }
    }
}

/// Left side control panel with the page radio and filter widgets.
pub struct ControlPanel {
    pub settings: UserSettings,
    /// Distinct cities, alphabetical (single-choice combo options).
    pub cities: Vec<String>,
    /// Cities ordered by descending skyscraper count (multiselect options).
    pub count_cities: Vec<String>,
    pub selected_cities: Vec<bool>,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            cities: Vec::new(),
            count_cities: Vec::new(),
            selected_cities: Vec::new(),
            status: String::new(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the city option lists after the table is loaded and pick the
    /// default single-choice city.
    pub fn set_city_options(&mut self, cities: Vec<String>, count_cities: Vec<String>) {
        self.selected_cities = vec![false; count_cities.len()];
        if let Some(city) = default_city(&cities) {
            self.settings.city = city.to_string();
        }
        self.cities = cities;
        self.count_cities = count_cities;
    }

    /// Cities currently ticked in the multiselect.
    pub fn selected_city_names(&self) -> Vec<String> {
        self.count_cities
            .iter()
            .zip(self.selected_cities.iter())
            .filter(|(_, &selected)| selected)
            .map(|(city, _)| city.clone())
            .collect()
    }

    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    /// Draw the control panel.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏙 Skyline Explorer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Skyscraper Information Database")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Page Section =====
        ui.label(RichText::new("What do you want to know?").size(14.0).strong());
        ui.add_space(5.0);
        for page in Page::ALL {
            ui.radio_value(&mut self.settings.page, page, page.label());
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Per-page filters =====
        match self.settings.page {
            Page::Home => {}
            Page::Materials => self.show_city_choice(ui),
            Page::Counts => self.show_city_multiselect(ui),
            Page::Heights => self.show_height_filters(ui),
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(
            RichText::new(&self.status)
                .size(11.0)
                .color(Color32::GRAY),
        );
    }

    fn show_city_choice(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Choose a City").size(14.0).strong());
        ui.add_space(5.0);
        ComboBox::from_id_salt("city_choice")
            .width(180.0)
            .selected_text(&self.settings.city)
            .show_ui(ui, |ui| {
                for city in &self.cities {
                    if ui
                        .selectable_label(self.settings.city == *city, city)
                        .clicked()
                    {
                        self.settings.city = city.clone();
                    }
                }
            });
    }

    fn show_city_multiselect(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Select Cities").size(14.0).strong());
        ui.add_space(5.0);
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("city_multiselect")
                    .max_height(220.0)
                    .show(ui, |ui| {
                        for (i, city) in self.count_cities.iter().enumerate() {
                            if i < self.selected_cities.len() {
                                ui.checkbox(&mut self.selected_cities[i], city);
                            }
                        }
                    });
            });

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            if ui.small_button("Select All").clicked() {
                self.selected_cities.iter_mut().for_each(|v| *v = true);
            }
            if ui.small_button("Clear All").clicked() {
                self.selected_cities.iter_mut().for_each(|v| *v = false);
            }
        });
    }

    fn show_height_filters(&mut self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new("Select Height Range (meters)")
                .size(14.0)
                .strong(),
        );
        ui.add_space(5.0);
        let (mut lo, mut hi) = self.settings.height_range;
        ui.add(
            Slider::new(&mut lo, HEIGHT_MIN..=HEIGHT_MAX)
                .step_by(HEIGHT_STEP)
                .text("Min"),
        );
        ui.add(
            Slider::new(&mut hi, HEIGHT_MIN..=HEIGHT_MAX)
                .step_by(HEIGHT_STEP)
                .text("Max"),
        );
        self.settings.height_range = clamp_range(lo, hi, self.settings.height_range);

        ui.add_space(10.0);
        ui.label(RichText::new("Select Dot Size on Map").size(14.0).strong());
        ui.add_space(5.0);
        ui.add(
            Slider::new(&mut self.settings.marker_size, MARKER_SIZE_MIN..=MARKER_SIZE_MAX)
                .step_by(MARKER_SIZE_STEP)
                .text("Size"),
        );
    }
}

/// Keep the interval well-formed: the thumb that moved wins and drags the
/// other bound with it.
fn clamp_range(lo: f64, hi: f64, previous: (f64, f64)) -> (f64, f64) {
    if lo <= hi {
        (lo, hi)
    } else if lo != previous.0 {
        (lo, lo)
    } else {
        (hi, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_controls() {
        let settings = UserSettings::default();
        assert_eq!(settings.page, Page::Home);
        assert_eq!(settings.height_range, (100.0, 200.0));
        assert_eq!(settings.marker_size, 25_000.0);
    }

    #[test]
    fn city_options_pick_the_default_city() {
        let mut panel = ControlPanel::new();
        panel.set_city_options(
            vec!["Boston".to_string(), "New York".to_string()],
            vec!["New York".to_string(), "Boston".to_string()],
        );
        assert_eq!(panel.settings.city, "New York");
        assert_eq!(panel.selected_cities.len(), 2);
        assert!(panel.selected_city_names().is_empty());

        panel.selected_cities[1] = true;
        assert_eq!(panel.selected_city_names(), vec!["Boston"]);
    }

    #[test]
    fn range_clamp_follows_the_moved_thumb() {
        // untouched, already ordered
        assert_eq!(clamp_range(100.0, 200.0, (100.0, 200.0)), (100.0, 200.0));
        // min dragged above max
        assert_eq!(clamp_range(250.0, 200.0, (100.0, 200.0)), (250.0, 250.0));
        // max dragged below min
        assert_eq!(clamp_range(100.0, 50.0, (100.0, 200.0)), (50.0, 50.0));
    }
}
