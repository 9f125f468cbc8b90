//! Skyline Explorer Main Application
//! Main window with the sidebar control panel and the four-page view.

use egui::SidePanel;

use crate::analysis;
use crate::data::{DataViews, SkyscraperRecord};
use crate::gui::pages;
use crate::gui::{ControlPanel, Page};

/// Main application window.
///
/// Holds the cleaned table's views; every frame recomputes the page's
/// aggregates from them, so page transitions carry no state.
pub struct SkylineApp {
    views: DataViews,
    control_panel: ControlPanel,
}

impl SkylineApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, records: Vec<SkyscraperRecord>) -> Self {
        let views = DataViews::project(&records);
        let cities = views.distinct_cities();
        let city_count = cities.len();
        let count_order: Vec<String> = analysis::counts_by_city(&views.cities)
            .into_iter()
            .map(|c| c.city)
            .collect();

        let mut control_panel = ControlPanel::new();
        control_panel.set_city_options(cities, count_order);
        control_panel.set_status(format!(
            "{} skyscrapers across {} cities",
            records.len(),
            city_count
        ));

        Self {
            views,
            control_panel,
        }
    }
}

impl eframe::App for SkylineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - controls
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.control_panel.show(ui);
                });
            });

        // Central panel - current page
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.control_panel.settings.page {
                    Page::Home => pages::show_home(ui),
                    Page::Materials => {
                        pages::show_materials(ui, &self.views, &self.control_panel.settings)
                    }
                    Page::Counts => pages::show_counts(
                        ui,
                        &self.views,
                        &self.control_panel.selected_city_names(),
                    ),
                    Page::Heights => {
                        pages::show_heights(ui, &self.views, &self.control_panel.settings)
                    }
                });
        });
    }
}
