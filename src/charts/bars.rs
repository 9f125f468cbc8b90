//! Bar Chart Presenter
//! Horizontal per-city count bars, largest on top, with the numeric count
//! annotated at the end of each bar.

use egui::{Align2, Color32, RichText};
use egui_plot::{Bar, BarChart, Plot, PlotPoint, Text};

use crate::analysis::CityCount;

const BAR_COLOR: Color32 = Color32::from_rgb(25, 70, 150);
const BAR_THICKNESS: f64 = 0.6;
const ROW_HEIGHT: f32 = 30.0;

/// Creates the count-by-city bar chart.
pub struct CountBarChart;

impl CountBarChart {
    pub fn show(ui: &mut egui::Ui, counts: &[CityCount]) {
        if counts.is_empty() {
            return;
        }

        let n = counts.len();
        let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0) as f64;
        let annotation_pad = max_count * 0.02 + 0.1;

        // Row 0 is the bottom of the plot, so reverse to put the largest
        // selected city on top.
        let labels: Vec<String> = counts.iter().rev().map(|c| c.city.clone()).collect();

        let bars: Vec<Bar> = counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                Bar::new((n - 1 - i) as f64, c.count as f64)
                    .width(BAR_THICKNESS)
                    .fill(BAR_COLOR)
                    .name(&c.city)
            })
            .collect();

        let height = (n as f32 * ROW_HEIGHT + 70.0).clamp(160.0, 520.0);

        Plot::new("city_count_bars")
            .height(height)
            .x_axis_label("Number of Skyscrapers")
            .y_axis_label("City")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .include_x(0.0)
            .include_x(max_count * 1.15 + 1.0)
            .include_y(-0.6)
            .include_y(n as f64 - 0.4)
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 0.05 && idx < labels.len() {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal());

                for (i, c) in counts.iter().enumerate() {
                    let y = (n - 1 - i) as f64;
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(c.count as f64 + annotation_pad, y),
                            RichText::new(c.count.to_string()).size(12.0).strong(),
                        )
                        .anchor(Align2::LEFT_CENTER),
                    );
                }
            });
    }
}
