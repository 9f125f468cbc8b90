//! Pie Chart Presenter
//! Draws material-share pies as filled egui_plot polygons. The top slices
//! are exploded outward and labeled inside the wedge; a full legend lists
//! every material with its percentage.

use egui::{Align2, Color32, RichText};
use egui_plot::{Plot, PlotPoint, PlotPoints, Polygon, Text};
use std::f64::consts::TAU;

use crate::analysis::MaterialShare;

/// Color palette for slices (and reused by other charts).
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const MAX_LABELED_SLICES: usize = 5;
const WEDGE_STEP: f64 = 0.04; // radians per arc segment
const EXPLODE_OFFSET: f64 = 0.07; // fraction of the radius
const LABEL_RADIUS: f64 = 0.62;
const PLOT_SIZE: f32 = 320.0;

/// Creates material-composition pie charts.
pub struct PieChart;

impl PieChart {
    pub fn slice_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Number of labeled and exploded slices: min(5, distinct materials),
    /// so scopes with fewer than 5 materials never overrun the breakdown.
    pub fn top_n(shares: &[MaterialShare]) -> usize {
        shares.len().min(MAX_LABELED_SLICES)
    }

    /// Wedge outline: the (possibly exploded) center plus the arc from
    /// `start` sweeping `sweep` radians clockwise on the unit circle.
    fn wedge_points(center: [f64; 2], start: f64, sweep: f64) -> Vec<[f64; 2]> {
        let segments = ((sweep / WEDGE_STEP).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(segments + 2);
        points.push(center);
        for s in 0..=segments {
            let a = start - sweep * s as f64 / segments as f64;
            points.push([center[0] + a.cos(), center[1] + a.sin()]);
        }
        points
    }

    /// Draw the pie with its legend beside it. `shares` must already be
    /// sorted by descending percentage.
    pub fn show(ui: &mut egui::Ui, id: &str, shares: &[MaterialShare]) {
        let total: usize = shares.iter().map(|s| s.count).sum();
        if total == 0 {
            return;
        }
        let top_n = Self::top_n(shares);

        ui.horizontal(|ui| {
            Plot::new(format!("pie_{id}"))
                .width(PLOT_SIZE)
                .height(PLOT_SIZE)
                .data_aspect(1.0)
                .show_axes(false)
                .show_grid(false)
                .show_x(false)
                .show_y(false)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .include_x(-1.4)
                .include_x(1.4)
                .include_y(-1.4)
                .include_y(1.4)
                .show(ui, |plot_ui| {
                    // Start at 12 o'clock and sweep clockwise
                    let mut start = TAU / 4.0;
                    for (i, share) in shares.iter().enumerate() {
                        let sweep = share.count as f64 / total as f64 * TAU;
                        let mid = start - sweep / 2.0;
                        let center = if i < top_n {
                            [EXPLODE_OFFSET * mid.cos(), EXPLODE_OFFSET * mid.sin()]
                        } else {
                            [0.0, 0.0]
                        };

                        let points = Self::wedge_points(center, start, sweep);
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(points))
                                .fill_color(Self::slice_color(i).gamma_multiply(0.9))
                                .stroke(egui::Stroke::new(1.0, Color32::BLACK))
                                .name(&share.material),
                        );

                        if i < top_n {
                            let label_pos = PlotPoint::new(
                                center[0] + LABEL_RADIUS * mid.cos(),
                                center[1] + LABEL_RADIUS * mid.sin(),
                            );
                            plot_ui.text(
                                Text::new(
                                    label_pos,
                                    RichText::new(format!("{:.2}%", share.percentage))
                                        .size(11.0)
                                        .color(Color32::WHITE),
                                )
                                .anchor(Align2::CENTER_CENTER),
                            );
                        }

                        start -= sweep;
                    }
                });

            ui.add_space(12.0);
            Self::draw_legend(ui, shares);
        });
    }

    /// Full legend: one colored square and percentage per material.
    fn draw_legend(ui: &mut egui::Ui, shares: &[MaterialShare]) {
        ui.vertical(|ui| {
            ui.label(
                RichText::new("Materials (with percentages)")
                    .size(13.0)
                    .strong(),
            );
            ui.add_space(4.0);
            for (i, share) in shares.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 3.0, Self::slice_color(i));
                    ui.label(
                        RichText::new(format!("{}: {:.2}%", share.material, share.percentage))
                            .size(12.0),
                    );
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(material: &str, count: usize, percentage: f64) -> MaterialShare {
        MaterialShare {
            material: material.to_string(),
            count,
            percentage,
        }
    }

    #[test]
    fn top_n_never_exceeds_distinct_materials() {
        let two = vec![share("steel", 3, 75.0), share("concrete", 1, 25.0)];
        assert_eq!(PieChart::top_n(&two), 2);

        let many: Vec<MaterialShare> =
            (0..8).map(|i| share(&format!("m{i}"), 1, 12.5)).collect();
        assert_eq!(PieChart::top_n(&many), 5);

        assert_eq!(PieChart::top_n(&[]), 0);
    }

    #[test]
    fn wedge_arc_stays_on_the_unit_circle() {
        let center = [0.1, 0.0];
        let points = PieChart::wedge_points(center, TAU / 4.0, TAU / 3.0);
        assert_eq!(points[0], center);
        for p in &points[1..] {
            let r = ((p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2)).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }
    }
}
