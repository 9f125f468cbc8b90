//! Height Map Presenter
//! Coordinate scatter of every building inside the selected height
//! interval, centered on the mean coordinate of the filtered set. Hovering
//! a marker shows the building name and height.

use egui::{Align2, Color32, RichText};
use egui_plot::{Plot, PlotPoint, PlotPoints, Points, Text};

use crate::data::HeightRow;

/// Upper bound of the marker-size control.
pub const MARKER_SIZE_MAX: f64 = 50_000.0;

const MARKER_COLOR: Color32 = Color32::from_rgb(30, 60, 220);
const HOVER_COLOR: Color32 = Color32::from_rgb(70, 130, 180);
const MAX_RADIUS_PX: f32 = 18.0;
const MIN_VIEW_EXTENT: f64 = 1.0; // degrees
const HOVER_PICK_FRACTION: f64 = 0.03;

/// Creates the height-filtered geographic scatter.
pub struct HeightMap;

impl HeightMap {
    /// Translate the 0..=50000 marker-size setting into a pixel radius.
    pub fn marker_radius(marker_size: f64) -> f32 {
        ((marker_size / MARKER_SIZE_MAX).clamp(0.0, 1.0) * MAX_RADIUS_PX as f64) as f32
    }

    /// View half-extents so that `center` sits in the middle with every
    /// marker visible plus some margin.
    fn view_extents(markers: &[&HeightRow], center: (f64, f64)) -> (f64, f64) {
        let (lat_c, lon_c) = center;
        let lat_ext = markers
            .iter()
            .map(|r| (r.latitude - lat_c).abs())
            .fold(0.0_f64, f64::max);
        let lon_ext = markers
            .iter()
            .map(|r| (r.longitude - lon_c).abs())
            .fold(0.0_f64, f64::max);
        (
            (lat_ext * 1.2).max(MIN_VIEW_EXTENT),
            (lon_ext * 1.2).max(MIN_VIEW_EXTENT),
        )
    }

    pub fn show(ui: &mut egui::Ui, markers: &[&HeightRow], center: (f64, f64), marker_size: f64) {
        if markers.is_empty() {
            return;
        }

        let radius = Self::marker_radius(marker_size);
        let (lat_c, lon_c) = center;
        let (lat_ext, lon_ext) = Self::view_extents(markers, center);

        Plot::new("height_map")
            .height(420.0)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .allow_scroll(false)
            .include_x(lon_c - lon_ext)
            .include_x(lon_c + lon_ext)
            .include_y(lat_c - lat_ext)
            .include_y(lat_c + lat_ext)
            .show(ui, |plot_ui| {
                let points: PlotPoints = markers
                    .iter()
                    .map(|r| [r.longitude, r.latitude])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(radius)
                        .color(MARKER_COLOR.gamma_multiply(0.8))
                        .name("Skyscrapers"),
                );

                // Hover info: nearest marker within a small slice of the view
                if let Some(pointer) = plot_ui.pointer_coordinate() {
                    let bounds = plot_ui.plot_bounds();
                    let pick = bounds.width().max(bounds.height()) * HOVER_PICK_FRACTION;
                    let nearest = markers.iter().min_by(|a, b| {
                        Self::dist2(a, &pointer)
                            .partial_cmp(&Self::dist2(b, &pointer))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });
                    if let Some(row) = nearest {
                        if Self::dist2(row, &pointer).sqrt() <= pick {
                            plot_ui.text(
                                Text::new(
                                    PlotPoint::new(row.longitude, row.latitude),
                                    RichText::new(format!(
                                        "{}\n{:.2} meters",
                                        row.name, row.height
                                    ))
                                    .size(12.0)
                                    .strong()
                                    .color(HOVER_COLOR),
                                )
                                .anchor(Align2::LEFT_BOTTOM),
                            );
                        }
                    }
                }
            });
    }

    fn dist2(row: &HeightRow, pointer: &PlotPoint) -> f64 {
        (row.longitude - pointer.x).powi(2) + (row.latitude - pointer.y).powi(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(lat: f64, lon: f64) -> HeightRow {
        HeightRow {
            name: "X".to_string(),
            city: "Y".to_string(),
            height: 100.0,
            rank: 0,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn marker_radius_scales_linearly() {
        assert_eq!(HeightMap::marker_radius(0.0), 0.0);
        assert_eq!(HeightMap::marker_radius(25_000.0), MAX_RADIUS_PX / 2.0);
        assert_eq!(HeightMap::marker_radius(50_000.0), MAX_RADIUS_PX);
        // out-of-range settings clamp instead of exploding
        assert_eq!(HeightMap::marker_radius(1e9), MAX_RADIUS_PX);
    }

    #[test]
    fn view_extents_cover_all_markers() {
        let a = row(40.0, -80.0);
        let b = row(44.0, -70.0);
        let markers = vec![&a, &b];
        let (lat_ext, lon_ext) = HeightMap::view_extents(&markers, (42.0, -75.0));
        assert!(lat_ext >= 2.0);
        assert!(lon_ext >= 5.0);

        // a single marker still gets a sane window
        let single = vec![&a];
        let (lat_ext, lon_ext) = HeightMap::view_extents(&single, (40.0, -80.0));
        assert_eq!(lat_ext, MIN_VIEW_EXTENT);
        assert_eq!(lon_ext, MIN_VIEW_EXTENT);
    }
}
