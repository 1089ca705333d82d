// src/ui/trend_chart.rs
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::analysis::TrendSeries;

pub const CHART_TITLE: &str = "Weekly Risk & Warning Trends";

const RISK_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 99, 132);
const WARNINGS_COLOR: egui::Color32 = egui::Color32::from_rgb(54, 162, 235);

// One point per value, x = position in the label list
pub fn series_points(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| [i as f64, *value])
        .collect()
}

// Ticks between labels (or past the end) stay blank
pub fn tick_label(labels: &[String], x: f64) -> String {
    if x < 0.0 || (x - x.round()).abs() > 1e-6 {
        return String::new();
    }
    labels.get(x.round() as usize).cloned().unwrap_or_default()
}

/// Caller guarantees `trends.labels` is non-empty.
pub fn show_trend_chart(ui: &mut egui::Ui, trends: &TrendSeries) {
    ui.vertical_centered(|ui| {
        ui.strong(CHART_TITLE);
    });

    let labels = trends.labels.clone();
    let risk = series_points(&trends.risk);
    let warnings = series_points(&trends.warnings);

    Plot::new("risk_trend_chart")
        .height(260.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(100.0)
        .legend(Legend::default())
        .x_axis_formatter(move |x, _max_chars, _range| tick_label(&labels, x))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(risk.clone()))
                    .name("Risk %")
                    .color(RISK_COLOR)
                    .fill(0.0)
                    .width(2.0),
            );
            plot_ui.points(Points::new(PlotPoints::from(risk)).color(RISK_COLOR).radius(3.0));

            plot_ui.line(
                Line::new(PlotPoints::from(warnings.clone()))
                    .name("Warnings")
                    .color(WARNINGS_COLOR)
                    .fill(0.0)
                    .width(2.0),
            );
            plot_ui.points(Points::new(PlotPoints::from(warnings)).color(WARNINGS_COLOR).radius(3.0));
        });
}
