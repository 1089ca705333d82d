// src/ui/analyze.rs
use eframe::egui;
use rfd::FileDialog;

use crate::analysis::AnalysisResult;
use crate::input::command::{AnalyzeCommand, Command, SelectFileCommand};
use crate::state::AppState;
use crate::ui::trend_chart::show_trend_chart;

const NO_TREND_DATA: &str = "No trend data available.";
const SAFETY_BANNER: &str = "All systems are operating within safe parameters. \
    Remember to analyze your logs monthly to stay ahead of potential risks.";

pub fn show_analyze_view(ui: &mut egui::Ui, state: &AppState) -> Vec<Box<dyn Command>> {
    let mut commands: Vec<Box<dyn Command>> = Vec::new();
    let loading = state.analysis.is_pending();

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            if ui.button("📂 Choose Log File...").clicked() {
                let file_dialog = FileDialog::new()
                    .add_filter("Log files", &["log", "txt"])
                    .set_title("Select Log File");

                if let Some(path) = file_dialog.pick_file() {
                    commands.push(Box::new(SelectFileCommand(path)));
                }
            }

            match &state.upload {
                Some(upload) => ui
                    .label(format!("{} ({} bytes)", upload.file_name, upload.size()))
                    .on_hover_text(upload.path.display().to_string()),
                None => ui.weak("No file selected"),
            };
        });

        ui.add_space(8.0);

        let label = if loading { "Analyzing..." } else { "Upload & Analyze Log" };
        let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add_enabled(!loading, button).clicked() {
            commands.push(Box::new(AnalyzeCommand));
        }

        if let Some(error) = state.analysis.error() {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(egui::Color32::RED, error);
            });
        }
    });

    if let Some(analysis) = state.analysis.value() {
        ui.add_space(16.0);
        egui::ScrollArea::vertical()
            .id_source("analysis_report_scroll")
            .show(ui, |ui| {
                show_report(ui, analysis);
            });
    }

    commands
}

fn show_report(ui: &mut egui::Ui, analysis: &AnalysisResult) {
    ui.vertical_centered(|ui| {
        ui.heading("Analysis Report");
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong("Timestamp:");
                ui.label(analysis.display_timestamp());
            });
            ui.horizontal(|ui| {
                ui.strong("Risk Score:");
                ui.label(format!("{}%", analysis.risk_score));
            });
            ui.horizontal(|ui| {
                ui.strong("Threat Level:");
                let color = if analysis.is_critical() {
                    egui::Color32::RED
                } else {
                    egui::Color32::from_rgb(230, 160, 0)
                };
                ui.colored_label(color, &analysis.threat_level);
            });
        });

        columns[1].group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.strong(format!("Warnings ({})", analysis.warnings.total()));
            ui.label(format!("• Critical: {}", analysis.warnings.critical));
            ui.label(format!("• High: {}", analysis.warnings.high));
            ui.label(format!("• Medium: {}", analysis.warnings.medium));
        });
    });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.heading("Risk Trend Graph");
    });
    if analysis.trends.has_data() {
        show_trend_chart(ui, &analysis.trends);
    } else {
        ui.vertical_centered(|ui| {
            ui.label(NO_TREND_DATA);
        });
    }

    ui.add_space(16.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.colored_label(egui::Color32::from_rgb(40, 140, 60), SAFETY_BANNER);
        });
    });

    ui.add_space(8.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("Mitigation Suggestions");
        for action in &analysis.actions {
            ui.horizontal_wrapped(|ui| {
                ui.strong(format!("• {}:", action.priority));
                ui.label(&action.action);
            });
        }
    });

    ui.add_space(16.0);
    ui.separator();
    ui.heading("Detailed Report");
    // egui labels keep embedded newlines
    ui.label(&analysis.report);
}
