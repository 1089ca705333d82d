// src/ui/chat.rs
use eframe::egui;

use crate::chat::{ChatMessage, Sender};
use crate::input::command::{Command, SendChatCommand};
use crate::state::AppState;

const DRAFT_HINT: &str = "Ask your cybersecurity question based on the uploaded log...";

const EMPTY_TRANSCRIPT: &str = "Analyze a log file first, then ask about what it contains.";

const AGENT_FILL: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
const AGENT_TEXT: egui::Color32 = egui::Color32::from_rgb(30, 64, 175);
const USER_FILL: egui::Color32 = egui::Color32::from_rgb(220, 252, 231);
const USER_TEXT: egui::Color32 = egui::Color32::from_rgb(22, 101, 52);

/// The chat panel owns only its draft; the transcript and the request
/// lifecycle belong to `AppState` and change through commands.
#[derive(Debug, Default)]
pub struct ChatPanel {
    draft: String,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) -> Vec<Box<dyn Command>> {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();
        let loading = state.chat.is_pending();

        egui::TopBottomPanel::bottom("chat_input_panel")
            .resizable(false)
            .show_inside(ui, |ui| {
                if let Some(error) = state.chat.error() {
                    ui.vertical_centered(|ui| {
                        ui.colored_label(egui::Color32::RED, error);
                    });
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let button_width = 80.0;
                    let input = ui.add_sized(
                        [ui.available_width() - button_width, 28.0],
                        egui::TextEdit::singleline(&mut self.draft).hint_text(DRAFT_HINT),
                    );
                    let enter_pressed =
                        input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    let label = if loading { "Sending..." } else { "Send" };
                    let clicked = ui
                        .add_enabled(!loading, egui::Button::new(label).min_size(egui::vec2(button_width, 28.0)))
                        .clicked();

                    if (clicked || enter_pressed) && !loading {
                        if let Some(message) = self.take_draft() {
                            commands.push(Box::new(SendChatCommand(message)));
                        }
                        input.request_focus();
                    }
                });
                ui.add_space(4.0);
            });

        egui::ScrollArea::vertical()
            .id_source("chat_transcript_scroll")
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if state.transcript.is_empty() {
                    ui.weak(EMPTY_TRANSCRIPT);
                }
                for message in state.transcript.messages() {
                    show_message(ui, message);
                    ui.add_space(8.0);
                }
            });

        commands
    }

    // Blank drafts stay in the box and send nothing
    fn take_draft(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }
}

fn show_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, fill, text_color) = match message.sender {
        Sender::Agent => (egui::Layout::left_to_right(egui::Align::TOP), AGENT_FILL, AGENT_TEXT),
        Sender::User => (egui::Layout::right_to_left(egui::Align::TOP), USER_FILL, USER_TEXT),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::none()
            .fill(fill)
            .rounding(6.0)
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.75);
                ui.vertical(|ui| {
                    for line in message.display_lines() {
                        ui.colored_label(text_color, line);
                    }
                });
            });
    });
}
