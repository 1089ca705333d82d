// src/app.rs
use anyhow::{Context, Result};
use eframe::egui;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::error;

use crate::api::HttpAgentApi;
use crate::config::ClientSettings;
use crate::dispatch::Dispatcher;
use crate::input::command::{Command, SelectScreenCommand};
use crate::state::{AppState, Screen};
use crate::ui::ChatPanel;

pub const APP_TITLE: &str = "Cybersecurity AI Agent";

pub struct CyberAgentApp {
    state: AppState,
    chat_panel: ChatPanel,
    dispatcher: Dispatcher,
    // Keeps the worker threads alive for as long as the window is open
    _runtime: Runtime,
}

impl CyberAgentApp {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("cyberagent-net")
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        let api = HttpAgentApi::new(settings)?;
        let dispatcher = Dispatcher::new(runtime.handle().clone(), Arc::new(api));

        Ok(Self {
            state: AppState::new(),
            chat_panel: ChatPanel::new(),
            dispatcher,
            _runtime: runtime,
        })
    }

    pub fn with_repaint(mut self, ctx: &egui::Context) -> Self {
        self.dispatcher.set_repaint(ctx.clone());
        self
    }

    fn show_menu(&self, ui: &mut egui::Ui) -> Vec<Box<dyn Command>> {
        let mut commands: Vec<Box<dyn Command>> = Vec::new();

        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(APP_TITLE).strong());
        });
        ui.add_space(4.0);

        egui::menu::bar(ui, |ui| {
            // Tab selection using buttons
            for screen in [Screen::Analyze, Screen::Chat] {
                if ui
                    .selectable_label(self.state.current_screen == screen, screen.label())
                    .clicked()
                {
                    commands.push(Box::new(SelectScreenCommand(screen)));
                }
            }
        });

        commands
    }

    fn run_commands(&mut self, commands: Vec<Box<dyn Command>>) {
        for command in commands {
            match command.execute(&mut self.state) {
                Ok(Some(effect)) => self.dispatcher.dispatch(effect),
                Ok(None) => {}
                Err(e) => {
                    error!("{:#}", e);
                    self.state.error_message = Some(format!("{:#}", e));
                }
            }
        }
    }
}

impl eframe::App for CyberAgentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for outcome in self.dispatcher.drain() {
            self.state.apply_outcome(outcome);
        }

        let mut commands = Vec::new();
        if let Some(command) = ctx.input(crate::input::handle_global_keys) {
            commands.push(command);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            commands.extend(self.show_menu(ui));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let screen_commands = match self.state.current_screen {
                Screen::Analyze => crate::ui::analyze::show_analyze_view(ui, &self.state),
                Screen::Chat => self.chat_panel.show(ui, &self.state),
            };
            commands.extend(screen_commands);
        });

        self.run_commands(commands);

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
