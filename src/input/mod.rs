// src/input/mod.rs
use eframe::egui;

use crate::input::command::{Command, NextTabCommand};

pub mod command;

// Keyboard shortcuts that apply regardless of the active screen
pub fn handle_global_keys(input: &egui::InputState) -> Option<Box<dyn Command>> {
    if input.modifiers.ctrl && input.key_pressed(egui::Key::Tab) {
        return Some(Box::new(NextTabCommand));
    }
    None
}
