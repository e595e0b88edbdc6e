// src/ui/helpers.rs
use crate::model::Level;
use crate::practice::ChoiceHighlight;
use crate::view_models::StatCard;
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

fn highlight_colors(highlight: ChoiceHighlight) -> Option<(Color32, Color32)> {
    match highlight {
        ChoiceHighlight::Correct => Some((Color32::from_rgb(220, 252, 231), Color32::DARK_GREEN)),
        ChoiceHighlight::Incorrect => Some((Color32::from_rgb(254, 226, 226), Color32::DARK_RED)),
        ChoiceHighlight::Selected => Some((Color32::from_rgb(219, 234, 254), Color32::DARK_BLUE)),
        ChoiceHighlight::Neutral => None,
    }
}

/// Cor do selo de nível: básico, intermediário e avançado com tons distintos.
pub fn level_color(level: Level) -> Color32 {
    match level {
        Level::Basic => Color32::from_rgb(37, 99, 235),
        Level::Intermediate => Color32::from_rgb(100, 116, 139),
        Level::Advanced => Color32::from_rgb(220, 38, 38),
    }
}

pub fn level_badge(ui: &mut Ui, level: Level) {
    egui::Frame::default()
        .fill(level_color(level))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(level.label()).small().color(Color32::WHITE));
        });
}

/// Botão de alternativa. Fica desabilitado depois da revelação.
pub fn choice_button(
    ui: &mut Ui,
    label: String,
    highlight: ChoiceHighlight,
    width: f32,
    enabled: bool,
) -> bool {
    let size = Vec2::new(width, 40.0);
    let button = match highlight_colors(highlight) {
        Some((fill, text)) => Button::new(RichText::new(label).color(text))
            .fill(fill)
            .stroke(Stroke::new(1.5, text)),
        None => Button::new(label),
    };
    ui.add_enabled(enabled, button.min_size(size)).clicked()
}

pub fn stat_card(ui: &mut Ui, card: &StatCard, width: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(card.icon).size(20.0));
            ui.label(RichText::new(&card.value).size(22.0).strong());
            ui.label(RichText::new(card.label).small());
        });
    });
}
