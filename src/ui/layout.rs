use crate::app::LexApp;
use crate::model::Screen;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(app: &mut LexApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.heading("⚖ Lex Quiz");
            if let Some(name) = app.nav.current_function() {
                ui.label(format!("› {name}"));
            }
            if app.nav.screen() != &Screen::Home && ui.button("🏠 Início").clicked() {
                app.nav.go_home();
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTÕES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo escuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Painel centralizado na vertical e na horizontal,
/// com largura máxima e um bloco interno `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Dois botões do mesmo tamanho numa linha, com um texto no meio.
/// Devolve (clique esquerdo, clique direito).
pub fn nav_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    middle: &str,
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = panel_width / 4.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size([btn_w, 36.0].into()))
            .clicked();
        let gap = (ui.available_width() - btn_w) / 2.0;
        ui.add_sized([gap.max(0.0), 36.0], egui::Label::new(middle));
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size([btn_w, 36.0].into()))
            .clicked();
    });
    (clicked_left, clicked_right)
}
