use crate::app::LexApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context};

/// Funções que ainda não têm tela própria.
pub fn ui_function(app: &mut LexApp, ctx: &Context, name: &str) {
    centered_panel(ctx, 200.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(name);
            ui.add_space(10.0);
            ui.label("Esta função estará disponível em breve.");
            ui.add_space(16.0);
            if ui.add_sized([160.0, 36.0], Button::new("Voltar")).clicked() {
                app.nav.go_home();
            }
        });
    });
}
