use crate::app::LexApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_no_results(app: &mut LexApp, ctx: &Context) {
    centered_panel(ctx, 240.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🎯").size(48.0));
            ui.heading("Nenhuma questão encontrada");
            ui.add_space(6.0);
            ui.label("Tente ajustar os filtros para encontrar questões.");
            ui.add_space(16.0);
            if ui
                .add_sized([180.0, 36.0], Button::new("Reiniciar Filtros"))
                .clicked()
            {
                app.session.reset_filters();
            }
        });
    });
}
