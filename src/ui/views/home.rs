use crate::app::LexApp;
use crate::navigation::QUESTION_BANK;
use crate::quick_access::Navigation;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

pub fn ui_home(app: &mut LexApp, ctx: &Context) {
    centered_panel(ctx, 360.0, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Acesso Rápido");
            ui.add_space(12.0);

            // Grade compacta de blocos
            let tile_w = (ui.available_width() - 4.0 * 8.0) / 5.0;
            let mut clicked = None;
            ui.horizontal(|ui| {
                for tile in app.quick_access.tiles() {
                    ui.vertical(|ui| {
                        ui.set_width(tile_w);
                        let label = format!("{}\n{}", tile.icon, tile.title);
                        if big_list_button(ui, label, tile_w, 64.0, tile.active) {
                            clicked = Some(tile.id);
                        }
                        if tile.external_link().is_some() {
                            ui.label(RichText::new("🔗 externo").small());
                        }
                    });
                }
            });
            if let Some(id) = clicked {
                app.click_tile(id);
            }

            if app.quick_access.is_loading() {
                ui.add_space(6.0);
                ui.label(RichText::new("⏳ Carregando links…").small());
            }

            ui.add_space(24.0);
            ui.separator();
            ui.add_space(12.0);

            if big_list_button(ui, "🎯 Banco de Questões".to_owned(), 260.0, 44.0, true) {
                app.nav.set_current_function(QUESTION_BANK);
            }
            ui.label(format!(
                "{} questões para concursos públicos",
                app.session.questions().len()
            ));
        });
    });
}
