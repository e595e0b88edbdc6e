use crate::app::LexApp;
use crate::data::{AREAS, EXAMS};
use crate::filters::{ALL_AREAS, ALL_EXAMS, ALL_LEVELS};
use crate::model::Level;
use crate::ui::helpers::{choice_button, level_badge, stat_card};
use crate::ui::layout::nav_button_row;
use crate::view_models::{choice_rows, position_label, question_title, stat_cards};
use egui::{CentralPanel, ComboBox, Context, RichText, ScrollArea, TextEdit, Ui};

pub fn ui_practice(app: &mut LexApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 760.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_width(panel_width);

                ui.heading("Banco de Questões");
                ui.label("Milhares de questões para concursos públicos");
                ui.add_space(12.0);

                // Estatísticas
                let card_w = (panel_width - 3.0 * 12.0) / 4.0;
                ui.horizontal(|ui| {
                    for card in stat_cards(&app.session) {
                        stat_card(ui, &card, card_w);
                    }
                });
                ui.add_space(12.0);

                filters_section(app, ui, panel_width);
                ui.add_space(12.0);

                question_section(app, ui, panel_width);
                ui.add_space(12.0);

                // Navegação
                let (anterior, proxima) = nav_button_row(
                    ui,
                    panel_width,
                    ("Anterior", app.session.can_retreat()),
                    &position_label(&app.session),
                    ("Próxima", app.session.can_advance()),
                );
                if anterior {
                    app.session.retreat();
                }
                if proxima {
                    app.session.advance();
                }
            });
        });
    });
}

fn filters_section(app: &mut LexApp, ui: &mut Ui, panel_width: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(panel_width);
        let mut clear = false;
        ui.horizontal(|ui| {
            ui.label(RichText::new("Filtros").strong());
            clear = ui
                .add_enabled(!app.session.filters().is_default(), egui::Button::new("Limpar"))
                .clicked();
        });
        if clear {
            app.session.reset_filters();
        }
        ui.add_space(6.0);

        let filters = app.session.filters_mut();
        ui.add(
            TextEdit::singleline(&mut filters.search)
                .hint_text("🔍 Pesquisar questões ou temas...")
                .desired_width(panel_width - 16.0),
        );
        ui.add_space(6.0);

        let combo_w = (panel_width - 3.0 * 16.0) / 3.0;
        ui.horizontal(|ui| {
            ComboBox::from_id_salt("area_filter")
                .width(combo_w)
                .selected_text(filters.area_label().to_owned())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filters.area, None, ALL_AREAS);
                    for area in AREAS {
                        ui.selectable_value(&mut filters.area, Some(area.to_owned()), area);
                    }
                });

            ComboBox::from_id_salt("level_filter")
                .width(combo_w)
                .selected_text(filters.level_label().to_owned())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filters.level, None, ALL_LEVELS);
                    for level in Level::ALL {
                        ui.selectable_value(&mut filters.level, Some(level), level.label());
                    }
                });

            ComboBox::from_id_salt("exam_filter")
                .width(combo_w)
                .selected_text(filters.exam_label().to_owned())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filters.exam, None, ALL_EXAMS);
                    for exam in EXAMS {
                        ui.selectable_value(&mut filters.exam, Some(exam.to_owned()), exam);
                    }
                });
        });
    });
}

fn question_section(app: &mut LexApp, ui: &mut Ui, panel_width: f32) {
    let Some(question) = app.session.current_question().cloned() else {
        return;
    };
    let title = question_title(&app.session);
    let rows = choice_rows(&app.session);
    let revealed = app.session.is_revealed();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(panel_width);
        ui.horizontal(|ui| {
            ui.label(RichText::new(&question.area).small().strong());
            level_badge(ui, question.level);
            ui.label(RichText::new(&question.topic).small().italics());
        });
        ui.label(RichText::new(title).strong());
        ui.label(RichText::new(&question.exam).small().weak());
        ui.add_space(8.0);

        ui.label(&question.prompt);
        ui.add_space(8.0);

        let mut answered = None;
        for row in rows {
            if choice_button(ui, row.label(), row.highlight, panel_width - 16.0, !revealed) {
                answered = Some(row.index);
            }
            ui.add_space(4.0);
        }
        if let Some(index) = answered {
            app.session.submit_answer(index);
        }

        if app.session.is_revealed() {
            ui.add_space(8.0);
            ui.label(RichText::new("Explicação:").strong());
            ui.label(&question.explanation);
        }
    });
}
