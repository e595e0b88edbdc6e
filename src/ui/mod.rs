mod helpers;
pub mod layout;
pub mod views;

use crate::app::LexApp;
use crate::model::Screen;
use crate::navigation::QUESTION_BANK;
use eframe::{App, Frame};
use egui::{Context, OpenUrl};
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for LexApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Montagem do painel de acesso rápido (consulta única)
        self.ensure_mounted();
        if self.poll_lookup() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch pela função ativa
        match self.nav.screen().clone() {
            Screen::Home => views::home::ui_home(self, ctx),
            Screen::Function(name) if name == QUESTION_BANK => {
                if self.session.current_question().is_some() {
                    views::practice::ui_practice(self, ctx);
                } else {
                    views::no_results::ui_no_results(self, ctx);
                }
            }
            Screen::Function(name) => views::function::ui_function(self, ctx, &name),
        }

        for url in self.nav.take_external() {
            ctx.open_url(OpenUrl::new_tab(url));
        }
    }
}
