pub mod app;
pub mod data;
pub mod filters;
pub mod lookup;
pub mod model;
pub mod navigation;
pub mod practice;
pub mod quick_access;
pub mod ui;
pub mod view_models;

pub use app::LexApp;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::LexApp;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn start() {
        eframe::WebLogger::init(log::LevelFilter::Info).ok();

        wasm_bindgen_futures::spawn_local(async {
            let Some(canvas) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("lex_quiz_canvas"))
                .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            else {
                log::error!("canvas #lex_quiz_canvas não encontrado");
                return;
            };

            let result = eframe::WebRunner::new()
                .start(
                    canvas,
                    eframe::WebOptions::default(),
                    Box::new(|_cc| Ok(Box::new(LexApp::new()))),
                )
                .await;
            if let Err(err) = result {
                log::error!("falha ao iniciar o app: {err:?}");
            }
        });
    }
}
