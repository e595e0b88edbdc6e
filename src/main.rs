#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Lex Quiz")
            .with_inner_size([900.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Lex Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(lex_quiz::LexApp::new()))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
