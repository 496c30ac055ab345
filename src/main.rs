use timed_quiz::QuizApp;
use timed_quiz::data::read_bank_embedded;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let bank = read_bank_embedded().map_err(|e| {
        log::error!("{e}");
        eframe::Error::AppCreation(Box::new(e))
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 420.0]),
        ..Default::default()
    };
    let title = bank.settings.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::new(cc, bank)))),
    )
}

// Browser build: draws into <canvas id="the_canvas_id">
#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    let bank = match read_bank_embedded() {
        Ok(bank) => bank,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document to attach the quiz to");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("canvas #the_canvas_id not found");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(QuizApp::new(cc, bank)))),
            )
            .await;

        if let Err(err) = result {
            log::error!("failed to start the quiz: {err:?}");
        }
    });
}
