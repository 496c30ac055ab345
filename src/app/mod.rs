use crate::engine::QuizEngine;
use crate::model::QuizBank;
use crate::timer::IntervalClock;

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = crate::storage::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = crate::storage::EframeStore;

pub struct QuizApp {
    pub engine: QuizEngine<IntervalClock, PlatformStore>,
}

impl QuizApp {
    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn new(cc: &eframe::CreationContext<'_>, bank: QuizBank) -> Self {
        #[cfg(target_arch = "wasm32")]
        let store = crate::storage::LocalStorage::open();
        #[cfg(not(target_arch = "wasm32"))]
        let store = crate::storage::EframeStore::load(cc.storage, &[bank.settings.score_key.as_str()]);

        let engine = QuizEngine::new(bank, IntervalClock::new(), store);
        if let Some(score) = engine.previous_score() {
            log::info!("previous score found: {score}%");
        }
        Self { engine }
    }

    /// Pushes pending score writes into eframe's storage. In the browser the
    /// store writes straight to localStorage, so there is nothing to do.
    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn persist(&mut self, storage: &mut dyn eframe::Storage) {
        #[cfg(not(target_arch = "wasm32"))]
        self.engine.store_mut().flush_into(storage);
    }
}
