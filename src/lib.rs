pub mod app;
pub mod data;
pub mod engine;
pub mod error;
pub mod model;
pub mod storage;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use error::QuizError;
