use serde::{Deserialize, Serialize};

pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 30;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_SCORE_KEY: &str = "previous-score";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct QuizSettings {
    pub seconds_per_question: u32,
    pub tick_interval_ms: u64,
    pub score_key: String,
    pub window_title: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            score_key: DEFAULT_SCORE_KEY.to_string(),
            window_title: "Timed Quiz".to_string(),
        }
    }
}

/// Question bank as embedded in the binary: settings plus the ordered question list.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct QuizBank {
    #[serde(default)]
    pub settings: QuizSettings,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Where the engine is. `End` is never observable from outside: finishing a
/// session scores it and drops straight back to `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Start,
    Question(usize),
}

/// Something the user can trigger from a rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Begin,
    Select(String), // option text, bound per button
}
