// src/data.rs

use crate::error::{QuizError, Result};
use crate::model::QuizBank;

/// Loads the question bank compiled into the binary.
pub fn read_bank_embedded() -> Result<QuizBank> {
    load_bank(include_str!("data/quiz_questions.yaml"))
}

/// Parses a YAML bank and checks every question can actually be answered.
pub fn load_bank(source: &str) -> Result<QuizBank> {
    let bank: QuizBank = serde_yaml::from_str(source)?;

    for q in &bank.questions {
        if q.options.is_empty() {
            return Err(QuizError::NoOptions {
                question: q.text.clone(),
            });
        }
        if !q.options.iter().any(|o| o == &q.correct_answer) {
            return Err(QuizError::AnswerNotInOptions {
                question: q.text.clone(),
                answer: q.correct_answer.clone(),
            });
        }
    }

    log::debug!("question bank loaded: {} questions", bank.questions.len());
    Ok(bank)
}
