use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("could not parse the question bank: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("question {question:?} has no options")]
    NoOptions { question: String },

    #[error("question {question:?} expects {answer:?}, which is not one of its options")]
    AnswerNotInOptions { question: String, answer: String },
}

pub type Result<T> = std::result::Result<T, QuizError>;
