// src/view_models.rs

use crate::model::Action;

/// A clickable control. The action carries everything needed to handle the
/// click, so each button is independent of the others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartView {
    pub previous_score_label: Option<String>, // None on the very first run
    pub start: ButtonView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub text: String,
    pub options: Vec<ButtonView>,
    pub remaining_seconds: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Start(StartView),
    Question(QuestionView),
}
