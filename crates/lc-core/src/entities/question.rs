use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Keyed;

/// A quiz item. `answer` must be one of `choices`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub choices: Vec<String>,
    pub answer: String,
}

impl Question {
    #[must_use]
    pub fn new(question: impl Into<String>, choices: &[&str], answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            choices: choices.iter().map(|c| (*c).to_string()).collect(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn answer_is_a_choice(&self) -> bool {
        self.choices.iter().any(|choice| choice == &self.answer)
    }
}

/// Question id to question, in authoring order.
pub type QuestionBank = Keyed<Question>;

/// A question flattened with its id, for the list layout of `questions.json`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionEntry {
    pub id: String,
    #[serde(flatten)]
    pub question: Question,
}

impl QuestionEntry {
    /// Flatten a bank into entries, keeping bank order.
    #[must_use]
    pub fn from_bank(bank: &QuestionBank) -> Vec<Self> {
        bank.iter()
            .map(|(id, question)| Self {
                id: id.to_string(),
                question: question.clone(),
            })
            .collect()
    }
}
