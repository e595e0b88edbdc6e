// src/view_models.rs

use crate::practice::{ChoiceHighlight, PracticeSession};

const LETTERS: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub icon: &'static str,
    pub value: String,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceRow {
    pub index: usize,
    pub text: String,
    pub highlight: ChoiceHighlight,
}

impl ChoiceRow {
    pub fn label(&self) -> String {
        let letter = LETTERS.get(self.index).copied().unwrap_or("?");
        match self.highlight {
            ChoiceHighlight::Correct => format!("✔ {letter}) {}", self.text),
            ChoiceHighlight::Incorrect => format!("✖ {letter}) {}", self.text),
            ChoiceHighlight::Selected | ChoiceHighlight::Neutral => {
                format!("{letter}) {}", self.text)
            }
        }
    }
}

/// Cartões do topo: questões filtradas, tentativas, acertos e aproveitamento.
pub fn stat_cards(session: &PracticeSession) -> [StatCard; 4] {
    [
        StatCard {
            icon: "🎯",
            value: session.filtered().len().to_string(),
            label: "Questões",
        },
        StatCard {
            icon: "⏱",
            value: session.attempts().to_string(),
            label: "Tentativas",
        },
        StatCard {
            icon: "🏆",
            value: session.correct().to_string(),
            label: "Acertos",
        },
        StatCard {
            icon: "🧠",
            value: format!("{}%", session.accuracy()),
            label: "Aproveitamento",
        },
    ]
}

pub fn choice_rows(session: &PracticeSession) -> Vec<ChoiceRow> {
    let Some(question) = session.current_question() else {
        return Vec::new();
    };
    question
        .choices
        .iter()
        .enumerate()
        .map(|(index, text)| ChoiceRow {
            index,
            text: text.clone(),
            highlight: session.choice_highlight(index),
        })
        .collect()
}

/// "Questão 2 de 3"
pub fn question_title(session: &PracticeSession) -> String {
    format!(
        "Questão {} de {}",
        session.current_index() + 1,
        session.filtered().len()
    )
}

pub fn position_label(session: &PracticeSession) -> String {
    format!("{} / {}", session.current_index() + 1, session.filtered().len())
}
