use crate::filters::Filters;
use crate::model::Question;

// Submódulos
pub mod actions;
pub mod queries;
pub mod resets;

/// Destaque de uma alternativa. Cada alternativa recebe exatamente um.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceHighlight {
    Neutral,
    Selected, // antes de revelar
    Correct,
    Incorrect,
}

/// Estado da prática de questões: filtros, posição, revelação e placar.
///
/// A lista filtrada não é guardada; é recalculada a cada consulta a partir
/// de `questions` e `filters`.
#[derive(Debug, Clone)]
pub struct PracticeSession {
    questions: Vec<Question>,
    filters: Filters,
    current_index: usize,
    selected_choice: Option<usize>,
    revealed: bool,
    attempts: u32,
    correct: u32,
}

impl PracticeSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            filters: Filters::default(),
            current_index: 0,
            selected_choice: None,
            revealed: false,
            attempts: 0,
            correct: 0,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Alterar filtros não mexe no índice nem na revelação.
    pub fn filters_mut(&mut self) -> &mut Filters {
        &mut self.filters
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn selected_choice(&self) -> Option<usize> {
        self.selected_choice
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    fn clear_answer(&mut self) {
        self.selected_choice = None;
        self.revealed = false;
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Level, Question};

    pub fn question(id: u32, area: &str, correct_choice: usize) -> Question {
        Question {
            id,
            area: area.into(),
            prompt: format!("Enunciado {id}"),
            choices: ["a".into(), "b".into(), "c".into(), "d".into()],
            correct_choice,
            explanation: format!("Explicação {id}"),
            level: Level::Basic,
            exam: "OAB 2023".into(),
            topic: format!("Tema {id}"),
        }
    }

    pub fn bank() -> Vec<Question> {
        vec![
            question(1, "Direito Civil", 1),
            question(2, "Direito Penal", 1),
            question(3, "Direito Constitucional", 2),
        ]
    }
}
