use super::*;
use crate::filters::filter_questions;

impl PracticeSession {
    pub fn filtered(&self) -> Vec<&Question> {
        filter_questions(&self.questions, &self.filters)
    }

    /// `None` é o estado "nenhuma questão encontrada" (índice fora da lista filtrada).
    pub fn current_question(&self) -> Option<&Question> {
        self.filtered().get(self.current_index).copied()
    }

    /// Aproveitamento em porcentagem inteira; 0 sem tentativas.
    pub fn accuracy(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        (100.0 * f64::from(self.correct) / f64::from(self.attempts)).round() as u32
    }

    /// "Próxima" só fica habilitado depois de responder.
    pub fn can_advance(&self) -> bool {
        self.revealed && self.current_index + 1 < self.filtered().len()
    }

    pub fn can_retreat(&self) -> bool {
        self.current_index > 0
    }

    pub fn choice_highlight(&self, index: usize) -> ChoiceHighlight {
        if !self.revealed {
            return if self.selected_choice == Some(index) {
                ChoiceHighlight::Selected
            } else {
                ChoiceHighlight::Neutral
            };
        }

        let Some(question) = self.current_question() else {
            return ChoiceHighlight::Neutral;
        };

        if index == question.correct_choice {
            ChoiceHighlight::Correct
        } else if self.selected_choice == Some(index) {
            ChoiceHighlight::Incorrect
        } else {
            ChoiceHighlight::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::fixtures::bank;

    #[test]
    fn accuracy_is_zero_without_attempts() {
        let session = PracticeSession::new(bank());
        assert_eq!(session.accuracy(), 0);
    }

    #[test]
    fn accuracy_rounds_percentage() {
        let mut session = PracticeSession::new(bank());
        session.attempts = 4;
        session.correct = 3;
        assert_eq!(session.accuracy(), 75);

        session.attempts = 3;
        session.correct = 2;
        assert_eq!(session.accuracy(), 67);
    }

    #[test]
    fn current_question_follows_filtered_list() {
        let mut session = PracticeSession::new(bank());
        assert_eq!(session.current_question().map(|q| q.id), Some(1));

        session.filters_mut().area = Some("Direito Penal".into());
        assert_eq!(session.current_question().map(|q| q.id), Some(2));
    }

    #[test]
    fn index_past_filtered_list_means_no_results() {
        let mut session = PracticeSession::new(bank());
        session.current_index = 2;
        assert_eq!(session.current_question().map(|q| q.id), Some(3));

        // O filtro encolhe a lista, mas o índice continua em 2.
        session.filters_mut().area = Some("Direito Civil".into());
        assert_eq!(session.current_index(), 2);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn answer_carries_over_when_filter_keeps_index_in_range() {
        let mut session = PracticeSession::new(bank());
        session.submit_answer(1);

        session.filters_mut().area = Some("Direito Penal".into());
        assert_eq!(session.current_index(), 0);
        assert!(session.is_revealed());
        assert_eq!(session.selected_choice(), Some(1));
        assert_eq!(session.current_question().map(|q| q.id), Some(2));
    }

    #[test]
    fn highlight_before_reveal_marks_only_selection() {
        let mut session = PracticeSession::new(bank());
        assert!((0..4).all(|i| session.choice_highlight(i) == ChoiceHighlight::Neutral));

        session.selected_choice = Some(2);
        assert_eq!(session.choice_highlight(2), ChoiceHighlight::Selected);
        assert_eq!(session.choice_highlight(1), ChoiceHighlight::Neutral);
    }

    #[test]
    fn highlight_after_wrong_answer() {
        let mut session = PracticeSession::new(bank());
        session.submit_answer(3);

        let marks: Vec<_> = (0..4).map(|i| session.choice_highlight(i)).collect();
        assert_eq!(
            marks,
            vec![
                ChoiceHighlight::Neutral,
                ChoiceHighlight::Correct,
                ChoiceHighlight::Neutral,
                ChoiceHighlight::Incorrect,
            ]
        );
    }

    #[test]
    fn highlight_after_right_answer_has_no_incorrect() {
        let mut session = PracticeSession::new(bank());
        session.submit_answer(1);

        let marks: Vec<_> = (0..4).map(|i| session.choice_highlight(i)).collect();
        assert_eq!(marks.iter().filter(|m| **m == ChoiceHighlight::Correct).count(), 1);
        assert!(!marks.contains(&ChoiceHighlight::Incorrect));
    }

    #[test]
    fn navigation_gates() {
        let mut session = PracticeSession::new(bank());
        assert!(!session.can_retreat());
        assert!(!session.can_advance());

        session.submit_answer(0);
        assert!(session.can_advance());

        session.advance();
        assert!(session.can_retreat());
        assert!(!session.can_advance());
    }
}
