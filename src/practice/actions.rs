use super::*;

impl PracticeSession {
    /// Responde a questão atual. A primeira resposta trava a questão.
    pub fn submit_answer(&mut self, choice: usize) {
        if self.revealed {
            return;
        }
        let Some(is_correct) = self
            .current_question()
            .map(|q| q.correct_choice == choice)
        else {
            return;
        };

        self.selected_choice = Some(choice);
        self.revealed = true;
        self.attempts += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    /// Vai para a próxima questão filtrada. Na última não faz nada.
    pub fn advance(&mut self) {
        if self.current_index + 1 < self.filtered().len() {
            self.current_index += 1;
            self.clear_answer();
        }
    }

    pub fn retreat(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.clear_answer();
        }
    }
}
