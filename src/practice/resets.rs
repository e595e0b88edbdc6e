use super::*;

impl PracticeSession {
    /// Volta os filtros para "Todos" e a navegação para o início.
    /// O placar (tentativas/acertos) é mantido.
    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
        self.current_index = 0;
        self.clear_answer();
    }
}
