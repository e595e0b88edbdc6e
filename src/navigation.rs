use crate::model::Screen;
use crate::quick_access::Navigation;

pub const QUESTION_BANK: &str = "Banco de Questões";

/// Contexto de navegação compartilhado: guarda a função ativa e os links
/// externos que a UI ainda precisa abrir.
#[derive(Debug, Default)]
pub struct NavigationContext {
    screen: Screen,
    pending_external: Vec<String>,
}

impl NavigationContext {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current_function(&self) -> Option<&str> {
        match &self.screen {
            Screen::Home => None,
            Screen::Function(name) => Some(name),
        }
    }

    pub fn go_home(&mut self) {
        log::info!("voltando ao início");
        self.screen = Screen::Home;
    }

    /// Links externos pedidos desde a última chamada.
    pub fn take_external(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_external)
    }
}

impl Navigation for NavigationContext {
    fn set_current_function(&mut self, name: &str) {
        log::info!("função ativa: {name}");
        self.screen = Screen::Function(name.to_string());
    }

    fn open_external(&mut self, url: &str) {
        log::info!("abrindo link externo: {url}");
        self.pending_external.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_function_and_back() {
        let mut nav = NavigationContext::default();
        assert_eq!(nav.screen(), &Screen::Home);
        assert_eq!(nav.current_function(), None);

        nav.set_current_function(QUESTION_BANK);
        assert_eq!(nav.current_function(), Some(QUESTION_BANK));

        nav.go_home();
        assert_eq!(nav.screen(), &Screen::Home);
    }

    #[test]
    fn external_links_are_drained_once() {
        let mut nav = NavigationContext::default();
        nav.open_external("https://audio.example");
        assert_eq!(nav.current_function(), None);
        assert_eq!(nav.take_external(), vec!["https://audio.example".to_string()]);
        assert!(nav.take_external().is_empty());
    }
}
