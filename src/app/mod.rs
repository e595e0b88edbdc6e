use crate::data::{default_tiles, read_questions_embedded};
use crate::lookup::{LinkLookup, SupabaseLookup};
use crate::model::Question;
use crate::navigation::NavigationContext;
use crate::practice::PracticeSession;
use crate::quick_access::QuickAccessPanel;

// Submódulos
pub mod updates;

pub struct LexApp {
    pub session: PracticeSession,
    pub quick_access: QuickAccessPanel,
    pub nav: NavigationContext,
    pub lookup: Box<dyn LinkLookup>,
}

impl LexApp {
    /// App com o banco embutido e a consulta do Supabase configurada pelo ambiente.
    pub fn new() -> Self {
        let questions = read_questions_embedded().unwrap_or_else(|err| {
            log::error!("não foi possível carregar o banco de questões: {err}");
            Vec::new()
        });
        Self::with_parts(questions, Box::new(SupabaseLookup::from_env()))
    }

    pub fn with_parts(questions: Vec<Question>, lookup: Box<dyn LinkLookup>) -> Self {
        log::info!("{} questões carregadas", questions.len());
        Self {
            session: PracticeSession::new(questions),
            quick_access: QuickAccessPanel::new(default_tiles()),
            nav: NavigationContext::default(),
            lookup,
        }
    }
}

impl Default for LexApp {
    fn default() -> Self {
        Self::new()
    }
}
